#![cfg_attr(docsrs, feature(doc_auto_cfg))]
//! Four-state value type for data fetched from a remote source.
//!
//! Frequently when fetching data from an API you want to represent four
//! different states:
//!
//! * [`NotAsked`](RemoteData::NotAsked) - we haven't asked for the data yet.
//! * [`Loading`](RemoteData::Loading) - we've asked, but haven't got an answer yet.
//! * [`Failure`](RemoteData::Failure) - we asked, but something went wrong. Here's the error.
//! * [`Success`](RemoteData::Success) - everything worked, and here's the data.
//!
//! Keeping all four in one enum replaces the usual pair of a nullable value
//! and an "is it loading?" flag, and `match` exhaustiveness means no consumer
//! can forget a state.
//!
//! ```
//! use remote_data::RemoteData;
//!
//! let mut user: RemoteData<String, String> = RemoteData::NotAsked;
//! assert!(user.is_not_asked());
//!
//! // The request goes out...
//! user = RemoteData::Loading;
//! assert!(user.is_loading());
//!
//! // ...and settles.
//! user = RemoteData::Success("Ada".to_string());
//!
//! let greeting = user.fold(
//!     || "not asked yet".to_string(),
//!     || "loading".to_string(),
//!     |name| format!("hello, {name}"),
//!     |error| format!("request failed: {error}"),
//! );
//! assert_eq!(greeting, "hello, Ada");
//! ```
//!
//! This crate only represents the lifecycle. Issuing requests, retrying and
//! caching belong to whatever caller produces and stores the values.

/// The four-state data model, its predicates and accessors
pub mod state;

/// Pure combinators over [`RemoteData`] values
pub mod combinators;

pub use state::RemoteData;
