/// Lifecycle of a value fetched from a remote source.
///
/// A workflow starts at [`NotAsked`](Self::NotAsked), swaps in
/// [`Loading`](Self::Loading) when a request goes out, and settles on
/// [`Success`](Self::Success) or [`Failure`](Self::Failure) once the request
/// completes. Values never change state in place: a "transition" is the
/// caller storing a new value, so snapshots can be handed to other threads
/// or tasks without synchronization.
///
/// The error type is opaque to this crate. Combinators carry it through
/// untouched and only [`fold`](Self::fold) and [`error`](Self::error) hand
/// it back, verbatim.
#[derive(Debug, Clone)]
pub enum RemoteData<A, E> {
    /// No request has been initiated.
    NotAsked,
    /// A request is in flight, no result yet.
    Loading,
    /// The request completed, here is the data.
    Success(A),
    /// The request completed with an error.
    Failure(E),
}

impl<A, E> Default for RemoteData<A, E> {
    /// The initial state of any fetch.
    fn default() -> Self {
        RemoteData::NotAsked
    }
}

impl<A, E> From<Result<A, E>> for RemoteData<A, E> {
    /// A settled [`Result`] maps onto the two settled states.
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => RemoteData::Success(value),
            Err(error) => RemoteData::Failure(error),
        }
    }
}

impl<A, E> RemoteData<A, E> {
    /// Returns `true` if no request has been made yet.
    pub fn is_not_asked(&self) -> bool {
        matches!(self, Self::NotAsked)
    }

    /// Returns `true` if a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` if the request succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the request failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the successful value, if there is one.
    pub fn value(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the error, if the request failed.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Failure(error) => Some(error),
            _ => None,
        }
    }

    /// Converts from `&RemoteData<A, E>` to `RemoteData<&A, &E>`.
    ///
    /// Useful for running [`map`](Self::map) or [`fold`](Self::fold) over a
    /// stored value without consuming it.
    pub fn as_ref(&self) -> RemoteData<&A, &E> {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Success(ref value) => RemoteData::Success(value),
            Self::Failure(ref error) => RemoteData::Failure(error),
        }
    }

    /// Converts from `&mut RemoteData<A, E>` to `RemoteData<&mut A, &mut E>`.
    pub fn as_mut(&mut self) -> RemoteData<&mut A, &mut E> {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Success(ref mut value) => RemoteData::Success(value),
            Self::Failure(ref mut error) => RemoteData::Failure(error),
        }
    }
}
