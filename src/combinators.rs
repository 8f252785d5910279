use crate::state::RemoteData;

impl<A, E> RemoteData<A, E> {
    /// Maps the success value, leaving every other state untouched.
    ///
    /// The transform only runs on [`Success`](Self::Success). The other
    /// three states pass through as they are, error included.
    ///
    /// # Examples
    /// ```
    /// use remote_data::RemoteData;
    ///
    /// let doubled = RemoteData::<u32, String>::Success(10).map(|n| n * 2);
    /// assert_eq!(doubled.value(), Some(&20));
    ///
    /// let still_loading = RemoteData::<u32, String>::Loading.map(|n| n * 2);
    /// assert!(still_loading.is_loading());
    /// ```
    pub fn map<R>(self, transform: impl FnOnce(A) -> R) -> RemoteData<R, E> {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Success(value) => RemoteData::Success(transform(value)),
            Self::Failure(error) => RemoteData::Failure(error),
        }
    }

    /// Combines two remote values with `combine` once both have succeeded.
    ///
    /// When either operand has not succeeded, the leftmost non-success state
    /// wins, like `&&` generalized to four states: `self` is inspected first
    /// and `other` only matters when `self` is a success. Callers can rely
    /// on exactly which operand's state surfaces when both are non-success.
    ///
    /// # Examples
    /// ```
    /// use remote_data::RemoteData;
    ///
    /// type Rd = RemoteData<u32, String>;
    ///
    /// let sum = Rd::Success(10).map2(Rd::Success(10), |a, b| a + b);
    /// assert_eq!(sum.value(), Some(&20));
    ///
    /// let failed = Rd::Failure("err".to_string()).map2(Rd::Success(10), |a, b| a + b);
    /// assert_eq!(failed.error().map(String::as_str), Some("err"));
    /// ```
    pub fn map2<B, R>(
        self,
        other: RemoteData<B, E>,
        combine: impl FnOnce(A, B) -> R,
    ) -> RemoteData<R, E> {
        match (self, other) {
            (RemoteData::Success(a), RemoteData::Success(b)) => {
                RemoteData::Success(combine(a, b))
            }
            (RemoteData::Success(_), RemoteData::NotAsked) => RemoteData::NotAsked,
            (RemoteData::Success(_), RemoteData::Loading) => RemoteData::Loading,
            (RemoteData::Success(_), RemoteData::Failure(error)) => RemoteData::Failure(error),
            (RemoteData::NotAsked, _) => RemoteData::NotAsked,
            (RemoteData::Loading, _) => RemoteData::Loading,
            (RemoteData::Failure(error), _) => RemoteData::Failure(error),
        }
    }

    /// Returns the success value, or `default` when there is none.
    ///
    /// Whatever kept the value from arriving is discarded here, the failure
    /// error included. Callers who care why the value is missing should
    /// reach for [`fold`](Self::fold) instead.
    ///
    /// # Examples
    /// ```
    /// use remote_data::RemoteData;
    ///
    /// let fallback = RemoteData::<&str, String>::NotAsked.with_default("fallback");
    /// assert_eq!(fallback, "fallback");
    /// ```
    pub fn with_default(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            _ => default,
        }
    }

    /// Collapses each state into one result type.
    ///
    /// Exactly one handler runs, picked by the current state, and receives
    /// the payload verbatim where there is one. The underlying `match` has
    /// no wildcard arm, so a new state cannot appear without every caller
    /// hearing about it at compile time.
    ///
    /// # Examples
    /// ```
    /// use remote_data::RemoteData;
    ///
    /// let label = RemoteData::<u32, String>::Failure("boom".to_string()).fold(
    ///     || "idle".to_string(),
    ///     || "busy".to_string(),
    ///     |v| format!("ok:{v}"),
    ///     |e| format!("err:{e}"),
    /// );
    /// assert_eq!(label, "err:boom");
    /// ```
    pub fn fold<R>(
        self,
        when_not_asked: impl FnOnce() -> R,
        when_loading: impl FnOnce() -> R,
        when_success: impl FnOnce(A) -> R,
        when_failure: impl FnOnce(E) -> R,
    ) -> R {
        match self {
            Self::NotAsked => when_not_asked(),
            Self::Loading => when_loading(),
            Self::Success(value) => when_success(value),
            Self::Failure(error) => when_failure(error),
        }
    }
}
