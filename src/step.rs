/// Outcome of advancing a cursor: either a value was produced, or the cursor is exhausted.
///
/// Cursors in this crate report exhaustion as `Step::Complete(())`, so `D`
/// defaults to `()`. The second parameter stays generic so the same type can
/// carry a payload on completion where that is useful.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Step;
///
/// let pulled: Step<i32> = Step::Yielded(7);
/// let done: Step<i32> = Step::done();
///
/// assert_eq!(pulled.map_yielded(|v| v + 1), Step::Yielded(8));
/// assert!(done.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D = ()> {
    /// The cursor produced a value
    Yielded(Y),
    /// The cursor is exhausted
    Complete(D),
}

impl<Y> Step<Y> {
    /// The exhaustion signal.
    #[inline]
    pub const fn done() -> Self {
        Step::Complete(())
    }
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if a value was produced.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the cursor reported exhaustion.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts into `Option<Y>`, discarding the completion payload.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert_eq!(Step::<_, ()>::Yielded(3).yielded_value(), Some(3));
    /// assert_eq!(Step::<i32>::done().yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Converts into `Option<D>`, discarding any yielded value.
    #[inline]
    pub fn complete_value(self) -> Option<D> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(d) => Some(d),
        }
    }

    /// Applies `f` to a yielded value, leaving completion untouched.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Applies `f` to the completion payload, leaving yielded values untouched.
    #[inline]
    pub fn map_complete<D2, F>(self, f: F) -> Step<Y, D2>
    where
        F: FnOnce(D) -> D2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(f(d)),
        }
    }

    /// Returns the yielded value or `default`.
    #[inline]
    pub fn yielded_or(self, default: Y) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => default,
        }
    }

    /// Returns the yielded value or computes one from `f`.
    #[inline]
    pub fn yielded_or_else<F>(self, f: F) -> Y
    where
        F: FnOnce() -> Y,
    {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => f(),
        }
    }

    /// Converts from `&Step<Y, D>` to `Step<&Y, &D>`.
    #[inline]
    pub const fn as_ref(&self) -> Step<&Y, &D> {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Returns the yielded value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the step is `Complete`.
    #[inline]
    pub fn expect_yielded(self, msg: &str) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("{}", msg),
        }
    }

    /// Returns the completion payload.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the step is `Yielded`.
    #[inline]
    pub fn expect_complete(self, msg: &str) -> D {
        match self {
            Step::Yielded(_) => panic!("{}", msg),
            Step::Complete(d) => d,
        }
    }

    /// Returns the yielded value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Complete`.
    ///
    /// ```should_panic
    /// use lazyseq::Step;
    ///
    /// Step::<i32>::done().unwrap_yielded();
    /// ```
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    /// Returns the completion payload.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Yielded`.
    #[inline]
    pub fn unwrap_complete(self) -> D {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(d) => d,
        }
    }
}

impl<Y> From<Option<Y>> for Step<Y> {
    #[inline]
    fn from(value: Option<Y>) -> Self {
        match value {
            Some(y) => Step::Yielded(y),
            None => Step::done(),
        }
    }
}

impl<Y> From<Step<Y>> for Option<Y> {
    #[inline]
    fn from(step: Step<Y>) -> Self {
        step.yielded_value()
    }
}
