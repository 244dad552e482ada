#![forbid(unsafe_code)]

//! Deferred, cached values.
//!
//! A [`Lazy`] is either already resolved or holds a producer that runs
//! exactly once, on first read. There is no way back: invalidation is
//! done by building a fresh `Lazy`, which is exactly what a catalog
//! rebuild does for every item.

use std::fmt;

enum State<T> {
    Resolved(T),
    Pending(Box<dyn FnOnce() -> T>),
}

/// A value computed at most once, on first read.
pub struct Lazy<T> {
    state: Option<State<T>>,
}

impl<T> Lazy<T> {
    /// Wrap an already-computed value.
    #[must_use]
    pub fn resolved(value: T) -> Self {
        Self {
            state: Some(State::Resolved(value)),
        }
    }

    /// Defer to `producer`, invoked on the first [`force`](Self::force).
    #[must_use]
    pub fn pending(producer: impl FnOnce() -> T + 'static) -> Self {
        Self {
            state: Some(State::Pending(Box::new(producer))),
        }
    }

    /// Whether the producer has not run yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, Some(State::Pending(_)))
    }

    /// The value, if already resolved. Never runs the producer.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        match &self.state {
            Some(State::Resolved(value)) => Some(value),
            _ => None,
        }
    }

    /// The value, resolving it first if needed.
    pub fn force(&mut self) -> &mut T {
        if self.is_pending() {
            let Some(State::Pending(producer)) = self.state.take() else {
                unreachable!()
            };
            self.state = Some(State::Resolved(producer()));
        }
        match self.state.as_mut() {
            Some(State::Resolved(value)) => value,
            _ => unreachable!("lazy value poisoned by a panicking producer"),
        }
    }

    /// Unwrap the value if resolved, dropping a pending producer.
    pub fn into_value(self) -> Option<T> {
        match self.state {
            Some(State::Resolved(value)) => Some(value),
            _ => None,
        }
    }
}

impl<T: 'static> Lazy<T> {
    /// Post-compose `f` onto this value.
    ///
    /// A resolved value is transformed immediately; a pending one gets
    /// `f` chained after its producer, still running everything exactly
    /// once at first read.
    #[must_use]
    pub fn compose(self, f: impl FnOnce(T) -> T + 'static) -> Self {
        match self.state {
            Some(State::Resolved(value)) => Self::resolved(f(value)),
            Some(State::Pending(producer)) => Self::pending(move || f(producer())),
            None => Self { state: None },
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Some(State::Resolved(value)) => f.debug_tuple("Resolved").field(value).finish(),
            Some(State::Pending(_)) => f.write_str("Pending"),
            None => f.write_str("Poisoned"),
        }
    }
}
