// src/outcome/combinators.rs

//! Transforming and chaining combinators.
//!
//! Every combinator consumes the receiver and builds a new `Outcome`.
//! Closures run synchronously, at most once, and only on the variant they
//! target; the other variant passes through untouched. A panic raised by a
//! closure is not caught here and reaches the caller unchanged.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Transform the success value, leaving a `Failure` as is.
    ///
    /// `f` is never invoked on a `Failure`. The result of `f` is always
    /// wrapped, even when it is itself an `Outcome`; use
    /// [`and_then`](Outcome::and_then) to chain without nesting.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the error, leaving a `Success` as is.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chain a fallible step onto a success (monadic bind).
    ///
    /// On `Success` the `Outcome` returned by `f` is returned directly, so
    /// chains stay flat. On `Failure` the chain short-circuits and `f` is
    /// never invoked.
    ///
    /// ```
    /// use outcome::{Failure, Outcome, Success};
    ///
    /// let chained: Outcome<String, &str> = Success(42).and_then(|x| Success(x.to_string()));
    /// assert_eq!(chained, Success("42".to_string()));
    ///
    /// let failed: Outcome<i32, &str> = Failure("e").and_then(|x: i32| Success(x * 10));
    /// assert_eq!(failed, Failure("e"));
    /// ```
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recover from a failure with another fallible step.
    ///
    /// Mirror of [`and_then`](Outcome::and_then) for the error side.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => f(error),
        }
    }

    /// `other` if this is a `Success`, otherwise this `Failure`.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(_) => other,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// This `Success`, otherwise `other`.
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(_) => other,
        }
    }

    /// Apply `f` to a success value, or return `default`.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(_) => default,
        }
    }

    /// Apply `f` to a success value, or `default` to the error.
    pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => default(error),
        }
    }

    /// Observe a success value without consuming or changing it.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Outcome::Success(ref value) = self {
            f(value);
        }
        self
    }

    /// Observe an error without consuming or changing it.
    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Outcome::Failure(ref error) = self {
            f(error);
        }
        self
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}
