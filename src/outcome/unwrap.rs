// src/outcome/unwrap.rs

//! Extracting the contained value.
//!
//! Taking the "wrong" variant is reported as a typed [`OutcomeError`]
//! rather than a panic, so callers can propagate it with `?` or inspect it.
//! `unwrap_or` and friends never fail.

use std::fmt::Display;

use super::Outcome;
use crate::errors::{OutcomeError, Result};

impl<T, E> Outcome<T, E> {
    /// The success value, or [`OutcomeError::UnwrapOnFailure`].
    ///
    /// The error message embeds the failure's `Display` form:
    ///
    /// ```
    /// use outcome::{Failure, Outcome};
    ///
    /// let failed: Outcome<i32, &str> = Failure("boom");
    /// let err = failed.unwrap().unwrap_err();
    /// assert_eq!(err.to_string(), "Called unwrap on Err: boom");
    /// ```
    pub fn unwrap(self) -> Result<T>
    where
        E: Display,
    {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(OutcomeError::UnwrapOnFailure(error.to_string())),
        }
    }

    /// The error, or [`OutcomeError::UnwrapErrOnSuccess`].
    pub fn unwrap_err(self) -> Result<E>
    where
        T: Display,
    {
        match self {
            Outcome::Success(value) => Err(OutcomeError::UnwrapErrOnSuccess(value.to_string())),
            Outcome::Failure(error) => Ok(error),
        }
    }

    /// Like [`unwrap`](Outcome::unwrap) with a caller-supplied context.
    pub fn expect(self, context: &str) -> Result<T>
    where
        E: Display,
    {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(OutcomeError::Expectation {
                context: context.to_string(),
                detail: error.to_string(),
            }),
        }
    }

    /// Like [`unwrap_err`](Outcome::unwrap_err) with a caller-supplied context.
    pub fn expect_err(self, context: &str) -> Result<E>
    where
        T: Display,
    {
        match self {
            Outcome::Success(value) => Err(OutcomeError::Expectation {
                context: context.to_string(),
                detail: value.to_string(),
            }),
            Outcome::Failure(error) => Ok(error),
        }
    }

    /// The success value, or `default` verbatim.
    ///
    /// A success holding `0`, `""` or `None` is returned as is; only the
    /// variant decides.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// The success value, or one computed from the error.
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// The success value, or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => T::default(),
        }
    }
}
