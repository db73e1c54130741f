// src/outcome/convert.rs

//! Conversions between `Outcome` and the standard library types.

use super::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> Outcome<T, E> {
    /// Convert into a `std::result::Result` so `?` can be used on it.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T, E> Outcome<Option<T>, E> {
    /// `Success(None)` becomes `None`; everything else is wrapped in `Some`.
    pub fn transpose(self) -> Option<Outcome<T, E>> {
        match self {
            Outcome::Success(Some(value)) => Some(Outcome::Success(value)),
            Outcome::Success(None) => None,
            Outcome::Failure(error) => Some(Outcome::Failure(error)),
        }
    }
}
