// src/outcome/mod.rs

//! The `Outcome` container: a success value or a failure value, never both.
//!
//! Responsibilities:
//! - Define the two-variant sum type (`Success` / `Failure`).
//! - Inspection helpers and textual forms (this file).
//! - Transforming and chaining combinators (`combinators.rs`).
//! - The unwrap family with typed, recoverable errors (`unwrap.rs`).
//! - Conversions to and from `std::result::Result` (`convert.rs`).
//!
//! An `Outcome` is immutable once built. No method hands out a mutable
//! borrow of the contained value, so through a shared binding the value can
//! only be read, moved out, or transformed into a *new* `Outcome`. This
//! holds for both variants:
//!
//! ```compile_fail
//! use outcome::Outcome;
//!
//! let ok: Outcome<i32, String> = Outcome::Success(1);
//! if let Outcome::Success(value) = &ok {
//!     *value = 2;
//! }
//! ```
//!
//! ```compile_fail
//! use outcome::Outcome;
//!
//! let err: Outcome<i32, String> = Outcome::Failure("fail".to_string());
//! if let Outcome::Failure(error) = &err {
//!     *error = "other".to_string();
//! }
//! ```
//!
//! Variant fields are public, as for any Rust enum. An owner that declares
//! its own `let mut` binding can still rewrite the value through a `&mut`
//! pattern; that takes an explicit opt-in at the binding and never goes
//! through this crate's API:
//!
//! ```
//! use outcome::Outcome;
//!
//! let mut owned: Outcome<i32, String> = Outcome::Success(1);
//! if let Outcome::Success(value) = &mut owned {
//!     *value = 2;
//! }
//! assert_eq!(owned, Outcome::Success(2));
//! ```
//!
//! Instances are `Send`/`Sync` whenever `T` and `E` are, so shared
//! instances can be read from many threads without locking.

use std::fmt;

pub mod combinators;
pub mod convert;
pub mod unwrap;

/// Outcome of a fallible computation.
///
/// `Debug` renders the variant name around the contained value's own
/// `Debug` form, e.g. `Success(1)` or `Failure("error")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E> {
    /// The computation completed and produced a value.
    Success(T),
    /// The computation failed and produced an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// `true` only for `Success`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// `true` only for `Failure`.
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// `true` for a `Success` whose value satisfies `pred`.
    ///
    /// `pred` is not invoked on a `Failure`.
    pub fn is_ok_and(self, pred: impl FnOnce(T) -> bool) -> bool {
        match self {
            Outcome::Success(value) => pred(value),
            Outcome::Failure(_) => false,
        }
    }

    /// `true` for a `Failure` whose error satisfies `pred`.
    pub fn is_err_and(self, pred: impl FnOnce(E) -> bool) -> bool {
        match self {
            Outcome::Success(_) => false,
            Outcome::Failure(error) => pred(error),
        }
    }

    /// The success value, or `None` for a `Failure`.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The error, or `None` for a `Success`.
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Borrowing view of the contained value.
    ///
    /// Lets combinators run against a shared instance without consuming it.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// `"Success"` or `"Failure"`.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "Success",
            Outcome::Failure(_) => "Failure",
        }
    }
}

/// Renders `Success(1)` / `Failure(boom)` using the contained value's
/// `Display` form. Use `{:?}` for the quoted, `Debug`-based form.
impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success({value})"),
            Outcome::Failure(error) => write!(f, "Failure({error})"),
        }
    }
}
