// src/errors.rs

//! Crate-wide error type and `Result` alias.
//!
//! `OutcomeError` is what the unwrap family returns instead of panicking,
//! plus the configuration failures of the pipeline consumer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutcomeError {
    /// `unwrap` was called on a `Failure`; carries the error's `Display` form.
    #[error("Called unwrap on Err: {0}")]
    UnwrapOnFailure(String),

    /// `unwrap_err` was called on a `Success`; carries the value's `Display` form.
    #[error("Called unwrap_err on Ok: {0}")]
    UnwrapErrOnSuccess(String),

    /// `expect` / `expect_err` hit the wrong variant.
    #[error("{context}: {detail}")]
    Expectation { context: String, detail: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OutcomeError {
    /// `true` for the unwrap-family variants (contract violations on an
    /// `Outcome`), `false` for configuration and IO failures.
    pub fn is_unwrap_violation(&self) -> bool {
        matches!(
            self,
            OutcomeError::UnwrapOnFailure(_)
                | OutcomeError::UnwrapErrOnSuccess(_)
                | OutcomeError::Expectation { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, OutcomeError>;
