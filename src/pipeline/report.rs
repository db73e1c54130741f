// src/pipeline/report.rs

use std::fmt;

use crate::errors::Result;
use crate::outcome::Outcome;
use crate::pipeline::step::StepError;

/// Result of running one input through a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub input: String,
    pub outcome: Outcome<i64, StepError>,
    /// `outcome.unwrap_or(fallback)` when a fallback is configured.
    pub resolved: Option<i64>,
}

impl RunReport {
    pub fn new(input: &str, outcome: Outcome<i64, StepError>, fallback: Option<i64>) -> Self {
        let resolved = fallback.map(|fallback| outcome.clone().unwrap_or(fallback));
        Self {
            input: input.to_string(),
            outcome,
            resolved,
        }
    }

    /// `true` when the run failed and the fallback was substituted.
    pub fn used_fallback(&self) -> bool {
        self.outcome.is_err() && self.resolved.is_some()
    }

    /// The computed value, or `OutcomeError::UnwrapOnFailure` for a failed run.
    pub fn value(&self) -> Result<i64> {
        self.outcome.clone().unwrap()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {:?}", self.input, self.outcome)?;
        if self.used_fallback() {
            if let Some(resolved) = self.resolved {
                write!(f, " (resolved: {resolved})")?;
            }
        }
        Ok(())
    }
}
