// src/pipeline/step.rs

//! A single checked arithmetic step and its failure modes.

use thiserror::Error;

use crate::config::model::{StepConfig, StepOp};
use crate::outcome::Outcome;

/// Why a pipeline run failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("cannot parse input '{input}' as an integer")]
    Parse { input: String },

    #[error("step '{label}': arithmetic overflow on {value}")]
    Overflow { label: String, value: i64 },

    #[error("step '{label}': division by zero")]
    DivisionByZero { label: String },

    #[error("step '{label}': {value} is above ceiling {limit}")]
    AboveCeiling { label: String, value: i64, limit: i64 },

    #[error("step '{label}': {value} is below floor {limit}")]
    BelowFloor { label: String, value: i64, limit: i64 },
}

/// Executable form of a `[[step]]` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub op: StepOp,
    pub operand: i64,
    pub label: String,
}

impl Step {
    pub fn new(op: StepOp, operand: i64) -> Self {
        Self {
            op,
            operand,
            label: format!("{op} {operand}"),
        }
    }

    pub fn from_config(cfg: &StepConfig) -> Self {
        Self {
            op: cfg.op,
            operand: cfg.value,
            label: cfg.effective_label(),
        }
    }

    /// Apply this step to `value`.
    pub fn apply(&self, value: i64) -> Outcome<i64, StepError> {
        let operand = self.operand;
        let checked = match self.op {
            StepOp::Add => value.checked_add(operand),
            StepOp::Sub => value.checked_sub(operand),
            StepOp::Mul => value.checked_mul(operand),
            StepOp::Div => {
                if operand == 0 {
                    return Outcome::Failure(StepError::DivisionByZero {
                        label: self.label.clone(),
                    });
                }
                value.checked_div(operand)
            }
            StepOp::Ceiling => {
                if value > operand {
                    return Outcome::Failure(StepError::AboveCeiling {
                        label: self.label.clone(),
                        value,
                        limit: operand,
                    });
                }
                Some(value)
            }
            StepOp::Floor => {
                if value < operand {
                    return Outcome::Failure(StepError::BelowFloor {
                        label: self.label.clone(),
                        value,
                        limit: operand,
                    });
                }
                Some(value)
            }
        };

        match checked {
            Some(next) => Outcome::Success(next),
            None => Outcome::Failure(StepError::Overflow {
                label: self.label.clone(),
                value,
            }),
        }
    }
}
