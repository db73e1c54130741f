// src/pipeline/mod.rs

//! A configurable chain of checked integer steps.
//!
//! Each run parses its input and threads the value through every step with
//! `Outcome::and_then`, so the first failing step skips the rest.

pub mod report;
pub mod step;

use tracing::debug;

use crate::config::model::PipelineFile;
use crate::outcome::Outcome;

pub use report::RunReport;
pub use step::{Step, StepError};

#[derive(Debug, Clone)]
pub struct Pipeline {
    name: String,
    steps: Vec<Step>,
    fallback: Option<i64>,
}

impl Pipeline {
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
            fallback: None,
        }
    }

    pub fn from_config(cfg: &PipelineFile) -> Self {
        Self {
            name: cfg.pipeline.name.clone(),
            steps: cfg.step.iter().map(Step::from_config).collect(),
            fallback: cfg.pipeline.fallback,
        }
    }

    pub fn with_fallback(mut self, fallback: i64) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn fallback(&self) -> Option<i64> {
        self.fallback
    }

    /// Parse `input` and run it through every step.
    pub fn run(&self, input: &str) -> Outcome<i64, StepError> {
        let parsed = Outcome::from(input.trim().parse::<i64>()).map_err(|_| StepError::Parse {
            input: input.to_string(),
        });

        self.steps.iter().fold(parsed, |acc, step| {
            acc.and_then(|value| {
                debug!(pipeline = %self.name, step = %step.label, value, "applying step");
                step.apply(value)
            })
        })
    }

    /// Run `input` and resolve a failure against the configured fallback.
    pub fn report(&self, input: &str) -> RunReport {
        let outcome = self
            .run(input)
            .inspect_err(|err| debug!(pipeline = %self.name, %err, "run short-circuited"));
        RunReport::new(input, outcome, self.fallback)
    }
}
