// src/config/model.rs

use std::fmt;

use serde::Deserialize;

/// Pipeline file as read from TOML, before validation.
///
/// ```toml
/// [pipeline]
/// name = "checked"
/// fallback = 0
///
/// [[step]]
/// op = "add"
/// value = 3
///
/// [[step]]
/// op = "ceiling"
/// value = 100
/// label = "stay small"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawPipelineFile {
    /// Global settings from `[pipeline]`.
    #[serde(default)]
    pub pipeline: PipelineSection,

    /// Ordered steps from `[[step]]`.
    #[serde(default)]
    pub step: Vec<StepConfig>,
}

/// Validated pipeline file.
///
/// Only obtainable through `TryFrom<RawPipelineFile>` (see `validate.rs`).
#[derive(Debug, Clone)]
pub struct PipelineFile {
    pub pipeline: PipelineSection,
    pub step: Vec<StepConfig>,
}

impl PipelineFile {
    pub(crate) fn new_unchecked(pipeline: PipelineSection, step: Vec<StepConfig>) -> Self {
        Self { pipeline, step }
    }
}

/// `[pipeline]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSection {
    /// Name shown in logs and dry-run output.
    #[serde(default = "default_pipeline_name")]
    pub name: String,

    /// Value substituted for a failed run (`unwrap_or`).
    ///
    /// If `None`, failed runs are reported without a resolved value.
    #[serde(default)]
    pub fallback: Option<i64>,
}

fn default_pipeline_name() -> String {
    "pipeline".to_string()
}

impl Default for PipelineSection {
    fn default() -> Self {
        Self {
            name: default_pipeline_name(),
            fallback: None,
        }
    }
}

/// Arithmetic or bounds check applied by a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Fail if the value is above the operand.
    Ceiling,
    /// Fail if the value is below the operand.
    Floor,
}

impl fmt::Display for StepOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepOp::Add => "add",
            StepOp::Sub => "sub",
            StepOp::Mul => "mul",
            StepOp::Div => "div",
            StepOp::Ceiling => "ceiling",
            StepOp::Floor => "floor",
        };
        f.write_str(s)
    }
}

/// One `[[step]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StepConfig {
    pub op: StepOp,

    /// Operand of the step.
    pub value: i64,

    /// Optional human-readable name; defaults to `"<op> <value>"`.
    #[serde(default)]
    pub label: Option<String>,
}

impl StepConfig {
    /// Label used in errors and logs.
    pub fn effective_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("{} {}", self.op, self.value))
    }
}
