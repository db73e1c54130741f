// src/config/validate.rs

use crate::config::model::{PipelineFile, RawPipelineFile, StepOp};
use crate::errors::{OutcomeError, Result};

impl TryFrom<RawPipelineFile> for PipelineFile {
    type Error = OutcomeError;

    fn try_from(raw: RawPipelineFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(PipelineFile::new_unchecked(raw.pipeline, raw.step))
    }
}

fn validate_raw_config(cfg: &RawPipelineFile) -> Result<()> {
    ensure_has_steps(cfg)?;
    validate_pipeline_section(cfg)?;
    validate_steps(cfg)?;
    Ok(())
}

fn ensure_has_steps(cfg: &RawPipelineFile) -> Result<()> {
    if cfg.step.is_empty() {
        return Err(OutcomeError::ConfigError(
            "pipeline must contain at least one [[step]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_pipeline_section(cfg: &RawPipelineFile) -> Result<()> {
    if cfg.pipeline.name.trim().is_empty() {
        return Err(OutcomeError::ConfigError(
            "[pipeline].name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_steps(cfg: &RawPipelineFile) -> Result<()> {
    for (idx, step) in cfg.step.iter().enumerate() {
        if let Some(label) = step.label.as_deref() {
            if label.trim().is_empty() {
                return Err(OutcomeError::ConfigError(format!(
                    "step #{idx} has an empty `label`"
                )));
            }
        }
        if step.op == StepOp::Div && step.value == 0 {
            return Err(OutcomeError::ConfigError(format!(
                "step #{idx} divides by zero"
            )));
        }
    }
    Ok(())
}
