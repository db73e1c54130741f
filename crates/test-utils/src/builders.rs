#![allow(dead_code)]

use outcome::config::{PipelineFile, PipelineSection, RawPipelineFile, StepConfig, StepOp};

/// Builder for `PipelineFile` to simplify test setup.
pub struct PipelineFileBuilder {
    config: RawPipelineFile,
}

impl PipelineFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawPipelineFile {
                pipeline: PipelineSection::default(),
                step: vec![],
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.config.pipeline.name = name.to_string();
        self
    }

    pub fn fallback(mut self, value: i64) -> Self {
        self.config.pipeline.fallback = Some(value);
        self
    }

    pub fn with_step(mut self, step: StepConfig) -> Self {
        self.config.step.push(step);
        self
    }

    pub fn build_raw(self) -> RawPipelineFile {
        self.config
    }

    pub fn build(self) -> PipelineFile {
        PipelineFile::try_from(self.config).expect("Failed to build valid pipeline from builder")
    }
}

impl Default for PipelineFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `StepConfig`.
pub struct StepConfigBuilder {
    step: StepConfig,
}

impl StepConfigBuilder {
    pub fn new(op: StepOp, value: i64) -> Self {
        Self {
            step: StepConfig {
                op,
                value,
                label: None,
            },
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.step.label = Some(label.to_string());
        self
    }

    pub fn build(self) -> StepConfig {
        self.step
    }
}
