// src/lib.rs

//! `Outcome<T, E>`: an immutable success-or-failure container with
//! `map` / `map_err` / `and_then` combinators and a non-panicking unwrap
//! family, plus a small TOML-driven pipeline runner built on top of it.

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod outcome;
pub mod pipeline;

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info};

pub use crate::errors::OutcomeError;
pub use crate::outcome::Outcome;
pub use crate::outcome::Outcome::{Failure, Success};

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::pipeline::Pipeline;

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the pipeline file, then runs every input and writes
/// one report line per input to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.config)?;
    let pipeline = Pipeline::from_config(&cfg);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.dry_run {
        print_dry_run(&pipeline, &mut out)?;
        return Ok(());
    }

    run_inputs(&pipeline, &args.inputs, args.strict, &mut out)
}

/// Run each input and write its report line to `out`.
///
/// With `strict`, the first failed run is returned as
/// `OutcomeError::UnwrapOnFailure` after its line has been written.
pub fn run_inputs(
    pipeline: &Pipeline,
    inputs: &[String],
    strict: bool,
    out: &mut impl Write,
) -> Result<()> {
    info!(pipeline = %pipeline.name(), inputs = inputs.len(), "running pipeline");

    let mut failed = 0usize;
    for input in inputs {
        let report = pipeline.report(input);
        writeln!(out, "{report}")?;

        if report.outcome.is_err() {
            failed += 1;
            if strict {
                report.value()?;
            }
        }
    }

    info!(pipeline = %pipeline.name(), failed, "pipeline finished");
    Ok(())
}

/// Simple dry-run output: pipeline name, fallback and steps.
fn print_dry_run(pipeline: &Pipeline, out: &mut impl Write) -> Result<()> {
    writeln!(out, "outcome dry-run")?;
    writeln!(out, "  pipeline.name = {}", pipeline.name())?;
    if let Some(fallback) = pipeline.fallback() {
        writeln!(out, "  pipeline.fallback = {fallback}")?;
    }
    writeln!(out)?;

    writeln!(out, "steps ({}):", pipeline.steps().len())?;
    for (idx, step) in pipeline.steps().iter().enumerate() {
        writeln!(out, "  {idx}. {} ({} {})", step.label, step.op, step.operand)?;
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}
