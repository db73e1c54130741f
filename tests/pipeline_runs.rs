// tests/pipeline_runs.rs

mod common;

use outcome::cli::{CliArgs, LogLevel};
use clap::Parser;
use outcome::config::{DEFAULT_CONFIG_FILE, StepOp, default_config_path};
use outcome::errors::OutcomeError;
use outcome::logging::resolve_level;
use outcome::pipeline::{Pipeline, Step, StepError};
use outcome::{Failure, Success, run, run_inputs};

use common::builders::{PipelineFileBuilder, StepConfigBuilder};
use common::{init_tracing, write_pipeline};

fn checked_pipeline() -> Pipeline {
    let cfg = PipelineFileBuilder::new()
        .name("checked")
        .with_step(StepConfigBuilder::new(StepOp::Add, 3).build())
        .with_step(StepConfigBuilder::new(StepOp::Mul, 2).build())
        .with_step(StepConfigBuilder::new(StepOp::Ceiling, 100).label("stay small").build())
        .build();
    Pipeline::from_config(&cfg)
}

#[test]
fn test_run_threads_value_through_steps() {
    init_tracing();
    let pipeline = checked_pipeline();

    assert_eq!(pipeline.run("4"), Success(14));
    assert_eq!(pipeline.run(" -3 "), Success(0));
}

#[test]
fn test_run_reports_parse_failure() {
    let pipeline = checked_pipeline();

    assert_eq!(
        pipeline.run("four"),
        Failure(StepError::Parse { input: "four".to_string() })
    );
}

#[test]
fn test_run_stops_at_first_failing_step() {
    let pipeline = checked_pipeline();

    let outcome = pipeline.run("60");

    assert_eq!(
        outcome,
        Failure(StepError::AboveCeiling {
            label: "stay small".to_string(),
            value: 126,
            limit: 100,
        })
    );
}

#[test]
fn test_overflow_short_circuits_later_steps() {
    let pipeline = Pipeline::new(
        "overflow",
        vec![
            Step::new(StepOp::Mul, i64::MAX),
            Step::new(StepOp::Div, 0),
        ],
    );

    assert_eq!(
        pipeline.run("2"),
        Failure(StepError::Overflow { label: "mul 9223372036854775807".to_string(), value: 2 })
    );
    assert_eq!(
        pipeline.run("1"),
        Failure(StepError::DivisionByZero { label: "div 0".to_string() })
    );
}

#[test]
fn test_floor_and_sub_steps() {
    let pipeline = Pipeline::new(
        "bounded",
        vec![Step::new(StepOp::Sub, 10), Step::new(StepOp::Floor, 0)],
    );

    assert_eq!(pipeline.run("15"), Success(5));
    assert_eq!(
        pipeline.run("5"),
        Failure(StepError::BelowFloor { label: "floor 0".to_string(), value: -5, limit: 0 })
    );
}

#[test]
fn test_report_uses_fallback_only_on_failure() {
    let pipeline = checked_pipeline().with_fallback(0);

    let ok = pipeline.report("1");
    assert_eq!(ok.resolved, Some(8));
    assert!(!ok.used_fallback());
    assert_eq!(ok.to_string(), "1 => Success(8)");

    let failed = pipeline.report("x");
    assert_eq!(failed.resolved, Some(0));
    assert!(failed.used_fallback());
    assert_eq!(
        failed.to_string(),
        "x => Failure(Parse { input: \"x\" }) (resolved: 0)"
    );
}

#[test]
fn test_report_value_surfaces_unwrap_error() {
    let pipeline = checked_pipeline();

    let err = pipeline.report("60").value().unwrap_err();

    assert_eq!(
        err.to_string(),
        "Called unwrap on Err: step 'stay small': 126 is above ceiling 100"
    );
}

#[test]
fn test_run_inputs_writes_one_line_per_input() {
    let pipeline = checked_pipeline();
    let inputs = vec!["1".to_string(), "oops".to_string(), "2".to_string()];
    let mut out = Vec::new();

    run_inputs(&pipeline, &inputs, false, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "1 => Success(8)",
            "oops => Failure(Parse { input: \"oops\" })",
            "2 => Success(10)",
        ]
    );
}

#[test]
fn test_run_inputs_strict_stops_on_failure() {
    let pipeline = checked_pipeline();
    let inputs = vec!["1".to_string(), "oops".to_string(), "2".to_string()];
    let mut out = Vec::new();

    let err = run_inputs(&pipeline, &inputs, true, &mut out).unwrap_err();

    let unwrap_err = err.downcast_ref::<OutcomeError>().unwrap();
    assert!(matches!(unwrap_err, OutcomeError::UnwrapOnFailure(_)));
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
}

#[test]
fn test_run_entry_point_with_config_file() {
    let file = write_pipeline(
        r#"
[[step]]
op = "add"
value = 1
"#,
    );

    let args = CliArgs {
        config: file.path().to_string_lossy().into_owned(),
        inputs: vec!["41".to_string()],
        log_level: None,
        dry_run: true,
        strict: true,
    };
    run(args.clone()).unwrap();

    let args = CliArgs {
        dry_run: false,
        inputs: vec!["bad".to_string()],
        ..args
    };
    assert!(run(args).is_err());
}

#[test]
fn test_log_level_priority() {
    assert_eq!(resolve_level(Some(LogLevel::Debug), Some("error")), tracing::Level::DEBUG);
    assert_eq!(resolve_level(None, Some(" Warning ")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("loud")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, None), tracing::Level::INFO);
}

#[test]
fn test_cli_config_default_matches_loader_default() {
    let args = CliArgs::try_parse_from(["outcome", "1", "-2"]).unwrap();

    assert_eq!(args.config, DEFAULT_CONFIG_FILE);
    assert_eq!(default_config_path(), std::path::PathBuf::from(&args.config));
    assert_eq!(args.inputs, vec!["1".to_string(), "-2".to_string()]);
}
