//! End-to-end behavior of the logger facade: threshold gating, the
//! gate/compose/format/dispatch sequence, and reset.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use logroute::{
    logger_error, logger_info, DispatchConfig, JsonFormat, LogLevel, Logger, MemorySink,
    SharedSink, SinkOverrides,
};
use serde_json::{json, Value};

fn memory() -> (Arc<MemorySink>, SharedSink) {
    let sink = Arc::new(MemorySink::new());
    let shared: SharedSink = sink.clone();
    (sink, shared)
}

#[test]
fn threshold_gates_before_any_dispatch() {
    let (captured, sink) = memory();
    let mut logger = Logger::new(DispatchConfig::new().default_sink(sink));
    logger.set_threshold(LogLevel::Info);

    logger.debug(vec!["hidden".into()]);
    assert!(captured.lines().is_empty());

    logger.info(vec!["shown".into()]);
    assert_eq!(captured.lines(), vec!["shown"]);
}

#[test]
fn off_threshold_silences_everything_trace_enables_everything() {
    let (captured, sink) = memory();
    let mut logger = Logger::new(DispatchConfig::new().default_sink(sink));

    logger.set_threshold(LogLevel::Off);
    logger.fatal(vec!["quiet".into()]);
    logger.trace(vec!["quiet".into()]);
    assert!(captured.lines().is_empty());

    logger.set_threshold(LogLevel::Trace);
    logger.fatal(vec!["loud".into()]);
    logger.trace(vec!["loud".into()]);
    assert_eq!(captured.len(), 2);
}

#[test]
fn error_call_renders_json_with_its_severity() {
    // Full pipeline: JSON formatter, a dedicated ERROR sink, a composite
    // argument flattened into the message text.
    let (error_captured, error_sink) = memory();
    let (default_captured, default_sink) = memory();

    let mut logger = Logger::new(
        DispatchConfig::new()
            .default_sink(default_sink)
            .format(Arc::new(JsonFormat))
            .sinks(SinkOverrides::new().with(LogLevel::Error, error_sink)),
    );
    logger.set_threshold(LogLevel::Debug);

    logger.error(vec!["System error".into(), json!({"code": 500}).into()]);

    let lines = error_captured.lines();
    assert_eq!(lines.len(), 1);
    assert!(default_captured.lines().is_empty());

    let parsed: Value = serde_json::from_str(&lines[0]).expect("sink received valid JSON");
    assert_eq!(parsed["level"], "ERROR");
    assert_eq!(parsed["message"], r#"System error{"code":500}"#);
}

#[test]
fn macros_convert_heterogeneous_arguments() {
    let (captured, sink) = memory();
    let logger = Logger::new(DispatchConfig::new().default_sink(sink));

    logger_info!(logger, "peer ", 12u32, " ready=", true);
    logger_error!(logger, "lost ", 3i32, " packets");

    assert_eq!(captured.lines(), vec!["peer 12 ready=true", "lost 3 packets"]);
}

#[test]
fn zero_argument_call_emits_an_empty_line() {
    let (captured, sink) = memory();
    let logger = Logger::new(DispatchConfig::new().default_sink(sink));

    logger_info!(logger);
    assert_eq!(captured.lines(), vec![""]);
}

#[test]
fn facade_reset_returns_the_engine_to_noop_defaults() {
    let (captured, sink) = memory();
    let mut logger = Logger::new(DispatchConfig::new().default_sink(sink));

    logger.info(vec!["before".into()]);
    logger.reset();
    logger.info(vec!["after".into()]);
    logger.fatal(vec!["after".into()]);

    assert_eq!(captured.lines(), vec!["before"]);
}
