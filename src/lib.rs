//! `logroute` is a leveled logging dispatch engine.
//!
//! Severity-tagged log calls are routed through a [`Logger`] facade to
//! per-level output sinks held by an explicit [`Dispatch`] state, with a
//! single injectable formatter shared across all severities. The dispatch
//! state is constructed once by the process entry point and passed by
//! reference; there is no hidden global.
//!
//! The crate is structured into small modules, one per engine concern.

/// Builds a structured message from an ordered argument list.
pub mod compose;
/// Handles configuration parsing and engine settings resolution.
pub mod config;
/// Owns the default sink, the formatter, and the per-level sink table.
pub mod dispatch;
/// Formatter contract and the built-in formatters.
pub mod format;
/// The closed set of argument shapes log calls accept.
pub mod log_arg;
/// The closed, ordered set of severity levels.
pub mod log_level;
/// Leveled logging macros over the facade.
pub mod log_macros;
/// The structured message produced per log call.
pub mod log_msg;
/// Sink contract consumed by the dispatch table.
pub mod log_sink;
/// The per-call logging facade with its severity threshold.
pub mod logger;
/// Sink that discards everything; the fresh-state default.
pub mod noop_log_sink;
/// Built-in console and in-memory sinks.
pub mod sinks;

pub use compose::compose;
pub use config::{Config, LoggingSettings};
pub use dispatch::{Dispatch, DispatchConfig, SinkOverrides};
pub use format::{Format, JsonFormat, PassthroughFormat, PlainFormat, SharedFormat};
pub use log_arg::LogArg;
pub use log_level::{LogLevel, ParseLevelError};
pub use log_msg::LogMsg;
pub use log_sink::{LogSink, SharedSink};
pub use logger::{DEFAULT_THRESHOLD, Logger};
pub use noop_log_sink::NoopLogSink;
pub use sinks::{ConsoleSink, MemorySink};
