use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::{log_level::LogLevel, log_msg::LogMsg};

/// Formatting capability: renders a structured message plus its severity
/// into the final line handed to a sink.
///
/// Exactly one formatter is active per dispatch state and it is shared
/// across all severities.
pub trait Format: Send + Sync {
    fn render(&self, msg: &LogMsg, level: LogLevel) -> String;
}

/// Shared, cloneable handle to a formatter.
pub type SharedFormat = Arc<dyn Format>;

/// Returns the message text unchanged, ignoring severity. The fresh
/// dispatch state uses this until callers install something else.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFormat;

impl Format for PassthroughFormat {
    #[inline]
    fn render(&self, msg: &LogMsg, _level: LogLevel) -> String {
        msg.text.clone()
    }
}

/// Renders `[LEVEL] text`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormat;

impl Format for PlainFormat {
    fn render(&self, msg: &LogMsg, level: LogLevel) -> String {
        format!("[{}] {}", level.name(), msg.text)
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    level: &'static str,
    message: &'a str,
    extras: &'a [Value],
}

/// Renders one JSON object per message: `{"level": ..., "message": ...,
/// "extras": [...]}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn render(&self, msg: &LogMsg, level: LogLevel) -> String {
        let line = JsonLine {
            level: level.name(),
            message: &msg.text,
            extras: &msg.extras,
        };
        // Serialization of this shape cannot fail; fall back to the raw
        // text rather than panic if it somehow does.
        serde_json::to_string(&line).unwrap_or_else(|_| msg.text.clone())
    }
}
