use serde::Serialize;

/// Represents a single structured log message.
///
/// Produced fresh for every log call by [`compose`](crate::compose::compose).
/// Under the current composition rule `extras` is always empty: structured
/// arguments survive only through their textual form inside `text`.
#[derive(Debug, Clone, Serialize)]
pub struct LogMsg {
    /// The rendered payload of the message.
    pub text: String,
    /// Auxiliary structured values, in call order. Empty today; kept so
    /// formatters already consume the full message shape.
    pub extras: Vec<serde_json::Value>,
}

impl LogMsg {
    /// Creates a message with the given text and no extras.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extras: Vec::new(),
        }
    }
}
