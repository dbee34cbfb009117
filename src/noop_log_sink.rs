use crate::log_sink::LogSink;

/// Sink that discards every line. The fresh dispatch state binds all
/// levels to this until callers configure something else.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn write(&self, _line: &str) {}
}
