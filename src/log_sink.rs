use std::sync::Arc;

/// Output capability: consumes one pre-formatted line and performs a side
/// effect (write to a console, push into a buffer, ...).
///
/// The signature is infallible on purpose. A sink that can fail handles or
/// surfaces that failure itself; the dispatch engine treats every sink as
/// an opaque synchronous call.
pub trait LogSink: Send + Sync {
    fn write(&self, line: &str);
}

/// Shared, cloneable handle to a sink. The dispatch table stores these.
pub type SharedSink = Arc<dyn LogSink>;
