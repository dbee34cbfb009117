use crate::{
    compose::compose,
    config::{Config, LoggingSettings},
    dispatch::{Dispatch, DispatchConfig},
    log_arg::LogArg,
    log_level::LogLevel,
};

/// Per-call logging facade.
///
/// Owns the [`Dispatch`] state and a mutable severity `threshold`. Each
/// severity method gates on the threshold, composes the arguments into a
/// structured message, renders it through the current formatter, and
/// hands the result to the sink bound to that severity. Typical usage
/// creates one `Logger` at process start and passes it by reference.
pub struct Logger {
    dispatch: Dispatch,
    threshold: LogLevel,
}

/// Threshold a fresh logger starts with.
pub const DEFAULT_THRESHOLD: LogLevel = LogLevel::Info;

impl Logger {
    /// Creates a facade over freshly configured dispatch state.
    #[must_use]
    pub fn new(cfg: DispatchConfig) -> Self {
        Self {
            dispatch: Dispatch::with_config(cfg),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Creates a facade from the `[logging]` section of a loaded
    /// [`Config`], falling back to defaults for anything unset.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let settings = LoggingSettings::from_config(config);
        let mut logger = Self::new(settings.dispatch);
        logger.set_threshold(settings.threshold);
        logger
    }

    /// The current severity threshold.
    #[must_use]
    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    /// Updates the severity threshold. `Off` disables every severity;
    /// `Trace` enables all of them.
    pub fn set_threshold(&mut self, threshold: LogLevel) {
        self.threshold = threshold;
    }

    /// Read access to the owned dispatch state.
    #[must_use]
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Reconfiguration access to the owned dispatch state.
    pub fn dispatch_mut(&mut self) -> &mut Dispatch {
        &mut self.dispatch
    }

    /// Returns the whole engine to its just-started state: the dispatch
    /// state goes back to its no-op defaults and the threshold back to
    /// [`DEFAULT_THRESHOLD`].
    pub fn reset(&mut self) {
        self.dispatch.reset();
        self.threshold = DEFAULT_THRESHOLD;
    }

    /// Gate, compose, format, dispatch. The worker every severity method
    /// routes through.
    ///
    /// Messages more verbose than the threshold are dropped before any
    /// composition or formatting happens. `Off` is never a valid message
    /// severity and is dropped unconditionally.
    pub fn log(&self, level: LogLevel, args: Vec<LogArg>) {
        if level == LogLevel::Off || level > self.threshold {
            return;
        }
        let msg = compose(&args);
        let line = self.dispatch.format().render(&msg, level);
        self.dispatch.sink_for(level).write(&line);
    }

    pub fn fatal(&self, args: Vec<LogArg>) {
        self.log(LogLevel::Fatal, args);
    }

    pub fn error(&self, args: Vec<LogArg>) {
        self.log(LogLevel::Error, args);
    }

    pub fn warn(&self, args: Vec<LogArg>) {
        self.log(LogLevel::Warn, args);
    }

    pub fn info(&self, args: Vec<LogArg>) {
        self.log(LogLevel::Info, args);
    }

    pub fn debug(&self, args: Vec<LogArg>) {
        self.log(LogLevel::Debug, args);
    }

    pub fn trace(&self, args: Vec<LogArg>) {
        self.log(LogLevel::Trace, args);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DispatchConfig::new())
    }
}
