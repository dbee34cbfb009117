use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    format::{PassthroughFormat, SharedFormat},
    log_level::LogLevel,
    log_sink::SharedSink,
    noop_log_sink::NoopLogSink,
};

/// Partial per-level sink override set handed to [`Dispatch::configure`].
///
/// Entries for [`LogLevel::Off`] are meaningless and ignored. A later
/// `with` for the same level replaces the earlier entry.
#[derive(Clone, Default)]
pub struct SinkOverrides {
    entries: HashMap<LogLevel, SharedSink>,
}

impl SinkOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an explicit binding for one level.
    #[must_use]
    pub fn with(mut self, level: LogLevel, sink: SharedSink) -> Self {
        self.entries.insert(level, sink);
        self
    }

    fn get(&self, level: LogLevel) -> Option<&SharedSink> {
        self.entries.get(&level)
    }
}

/// Optional pieces applied to a [`Dispatch`] in one configuration step.
///
/// Each field left as `None` leaves the corresponding dispatch state
/// untouched. Note the asymmetry for `sinks`: `None` keeps all existing
/// per-level bindings, but `Some(overrides)` rebinds EVERY level — levels
/// missing from the override set fall back to the default sink, dropping
/// any prior override for them.
#[derive(Clone, Default)]
pub struct DispatchConfig {
    default_sink: Option<SharedSink>,
    format: Option<SharedFormat>,
    sinks: Option<SinkOverrides>,
}

impl DispatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the default sink when applied.
    #[must_use]
    pub fn default_sink(mut self, sink: SharedSink) -> Self {
        self.default_sink = Some(sink);
        self
    }

    /// Replaces the formatter when applied.
    #[must_use]
    pub fn format(mut self, format: SharedFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Rebinds the whole level table when applied (see the type docs for
    /// the fallback rule).
    #[must_use]
    pub fn sinks(mut self, overrides: SinkOverrides) -> Self {
        self.sinks = Some(overrides);
        self
    }
}

/// Coordination point owning the default sink, the formatter, and a total
/// mapping from every dispatchable level to a sink.
///
/// A binding slot holds `Some(sink)` only for an explicit per-level
/// override; `None` means "follow the current default sink", resolved at
/// lookup time. That keeps the mapping total while letting a later
/// default-sink change take effect for every level that was never
/// explicitly overridden.
///
/// One `Dispatch` is meant to be constructed by the process entry point
/// and passed by reference wherever logging is configured or performed.
/// All mutation goes through `&mut self`, so configuration changes are
/// serialized relative to logging calls by construction.
pub struct Dispatch {
    default_sink: SharedSink,
    format: SharedFormat,
    bindings: [Option<SharedSink>; LogLevel::DISPATCH.len()],
}

impl Dispatch {
    /// Fresh state: default sink discards everything, formatter passes
    /// text through unchanged, every level follows the default sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_sink: Arc::new(NoopLogSink),
            format: Arc::new(PassthroughFormat),
            bindings: std::array::from_fn(|_| None),
        }
    }

    /// Constructs fresh state and applies `cfg` in one step.
    #[must_use]
    pub fn with_config(cfg: DispatchConfig) -> Self {
        let mut dispatch = Self::new();
        dispatch.configure(cfg);
        dispatch
    }

    /// Applies a configuration step in place.
    ///
    /// A supplied default sink or formatter replaces the stored one
    /// unconditionally. A supplied override set rebinds every level:
    /// explicit entry wins, anything else is reset to the (possibly
    /// just-updated) default sink. Omitting the override set entirely
    /// leaves the existing bindings alone. This is not an additive merge;
    /// repeated configuration with disjoint override sets does not
    /// accumulate bindings.
    pub fn configure(&mut self, cfg: DispatchConfig) {
        if let Some(sink) = cfg.default_sink {
            self.default_sink = sink;
        }
        if let Some(format) = cfg.format {
            self.format = format;
        }
        if let Some(overrides) = cfg.sinks {
            for level in LogLevel::DISPATCH {
                if let Some(slot) = level.slot() {
                    self.bindings[slot] = overrides.get(level).cloned();
                }
            }
        }
    }

    /// The sink bound to `level`. The mapping is total for every
    /// dispatchable level: explicit overrides win, everything else
    /// (including `Off`, which carries no binding) resolves to the
    /// current default sink.
    #[must_use]
    pub fn sink_for(&self, level: LogLevel) -> SharedSink {
        level
            .slot()
            .and_then(|slot| self.bindings[slot].as_ref())
            .map_or_else(|| Arc::clone(&self.default_sink), Arc::clone)
    }

    /// The currently active formatter.
    #[must_use]
    pub fn format(&self) -> SharedFormat {
        Arc::clone(&self.format)
    }

    /// The current default sink.
    #[must_use]
    pub fn default_sink(&self) -> SharedSink {
        Arc::clone(&self.default_sink)
    }

    /// Binds or clears a single level without touching the others.
    ///
    /// `Some(sink)` installs an override for that level; `None` clears
    /// the override so the level follows the current default sink again.
    pub fn set_sink(&mut self, level: LogLevel, sink: Option<SharedSink>) {
        if let Some(slot) = level.slot() {
            self.bindings[slot] = sink;
        }
    }

    /// Discards all state and returns to the just-started defaults.
    /// Calling this twice in a row is the same as calling it once.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Dispatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::sinks::MemorySink;

    fn memory() -> (Arc<MemorySink>, SharedSink) {
        let sink = Arc::new(MemorySink::new());
        let shared: SharedSink = sink.clone();
        (sink, shared)
    }

    #[test]
    fn fresh_state_discards_everything() {
        let dispatch = Dispatch::new();
        for level in LogLevel::DISPATCH {
            dispatch.sink_for(level).write("swallowed");
        }
        // Nothing observable; also the formatter passes text through.
        let msg = crate::log_msg::LogMsg::new("same");
        assert_eq!(dispatch.format().render(&msg, LogLevel::Info), "same");
    }

    #[test]
    fn replacing_the_default_rebinds_default_bound_levels() {
        let (captured, sink) = memory();
        let mut dispatch = Dispatch::new();

        // No override set anywhere: installing a default alone must route
        // every level through it.
        dispatch.configure(DispatchConfig::new().default_sink(sink));
        for level in LogLevel::DISPATCH {
            dispatch.sink_for(level).write(level.name());
        }
        assert_eq!(captured.len(), LogLevel::DISPATCH.len());
    }

    #[test]
    fn omitted_levels_fall_back_to_the_default_sink() {
        let (captured, error_sink) = memory();
        let mut dispatch = Dispatch::new();
        dispatch.configure(
            DispatchConfig::new().sinks(SinkOverrides::new().with(LogLevel::Error, error_sink)),
        );
        dispatch.sink_for(LogLevel::Error).write("kept");
        assert_eq!(captured.lines(), vec!["kept"]);

        // Second step omits Error entirely: its override must be dropped,
        // not merged.
        let (_warn_captured, warn_sink) = memory();
        dispatch
            .configure(DispatchConfig::new().sinks(SinkOverrides::new().with(LogLevel::Warn, warn_sink)));
        dispatch.sink_for(LogLevel::Error).write("gone");
        assert_eq!(captured.lines(), vec!["kept"]);
    }

    #[test]
    fn set_sink_none_rebinds_to_the_current_default() {
        let (default_captured, default_sink) = memory();
        let (override_captured, override_sink) = memory();
        let mut dispatch = Dispatch::with_config(DispatchConfig::new().default_sink(default_sink));

        dispatch.set_sink(LogLevel::Warn, Some(override_sink));
        dispatch.sink_for(LogLevel::Warn).write("routed");
        assert_eq!(override_captured.lines(), vec!["routed"]);

        dispatch.set_sink(LogLevel::Warn, None);
        dispatch.sink_for(LogLevel::Warn).write("back");
        assert_eq!(default_captured.lines(), vec!["back"]);
        assert_eq!(override_captured.lines(), vec!["routed"]);
    }

    #[test]
    fn reset_returns_to_noop_defaults() {
        let (captured, sink) = memory();
        let mut dispatch = Dispatch::with_config(DispatchConfig::new().default_sink(sink));
        dispatch.reset();
        dispatch.reset(); // idempotent
        for level in LogLevel::DISPATCH {
            dispatch.sink_for(level).write("dropped");
        }
        assert!(captured.lines().is_empty());
    }
}
