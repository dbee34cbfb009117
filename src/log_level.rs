use std::fmt;
use std::str::FromStr;

/// Defines the severity levels for log messages.
///
/// Levels are ordered from least to most verbose: `Off < Fatal < Error <
/// Warn < Info < Debug < Trace`. `Off` is a threshold sentinel ("emit
/// nothing") and is never a valid severity for a message itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Threshold sentinel: no message passes the gate.
    Off = 0,
    /// Designates severe error events that presumably lead the application to abort.
    Fatal = 1,
    /// Designates error events that might still allow the application to continue running.
    Error = 2,
    /// Designates potentially harmful situations.
    Warn = 3,
    /// Designates informational messages that highlight the progress of the application at coarse-grained level.
    Info = 4,
    /// Designates fine-grained informational events that are most useful to debug an application.
    Debug = 5,
    /// Designates very fine-grained informational events.
    Trace = 6,
}

impl LogLevel {
    /// The six levels a message may carry, i.e. everything except [`LogLevel::Off`].
    ///
    /// The dispatch table iterates this array to stay total: every entry
    /// here always resolves to some sink.
    pub const DISPATCH: [Self; 6] = [
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Returns the fixed human-readable label for this level.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Position in the dispatch table, or `None` for [`LogLevel::Off`].
    pub(crate) const fn slot(self) -> Option<usize> {
        match self {
            Self::Off => None,
            _ => Some(self as usize - 1),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a known [`LogLevel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: {:?}", self.input)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Parses a level name, case-insensitively. `"warning"` is accepted
    /// as an alias for `"warn"` since config files commonly spell it out.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "fatal" => Ok(Self::Fatal),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseLevelError { input: s.into() }),
        }
    }
}
