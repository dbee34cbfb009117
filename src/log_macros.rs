//! Leveled logging macros for [`Logger`](crate::logger::Logger).
//!
//! # Feature Flags
//! specific log levels are controlled by cargo features:
//! `log-trace`, `log-debug`, `log-info`, `log-warn`, `log-error`.
//!
//! If a feature is disabled, the corresponding macros expand to `()`, removing
//! all argument conversion and allocation overhead at compile time. Fatal is
//! always compiled in. Whatever survives compilation is still gated at runtime
//! by the logger's threshold.

// ============================================================================
// 1. GENERIC INTERNAL MACRO (The "Worker")
// ============================================================================
// The enabled macros below route through this. We generally don't call it
// directly if we want feature-gating.

#[macro_export]
macro_rules! route_log {
    ($logger:expr, $lvl:expr $(, $arg:expr)* $(,)?) => {{
        $logger.log($lvl, ::std::vec![$($crate::log_arg::LogArg::from($arg)),*]);
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- FATAL ----------------------
// Always enabled: a build that silently drops fatal diagnostics is a trap.
#[macro_export]
macro_rules! logger_fatal { ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::route_log!($logger, $crate::log_level::LogLevel::Fatal $(, $arg)*) } }

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::route_log!($logger, $crate::log_level::LogLevel::Error $(, $arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! logger_warn { ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::route_log!($logger, $crate::log_level::LogLevel::Warn $(, $arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! logger_warn {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::route_log!($logger, $crate::log_level::LogLevel::Info $(, $arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! logger_debug { ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::route_log!($logger, $crate::log_level::LogLevel::Debug $(, $arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- TRACE ----------------------
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! logger_trace { ($logger:expr $(, $arg:expr)* $(,)?) => { $crate::route_log!($logger, $crate::log_level::LogLevel::Trace $(, $arg)*) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! logger_trace {
    ($($arg:tt)*) => {
        ()
    };
}
