use std::collections::HashMap;
use std::fs;
use std::sync::Arc;

use crate::{
    dispatch::DispatchConfig,
    format::{JsonFormat, PlainFormat, SharedFormat},
    log_level::LogLevel,
    log_sink::SharedSink,
    logger::DEFAULT_THRESHOLD,
    noop_log_sink::NoopLogSink,
    sinks::ConsoleSink,
};

/// Minimal INI-style configuration: `key = value` lines grouped under
/// `[section]` headers, `#` comments, quotes around values stripped.
#[derive(Debug, Default)]
pub struct Config {
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    /// Reads and parses a configuration file.
    pub fn load(path: &str) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Error reading file {path}: {e}"))?;
        Ok(Self::parse(&content))
    }

    /// Parses configuration text. Unparseable lines are skipped.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = &line[1..line.len() - 1];
                current_section = Some(name.to_string());
                continue;
            }

            if let (Some(sec), Some(pos)) = (&current_section, line.find('=')) {
                let key = line[..pos].trim().to_string();
                let value = line[pos + 1..].trim().trim_matches('"').to_string();
                sections.entry(sec.clone()).or_default().insert(key, value);
            }
        }
        Config { sections }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }
}

/// Engine settings resolved from the `[logging]` config section.
///
/// Recognized keys:
/// - `threshold`: a level name (`off`, `fatal`, ... `trace`);
/// - `format`: `plain`, `json`, or `passthrough`;
/// - `output`: `console` or `none`.
///
/// Unknown or missing values fall back to defaults rather than failing;
/// a misconfigured file degrades to the quiet defaults instead of taking
/// logging down with it.
pub struct LoggingSettings {
    pub threshold: LogLevel,
    pub dispatch: DispatchConfig,
}

impl LoggingSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let threshold = config
            .get_non_empty("logging", "threshold")
            .and_then(|s| s.parse::<LogLevel>().ok())
            .unwrap_or(DEFAULT_THRESHOLD);

        let mut dispatch = DispatchConfig::new();

        if let Some(format) = config.get_non_empty("logging", "format") {
            let format: Option<SharedFormat> = match format.to_ascii_lowercase().as_str() {
                "plain" => Some(Arc::new(PlainFormat)),
                "json" => Some(Arc::new(JsonFormat)),
                _ => None, // "passthrough" and anything unknown keep the default
            };
            if let Some(format) = format {
                dispatch = dispatch.format(format);
            }
        }

        if let Some(output) = config.get_non_empty("logging", "output") {
            let sink: Option<SharedSink> = match output.to_ascii_lowercase().as_str() {
                "console" => Some(Arc::new(ConsoleSink)),
                "none" => Some(Arc::new(NoopLogSink)),
                _ => None,
            };
            if let Some(sink) = sink {
                dispatch = dispatch.default_sink(sink);
            }
        }

        Self { threshold, dispatch }
    }
}
