//! Runtime configuration taken from the page query string.
//!
//! `?api=http%3A%2F%2F127.0.0.1%3A8000&format=annotated&log=info`
//!
//! Every key is optional.

use crate::shared::text_format::AnswerFormat;
use serde::Deserialize;

const DEFAULT_LOG_LEVEL: log::Level = log::Level::Debug;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Base URL of the analysis API; empty means same origin
    pub api: String,
    /// Answer formatting policy for the whole session
    pub format: AnswerFormat,
    /// Console log level name ("error" .. "trace")
    pub log: Option<String>,
}

impl AnalyzerConfig {
    /// Parse `location.search` (leading `?` optional)
    pub fn from_query(search: &str) -> Result<Self, serde_qs::Error> {
        serde_qs::from_str(search.trim_start_matches('?'))
    }

    /// Read the configuration of the current page.
    ///
    /// A malformed query string yields the defaults together with the parse
    /// error, so the caller can report it once logging is up.
    pub fn from_location() -> (Self, Option<serde_qs::Error>) {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match Self::from_query(&search) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Unknown level names fall back to `debug`
    pub fn log_level(&self) -> log::Level {
        self.log
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
