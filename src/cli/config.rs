//! Shared configuration types for CLI commands

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, minimax::TieBreak};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
            verbose: false,
        }
    }
}

impl CommonConfig {
    /// Log level used when `RUST_LOG` is not set
    pub fn default_log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

/// Search configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Which equally valued action to report
    pub tie_break: TieBreak,
}

impl SearchConfig {
    /// Load a search configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read search config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_config_defaults() {
        let config: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.tie_break, TieBreak::FirstWins);
    }

    #[test]
    fn test_search_config_parses_tie_break() {
        let config: SearchConfig = serde_json::from_str(r#"{"tie_break": "legacy"}"#).unwrap();
        assert_eq!(config.tie_break, TieBreak::Legacy);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SearchConfig::load(Path::new("/nonexistent/search.json")).unwrap_err();
        assert!(err.to_string().contains("read search config"));
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let config = CommonConfig {
            verbose: true,
            ..CommonConfig::default()
        };
        assert_eq!(config.default_log_level(), log::LevelFilter::Debug);
        assert_eq!(
            CommonConfig::default().default_log_level(),
            log::LevelFilter::Warn
        );
    }
}
