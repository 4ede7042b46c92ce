//! Blotter configuration module
//!
//! Config loading priority:
//! 1. `.blotter.json` in the data root
//! 2. Built-in defaults
//!
//! CLI flags override config values; config values override defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name, looked up in the data root
pub const CONFIG_FILE_NAME: &str = ".blotter.json";
pub const CONFIG_VERSION: u32 = 1;

/// Environment variable pointing at the directory holding corpus and config
pub const DATA_PATH_ENV: &str = "BLOTTER_DATA_PATH";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub corpus: CorpusConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Corpus input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    #[serde(default = "default_corpus_path")]
    pub path: String,
}

fn default_corpus_path() -> String {
    "narratives.json".to_string()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
        }
    }
}

/// Frequency analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// How many rows the frequency tables report
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    30
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

/// Taxonomy source configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaxonomyConfig {
    /// Optional JSON/YAML taxonomy file replacing the built-in keyword table
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            corpus: CorpusConfig::default(),
            analysis: AnalysisConfig::default(),
            taxonomy: TaxonomyConfig::default(),
        }
    }
}

impl Config {
    pub fn load(data_root: &Path) -> Self {
        let config_path = data_root.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            match Self::load_from_file(&config_path) {
                Ok(config) => {
                    if config.version > CONFIG_VERSION {
                        eprintln!(
                            "Warning: Config version {} is newer than supported version {}.",
                            config.version, CONFIG_VERSION
                        );
                    }
                    return config;
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load {}: {}. Using defaults.",
                        CONFIG_FILE_NAME, e
                    );
                }
            }
        }

        Self::default()
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, data_root: &Path) -> Result<()> {
        let config_path = data_root.join(CONFIG_FILE_NAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Generate default config file content
    pub fn default_json() -> String {
        serde_json::to_string_pretty(&Config::default()).unwrap()
    }

    /// Resolve the corpus path against the data root
    pub fn corpus_path(&self, data_root: &Path) -> PathBuf {
        data_root.join(&self.corpus.path)
    }
}

/// Get data root path from environment variable or current directory.
/// Priority: BLOTTER_DATA_PATH env var > current directory
pub fn get_data_root() -> PathBuf {
    if let Ok(path) = std::env::var(DATA_PATH_ENV) {
        let data_path = PathBuf::from(&path);
        if data_path.exists() {
            return data_path;
        }
        eprintln!(
            "Warning: {} is set to '{}' but path does not exist. Falling back to current directory.",
            DATA_PATH_ENV, path
        );
    }
    std::env::current_dir().expect("Failed to get current directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.corpus.path, "narratives.json");
        assert_eq!(config.analysis.top_n, 30);
        assert!(config.taxonomy.path.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let json = r#"{"analysis": {"top_n": 50}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.analysis.top_n, 50);
        assert_eq!(config.corpus.path, "narratives.json");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.corpus.path = "intake/narratives.json".to_string();
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path());
        assert_eq!(loaded.corpus.path, "intake/narratives.json");
    }
}
