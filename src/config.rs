//! Configuration loading and management for deckpeek.
//!
//! Loads settings from `deckpeek.toml`. Every field has a default, so
//! running without a config file works out of the box.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::builder::DEFAULT_BUILDER_BASE;
use crate::extract::{ExtractLimits, DEFAULT_MAX_CODE_LEN, DEFAULT_MIN_CODE_LEN};
use crate::render::{RenderOptions, DEFAULT_PREVIEW_COUNT};
use crate::summarize::{SummarizeLimits, DEFAULT_MAX_CARDS};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Deck-builder endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Base URL the code is appended to as a `hash` query parameter
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Length bounds for the sigil-less code fallback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    #[serde(default = "default_min_code_len")]
    pub min_code_len: usize,
    #[serde(default = "default_max_code_len")]
    pub max_code_len: usize,
}

/// Card-list sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Extraction cap shared by the structured and heuristic paths
    #[serde(default = "default_max_cards")]
    pub max_cards: usize,
    /// How many cards the rendered reply previews
    #[serde(default = "default_preview_count")]
    pub preview_count: usize,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub builder: BuilderConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

impl Config {
    /// Load configuration from the default location (deckpeek.toml in
    /// cwd or home), falling back to defaults when no file exists
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from("deckpeek.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("deckpeek").join("deckpeek.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }

    /// Extraction bounds as the extractor expects them
    pub fn extract_limits(&self) -> ExtractLimits {
        ExtractLimits {
            min_code_len: self.extract.min_code_len,
            max_code_len: self.extract.max_code_len,
        }
    }

    /// Card cap as the summariser expects it
    pub fn summarize_limits(&self) -> SummarizeLimits {
        SummarizeLimits {
            max_cards: self.summary.max_cards,
        }
    }

    /// Preview sizing as the renderer expects it
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            preview_count: self.summary.preview_count,
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_code_len: DEFAULT_MIN_CODE_LEN,
            max_code_len: DEFAULT_MAX_CODE_LEN,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_cards: DEFAULT_MAX_CARDS,
            preview_count: DEFAULT_PREVIEW_COUNT,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BUILDER_BASE.to_string()
}

fn default_min_code_len() -> usize {
    DEFAULT_MIN_CODE_LEN
}

fn default_max_code_len() -> usize {
    DEFAULT_MAX_CODE_LEN
}

fn default_max_cards() -> usize {
    DEFAULT_MAX_CARDS
}

fn default_preview_count() -> usize {
    DEFAULT_PREVIEW_COUNT
}
