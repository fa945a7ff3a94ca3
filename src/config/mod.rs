//! Configuration for the `rm-raw` command
//!
//! Built-in defaults are compiled in from `default-config.toml` and merged
//! with command-line overrides. No configuration files or environment
//! variables are read at runtime.

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::raw::MatchMode;
use crate::shared::ExtensionSet;


// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Resolved settings for a raw cleanup run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupConfig {
    /// Comma-separated extensions treated as raw files
    pub source_formats: String,

    /// Comma-separated extensions treated as converted images
    pub image_formats: String,

    /// How a raw file is paired with its converted image
    pub match_mode: MatchMode,
}

/// Values supplied on the command line; unset fields keep the defaults
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanupOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_formats: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_formats: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_mode: Option<MatchMode>,
}

impl CleanupConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_overrides(&CleanupOverrides::default())
    }

    pub fn load_with_overrides(overrides: &CleanupOverrides) -> Result<Self> {
        Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .merge(Serialized::defaults(overrides))
            .extract()
            .context("Failed to resolve rm-raw configuration")
    }

    /// Normalized raw extensions
    pub fn source_extensions(&self) -> ExtensionSet {
        ExtensionSet::parse(&self.source_formats)
    }

    /// Normalized converted-image extensions
    pub fn image_extensions(&self) -> ExtensionSet {
        ExtensionSet::parse(&self.image_formats)
    }

    /// Render the resolved settings for verbose output
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
