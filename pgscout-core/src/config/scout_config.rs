//! Top-level pgscout configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::AnalysisConfig;
use crate::errors::ConfigError;

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PGSCOUT_*`)
/// 2. Project config (`pgscout.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoutConfig {
    pub analysis: AnalysisConfig,
}

impl ScoutConfig {
    /// Load configuration for a project root with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("pgscout.toml");
        if project_config_path.exists() {
            tracing::debug!(path = %project_config_path.display(), "merging project config");
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ScoutConfig) -> Result<(), ConfigError> {
        if config.analysis.nplusone_usage_window == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.nplusone_usage_window".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.analysis.boolean_preview == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.boolean_preview".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.analysis.where_preview == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.where_preview".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ScoutConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileMissing {
            path: path.display().to_string(),
        })?;

        let file_config: ScoutConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut ScoutConfig, other: &ScoutConfig) {
        if other.analysis.nplusone_lookbehind.is_some() {
            base.analysis.nplusone_lookbehind = other.analysis.nplusone_lookbehind;
        }
        if other.analysis.nplusone_lookahead.is_some() {
            base.analysis.nplusone_lookahead = other.analysis.nplusone_lookahead;
        }
        if other.analysis.nplusone_usage_window.is_some() {
            base.analysis.nplusone_usage_window = other.analysis.nplusone_usage_window;
        }
        if other.analysis.boolean_preview.is_some() {
            base.analysis.boolean_preview = other.analysis.boolean_preview;
        }
        if other.analysis.where_preview.is_some() {
            base.analysis.where_preview = other.analysis.where_preview;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PGSCOUT_NPLUSONE_USAGE_WINDOW`, `PGSCOUT_BOOLEAN_PREVIEW`, etc.
    fn apply_env_overrides(config: &mut ScoutConfig) {
        if let Ok(val) = std::env::var("PGSCOUT_NPLUSONE_LOOKBEHIND") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.nplusone_lookbehind = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PGSCOUT_NPLUSONE_LOOKAHEAD") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.nplusone_lookahead = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PGSCOUT_NPLUSONE_USAGE_WINDOW") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.nplusone_usage_window = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PGSCOUT_BOOLEAN_PREVIEW") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.boolean_preview = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PGSCOUT_WHERE_PREVIEW") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.where_preview = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
