//! Database configuration record (`config/database.yml`).
//!
//! Parsed once per run and inspected read-only by the connection-settings
//! analyzers. ERB interpolation tags are stripped before parsing rather
//! than evaluated; values that do not survive as plain YAML scalars are
//! present but untyped, and the analyzers simply do not judge them.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_yaml::Value;

use crate::errors::ConfigError;

/// Environments the settings analyzers inspect, in report order.
pub const ANALYZED_ENVIRONMENTS: [&str; 3] = ["development", "test", "production"];

/// Connection settings for one named environment.
///
/// Every field is an untyped YAML value: presence and type are separate
/// questions for the analyzers (a `pool` left as an unstripped ERB
/// expression is present but not an integer).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    pub pool: Option<Value>,
    pub connect_timeout: Option<Value>,
    pub checkout_timeout: Option<Value>,
    pub reaping_frequency: Option<Value>,
    pub prepared_statements: Option<Value>,
    pub sslmode: Option<Value>,
    pub variables: Option<Value>,
}

impl ConnectionSettings {
    /// Pool size, when declared as a plain integer.
    pub fn pool_size(&self) -> Option<i64> {
        self.pool.as_ref().and_then(Value::as_i64)
    }

    /// Prepared-statements flag, when declared as a plain boolean.
    pub fn prepared_statements_flag(&self) -> Option<bool> {
        self.prepared_statements.as_ref().and_then(Value::as_bool)
    }

    /// SSL mode, when declared as a plain string.
    pub fn sslmode_str(&self) -> Option<&str> {
        self.sslmode.as_ref().and_then(Value::as_str)
    }

    /// Whether `variables.statement_timeout` is declared.
    pub fn has_statement_timeout(&self) -> bool {
        self.variables
            .as_ref()
            .and_then(|v| v.get("statement_timeout"))
            .is_some()
    }
}

/// The parsed database configuration: environment name → settings.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    environments: FxHashMap<String, ConnectionSettings>,
}

impl DatabaseConfig {
    /// Read and parse a database configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileMissing {
                    path: path.display().to_string(),
                }
            } else {
                ConfigError::Parse {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })?;
        Self::from_yaml(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Parse from raw YAML text. ERB interpolation tags are stripped, not
    /// evaluated; YAML merge keys (`<<: *defaults`) are resolved.
    /// Environments whose value is not a mapping are skipped.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let stripped = strip_erb(content);
        let mut doc: Value = serde_yaml::from_str(&stripped).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        doc.apply_merge().map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;

        let mut environments = FxHashMap::default();
        if let Some(mapping) = doc.as_mapping() {
            for (key, value) in mapping {
                let Some(name) = key.as_str() else { continue };
                if !value.is_mapping() {
                    continue;
                }
                let settings: ConnectionSettings =
                    serde_yaml::from_value(value.clone()).unwrap_or_default();
                environments.insert(name.to_string(), settings);
            }
        }
        tracing::debug!(environments = environments.len(), "parsed database configuration");
        Ok(Self { environments })
    }

    /// Settings for a named environment, if present.
    pub fn environment(&self, name: &str) -> Option<&ConnectionSettings> {
        self.environments.get(name)
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}

/// Remove ERB interpolation delimiters, leaving the inner expression as
/// scalar text.
fn strip_erb(content: &str) -> String {
    content.replace("<%=", "").replace("%>", "")
}
