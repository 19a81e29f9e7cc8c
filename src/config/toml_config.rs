use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, VaultError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File form of the service settings, for deployments that keep the shared
/// secret out of argv:
///
/// ```toml
/// [service]
/// api_key = "..."
/// verbose = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSection {
    pub api_key: String,
    #[serde(default)]
    pub verbose: bool,
}

impl TomlConfig {
    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content).map_err(|e| VaultError::ConfigError {
            message: format!("Failed to parse TOML config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| VaultError::ConfigError {
            message: format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_str(&content)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_key(&self) -> &str {
        &self.service.api_key
    }

    fn verbose(&self) -> bool {
        self.service.verbose
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("service.api_key", &self.service.api_key)?;
        Ok(())
    }
}
