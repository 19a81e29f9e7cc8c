use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "keyword-vault")]
#[command(about = "Token-gated multi-tenant keyword lookup service")]
pub struct ServiceConfig {
    /// Shared secret gating all token-lifecycle operations.
    #[arg(long)]
    pub api_key: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for ServiceConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key)?;
        Ok(())
    }
}
