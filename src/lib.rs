pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::memory::{InMemoryGroupRepository, InMemoryTokenStore};
pub use adapters::token::HashTokenGenerator;
pub use app::vault::KeywordVault;
pub use config::{ServiceConfig, TomlConfig};
pub use core::authority::TokenAuthority;
pub use core::gate::AccessGate;
pub use core::keywords::KeywordMapService;
pub use domain::model::{Group, KeywordEntry};
pub use utils::error::{Result, VaultError};
