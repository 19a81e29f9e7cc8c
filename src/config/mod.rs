pub mod cli;
pub mod toml_config;

pub use cli::ServiceConfig;
pub use toml_config::TomlConfig;
