use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read BusinessGraph settings (built-in defaults, businessgraph.toml or BUSINESSGRAPH__* variables): {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid BusinessGraph setting: {0}")]
    ValidationError(String),
}
