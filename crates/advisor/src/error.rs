use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvisorError {
    #[error("Advisory parameters from configuration are invalid: {0}")]
    InvalidParameters(String),
}
