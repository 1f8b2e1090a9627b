use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error while exporting to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid destination name '{0}': expected a plain file name")]
    InvalidFileName(String),

    #[error("Exported data is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
