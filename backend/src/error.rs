use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("site directory {0} does not exist, build the frontend first")]
    MissingDistDir(PathBuf),
    #[error("site directory has no index.html at {0}")]
    MissingIndex(PathBuf),
}
