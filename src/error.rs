use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the workflow model.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The name is not listed in the catalog.
    #[error("Unknown algorithm '{name}'")]
    UnknownAlgorithm { name: String },

    /// Two catalog entries share the same name.
    #[error("Algorithm '{name}' appears more than once in the catalog")]
    DuplicateAlgorithm { name: String },

    /// Writing the results file failed.
    #[error("Failed to save results to {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PlatformError>;
