use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading inputs or running a simulation.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] srcore::Error),

    /// A line of an experimental data file could not be parsed.
    #[error("malformed experimental data at line {line}: {details}")]
    Format { line: usize, details: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("configuration file error: {0}")]
    Json(#[from] serde_json::Error),

    /// No ion survived table construction, nothing can be simulated.
    #[error("the mass-over-charge table is empty, no ion could be resolved")]
    EmptyTable,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub fn format(line: usize, details: impl Into<String>) -> Self {
        Error::Format { line, details: details.into() }
    }
}
