//! Load error types for the catalog file
//!
//! Load errors never touch the currently loaded [`Catalog`](crate::catalog::Catalog);
//! front-ends report them and keep running with the previous data.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog file could not be opened or read
    #[error("could not access courses file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was readable but held no course records
    #[error("courses file {} appears to be empty", .path.display())]
    Empty { path: PathBuf },

    /// Catalog text held no course records
    #[error("catalog text contains no course records")]
    EmptyText,

    /// A line without both an identifier and a name
    #[error("malformed line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
}

pub type Result<T> = std::result::Result<T, LoadError>;
