//! Error types for configuration operations using `thiserror`.

use std::io::Error as StdError;

use thiserror::Error;

use crate::ini::IniError;

/// Configuration-related errors.
///
/// Path resolution and typed accessors never fail; errors arise only from
/// file I/O and from parsing on-disk documents.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read, write, copy, or create a config file or directory.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// An on-disk config file is not valid INI.
    #[error("INI error: {0}")]
    IniError(#[from] IniError),
}
