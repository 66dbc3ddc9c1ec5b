use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while loading a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme file could not be read.
    #[error("failed to read theme file \"{}\"", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The theme JSON was malformed or missing required fields.
    #[error("failed to parse theme: {0}")]
    Parse(#[from] serde_json::Error),
}
