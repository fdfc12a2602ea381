use std::{io, path::PathBuf};

/// Errors raised while loading theme configuration.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid theme json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid color {0:?}, expected #hex, rgb(r, g, b) or rgba(r, g, b, a)")]
    InvalidColor(String),
}
