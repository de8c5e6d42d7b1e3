//! Errors surfaced by the settings store.
//!
//! Everything else in the crate wraps, clamps or heals instead of failing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),

    /// The primary config file could not be written.
    #[error("failed to write config to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
