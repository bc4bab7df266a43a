//! Errors raised while configuring and building the scene.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The config file exists but could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid RON for `SceneConfig`.
    #[error("failed to parse config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// A config value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
