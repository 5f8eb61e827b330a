//! Mirror launcher errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("mirroring disabled in configuration")]
    Disabled,

    #[error("mirror executable not found on PATH: {0}")]
    NotFound(String),

    #[error("failed to start {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
