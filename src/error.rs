//! Error types
//!
//! Nothing here is fatal to the process. The worst outcome of any of these is
//! a ball that never appears or is missing from one frame.

use std::path::PathBuf;

use thiserror::Error;

use crate::sim::BallKind;

/// A sprite could not be turned into an in-memory handle.
///
/// Returned by the registry on a cache miss. The registry caches nothing on
/// failure, so a later request retries the load.
#[derive(Error, Debug)]
pub enum ResourceLoadError {
    #[error("sprite not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read sprite {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("sprite is empty: {}", path.display())]
    Empty { path: PathBuf },
}

/// A single ball could not be spawned. Reduces a batch, never aborts it.
#[derive(Error, Debug)]
pub enum SpawnError {
    #[error("failed to load shared ball state: {0}")]
    Resource(#[from] ResourceLoadError),
    #[error("invalid spawn radius: {0}")]
    InvalidRadius(f32),
}

/// A ball could not be drawn this frame. Logged and skipped.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("{kind:?} sprite handle is invalid")]
    InvalidSprite { kind: BallKind },
    #[error("surface rejected draw: {0}")]
    Surface(String),
}

/// Configuration file problems
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_error_wraps_resource_error() {
        let err: SpawnError = ResourceLoadError::NotFound {
            path: PathBuf::from("ball_soccer.png"),
        }
        .into();
        assert!(matches!(err, SpawnError::Resource(_)));
        assert!(err.to_string().contains("ball_soccer.png"));
    }

    #[test]
    fn test_render_error_names_kind() {
        let err = RenderError::InvalidSprite {
            kind: BallKind::Beach,
        };
        assert_eq!(err.to_string(), "Beach sprite handle is invalid");
    }
}
