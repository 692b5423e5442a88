//! Sprite loading
//!
//! Image decoding belongs to the host toolkit. A [`Sprite`] is just the
//! source path plus the raw file bytes, handed to the [`Surface`] as-is.
//!
//! [`Surface`]: crate::render::Surface

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ResourceLoadError;

/// Opaque visual handle for one ball kind
#[derive(Clone)]
pub struct Sprite {
    path: PathBuf,
    bytes: Arc<[u8]>,
}

impl Sprite {
    pub fn new(path: impl Into<PathBuf>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            path: path.into(),
            bytes: bytes.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// A sprite with no data cannot be drawn
    pub fn is_valid(&self) -> bool {
        !self.bytes.is_empty()
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("path", &self.path)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Maps a sprite path to an in-memory handle. May be slow; never called with
/// the registry lock held.
pub trait AssetLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Sprite, ResourceLoadError>;
}

/// Reads sprite files from a root directory
#[derive(Debug, Clone)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for FsAssetLoader {
    fn load(&self, path: &Path) -> Result<Sprite, ResourceLoadError> {
        let full = self.root.join(path);
        let bytes = std::fs::read(&full).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ResourceLoadError::NotFound { path: full.clone() },
            _ => ResourceLoadError::Io {
                path: full.clone(),
                source,
            },
        })?;

        if bytes.is_empty() {
            return Err(ResourceLoadError::Empty { path: full });
        }

        log::debug!("Loaded sprite {} ({} bytes)", full.display(), bytes.len());
        Ok(Sprite::new(full, bytes))
    }
}
