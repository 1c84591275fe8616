use std::fmt;
use std::io;
use std::path::PathBuf;

use image::ImageError;

#[derive(Debug)]
pub enum IconError {
    SourceNotFound { path: PathBuf },
    Decode { path: PathBuf, source: ImageError },
    NotSquare { width: u32, height: u32 },
    CreateDir { path: PathBuf, source: io::Error },
    WriteIcon { path: PathBuf, source: ImageError },
    WriteReference { path: PathBuf, source: ImageError },
    EncodeManifest(serde_json::Error),
    WriteManifest { path: PathBuf, source: io::Error },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::SourceNotFound { path } => {
                write!(f, "source image not found: '{}'", path.display())
            }
            IconError::Decode { path, source } => {
                write!(f, "cannot decode '{}': {}", path.display(), source)
            }
            IconError::NotSquare { width, height } => {
                write!(f, "source image must be square, got {}x{}", width, height)
            }
            IconError::CreateDir { path, source } => {
                write!(f, "cannot create '{}': {}", path.display(), source)
            }
            IconError::WriteIcon { path, source } => {
                write!(f, "cannot write icon '{}': {}", path.display(), source)
            }
            IconError::WriteReference { path, source } => {
                write!(f, "cannot write reference copy '{}': {}", path.display(), source)
            }
            IconError::EncodeManifest(source) => {
                write!(f, "cannot encode manifest: {}", source)
            }
            IconError::WriteManifest { path, source } => {
                write!(f, "cannot write manifest '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::SourceNotFound { .. } | IconError::NotSquare { .. } => None,
            IconError::Decode { source, .. }
            | IconError::WriteIcon { source, .. }
            | IconError::WriteReference { source, .. } => Some(source),
            IconError::CreateDir { source, .. } | IconError::WriteManifest { source, .. } => {
                Some(source)
            }
            IconError::EncodeManifest(source) => Some(source),
        }
    }
}
