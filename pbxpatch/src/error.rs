use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum PatchError {
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
    InvalidBlockId(String),
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchError::Read { path, source } => {
                write!(f, "cannot read '{}': {}", path.display(), source)
            }
            PatchError::Write { path, source } => {
                write!(f, "cannot write '{}': {}", path.display(), source)
            }
            PatchError::InvalidBlockId(id) => {
                write!(
                    f,
                    "invalid block identifier '{}': expected 24 uppercase hex characters",
                    id
                )
            }
        }
    }
}

impl std::error::Error for PatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatchError::Read { source, .. } | PatchError::Write { source, .. } => Some(source),
            PatchError::InvalidBlockId(_) => None,
        }
    }
}
