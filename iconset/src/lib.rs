pub mod catalog;
pub mod error;
pub mod generate;
pub mod manifest;
pub mod source;

pub use crate::catalog::{IconSize, Idiom, RENDER_SIZES, manifest_sizes};
pub use crate::error::IconError;
pub use crate::generate::{
    GenerateReport, MANIFEST_FILENAME, WrittenIcon, appiconset_dir, generate,
};
pub use crate::manifest::{Manifest, ManifestImage, ManifestInfo};
pub use crate::source::SourceImage;
