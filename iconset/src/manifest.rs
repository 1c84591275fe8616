use serde::{Deserialize, Serialize};

use crate::catalog;

/// The `Contents.json` document describing an `.appiconset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

/// One variant descriptor in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub size: String,
    pub idiom: String,
    pub filename: String,
    pub scale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

impl Manifest {
    /// Derive the manifest from the render catalog.
    pub fn from_catalog() -> Self {
        let images = catalog::manifest_sizes()
            .into_iter()
            .map(|(size, idiom)| ManifestImage {
                size: size.size_label(),
                idiom: idiom.as_str().to_string(),
                filename: size.filename(),
                scale: size.scale_label(),
            })
            .collect();
        Manifest {
            images,
            info: ManifestInfo {
                version: 1,
                author: "xcode".to_string(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
