use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::catalog::{IconSize, RENDER_SIZES};
use crate::error::IconError;
use crate::manifest::Manifest;
use crate::source::SourceImage;

/// Name of the manifest file inside an `.appiconset` directory.
pub const MANIFEST_FILENAME: &str = "Contents.json";

/// Conventional location of the app icon set inside an Xcode project
/// directory.
pub fn appiconset_dir(project_dir: &Path) -> PathBuf {
    project_dir.join("Assets.xcassets").join("AppIcon.appiconset")
}

/// One icon file a generation run produced.
#[derive(Debug)]
pub struct WrittenIcon {
    pub size: IconSize,
    pub path: PathBuf,
}

/// Everything one generation run wrote.
#[derive(Debug)]
pub struct GenerateReport {
    pub written: Vec<WrittenIcon>,
    pub manifest_path: PathBuf,
}

/// Render every catalog slot into `iconset_dir` (created if absent), then
/// write the derived `Contents.json` next to the icons.
///
/// Stops at the first failure; files already written stay on disk.
pub fn generate(source: &SourceImage, iconset_dir: &Path) -> Result<GenerateReport, IconError> {
    fs::create_dir_all(iconset_dir).map_err(|e| IconError::CreateDir {
        path: iconset_dir.to_path_buf(),
        source: e,
    })?;

    let mut written = Vec::with_capacity(RENDER_SIZES.len());
    for size in RENDER_SIZES {
        let path = iconset_dir.join(size.filename());
        source
            .render(size)
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| IconError::WriteIcon {
                path: path.clone(),
                source: e,
            })?;
        written.push(WrittenIcon { size, path });
    }

    let json = Manifest::from_catalog()
        .to_json()
        .map_err(IconError::EncodeManifest)?;
    let manifest_path = iconset_dir.join(MANIFEST_FILENAME);
    fs::write(&manifest_path, json).map_err(|e| IconError::WriteManifest {
        path: manifest_path.clone(),
        source: e,
    })?;

    Ok(GenerateReport {
        written,
        manifest_path,
    })
}
