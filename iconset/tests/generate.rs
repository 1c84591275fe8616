use std::path::Path;

use image::{Rgba, RgbaImage};

use iconset::{
    IconError, IconSize, Idiom, MANIFEST_FILENAME, Manifest, RENDER_SIZES, SourceImage,
    appiconset_dir, generate, manifest_sizes,
};

fn solid_source(side: u32) -> SourceImage {
    let img = RgbaImage::from_pixel(side, side, Rgba([10, 200, 100, 255]));
    SourceImage::from_image(img).unwrap()
}

#[test]
fn catalog_arithmetic_and_filenames() {
    let size = IconSize::new(20, 2);
    assert_eq!(size.pixels(), 40);
    assert_eq!(size.filename(), "Icon-20x20@2x.png");
    assert_eq!(size.size_label(), "20x20");
    assert_eq!(size.scale_label(), "2x");

    let store = IconSize::new(1024, 1);
    assert_eq!(store.pixels(), 1024);
    assert_eq!(store.filename(), "Icon-1024x1024@1x.png");
}

#[test]
fn manifest_sizes_are_the_nine_declared_entries() {
    let entries: Vec<(u32, u32, &str)> = manifest_sizes()
        .into_iter()
        .map(|(size, idiom)| (size.points, size.scale, idiom.as_str()))
        .collect();

    assert_eq!(
        entries,
        vec![
            (20, 2, "iphone"),
            (20, 3, "iphone"),
            (29, 2, "iphone"),
            (29, 3, "iphone"),
            (40, 2, "iphone"),
            (40, 3, "iphone"),
            (60, 2, "iphone"),
            (60, 3, "iphone"),
            (1024, 1, "ios-marketing"),
        ]
    );
}

#[test]
fn every_manifest_filename_is_rendered() {
    let rendered: Vec<String> = RENDER_SIZES.iter().map(|s| s.filename()).collect();
    for (size, _) in manifest_sizes() {
        assert!(rendered.contains(&size.filename()));
    }
}

#[test]
fn manifest_json_shape() {
    let manifest = Manifest::from_catalog();
    assert_eq!(manifest.images.len(), 9);
    assert_eq!(manifest.info.version, 1);
    assert_eq!(manifest.info.author, "xcode");

    let first = &manifest.images[0];
    assert_eq!(first.size, "20x20");
    assert_eq!(first.idiom, "iphone");
    assert_eq!(first.filename, "Icon-20x20@2x.png");
    assert_eq!(first.scale, "2x");

    let json = manifest.to_json().unwrap();
    let parsed = Manifest::from_json(&json).unwrap();
    assert_eq!(parsed, manifest);
}

#[test]
fn generate_writes_one_file_per_catalog_entry() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("AppIcon.appiconset");

    let report = generate(&solid_source(500), &out).unwrap();
    assert_eq!(report.written.len(), RENDER_SIZES.len());

    for size in RENDER_SIZES {
        let path = out.join(size.filename());
        let (width, height) = image::image_dimensions(&path).unwrap();
        assert_eq!((width, height), (size.pixels(), size.pixels()));
    }
}

#[test]
fn generate_end_to_end_manifest_matches_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("AppIcon.appiconset");

    let report = generate(&solid_source(500), &out).unwrap();
    assert_eq!(report.manifest_path, out.join(MANIFEST_FILENAME));

    let json = std::fs::read_to_string(&report.manifest_path).unwrap();
    let manifest = Manifest::from_json(&json).unwrap();
    assert_eq!(manifest.images.len(), 9);

    // Every manifest entry names a file that was actually written, square
    // at its declared pixel size.
    for entry in &manifest.images {
        let path = out.join(&entry.filename);
        assert!(path.exists(), "missing {}", entry.filename);

        let points: u32 = entry.size.split('x').next().unwrap().parse().unwrap();
        let scale: u32 = entry.scale.trim_end_matches('x').parse().unwrap();
        let (width, height) = image::image_dimensions(&path).unwrap();
        assert_eq!((width, height), (points * scale, points * scale));
    }
}

#[test]
fn appiconset_dir_layout() {
    let dir = appiconset_dir(Path::new("GeoCameraApp"));
    assert_eq!(
        dir,
        Path::new("GeoCameraApp")
            .join("Assets.xcassets")
            .join("AppIcon.appiconset")
    );
}

#[test]
fn placeholder_is_square_master_size() {
    let placeholder = SourceImage::placeholder();
    assert_eq!(placeholder.dimensions(), (1024, 1024));

    let full = placeholder.as_image();
    // Background in the top-left corner, lens ring above center, pin head
    // in the top-right corner.
    assert_eq!(*full.get_pixel(0, 0), Rgba([20, 20, 30, 255]));
    assert_eq!(*full.get_pixel(512, 171), Rgba([0, 255, 255, 255]));
    assert_eq!(*full.get_pixel(824, 200), Rgba([0, 255, 0, 255]));
    assert_eq!(*full.get_pixel(824, 400), Rgba([0, 255, 0, 255]));
}

#[test]
fn non_square_source_is_rejected() {
    let img = RgbaImage::from_pixel(400, 300, Rgba([0, 0, 0, 255]));
    match SourceImage::from_image(img) {
        Err(IconError::NotSquare { width, height }) => {
            assert_eq!((width, height), (400, 300));
        }
        other => panic!("expected NotSquare, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn missing_source_is_a_typed_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.png");
    match SourceImage::open(&path) {
        Err(IconError::SourceNotFound { path: p }) => assert_eq!(p, path),
        other => panic!("expected SourceNotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn placeholder_fallback_persists_reference_copy() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("generated_icon_1024.png");

    let source = SourceImage::load_or_placeholder(None, Some(&reference)).unwrap();
    assert_eq!(source.dimensions(), (1024, 1024));
    assert_eq!(image::image_dimensions(&reference).unwrap(), (1024, 1024));
}

#[test]
fn idiom_labels() {
    assert_eq!(Idiom::IPhone.as_str(), "iphone");
    assert_eq!(Idiom::IosMarketing.as_str(), "ios-marketing");
    assert_eq!(Idiom::IosMarketing.to_string(), "ios-marketing");
}
