use std::path::Path;

use image::imageops::FilterType;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::catalog::IconSize;
use crate::error::IconError;

const PLACEHOLDER_SIZE: u32 = 1024;
const BACKGROUND: Rgba<u8> = Rgba([20, 20, 30, 255]);
const LENS: Rgba<u8> = Rgba([0, 255, 255, 255]);
const PIN: Rgba<u8> = Rgba([0, 255, 0, 255]);

/// Square master image the icon variants are rendered from.
pub struct SourceImage {
    img: RgbaImage,
}

impl SourceImage {
    /// Load a square source image from disk.
    pub fn open(path: &Path) -> Result<Self, IconError> {
        if !path.exists() {
            return Err(IconError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }
        let img = image::open(path)
            .map_err(|e| IconError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?
            .to_rgba8();
        SourceImage::from_image(img)
    }

    /// Wrap an in-memory image, enforcing the square-source invariant.
    pub fn from_image(img: RgbaImage) -> Result<Self, IconError> {
        let (width, height) = img.dimensions();
        if width != height {
            return Err(IconError::NotSquare { width, height });
        }
        Ok(SourceImage { img })
    }

    /// Load `path` if it names an existing file; otherwise synthesize the
    /// placeholder and, when `reference_out` is given, persist a copy of it
    /// for reference.
    pub fn load_or_placeholder(
        path: Option<&Path>,
        reference_out: Option<&Path>,
    ) -> Result<Self, IconError> {
        match path {
            Some(p) if p.exists() => SourceImage::open(p),
            _ => {
                let source = SourceImage::placeholder();
                if let Some(out) = reference_out {
                    source.save_reference(out)?;
                }
                Ok(source)
            }
        }
    }

    /// Synthesize the 1024x1024 placeholder: dark background, a cyan lens
    /// ring, and a green location pin in the top-right corner.
    pub fn placeholder() -> Self {
        SourceImage {
            img: placeholder_image(PLACEHOLDER_SIZE),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.img
    }

    /// Render one catalog slot at its exact pixel size.
    pub fn render(&self, size: IconSize) -> RgbaImage {
        image::imageops::resize(&self.img, size.pixels(), size.pixels(), FilterType::Lanczos3)
    }

    /// Save the master image itself as a PNG.
    pub fn save_reference(&self, path: &Path) -> Result<(), IconError> {
        self.img
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| IconError::WriteReference {
                path: path.to_path_buf(),
                source: e,
            })
    }
}

fn placeholder_image(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, BACKGROUND);

    // Lens ring, centered, radius one third of the canvas.
    let center = size as f32 / 2.0;
    draw_ring(&mut img, center, center, size as f32 / 3.0, 20.0, LENS);

    // Pin head and point in the top-right corner.
    let pin_x = (size - 200) as f32;
    draw_disc(&mut img, pin_x, 200.0, 100.0, PIN);
    draw_triangle(
        &mut img,
        (pin_x, 300.0),
        (pin_x - 50.0, 450.0),
        (pin_x + 50.0, 450.0),
        PIN,
    );

    img
}

/// Stroke a circle outline by distance test against the radius.
fn draw_ring(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, width: f32, color: Rgba<u8>) {
    let half = width / 2.0;
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        let dist = (dx * dx + dy * dy).sqrt();
        if (dist - radius).abs() <= half {
            *pixel = color;
        }
    }
}

fn draw_disc(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        if (dx * dx + dy * dy).sqrt() <= radius {
            *pixel = color;
        }
    }
}

/// Fill a triangle using edge-sign tests over its bounding box.
fn draw_triangle(
    img: &mut RgbaImage,
    a: (f32, f32),
    b: (f32, f32),
    c: (f32, f32),
    color: Rgba<u8>,
) {
    fn edge(p: (f32, f32), q: (f32, f32), x: f32, y: f32) -> f32 {
        (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0)
    }

    let min_x = a.0.min(b.0).min(c.0).floor().max(0.0) as u32;
    let max_x = (a.0.max(b.0).max(c.0).ceil() as u32).min(img.width().saturating_sub(1));
    let min_y = a.1.min(b.1).min(c.1).floor().max(0.0) as u32;
    let max_y = (a.1.max(b.1).max(c.1).ceil() as u32).min(img.height().saturating_sub(1));

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let e0 = edge(a, b, px, py);
            let e1 = edge(b, c, px, py);
            let e2 = edge(c, a, px, py);
            let inside = (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0)
                || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0);
            if inside {
                img.put_pixel(x, y, color);
            }
        }
    }
}
