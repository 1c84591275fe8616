use std::fmt;

/// Target device class an icon variant is intended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idiom {
    IPhone,
    IosMarketing,
}

impl Idiom {
    pub fn as_str(self) -> &'static str {
        match self {
            Idiom::IPhone => "iphone",
            Idiom::IosMarketing => "ios-marketing",
        }
    }
}

impl fmt::Display for Idiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One slot in the icon catalog: a logical point size and a scale factor.
/// The rendered file is square with side `points * scale` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    pub points: u32,
    pub scale: u32,
}

impl IconSize {
    pub const fn new(points: u32, scale: u32) -> Self {
        IconSize { points, scale }
    }

    /// Pixel side length of the rendered file.
    pub fn pixels(self) -> u32 {
        self.points * self.scale
    }

    /// Deterministic output filename, e.g. `Icon-20x20@2x.png`.
    pub fn filename(self) -> String {
        format!("Icon-{0}x{0}@{1}x.png", self.points, self.scale)
    }

    /// Manifest size label, e.g. `20x20`.
    pub fn size_label(self) -> String {
        format!("{0}x{0}", self.points)
    }

    /// Manifest scale label, e.g. `2x`.
    pub fn scale_label(self) -> String {
        format!("{}x", self.scale)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}x", self.size_label(), self.scale)
    }
}

/// Every size the generator renders: the iPhone slots for iOS 12+ plus the
/// App Store marketing size.
pub const RENDER_SIZES: [IconSize; 12] = [
    IconSize::new(20, 1),
    IconSize::new(20, 2),
    IconSize::new(20, 3),
    IconSize::new(29, 1),
    IconSize::new(29, 2),
    IconSize::new(29, 3),
    IconSize::new(40, 1),
    IconSize::new(40, 2),
    IconSize::new(40, 3),
    IconSize::new(60, 2),
    IconSize::new(60, 3),
    IconSize::new(1024, 1),
];

/// The subset of [`RENDER_SIZES`] that `Contents.json` lists, with idioms.
///
/// The 1x slots below the marketing size are rendered for older tooling but
/// have no place in the modern manifest. Deriving the manifest from the
/// render catalog keeps the two in lockstep: every listed filename names a
/// file the generator actually writes.
pub fn manifest_sizes() -> Vec<(IconSize, Idiom)> {
    RENDER_SIZES
        .iter()
        .copied()
        .filter_map(|size| {
            if size.points == 1024 {
                Some((size, Idiom::IosMarketing))
            } else if size.scale >= 2 {
                Some((size, Idiom::IPhone))
            } else {
                None
            }
        })
        .collect()
}
