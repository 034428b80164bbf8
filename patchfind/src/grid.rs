use std::path::Path;

use crate::error::DecodeError;

/// An exact 8-bit RGB color. Equality is component-wise with no tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color image with row-major pixel data, immutable once built.
///
/// The grid has no setter: after construction it is shared read-only across
/// all search tasks.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    buf: Vec<Pixel>,
}

impl PixelGrid {
    /// Decode an image file into a grid of exact RGB values.
    ///
    /// Alpha is discarded; no resizing or filtering is applied.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DecodeError> {
        let path = path.as_ref();
        let reader = image::ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|source| DecodeError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let img = reader
            .decode()
            .map_err(|source| DecodeError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgb8();

        let (width, height) = img.dimensions();
        let buf = img.pixels().map(|p| Pixel::new(p[0], p[1], p[2])).collect();
        Ok(Self { width, height, buf })
    }

    /// Build a grid from already-decoded pixels.
    ///
    /// `pixels` is row-major and must contain exactly `width * height` entries.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
        assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            buf: pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y). Callers stay within `width` x `height`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Pixel {
        self.buf[y as usize * self.width as usize + x as usize]
    }
}
