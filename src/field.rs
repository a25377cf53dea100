//! Binary pixel classification over a borrowed RGB view.

use crate::image::ImageRgb8;

/// Read-only black/non-black predicate over the decoded image.
///
/// A pixel is black iff all three color channels read exactly zero; any
/// other pixel (background, anti-aliased gray, colored labels) is non-black.
/// Bounds checking is part of the predicate: out-of-range coordinates are
/// non-black, so callers can probe one step past every border without a
/// separate guard.
pub struct PixelField<'a> {
    img: ImageRgb8<'a>,
}

impl<'a> PixelField<'a> {
    pub fn new(img: ImageRgb8<'a>) -> Self {
        Self { img }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.img.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.img.h
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.img.w && (y as usize) < self.img.h
    }

    #[inline]
    pub fn is_black(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.img.get(x as usize, y as usize) == [0, 0, 0]
    }
}
