#![forbid(unsafe_code)]

//! The owned RGBA image type that the encoder consumes.

use alloc::vec::Vec;

use crate::error::PngEncodeError;
use crate::pixels::RGBA8;

/// Converts an `(x,y)` position within a given `width` 2D space into a
/// linear index.
///
/// You don't ever need to call this function yourself, but it's how
/// [`Raster`] converts 2d coordinates into index values within its pixel
/// vector. If you'd like to use the exact same function it does for some
/// reason, you can.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  y.wrapping_mul(width).wrapping_add(x) as usize
}

/// An owned, direct-color RGBA image.
///
/// Rows are stored top to bottom, pixels left to right, `width * height`
/// entries total. The fields are public, but the encoding entry points
/// re-check the size invariant and error (rather than panic) if you put
/// them together weirdly.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Raster {
  /// Width in pixels.
  pub width: u32,
  /// Height in pixels.
  pub height: u32,
  /// Row-major pixel data, row 0 topmost.
  pub pixels: Vec<RGBA8>,
}
impl Raster {
  /// A transparent-black raster of the given size.
  ///
  /// Fails with `InvalidDimensions` when either dimension is 0 or the
  /// pixel buffer wouldn't fit in this host's address space.
  pub fn new(width: u32, height: u32) -> Result<Self, PngEncodeError> {
    let count = checked_pixel_count(width, height)?;
    let mut pixels: Vec<RGBA8> = Vec::new();
    pixels.try_reserve(count).map_err(|_| PngEncodeError::InvalidDimensions)?;
    pixels.resize(count, RGBA8::default());
    Ok(Self { width, height, pixels })
  }

  /// Wraps an existing pixel buffer.
  ///
  /// Fails with `InvalidDimensions` (zero or unrepresentable dimensions)
  /// or `InvalidRaster` (buffer length disagrees with the dimensions).
  pub fn from_pixels(
    width: u32, height: u32, pixels: Vec<RGBA8>,
  ) -> Result<Self, PngEncodeError> {
    let count = checked_pixel_count(width, height)?;
    if pixels.len() != count {
      return Err(PngEncodeError::InvalidRaster);
    }
    Ok(Self { width, height, pixels })
  }

  /// Wraps raw bytes, 4 per pixel in `R,G,B,A` order.
  ///
  /// Fails with `InvalidRaster` when `bytes.len() != width * height * 4`.
  pub fn from_rgba_bytes(
    width: u32, height: u32, bytes: &[u8],
  ) -> Result<Self, PngEncodeError> {
    let pixels: &[RGBA8] =
      bytemuck::try_cast_slice(bytes).map_err(|_| PngEncodeError::InvalidRaster)?;
    Self::from_pixels(width, height, pixels.to_vec())
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut RGBA8> {
    if x < self.width && y < self.height {
      let i = xy_width_to_index(x, y, self.width);
      self.pixels.get_mut(i)
    } else {
      None
    }
  }

  /// The pixel data as raw `R,G,B,A` bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.pixels)
  }
}

/// `width * height`, or `InvalidDimensions` if that's 0 or its byte count
/// can't be addressed.
fn checked_pixel_count(width: u32, height: u32) -> Result<usize, PngEncodeError> {
  if width == 0 || height == 0 {
    return Err(PngEncodeError::InvalidDimensions);
  }
  (width as usize)
    .checked_mul(height as usize)
    .and_then(|n| n.checked_mul(4).map(|_bytes| n))
    .ok_or(PngEncodeError::InvalidDimensions)
}
