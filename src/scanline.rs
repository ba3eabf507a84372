#![forbid(unsafe_code)]

//! Turns a raster into the byte stream that PNG compression consumes.
//!
//! From the PNG spec:
//!
//! > Filters are applied to **bytes**, not to pixels, regardless of the bit
//! > depth or color type of the image.
//!
//! Each scanline goes onto the wire as one filter-type byte followed by the
//! line's pixel bytes. This encoder always picks filter 0 ("None"), so the
//! pixel bytes are carried verbatim and no cross-row prediction happens.

use alloc::vec::Vec;

use crate::error::PngEncodeError;
use crate::raster::Raster;

/// Filter type 0: no prediction, the line's bytes pass through unchanged.
pub const FILTER_NONE: u8 = 0;

/// Bytes per RGBA8 scanline once the leading filter byte is included.
#[inline]
#[must_use]
pub const fn bytes_per_filterline(width: u32) -> usize {
  1 + (width as usize) * 4
}

/// Frames a raster into scanlines: filter byte, then the row's bytes, for
/// each row from top (`y = 0`) to bottom.
///
/// The output is always `height * (1 + width*4)` bytes. Fails with
/// `InvalidRaster` when the pixel buffer length disagrees with the declared
/// dimensions, and with `InvalidDimensions` when either dimension is 0.
pub fn frame_scanlines(raster: &Raster) -> Result<Vec<u8>, PngEncodeError> {
  if raster.width == 0 || raster.height == 0 {
    return Err(PngEncodeError::InvalidDimensions);
  }
  let w = raster.width as usize;
  let expected = w.checked_mul(raster.height as usize);
  if expected != Some(raster.pixels.len()) {
    return Err(PngEncodeError::InvalidRaster);
  }
  let mut framed: Vec<u8> =
    Vec::with_capacity(bytes_per_filterline(raster.width) * raster.height as usize);
  for row in raster.pixels.chunks_exact(w) {
    framed.push(FILTER_NONE);
    framed.extend_from_slice(bytemuck::cast_slice(row));
  }
  Ok(framed)
}
