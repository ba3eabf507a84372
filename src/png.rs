#![forbid(unsafe_code)]

//! Module for building PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## What gets built
//!
//! The minimum legal PNG: the 8-byte signature, one `IHDR`, one `IDAT`
//! holding the whole zlib-compressed scanline stream, and one empty `IEND`.
//! Pixels are always 8-bit RGBA (color type 6) and every scanline uses
//! filter 0 ("None"). Palettes, text metadata, gamma, interlacing, and
//! decoding of any kind are out of scope.
//!
//! PNG permits splitting the compressed stream across several `IDAT`
//! chunks; a single chunk is always legal, so that's what gets written.
//!
//! ## Automatic Encoding
//!
//! Just call [`Raster::try_to_png_bytes`] (or [`png_encode`]) and the
//! default zlib backend does the rest.
//!
//! This requires the `alloc` and `miniz_oxide` crate features.
//!
//! ## Manual Encoding
//!
//! If you want control over the compressor, hand [`png_encode_with`] any
//! [`Compressor`] implementation. The stages it runs, in order:
//!
//! 1) Validate the dimensions ([`IHDR::rgba8`]). A zero-sized raster fails
//!    here, before the scanline framer ever runs.
//! 2) Frame the pixel rows into the scanline stream
//!    ([`frame_scanlines`](crate::scanline::frame_scanlines)).
//! 3) Run the scanline stream through the injected compressor.
//! 4) Serialize the signature and the chunks
//!    ([`write_chunk`](crate::chunk::write_chunk)).
//!
//! The whole file is assembled in memory before anything is handed back:
//! the result is either a complete, independently decodable byte stream or
//! an error, never a partial file. Writing the bytes somewhere is the
//! caller's job; this crate does no I/O.

use alloc::vec::Vec;

use crate::chunk::{write_chunk, ChunkType};
use crate::compress::Compressor;
use crate::error::PngEncodeError;
use crate::ihdr::IHDR;
use crate::raster::Raster;
use crate::scanline::frame_scanlines;

/// The fixed 8 bytes that open every PNG file.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Encodes a raster as a complete PNG file, compressing through `compressor`.
///
/// The returned buffer is the whole file, signature through `IEND`.
///
/// ## Failure
/// * `InvalidDimensions` when the raster's width or height is 0.
/// * `InvalidRaster` when the pixel buffer doesn't match the dimensions.
/// * `CompressionFailure` when the injected compressor errors.
pub fn png_encode_with<C: Compressor>(
  raster: &Raster, compressor: &C,
) -> Result<Vec<u8>, PngEncodeError> {
  let ihdr = IHDR::rgba8(raster.width, raster.height)?;
  let framed = frame_scanlines(raster)?;
  let compressed = compressor.compress(&framed)?;

  let mut png: Vec<u8> =
    Vec::with_capacity(PNG_SIGNATURE.len() + (12 + 13) + (12 + compressed.len()) + 12);
  png.extend_from_slice(&PNG_SIGNATURE);
  write_chunk(&mut png, ChunkType::IHDR, &ihdr.to_bytes());
  write_chunk(&mut png, ChunkType::IDAT, &compressed);
  write_chunk(&mut png, ChunkType::IEND, &[]);
  Ok(png)
}

/// Encodes a raster as a complete PNG file with the default zlib backend.
///
/// See [`png_encode_with`] for the failure modes.
#[cfg(feature = "miniz_oxide")]
#[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
pub fn png_encode(raster: &Raster) -> Result<Vec<u8>, PngEncodeError> {
  png_encode_with(raster, &crate::compress::MinizCompressor::default())
}

#[cfg(feature = "miniz_oxide")]
impl Raster {
  /// Encodes this raster as a complete PNG file with the default zlib
  /// backend.
  #[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
  #[inline]
  pub fn try_to_png_bytes(&self) -> Result<Vec<u8>, PngEncodeError> {
    png_encode(self)
  }
}

#[test]
fn test_dimension_check_runs_before_framing() {
  use alloc::vec;
  // the pixel buffer is ALSO wrong here, but the zero width must win
  // because it's checked before the framer is invoked.
  let raster = Raster { width: 0, height: 3, pixels: vec![crate::pixels::RGBA8::default()] };
  struct NeverRuns;
  impl Compressor for NeverRuns {
    fn compress(&self, _raw: &[u8]) -> Result<Vec<u8>, PngEncodeError> {
      panic!("the compressor must not run for a zero-sized raster");
    }
  }
  assert_eq!(
    png_encode_with(&raster, &NeverRuns),
    Err(PngEncodeError::InvalidDimensions)
  );
}

#[test]
fn test_compressor_error_propagates() {
  struct AlwaysFails;
  impl Compressor for AlwaysFails {
    fn compress(&self, _raw: &[u8]) -> Result<Vec<u8>, PngEncodeError> {
      Err(PngEncodeError::CompressionFailure)
    }
  }
  let raster = Raster::new(4, 4).unwrap();
  assert_eq!(
    png_encode_with(&raster, &AlwaysFails),
    Err(PngEncodeError::CompressionFailure)
  );
}

#[test]
fn test_mismatched_buffer_is_rejected() {
  use alloc::vec;
  let raster = Raster { width: 10, height: 10, pixels: vec![crate::pixels::RGBA8::default(); 99] };
  struct NeverRuns;
  impl Compressor for NeverRuns {
    fn compress(&self, _raw: &[u8]) -> Result<Vec<u8>, PngEncodeError> {
      panic!("the compressor must not run for a broken raster");
    }
  }
  assert_eq!(png_encode_with(&raster, &NeverRuns), Err(PngEncodeError::InvalidRaster));
}
