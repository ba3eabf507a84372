#![forbid(unsafe_code)]

//! The zlib compressor seam.
//!
//! PNG image data travels as a zlib-framed DEFLATE stream, but *which*
//! implementation produces that stream is not the container's business: any
//! output that a conformant inflater can decode back to the input is legal.
//! The encoder therefore takes the compressor as an injected [`Compressor`]
//! value, which also keeps the container logic testable against trivial
//! stand-ins. [`MinizCompressor`] is the batteries-included default.

use alloc::vec::Vec;

use crate::error::PngEncodeError;

/// A zlib-compatible compressor.
///
/// Implementations must produce a zlib stream (2-byte header, DEFLATE
/// blocks, 4-byte Adler-32 trailer) that decodes back to exactly the input
/// bytes. No compression ratio is promised or required.
pub trait Compressor {
  /// Compresses `raw` into a fresh zlib stream.
  ///
  /// An error here surfaces from the encoder as `CompressionFailure`,
  /// unchanged and without retry (compression is deterministic, so a retry
  /// couldn't go differently).
  fn compress(&self, raw: &[u8]) -> Result<Vec<u8>, PngEncodeError>;
}

/// The [`miniz_oxide`]-backed compressor.
#[cfg(feature = "miniz_oxide")]
#[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinizCompressor {
  /// Compression level, 0 (stored, fastest) through 10 (slowest).
  pub level: u8,
}
#[cfg(feature = "miniz_oxide")]
impl Default for MinizCompressor {
  #[inline]
  fn default() -> Self {
    Self { level: 6 }
  }
}
#[cfg(feature = "miniz_oxide")]
impl Compressor for MinizCompressor {
  #[inline]
  fn compress(&self, raw: &[u8]) -> Result<Vec<u8>, PngEncodeError> {
    Ok(miniz_oxide::deflate::compress_to_vec_zlib(raw, self.level))
  }
}
