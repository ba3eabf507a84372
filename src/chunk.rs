#![forbid(unsafe_code)]

//! PNG chunks: the length-prefixed, checksummed framing around every piece
//! of a PNG file.
//!
//! On the wire a chunk is `length(u32BE) ‖ type ‖ data ‖ crc(u32BE)`, where
//! the CRC covers the type and data but not the length.

use crate::error::PngEncodeError;

#[cfg(feature = "alloc")]
use crate::crc::crc32_iter;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// The 4-byte tag that names a chunk.
///
/// The tags this crate writes are provided as associated consts. Anything
/// else can be made through `TryFrom`, which enforces PNG's rule that type
/// bytes are ASCII letters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkType([u8; 4]);
impl ChunkType {
  /// Image Header, always the first chunk.
  pub const IHDR: Self = Self(*b"IHDR");
  /// Image Data, carries the compressed scanline stream.
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image End, always the last chunk, always empty.
  pub const IEND: Self = Self(*b"IEND");

  /// Critical chunks (uppercase first byte) must be understood by every
  /// decoder; ancillary ones may be skipped.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 32) == 0
  }

  /// The tag bytes, as written to the wire.
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 4] {
    self.0
  }
}
impl core::fmt::Debug for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let [a, b, c, d] = self.0;
    write!(f, "{}{}{}{}", a as char, b as char, c as char, d as char)
  }
}
impl TryFrom<&[u8]> for ChunkType {
  type Error = PngEncodeError;
  /// Fails with `InvalidChunkType` unless the input is exactly 4 ASCII
  /// letters.
  #[inline]
  fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
    match *bytes {
      [a, b, c, d]
        if a.is_ascii_alphabetic()
          && b.is_ascii_alphabetic()
          && c.is_ascii_alphabetic()
          && d.is_ascii_alphabetic() =>
      {
        Ok(Self([a, b, c, d]))
      }
      _ => Err(PngEncodeError::InvalidChunkType),
    }
  }
}

/// Appends one whole chunk to `out`.
///
/// Always appends exactly `12 + data.len()` bytes: the big-endian length,
/// the type tag, the data verbatim, and the CRC-32 of `type ‖ data`.
#[cfg(feature = "alloc")]
pub fn write_chunk(out: &mut Vec<u8>, ty: ChunkType, data: &[u8]) {
  // chunk lengths are u32 on the wire
  debug_assert!(u32::try_from(data.len()).is_ok());
  out.reserve(12 + data.len());
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(&ty.0);
  out.extend_from_slice(data);
  let crc = crc32_iter(ty.0.iter().copied().chain(data.iter().copied()));
  out.extend_from_slice(&crc.to_be_bytes());
}

/// One whole chunk as a fresh byte vector.
#[cfg(feature = "alloc")]
#[must_use]
pub fn chunk_to_vec(ty: ChunkType, data: &[u8]) -> Vec<u8> {
  let mut out = Vec::with_capacity(12 + data.len());
  write_chunk(&mut out, ty, data);
  out
}
