#![forbid(unsafe_code)]

//! The `IHDR` image header and its fixed-format payload.

use crate::error::PngEncodeError;

/// Everything a PNG's image header declares.
///
/// [`IHDR::rgba8`] builds the one configuration this crate encodes (8-bit
/// RGBA, no interlacing); [`IHDR::to_bytes`] gives the 13-byte chunk
/// payload. Other bit depth / color type combinations are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IHDR {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel
  pub bit_depth: u8,
  /// pixel color type
  pub color_type: PngColorType,
  /// always deflate/zlib
  pub compression_method: PngCompressionMethod,
  /// always the adaptive filter family (the per-line filter byte)
  pub filter_method: PngFilterMethod,
  /// always no interlace; interlaced output is a non-goal
  pub interlace_method: PngInterlaceMethod,
}
impl IHDR {
  /// A header for 8-bit RGBA pixels.
  ///
  /// Fails with `InvalidDimensions` when `width` or `height` is 0. This
  /// check runs before anything touches pixel data, so a zero-sized image
  /// never reaches the scanline framer.
  pub const fn rgba8(width: u32, height: u32) -> Result<Self, PngEncodeError> {
    if width == 0 || height == 0 {
      return Err(PngEncodeError::InvalidDimensions);
    }
    Ok(Self {
      width,
      height,
      bit_depth: 8,
      color_type: PngColorType::RGBA,
      compression_method: PngCompressionMethod::DEFLATE,
      filter_method: PngFilterMethod::ADAPTIVE,
      interlace_method: PngInterlaceMethod::NO_INTERLACE,
    })
  }

  /// The fixed-format 13-byte chunk payload.
  ///
  /// Width and height go out big-endian, then one byte each for bit depth,
  /// color type, compression method, filter method, and interlace method.
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 13] {
    let [w0, w1, w2, w3] = self.width.to_be_bytes();
    let [h0, h1, h2, h3] = self.height.to_be_bytes();
    [
      w0,
      w1,
      w2,
      w3,
      h0,
      h1,
      h2,
      h3,
      self.bit_depth,
      self.color_type.0,
      self.compression_method.0,
      self.filter_method.0,
      self.interlace_method.0,
    ]
  }
}

/// The color layouts PNG supports.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct PngColorType(u8);
impl PngColorType {
  /// Greyscale
  pub const Y: Self = Self(0);
  /// Red, Green, Blue
  pub const RGB: Self = Self(2);
  /// Index into a palette
  pub const INDEX: Self = Self(3);
  /// Greyscale + Alpha
  pub const YA: Self = Self(4);
  /// Red, Green, Blue, Alpha (the only type this crate emits)
  pub const RGBA: Self = Self(6);
}
impl core::fmt::Debug for PngColorType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match *self {
      PngColorType::Y => write!(f, "Y"),
      PngColorType::RGB => write!(f, "RGB"),
      PngColorType::INDEX => write!(f, "Index"),
      PngColorType::YA => write!(f, "YA"),
      PngColorType::RGBA => write!(f, "RGBA"),
      other => write!(f, "Illegal({})", other.0),
    }
  }
}

/// PNG's compression method byte. There has only ever been one.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct PngCompressionMethod(u8);
impl PngCompressionMethod {
  /// zlib-framed DEFLATE
  pub const DEFLATE: Self = Self(0);
}
impl core::fmt::Debug for PngCompressionMethod {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match *self {
      PngCompressionMethod::DEFLATE => write!(f, "Deflate"),
      other => write!(f, "Illegal({})", other.0),
    }
  }
}

/// PNG's filter method byte. There has only ever been one.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct PngFilterMethod(u8);
impl PngFilterMethod {
  /// "adaptive filtering": each scanline leads with its own filter type
  pub const ADAPTIVE: Self = Self(0);
}
impl core::fmt::Debug for PngFilterMethod {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match *self {
      PngFilterMethod::ADAPTIVE => write!(f, "Adaptive"),
      other => write!(f, "Illegal({})", other.0),
    }
  }
}

/// PNG's interlace method byte.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct PngInterlaceMethod(u8);
impl PngInterlaceMethod {
  /// scanlines in plain top-to-bottom order
  pub const NO_INTERLACE: Self = Self(0);
  /// the 7-pass progressive ordering (never written by this crate)
  pub const ADAM7: Self = Self(1);
}
impl core::fmt::Debug for PngInterlaceMethod {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match *self {
      PngInterlaceMethod::NO_INTERLACE => write!(f, "NoInterlace"),
      PngInterlaceMethod::ADAM7 => write!(f, "Adam7"),
      other => write!(f, "Illegal({})", other.0),
    }
  }
}

#[test]
fn test_ihdr_payload_layout() {
  let ihdr = IHDR::rgba8(400, 300).unwrap();
  let bytes = ihdr.to_bytes();
  assert_eq!(&bytes[0..4], &400_u32.to_be_bytes());
  assert_eq!(&bytes[4..8], &300_u32.to_be_bytes());
  // bit depth 8, color type 6, then the three fixed method bytes
  assert_eq!(&bytes[8..13], &[8, 6, 0, 0, 0]);
}

#[test]
fn test_ihdr_rejects_zero_dimensions() {
  assert_eq!(IHDR::rgba8(0, 300), Err(PngEncodeError::InvalidDimensions));
  assert_eq!(IHDR::rgba8(400, 0), Err(PngEncodeError::InvalidDimensions));
  assert_eq!(IHDR::rgba8(0, 0), Err(PngEncodeError::InvalidDimensions));
}
