//! The pixel type that the encoder consumes.

use bytemuck::{Pod, Zeroable};
use pixel_formats::r8g8b8a8_Srgb;

/// Red/Green/Blue/Alpha, u8 per channel, in PNG's channel order.
///
/// Being `Pod`, a row of these casts straight to the bytes that go on the
/// wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable, Pod)]
#[repr(C)]
#[allow(missing_docs)]
pub struct RGBA8 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}

impl From<r8g8b8a8_Srgb> for RGBA8 {
  #[inline]
  fn from(r8g8b8a8_Srgb { r, g, b, a }: r8g8b8a8_Srgb) -> Self {
    Self { r, g, b, a }
  }
}
impl From<RGBA8> for r8g8b8a8_Srgb {
  #[inline]
  fn from(RGBA8 { r, g, b, a }: RGBA8) -> Self {
    Self { r, g, b, a }
  }
}

#[test]
fn test_srgb_conversion_round_trip() {
  let px = RGBA8 { r: 10, g: 20, b: 30, a: 255 };
  let srgb = r8g8b8a8_Srgb::from(px);
  assert_eq!(RGBA8::from(srgb), px);
}
