#![forbid(unsafe_code)]

//! The CRC-32 that PNG chunks carry.
//!
//! This is the CRC-32 of ISO 3309 / zlib, as [the PNG spec][png-crc]
//! mandates: polynomial `0xEDB88320` (reflected), initial register
//! `0xFFFF_FFFF`, output complemented.
//!
//! [png-crc]: https://www.w3.org/TR/2003/REC-PNG-20031110/#5CRC-algorithm

const fn make_crc_table() -> [u32; 256] {
  let mut n = 0_usize;
  let mut table = [0_u32; 256];
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      c = if c & 1 != 0 { 0xEDB88320 ^ (c >> 1) } else { c >> 1 };
      //
      k += 1;
    }
    table[n] = c;
    //
    n += 1;
  }
  table
}
const CRC_TABLE: [u32; 256] = make_crc_table();

/// Folds more bytes into a running (pre-complement) CRC register.
///
/// Start the register at `u32::MAX` and complement the final value, or just
/// use [`crc32_iter`] / [`crc32`], which do that for you.
#[inline]
pub fn update_crc(mut crc: u32, byte_iter: impl Iterator<Item = u8>) -> u32 {
  for b in byte_iter {
    crc = CRC_TABLE[(crc ^ b as u32) as usize & 0xFF] ^ (crc >> 8);
  }
  crc
}

/// The CRC-32 of a byte iterator.
///
/// Chunk checksums cover `type ‖ data`; taking an iterator means the two
/// parts can be chained without being copied into one buffer first.
#[inline]
#[must_use]
pub fn crc32_iter(byte_iter: impl Iterator<Item = u8>) -> u32 {
  update_crc(u32::MAX, byte_iter) ^ u32::MAX
}

/// The CRC-32 of a byte slice.
///
/// Always succeeds; the empty slice checksums to 0.
#[inline]
#[must_use]
pub fn crc32(bytes: &[u8]) -> u32 {
  crc32_iter(bytes.iter().copied())
}

#[test]
fn test_crc32_check_values() {
  // the catalogue check value for this CRC
  assert_eq!(crc32(b"123456789"), 0xCBF43926);
  // every empty IEND chunk on earth carries this CRC
  assert_eq!(crc32(b"IEND"), 0xAE426082);
  assert_eq!(crc32(&[]), 0);
}

#[test]
fn test_crc32_iter_matches_slice() {
  let ty = *b"IDAT";
  let data = [0_u8, 1, 2, 253, 254, 255];
  let chained = crc32_iter(ty.iter().copied().chain(data.iter().copied()));
  let mut buf = [0_u8; 10];
  buf[..4].copy_from_slice(&ty);
  buf[4..].copy_from_slice(&data);
  assert_eq!(chained, crc32(&buf));
}
