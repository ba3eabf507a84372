use placard::{
  frame_scanlines, png_encode, png_encode_with, ChunkType, Compressor, MinizCompressor,
  PngEncodeError, Raster, RGBA8, PNG_SIGNATURE,
};

/// A chunk as it sits on the wire.
struct RawChunk<'b> {
  ty: [u8; 4],
  data: &'b [u8],
  declared_crc: u32,
}

/// Walks the chunks of an encoded file (the 8 signature bytes skipped).
///
/// Panics on truncated input, which for these tests is exactly what we
/// want: a malformed container should fail loudly.
fn walk_chunks(bytes: &[u8]) -> Vec<RawChunk<'_>> {
  let mut rest = &bytes[8..];
  let mut out = Vec::new();
  while !rest.is_empty() {
    let (len_bytes, r) = rest.split_at(4);
    let len = u32::from_be_bytes(len_bytes.try_into().unwrap()) as usize;
    let (ty, r) = r.split_at(4);
    let (data, r) = r.split_at(len);
    let (crc_bytes, r) = r.split_at(4);
    out.push(RawChunk {
      ty: ty.try_into().unwrap(),
      data,
      declared_crc: u32::from_be_bytes(crc_bytes.try_into().unwrap()),
    });
    rest = r;
  }
  out
}

/// Bit-at-a-time CRC-32, deliberately independent of the crate's
/// table-driven implementation.
fn reference_crc32(bytes: &[u8]) -> u32 {
  let mut crc = u32::MAX;
  for &b in bytes {
    crc ^= b as u32;
    for _ in 0..8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ 0xEDB88320 } else { crc >> 1 };
    }
  }
  crc ^ u32::MAX
}

fn random_raster(width: u32, height: u32) -> Raster {
  let bytes = super::rand_bytes(width as usize * height as usize * 4);
  Raster::from_rgba_bytes(width, height, &bytes).unwrap()
}

#[test]
fn test_signature_invariance() {
  for (w, h) in [(1, 1), (3, 7), (64, 2), (17, 31)] {
    let encoded = png_encode(&random_raster(w, h)).unwrap();
    assert_eq!(&encoded[..8], &PNG_SIGNATURE);
    assert_eq!(&encoded[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
  }
}

#[test]
fn test_chunk_integrity_and_order() {
  let encoded = png_encode(&random_raster(23, 11)).unwrap();
  let chunks = walk_chunks(&encoded);
  assert_eq!(chunks.len(), 3);
  assert_eq!(&chunks[0].ty, b"IHDR");
  assert_eq!(chunks[0].data.len(), 13);
  assert_eq!(&chunks[1].ty, b"IDAT");
  assert_eq!(&chunks[2].ty, b"IEND");
  assert!(chunks[2].data.is_empty());
  for chunk in &chunks {
    let mut covered = chunk.ty.to_vec();
    covered.extend_from_slice(chunk.data);
    assert_eq!(
      chunk.declared_crc,
      reference_crc32(&covered),
      "bad CRC on {:?}",
      ChunkType::try_from(chunk.ty.as_slice()).unwrap()
    );
  }
}

#[test]
fn test_header_fidelity() {
  for (w, h) in [(1, 1), (400, 300), (256, 1), (1, 256)] {
    let encoded = png_encode(&random_raster(w, h)).unwrap();
    let chunks = walk_chunks(&encoded);
    let ihdr = chunks[0].data;
    assert_eq!(&ihdr[0..4], &w.to_be_bytes());
    assert_eq!(&ihdr[4..8], &h.to_be_bytes());
    // bit depth 8, RGBA, deflate, adaptive filtering, no interlace
    assert_eq!(&ihdr[8..13], &[8, 6, 0, 0, 0]);
  }
}

#[test]
fn test_determinism() {
  let raster = random_raster(50, 40);
  let first = png_encode(&raster).unwrap();
  let second = png_encode(&raster).unwrap();
  assert_eq!(first, second);
}

#[test]
fn test_single_pixel_boundary() {
  let raster = Raster::from_pixels(1, 1, vec![RGBA8 { r: 10, g: 20, b: 30, a: 255 }]).unwrap();
  let encoded = png_encode(&raster).unwrap();
  let decoded = image::load_from_memory(&encoded).expect("decode").to_rgba8();
  assert_eq!(decoded.width(), 1);
  assert_eq!(decoded.height(), 1);
  assert_eq!(decoded.as_raw().as_slice(), &[10, 20, 30, 255]);
}

#[test]
fn test_zero_dimensions_rejected() {
  assert_eq!(Raster::new(0, 5), Err(PngEncodeError::InvalidDimensions));
  assert_eq!(Raster::new(5, 0), Err(PngEncodeError::InvalidDimensions));
  // a hand-built zero-width raster fails on dimensions, not on its (also
  // wrong) buffer length, because the dimension check runs first.
  let raster = Raster { width: 0, height: 5, pixels: vec![RGBA8::default(); 5] };
  assert_eq!(png_encode(&raster), Err(PngEncodeError::InvalidDimensions));
}

#[test]
fn test_mismatched_buffer_rejected() {
  // 10x10 needs 400 bytes; 399 is one short.
  let bytes = super::rand_bytes(399);
  assert_eq!(Raster::from_rgba_bytes(10, 10, &bytes), Err(PngEncodeError::InvalidRaster));
  // same through the encode path, with the invariant broken by hand
  let raster = Raster { width: 10, height: 10, pixels: vec![RGBA8::default(); 99] };
  assert_eq!(png_encode(&raster), Err(PngEncodeError::InvalidRaster));
}

#[test]
fn test_uniform_raster_compresses_and_round_trips() {
  let pixels = vec![RGBA8 { r: 106, g: 142, b: 35, a: 255 }; 400 * 300];
  let raster = Raster::from_pixels(400, 300, pixels).unwrap();
  let encoded = png_encode(&raster).unwrap();

  let decoded = image::load_from_memory(&encoded).expect("decode").to_rgba8();
  assert_eq!(decoded.width(), 400);
  assert_eq!(decoded.height(), 300);
  assert_eq!(decoded.as_raw().as_slice(), raster.as_bytes());

  // sanity: a solid fill should deflate down to a tiny fraction of the raw
  // scanline stream (this checks the compressor collaborator, not us).
  let raw_len = frame_scanlines(&raster).unwrap().len();
  let idat_len = walk_chunks(&encoded)[1].data.len();
  assert!(idat_len * 10 < raw_len, "IDAT {idat_len} vs raw {raw_len}");
}

#[test]
fn test_round_trip_random_rasters() {
  for (w, h) in [(1, 1), (2, 3), (7, 5), (16, 16), (251, 3), (256, 256)] {
    let raster = random_raster(w, h);
    let encoded = png_encode(&raster).unwrap();
    let decoded = image::load_from_memory(&encoded).expect("decode").to_rgba8();
    assert_eq!(decoded.width(), w);
    assert_eq!(decoded.height(), h);
    assert_eq!(decoded.as_raw().as_slice(), raster.as_bytes(), "mismatch at {w}x{h}");
  }
}

#[test]
fn test_container_shape_with_custom_compressor() {
  /// Hands the input back untouched. Not a legal zlib stream, but the
  /// container must frame whatever the collaborator returns.
  struct Passthrough;
  impl Compressor for Passthrough {
    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>, PngEncodeError> {
      Ok(raw.to_vec())
    }
  }
  let raster = random_raster(2, 2);
  let encoded = png_encode_with(&raster, &Passthrough).unwrap();
  let chunks = walk_chunks(&encoded);
  assert_eq!(chunks.len(), 3);
  // with a passthrough "compressor" the IDAT payload IS the scanline
  // stream: filter byte 0 followed by each row's RGBA bytes.
  let framed = frame_scanlines(&raster).unwrap();
  assert_eq!(chunks[1].data, framed.as_slice());
  assert_eq!(framed.len(), 2 * (1 + 2 * 4));
}

#[test]
fn test_compression_failure_surfaces() {
  struct Broken;
  impl Compressor for Broken {
    fn compress(&self, _raw: &[u8]) -> Result<Vec<u8>, PngEncodeError> {
      Err(PngEncodeError::CompressionFailure)
    }
  }
  let raster = random_raster(8, 8);
  assert_eq!(png_encode_with(&raster, &Broken), Err(PngEncodeError::CompressionFailure));
}

#[test]
fn test_default_and_custom_levels_agree_on_pixels() {
  let raster = random_raster(33, 9);
  for level in [0, 1, 6, 10] {
    let encoded = png_encode_with(&raster, &MinizCompressor { level }).unwrap();
    let decoded = image::load_from_memory(&encoded).expect("decode").to_rgba8();
    assert_eq!(decoded.as_raw().as_slice(), raster.as_bytes(), "level {level}");
  }
}
