/// An error from the `placard` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngEncodeError {
  /// The raster's pixel buffer length doesn't agree with its declared width
  /// and height.
  InvalidRaster,

  /// The declared width and/or height of the image is 0, or the image's
  /// byte size can't be represented on this host.
  InvalidDimensions,

  /// A chunk type tag wasn't exactly 4 ASCII letters.
  ///
  /// The encode path only ever uses the fixed tags, so this can't come out
  /// of encoding a raster; it's the failure mode of building a
  /// [`ChunkType`](crate::ChunkType) from untyped bytes.
  InvalidChunkType,

  /// The injected compressor reported an error.
  ///
  /// Compression is deterministic, so the encoder never retries; the error
  /// just surfaces to the caller.
  CompressionFailure,
}
