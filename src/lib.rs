#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]

//! A crate for encoding PNG data.
//!
//! Feed [`png_encode`] (or [`Raster::try_to_png_bytes`]) a fully
//! materialized RGBA raster and get back the bytes of a complete `.png`
//! file: signature, `IHDR`, `IDAT`, `IEND`, checksums and all. Writing
//! those bytes somewhere is the caller's job; the encoder is a pure
//! computation with no I/O and no shared state, so separate calls can run
//! on as many threads as you like.
//!
//! The zlib compressor is an injected collaborator (see [`Compressor`]),
//! with a `miniz_oxide`-backed default behind the `miniz_oxide` crate
//! feature. See the [`png`] module docs for the container details and the
//! manual encoding path.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod crc;
pub use crc::*;

pub mod error;
pub use error::*;

pub mod pixels;
pub use pixels::*;

pub mod chunk;
pub use chunk::*;

pub mod ihdr;
pub use ihdr::*;

#[cfg(feature = "alloc")]
pub mod raster;
#[cfg(feature = "alloc")]
pub use raster::*;

#[cfg(feature = "alloc")]
pub mod scanline;
#[cfg(feature = "alloc")]
pub use scanline::*;

#[cfg(feature = "alloc")]
pub mod compress;
#[cfg(feature = "alloc")]
pub use compress::*;

#[cfg(feature = "alloc")]
pub mod png;
#[cfg(feature = "alloc")]
pub use png::*;
