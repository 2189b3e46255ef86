/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A BMP decoder and encoder
//!
//! This crate reads and writes the classic Windows bitmap layout:
//! a 14 byte file header, the 40 byte info header and an
//! uncompressed pixel array, parsed field by field over a bounds
//! checked cursor.
//!
//! Both directions work on whole buffers, [`load`] reads an entire
//! file into memory before decoding and [`save`] streams the image
//! out in declaration order.
//!
//! # Supported
//! - 24 bit (no alpha) and 32 bit (with alpha) uncompressed images
//!
//! # Unsupported
//! - Color table / palette images (bits per pixel below 8), these
//!   are rejected with an error
//! - Compressed pixel data
//! - Info header variants other than the 40 byte layout
//! - 4 byte row padding; rows are read and written back to back
//!
//! # Example
//! ```no_run
//! use lumo_bmp::{load, save};
//!
//! let image = load("input.bmp").unwrap();
//! println!("{}x{}", image.width(), image.height());
//! save(&image, "copy.bmp").unwrap();
//! ```

pub use crate::common::{FileHeader, InfoHeader, BMP_MAGIC};
pub use crate::decoder::{load, load_with_options, probe_bmp, BmpDecoder};
pub use crate::encoder::{save, BmpEncoder};
pub use crate::errors::{BmpDecoderErrors, BmpEncoderErrors};
pub use crate::image::{Image, Pixel};

mod common;
mod decoder;
mod encoder;
mod errors;
mod image;
