/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use log::{info, trace};
use lumo_core::bytestream::{ByteIoError, ByteReader};
use lumo_core::options::DecoderOptions;

use crate::common::{FileHeader, InfoHeader, BMP_MAGIC, INFO_HEADER_SIZE};
use crate::image::{Image, Pixel};
use crate::BmpDecoderErrors;

/// Probe some bytes to see
/// if they consist of a BMP image
///
/// True when the buffer carries the `BM` magic bytes and declares
/// the classic 40 byte info header, the only layout this codec
/// understands
pub fn probe_bmp(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == BMP_MAGIC {
            // skip file_size   -> 4
            // skip reserved    -> 4
            // skip data offset -> 4
            // read info header size
            if let Some(sz) = bytes.get(14) {
                return u32::from(*sz) == INFO_HEADER_SIZE;
            }
        }
    }
    false
}

/// A BMP decoder over an in-memory buffer.
///
/// Parses the fixed 54 byte header layout field by field and then
/// the uncompressed pixel array that follows it. Pixel rows are
/// read back to back, top to bottom as stored, with no 4 byte row
/// alignment; files written by tools that pad their rows will not
/// interoperate.
pub struct BmpDecoder<'a> {
    bytes:           ByteReader<'a>,
    options:         DecoderOptions,
    header:          FileHeader,
    info:            InfoHeader,
    decoded_headers: bool
}

impl<'a> BmpDecoder<'a> {
    /// Create a decoder with the default options
    pub fn new(data: &'a [u8]) -> BmpDecoder<'a> {
        BmpDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a decoder with custom options
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> BmpDecoder<'a> {
        BmpDecoder {
            bytes: ByteReader::new(data),
            options,
            header: FileHeader::default(),
            info: InfoHeader::default(),
            decoded_headers: false
        }
    }

    /// Decode the file header and info header, leaving the cursor
    /// at the first pixel byte.
    ///
    /// A no-op if headers were already decoded.
    pub fn decode_headers(&mut self) -> Result<(), BmpDecoderErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        trace!("Starting bmp decoding");

        self.header = FileHeader::read_from(&mut self.bytes)?;

        if self.options.confirm_magic_bytes() && self.header.signature != BMP_MAGIC {
            return Err(BmpDecoderErrors::InvalidMagicBytes);
        }
        if self.options.confirm_declared_size()
            && (self.header.file_size as usize) > self.bytes.len()
        {
            return Err(BmpDecoderErrors::DeclaredSizeMismatch(
                self.header.file_size as usize,
                self.bytes.len()
            ));
        }

        self.info = InfoHeader::read_from(&mut self.bytes)?;

        if self.info.bits_per_pixel < 8 {
            // color table image, out of scope
            return Err(BmpDecoderErrors::UnsupportedBitDepth(
                self.info.bits_per_pixel
            ));
        }

        if (self.info.height as usize) > self.options.max_height() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                self.info.height as usize
            ));
        }

        if (self.info.width as usize) > self.options.max_width() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                self.info.width as usize
            ));
        }

        info!("Width: {}", self.info.width);
        info!("Height: {}", self.info.height);
        info!("Bit depth: {}", self.info.bits_per_pixel);

        self.decoded_headers = true;

        Ok(())
    }

    /// Image dimensions as `(width, height)`, available after the
    /// headers have been decoded
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        if !self.decoded_headers {
            return None;
        }
        Some((self.info.width, self.info.height))
    }

    /// Decode the whole image, headers and pixel array, returning
    /// an owned [`Image`].
    ///
    /// The pixel array length is always `width * height`; a buffer
    /// that cannot supply that many pixels is an error, never a
    /// partially filled image.
    pub fn decode(&mut self) -> Result<Image, BmpDecoderErrors> {
        self.decode_headers()?;

        let pixel_count = (self.info.width as usize)
            .checked_mul(self.info.height as usize)
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;

        let has_alpha = self.info.bits_per_pixel == 32;
        let bytes_per_pixel: usize = if has_alpha { 4 } else { 3 };

        let required = pixel_count
            .checked_mul(bytes_per_pixel)
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;

        if self.bytes.remaining() < required {
            return Err(BmpDecoderErrors::TooSmallBuffer(
                required,
                self.bytes.remaining()
            ));
        }

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(pixel_count)?;

        for _ in 0..pixel_count {
            // disk order is blue, green, red, then alpha for
            // 32 bit images only
            let blue = self.bytes.get_u8()?;
            let green = self.bytes.get_u8()?;
            let red = self.bytes.get_u8()?;

            let alpha = if has_alpha { self.bytes.get_u8()? } else { 255 };

            pixels.push(Pixel {
                red,
                green,
                blue,
                alpha
            });
        }

        Ok(Image {
            header: self.header,
            info: self.info,
            pixels
        })
    }
}

/// Load a BMP image from a file with the default options.
///
/// The whole file is read into one buffer before decoding starts;
/// there is no streaming. The file handle is scoped to this call
/// and released on every path.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Image, BmpDecoderErrors> {
    load_with_options(path, DecoderOptions::default())
}

/// Load a BMP image from a file with custom options
pub fn load_with_options<P: AsRef<Path>>(
    path: P, options: DecoderOptions
) -> Result<Image, BmpDecoderErrors> {
    // open failures, unknown lengths and short reads all surface
    // from here as I/O errors
    let contents = std::fs::read(path).map_err(ByteIoError::from)?;

    BmpDecoder::new_with_options(&contents, options).decode()
}
