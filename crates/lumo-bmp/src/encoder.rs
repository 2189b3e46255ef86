/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for the BMP format

use std::io::Write;
use std::path::Path;

use log::trace;
use lumo_core::bytestream::{ByteIoError, ByteWriter};

use crate::image::Image;
use crate::BmpEncoderErrors;

/// A BMP encoder.
///
/// Writes the borrowed image's headers and pixel array in the same
/// fixed order the decoder reads them. Header fields are emitted
/// exactly as stored on the image; `file_size`, `data_offset` and
/// `image_size` are never recomputed from the pixel array, keeping
/// them in sync with the pixels is the caller's business.
///
/// # Example
/// - Encode a 2 by 2 image into a vector
/// ```
/// use lumo_bmp::{BmpEncoder, Image, Pixel};
///
/// let mut image = Image::new(2, 2, 24);
/// image.pixels.fill(Pixel::rgb(255, 0, 0));
///
/// let mut sink = vec![];
/// let written = BmpEncoder::new(&image).encode(&mut sink).unwrap();
/// assert_eq!(written, sink.len());
/// ```
pub struct BmpEncoder<'a> {
    image: &'a Image
}

impl<'a> BmpEncoder<'a> {
    /// Create a new encoder which will encode the given image
    pub const fn new(image: &'a Image) -> BmpEncoder<'a> {
        BmpEncoder { image }
    }

    /// Encode the image into `sink`, returning the number of bytes
    /// written.
    ///
    /// Rows are written back to back with no 4 byte alignment
    /// padding, mirroring the read side.
    pub fn encode<W: Write>(&self, sink: W) -> Result<usize, BmpEncoderErrors> {
        let mut stream = ByteWriter::new(sink);

        trace!(
            "Encoding a {}x{} bmp image, {} bits per pixel",
            self.image.info.width,
            self.image.info.height,
            self.image.info.bits_per_pixel
        );

        self.image.header.write_to(&mut stream)?;
        self.image.info.write_to(&mut stream)?;

        let bits_per_pixel = self.image.info.bits_per_pixel;

        if bits_per_pixel < 8 {
            // color table image, unsupported on the write side too.
            // The headers are already out at this point, a failed
            // save can leave them behind in the sink
            return Err(BmpEncoderErrors::UnsupportedBitDepth(bits_per_pixel));
        }

        let has_alpha = bits_per_pixel == 32;

        for pixel in &self.image.pixels {
            stream.put_u8(pixel.blue)?;
            stream.put_u8(pixel.green)?;
            stream.put_u8(pixel.red)?;

            if has_alpha {
                stream.put_u8(pixel.alpha)?;
            }
        }

        stream.flush()?;

        Ok(stream.bytes_written())
    }
}

/// Save an image to a file, creating it if needed and truncating
/// any existing content.
///
/// The stream is flushed before this returns and the file handle
/// is released on every path, success or failure.
pub fn save<P: AsRef<Path>>(image: &Image, path: P) -> Result<(), BmpEncoderErrors> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(ByteIoError::from)?;

    let mut sink = std::io::BufWriter::new(file);

    BmpEncoder::new(image).encode(&mut sink)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::decoder::BmpDecoder;
    use crate::encoder::BmpEncoder;
    use crate::image::{Image, Pixel};
    use crate::BmpEncoderErrors;

    #[test]
    fn two_pixel_example_serializes_bgr() {
        let mut image = Image::new(2, 1, 24);
        image.pixels[0] = Pixel::rgb(255, 0, 0);
        image.pixels[1] = Pixel::rgb(0, 255, 0);

        let mut sink = vec![];
        let written = BmpEncoder::new(&image).encode(&mut sink).unwrap();

        assert_eq!(written, 54 + 6);
        assert_eq!(&sink[54..], &[0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00]);
        // reserved field is always zero filled
        assert_eq!(&sink[6..10], &[0, 0, 0, 0]);
    }

    #[test]
    fn alpha_is_omitted_below_32bpp() {
        let mut image = Image::new(1, 1, 24);
        image.pixels[0] = Pixel::rgba(3, 2, 1, 77);

        let mut sink = vec![];
        BmpEncoder::new(&image).encode(&mut sink).unwrap();

        assert_eq!(sink.len(), 54 + 3);
        assert_eq!(&sink[54..], &[1, 2, 3]);
    }

    #[test]
    fn alpha_is_written_at_32bpp() {
        let mut image = Image::new(1, 1, 32);
        image.pixels[0] = Pixel::rgba(3, 2, 1, 77);

        let mut sink = vec![];
        BmpEncoder::new(&image).encode(&mut sink).unwrap();

        assert_eq!(sink.len(), 54 + 4);
        assert_eq!(&sink[54..], &[1, 2, 3, 77]);
    }

    #[test]
    fn color_table_depths_are_rejected_on_save() {
        let image = Image::new(1, 1, 4);

        let mut sink = vec![];
        let result = BmpEncoder::new(&image).encode(&mut sink);

        assert!(matches!(
            result,
            Err(BmpEncoderErrors::UnsupportedBitDepth(4))
        ));
    }

    #[test]
    fn stale_header_fields_are_written_verbatim() {
        let mut image = Image::new(1, 1, 24);
        // deliberately out of sync with the pixel array
        image.header.file_size = 7;
        image.info.image_size = 12345;

        let mut sink = vec![];
        BmpEncoder::new(&image).encode(&mut sink).unwrap();

        assert_eq!(&sink[2..6], &7_u32.to_le_bytes());
        assert_eq!(&sink[34..38], &12345_u32.to_le_bytes());
    }

    #[test]
    fn encode_then_decode_reproduces_the_image_at_24bpp() {
        let mut image = Image::new(3, 2, 24);
        for (i, pixel) in image.pixels.iter_mut().enumerate() {
            *pixel = Pixel::rgb(i as u8, (i * 2) as u8, (i * 3) as u8);
        }

        let mut sink = vec![];
        BmpEncoder::new(&image).encode(&mut sink).unwrap();

        let decoded = BmpDecoder::new(&sink).decode().unwrap();

        assert_eq!(decoded.header, image.header);
        assert_eq!(decoded.info, image.info);
        assert_eq!(decoded.pixels, image.pixels);
    }

    #[test]
    fn encode_then_decode_reproduces_the_image_at_32bpp() {
        let mut image = Image::new(2, 2, 32);
        for (i, pixel) in image.pixels.iter_mut().enumerate() {
            *pixel = Pixel::rgba(i as u8, 255 - i as u8, (i * 7) as u8, (i * 11) as u8);
        }

        let mut sink = vec![];
        BmpEncoder::new(&image).encode(&mut sink).unwrap();

        let decoded = BmpDecoder::new(&sink).decode().unwrap();

        assert_eq!(decoded.header, image.header);
        assert_eq!(decoded.info, image.info);
        assert_eq!(decoded.pixels, image.pixels);
    }
}
