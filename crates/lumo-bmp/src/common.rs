/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use lumo_core::bytestream::{ByteIoError, ByteReader, ByteWriter, FieldWidth};

/// The magic bytes a BMP file is expected to start with
pub const BMP_MAGIC: [u8; 2] = *b"BM";

/// Size in bytes of the file header on disk, including the
/// 4 reserved bytes between the file size and the data offset
pub const FILE_HEADER_SIZE: usize = 14;

/// Size in bytes of the classic Windows info header, the only
/// variant this codec reads and writes
pub const INFO_HEADER_SIZE: u32 = 40;

/// Byte offset at which pixel data starts in the layout this
/// codec produces, file header plus info header
pub const PIXEL_DATA_OFFSET: u32 = (FILE_HEADER_SIZE as u32) + INFO_HEADER_SIZE;

/// The file header, identifies the file and locates pixel data.
///
/// On disk a 4 byte reserved field sits between `file_size` and
/// `data_offset`; it is skipped on read and always written as
/// zero, so it is not represented here.
///
/// None of these fields are validated on decode by default,
/// they are recorded exactly as found in the file.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileHeader {
    /// The two magic bytes, expected to be `BM`
    pub signature:   [u8; 2],
    /// Total file size in bytes as recorded in the file.
    ///
    /// Not verified against the actual size, and not recomputed
    /// on save
    pub file_size:   u32,
    /// Byte offset from the file start to the first pixel byte.
    ///
    /// Recorded but never used to seek, pixel data is assumed to
    /// immediately follow the info header
    pub data_offset: u32
}

impl Default for FileHeader {
    fn default() -> Self {
        FileHeader {
            signature:   BMP_MAGIC,
            file_size:   0,
            data_offset: 0
        }
    }
}

impl FileHeader {
    /// Parse the file header at the reader's cursor
    pub(crate) fn read_from(bytes: &mut ByteReader<'_>) -> Result<FileHeader, ByteIoError> {
        let signature = bytes.read_fixed_bytes::<2>()?;
        let file_size = bytes.get_u32_le()?;

        // 4 reserved bytes, never exposed
        bytes.skip_field(FieldWidth::Four)?;

        let data_offset = bytes.get_u32_le()?;

        Ok(FileHeader {
            signature,
            file_size,
            data_offset
        })
    }

    /// Write the file header exactly as stored, zero filling the
    /// reserved field
    pub(crate) fn write_to<W: std::io::Write>(
        &self, stream: &mut ByteWriter<W>
    ) -> Result<(), ByteIoError> {
        stream.write_bytes(&self.signature)?;
        stream.put_u32_le(self.file_size)?;
        stream.write_field(None, FieldWidth::Four)?;
        stream.put_u32_le(self.data_offset)?;

        Ok(())
    }
}

/// The bitmap info header, describes pixel geometry and encoding.
///
/// Field declaration order is wire order. Every field is passed
/// through verbatim; only `bits_per_pixel` influences decoding,
/// and only `width`/`height` influence the pixel array length.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoHeader {
    /// Declared info header length, not used to branch parsing
    pub size:               u32,
    /// Image width in pixels
    pub width:              u32,
    /// Image height in pixels
    pub height:             u32,
    /// Color planes, passed through unvalidated
    pub planes:             u16,
    /// Bits per pixel. 24 (no alpha) and 32 (with alpha) are the
    /// supported values; anything below 8 is a color table image
    /// and is rejected
    pub bits_per_pixel:     u16,
    /// Compression scheme, passed through uninterpreted
    pub compression:        u32,
    /// Declared pixel data size, passed through uninterpreted
    pub image_size:         u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used:        u32,
    pub important_colors:   u32
}

impl Default for InfoHeader {
    fn default() -> Self {
        InfoHeader {
            size:               INFO_HEADER_SIZE,
            width:              0,
            height:             0,
            planes:             1,
            bits_per_pixel:     24,
            compression:        0,
            image_size:         0,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used:        0,
            important_colors:   0
        }
    }
}

impl InfoHeader {
    /// Parse the info header at the reader's cursor, eleven fields
    /// in fixed order
    pub(crate) fn read_from(bytes: &mut ByteReader<'_>) -> Result<InfoHeader, ByteIoError> {
        Ok(InfoHeader {
            size:               bytes.get_u32_le()?,
            width:              bytes.get_u32_le()?,
            height:             bytes.get_u32_le()?,
            planes:             bytes.get_u16_le()?,
            bits_per_pixel:     bytes.get_u16_le()?,
            compression:        bytes.get_u32_le()?,
            image_size:         bytes.get_u32_le()?,
            x_pixels_per_meter: bytes.get_u32_le()?,
            y_pixels_per_meter: bytes.get_u32_le()?,
            colors_used:        bytes.get_u32_le()?,
            important_colors:   bytes.get_u32_le()?
        })
    }

    /// Write the info header exactly as stored, in the same order
    /// it is read
    pub(crate) fn write_to<W: std::io::Write>(
        &self, stream: &mut ByteWriter<W>
    ) -> Result<(), ByteIoError> {
        stream.put_u32_le(self.size)?;
        stream.put_u32_le(self.width)?;
        stream.put_u32_le(self.height)?;
        stream.put_u16_le(self.planes)?;
        stream.put_u16_le(self.bits_per_pixel)?;
        stream.put_u32_le(self.compression)?;
        stream.put_u32_le(self.image_size)?;
        stream.put_u32_le(self.x_pixels_per_meter)?;
        stream.put_u32_le(self.y_pixels_per_meter)?;
        stream.put_u32_le(self.colors_used)?;
        stream.put_u32_le(self.important_colors)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lumo_core::bytestream::{ByteReader, ByteWriter};

    use crate::common::{FileHeader, InfoHeader, FILE_HEADER_SIZE, INFO_HEADER_SIZE};

    #[test]
    fn file_header_roundtrips_and_zero_fills_reserved() {
        let header = FileHeader {
            signature:   *b"BM",
            file_size:   0xAABBCCDD,
            data_offset: 54
        };

        let mut sink = vec![];
        let mut stream = ByteWriter::new(&mut sink);
        header.write_to(&mut stream).unwrap();

        assert_eq!(sink.len(), FILE_HEADER_SIZE);
        // reserved bytes sit at offsets 6..10 and must be zero
        assert_eq!(&sink[6..10], &[0, 0, 0, 0]);

        let mut reader = ByteReader::new(&sink);
        let parsed = FileHeader::read_from(&mut reader).unwrap();

        assert_eq!(parsed, header);
    }

    #[test]
    fn reserved_bytes_are_not_surfaced_on_read() {
        let mut raw = vec![];
        raw.extend_from_slice(b"BM");
        raw.extend_from_slice(&100_u32.to_le_bytes());
        // junk in the reserved field must be ignored
        raw.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        raw.extend_from_slice(&54_u32.to_le_bytes());

        let mut reader = ByteReader::new(&raw);
        let parsed = FileHeader::read_from(&mut reader).unwrap();

        assert_eq!(parsed.file_size, 100);
        assert_eq!(parsed.data_offset, 54);
    }

    #[test]
    fn info_header_roundtrips_all_eleven_fields() {
        let info = InfoHeader {
            size:               INFO_HEADER_SIZE,
            width:              640,
            height:             480,
            planes:             1,
            bits_per_pixel:     32,
            compression:        0,
            image_size:         640 * 480 * 4,
            x_pixels_per_meter: 2835,
            y_pixels_per_meter: 2835,
            colors_used:        0,
            important_colors:   7
        };

        let mut sink = vec![];
        let mut stream = ByteWriter::new(&mut sink);
        info.write_to(&mut stream).unwrap();

        assert_eq!(sink.len() as u32, INFO_HEADER_SIZE);

        let mut reader = ByteReader::new(&sink);
        let parsed = InfoHeader::read_from(&mut reader).unwrap();

        assert_eq!(parsed, info);
    }

    #[test]
    fn truncated_header_is_an_error() {
        let raw = b"BM\x00\x01";
        let mut reader = ByteReader::new(raw);

        assert!(FileHeader::read_from(&mut reader).is_err());
    }
}
