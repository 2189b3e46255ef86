/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};
use std::collections::TryReserveError;

use lumo_core::bytestream::ByteIoError;

/// BMP errors that can occur during decoding
#[non_exhaustive]
pub enum BmpDecoderErrors {
    /// The file/bytes do not start with `BM`.
    ///
    /// Only raised when magic confirmation is enabled in the
    /// decoder options
    InvalidMagicBytes,
    /// The input does not hold as many bytes as required,
    /// expected at least a size but got another size
    TooSmallBuffer(usize, usize),
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// The image stores its colors in a color table
    /// (bits per pixel below 8), which is not supported
    UnsupportedBitDepth(u16),
    /// The size the file declares for itself exceeds the bytes
    /// actually present.
    ///
    /// Only raised when declared size confirmation is enabled in
    /// the decoder options
    DeclaredSizeMismatch(usize, usize),
    /// A calculation overflowed
    OverFlowOccurred,
    /// The pixel buffer could not be allocated
    OutOfMemory(TryReserveError),
    IoErrors(ByteIoError)
}

impl Debug for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagicBytes => {
                writeln!(f, "Invalid magic bytes, file does not start with BM")
            }
            Self::TooSmallBuffer(expected, found) => {
                writeln!(
                    f,
                    "Too small of a buffer, expected {} but found {}",
                    expected, found
                )
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::UnsupportedBitDepth(depth) => {
                writeln!(
                    f,
                    "Unsupported bit depth {depth}, color table images are not supported"
                )
            }
            Self::DeclaredSizeMismatch(declared, found) => {
                writeln!(
                    f,
                    "File declares a size of {declared} bytes but only {found} are present"
                )
            }
            Self::OverFlowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::OutOfMemory(err) => {
                writeln!(f, "Could not allocate pixel buffer: {err}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for BmpDecoderErrors {}

impl From<ByteIoError> for BmpDecoderErrors {
    fn from(value: ByteIoError) -> Self {
        BmpDecoderErrors::IoErrors(value)
    }
}

impl From<TryReserveError> for BmpDecoderErrors {
    fn from(value: TryReserveError) -> Self {
        BmpDecoderErrors::OutOfMemory(value)
    }
}

/// BMP errors that can occur during encoding
#[non_exhaustive]
pub enum BmpEncoderErrors {
    /// The image declares a color table bit depth (below 8),
    /// which is not supported on the write side either
    UnsupportedBitDepth(u16),
    IoErrors(ByteIoError)
}

impl Debug for BmpEncoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedBitDepth(depth) => {
                writeln!(
                    f,
                    "Unsupported bit depth {depth}, color table images are not supported"
                )
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpEncoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for BmpEncoderErrors {}

impl From<ByteIoError> for BmpEncoderErrors {
    fn from(value: ByteIoError) -> Self {
        BmpEncoderErrors::IoErrors(value)
    }
}
