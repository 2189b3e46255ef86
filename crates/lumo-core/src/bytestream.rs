/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! This module contains two main structs that help in
//! byte reading and byte writing, both parameterized by
//! the width of the field being read or written.
//!
//! Useful for fixed-layout binary formats, it's put here
//! to minimize code reuse across codec crates.

use core::fmt::{Debug, Display, Formatter};

pub use reader::ByteReader;
pub use writer::ByteWriter;

mod reader;
mod writer;

/// Width in bytes of a single binary field.
///
/// Every field read and write is parameterized by this type,
/// which keeps the little endian accumulation logic in exactly
/// one place instead of one routine per integer width.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FieldWidth {
    /// A 1 byte field
    One,
    /// A 2 byte field
    Two,
    /// A 4 byte field
    Four
}

impl FieldWidth {
    /// Return the number of bytes the field occupies in the stream
    pub const fn size(self) -> usize {
        match self {
            FieldWidth::One => 1,
            FieldWidth::Two => 2,
            FieldWidth::Four => 4
        }
    }
}

/// Errors that can occur when reading from or writing to
/// a bytestream
pub enum ByteIoError {
    /// The buffer cannot support the requested read.
    ///
    /// Contains requested and remaining byte counts
    NotEnoughBytes(usize, usize),
    /// An error from the underlying sink
    StdIoError(std::io::Error),
    /// Generic message
    Generic(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::NotEnoughBytes(requested, remaining) => {
                writeln!(
                    f,
                    "Not enough bytes, requested {requested} but only {remaining} remain"
                )
            }
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {err}")
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ByteIoError {}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}
