/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteIoError, FieldWidth};

/// An encapsulation of a borrowed byte buffer with a
/// position tracker.
///
/// All reads are bounds checked, a read that would go past
/// the end of the buffer returns [`ByteIoError::NotEnoughBytes`]
/// and leaves the cursor where it was.
pub struct ByteReader<'a> {
    buffer:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    /// Create a new reader positioned at the start of `buffer`
    pub const fn new(buffer: &'a [u8]) -> ByteReader<'a> {
        ByteReader { buffer, position: 0 }
    }

    /// Total length of the underlying buffer
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Return true if the underlying buffer is empty
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Current cursor position measured from the buffer start
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes between the cursor and the end of the buffer
    pub const fn remaining(&self) -> usize {
        // saturating prevents underflow when a skip overshot the end
        self.buffer.len().saturating_sub(self.position)
    }

    /// Check whether `bytes` more bytes can be read without
    /// exhausting the buffer
    pub const fn has(&self, bytes: usize) -> bool {
        self.position.saturating_add(bytes) <= self.buffer.len()
    }

    /// Read `width` bytes at the cursor as an unsigned little endian
    /// integer, widening the result to a `u32`.
    ///
    /// The cursor advances by `width` on success.
    ///
    /// This is the one place endianness is handled on the read path,
    /// the least significant byte is accumulated first.
    #[inline]
    pub fn read_field(&mut self, width: FieldWidth) -> Result<u32, ByteIoError> {
        let size = width.size();

        match self.buffer.get(self.position..self.position + size) {
            Some(bytes) => {
                self.position += size;

                let mut value = 0_u32;

                for (shift, byte) in bytes.iter().enumerate() {
                    value |= u32::from(*byte) << (8 * shift);
                }
                Ok(value)
            }
            None => Err(ByteIoError::NotEnoughBytes(size, self.remaining()))
        }
    }

    /// Skip mode: advance the cursor over a `width` byte field
    /// without materializing a value.
    ///
    /// Used for reserved fields whose contents are never exposed.
    #[inline]
    pub fn skip_field(&mut self, width: FieldWidth) -> Result<(), ByteIoError> {
        let size = width.size();

        if !self.has(size) {
            return Err(ByteIoError::NotEnoughBytes(size, self.remaining()));
        }
        self.position += size;

        Ok(())
    }

    /// Copy `N` raw bytes from the cursor, advancing by `N`
    #[inline]
    pub fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        match self.buffer.get(self.position..self.position + N) {
            Some(bytes) => {
                self.position += N;

                let mut byte_store = [0_u8; N];
                byte_store.copy_from_slice(bytes);

                Ok(byte_store)
            }
            None => Err(ByteIoError::NotEnoughBytes(N, self.remaining()))
        }
    }

    /// Read a single byte
    #[inline]
    pub fn get_u8(&mut self) -> Result<u8, ByteIoError> {
        self.read_field(FieldWidth::One).map(|v| v as u8)
    }

    /// Read a `u16` as a little endian integer
    #[inline]
    pub fn get_u16_le(&mut self) -> Result<u16, ByteIoError> {
        self.read_field(FieldWidth::Two).map(|v| v as u16)
    }

    /// Read a `u32` as a little endian integer
    #[inline]
    pub fn get_u32_le(&mut self) -> Result<u32, ByteIoError> {
        self.read_field(FieldWidth::Four)
    }
}
