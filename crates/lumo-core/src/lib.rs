/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the lumo decoders and encoders
//!
//! This crate provides a set of core routines shared by the
//! codec crates under the `lumo` umbrella.
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware, width
//!   parameterized field reads and writes
//! - Image decoder options

pub mod bytestream;
pub mod options;
