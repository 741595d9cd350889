// src/raw_binary/mod.rs
//! Raw binary grid I/O
//!
//! Output bands are stored as flat, headerless files: row-major samples with
//! the dimensions known only from the accompanying metadata.
//!
//! - [`RawBinaryWriter`] - Exclusive write handle used by output products
//! - [`read_raw_binary`] - Reads a grid back into memory
//!
//! # Examples
//!
//! ```no_run
//! use cfmask_rs::raw_binary::{read_raw_binary, RawBinaryWriter};
//!
//! let mut writer = RawBinaryWriter::create("grid.img", true).unwrap();
//! writer.write_raw_binary(2, 3, &[0u8, 1, 2, 3, 4, 255]).unwrap();
//! writer.finish().unwrap();
//!
//! let grid: Vec<u8> = read_raw_binary("grid.img", 2, 3).unwrap();
//! assert_eq!(grid, vec![0, 1, 2, 3, 4, 255]);
//! ```

mod writer;
mod reader;

pub use writer::RawBinaryWriter;
pub use reader::{read_raw_binary, read_raw_binary_from};

#[cfg(feature = "mmap")]
pub use reader::RawGridMap;
