// src/types.rs
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reserved pixel value marking pixels with no valid classification
pub const CF_FILL_PIXEL: u8 = 255;

/// Sample data type recorded in band metadata. Mask bands are always one
/// unsigned byte per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataType {
    Uint8,
}

impl DataType {
    /// Size of one sample in bytes
    pub fn fixed_size(&self) -> usize {
        match self {
            DataType::Uint8 => 1,
        }
    }

    /// Name used for the data type in scene metadata documents
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Uint8 => "UINT8",
        }
    }

    /// ENVI header `data type` code
    pub fn envi_code(&self) -> u32 {
        match self {
            DataType::Uint8 => 1,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raster dimensions in lines (rows) and samples (columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridSize {
    pub lines: usize,
    pub samples: usize,
}

impl GridSize {
    pub fn new(lines: usize, samples: usize) -> Self {
        GridSize { lines, samples }
    }

    /// Number of pixels in the grid, or `None` if it overflows `usize`
    pub fn pixel_count(&self) -> Option<usize> {
        self.lines.checked_mul(self.samples)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lines x {} samples", self.lines, self.samples)
    }
}

/// One legal pixel value of a classification band and what it means
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassValue {
    pub class: u8,
    pub description: String,
}

impl ClassValue {
    pub fn new(class: u8, description: impl Into<String>) -> Self {
        ClassValue {
            class,
            description: description.into(),
        }
    }
}
