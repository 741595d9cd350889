// src/raw_binary/reader.rs
use bytemuck::Pod;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

#[cfg(feature = "mmap")]
use crate::types::GridSize;
#[cfg(feature = "mmap")]
use memmap2::Mmap;

/// Read a `lines * samples` grid of `T` from the start of `path`
pub fn read_raw_binary<T: Pod>(path: impl AsRef<Path>, lines: usize, samples: usize) -> io::Result<Vec<T>> {
    let file = File::open(path)?;
    read_raw_binary_from(&mut BufReader::with_capacity(65536, file), lines, samples)
}

/// Read a `lines * samples` grid of `T` from any reader.
///
/// A source holding fewer values fails with `UnexpectedEof`.
pub fn read_raw_binary_from<T: Pod, R: Read>(reader: &mut R, lines: usize, samples: usize) -> io::Result<Vec<T>> {
    let count = lines.checked_mul(samples).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("grid of {lines} x {samples} overflows"),
        )
    })?;

    let mut values: Vec<T> = Vec::new();
    values
        .try_reserve_exact(count)
        .map_err(|e| io::Error::new(io::ErrorKind::OutOfMemory, e))?;
    values.resize(count, T::zeroed());

    reader.read_exact(bytemuck::cast_slice_mut(&mut values))?;
    Ok(values)
}

/// Read-only memory map of a written single-byte grid
#[cfg(feature = "mmap")]
pub struct RawGridMap {
    mmap: Mmap,
    grid: GridSize,
}

#[cfg(feature = "mmap")]
impl RawGridMap {
    /// Map `path`, checking that it holds exactly one byte per pixel
    pub fn open(path: impl AsRef<Path>, grid: GridSize) -> io::Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        let expected = grid.pixel_count().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("grid of {grid} overflows"))
        })?;
        if mmap.len() != expected {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("file holds {} bytes, {grid} needs {expected}", mmap.len()),
            ));
        }

        Ok(RawGridMap { mmap, grid })
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }

    /// One line of samples, or `None` past the last line
    pub fn line(&self, line: usize) -> Option<&[u8]> {
        if line >= self.grid.lines {
            return None;
        }
        let start = line * self.grid.samples;
        self.mmap.get(start..start + self.grid.samples)
    }
}
