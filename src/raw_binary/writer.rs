// src/raw_binary/writer.rs
use bytemuck::Pod;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Exclusive write handle on a headerless raw binary grid file
///
/// Samples are written in native byte order, row-major, with no padding
/// between lines. Grids go to the file in one unbuffered write, so nothing is
/// held back in memory after a failed write.
///
/// # Example
///
/// ```no_run
/// use cfmask_rs::raw_binary::RawBinaryWriter;
///
/// let mut writer = RawBinaryWriter::create("scene_cfmask.img", true).unwrap();
/// let grid = vec![0u8; 4 * 5];
/// writer.write_raw_binary(4, 5, &grid).unwrap();
/// writer.finish().unwrap();
/// ```
#[derive(Debug)]
pub struct RawBinaryWriter {
    file: File,
    path: PathBuf,
    bytes_written: u64,
}

impl RawBinaryWriter {
    /// Open `path` for writing.
    ///
    /// With `overwrite` an existing file is truncated; without it an existing
    /// file is an `AlreadyExists` error.
    pub fn create(path: impl AsRef<Path>, overwrite: bool) -> io::Result<Self> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        let file = options.open(path)?;

        Ok(RawBinaryWriter {
            file,
            path: path.to_path_buf(),
            bytes_written: 0,
        })
    }

    /// Write `lines * samples` elements of `data` at the current position.
    ///
    /// Elements past `lines * samples` are ignored. I/O failures are reported
    /// by this call. After a failure part of the grid may already be on disk
    /// and the file position is past it, so writing the grid again appends
    /// rather than replaces.
    pub fn write_raw_binary<T: Pod>(&mut self, lines: usize, samples: usize, data: &[T]) -> io::Result<()> {
        let count = lines.checked_mul(samples).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("grid of {lines} x {samples} overflows"),
            )
        })?;

        let values = data.get(..count).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("buffer holds {} values, grid needs {}", data.len(), count),
            )
        })?;

        let bytes: &[u8] = bytemuck::cast_slice(values);
        self.file.write_all(bytes)?;
        self.bytes_written += bytes.len() as u64;

        debug!(
            path = %self.path.display(),
            lines,
            samples,
            bytes = bytes.len(),
            "wrote raw binary grid"
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Total bytes written through this handle
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Release the file handle
    pub fn finish(mut self) -> io::Result<()> {
        self.file.flush()?;
        Ok(())
    }
}
