// src/output/options.rs
use std::path::{Path, PathBuf};

/// Where and how output products are created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// Directory the `.img` (and `.hdr`) files are placed in
    pub output_dir: PathBuf,
    /// Truncate an existing output file instead of failing to open it
    pub overwrite: bool,
    /// Write an ENVI header next to the image when the product is finished
    pub write_envi_header: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            output_dir: PathBuf::from("."),
            overwrite: true,
            write_envi_header: true,
        }
    }
}

impl OutputOptions {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        OutputOptions {
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_envi_header(mut self, write_envi_header: bool) -> Self {
        self.write_envi_header = write_envi_header;
        self
    }
}
