// src/output/envi.rs
use crate::metadata::BandMetadata;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// ENVI text header describing a single-band raw binary image
#[derive(Debug, Clone, PartialEq)]
pub struct EnviHeader {
    pub description: String,
    pub samples: usize,
    pub lines: usize,
    pub bands: usize,
    pub header_offset: usize,
    pub data_type: u32,
    pub band_names: Vec<String>,
    pub data_ignore_value: Option<f64>,
    /// x and y pixel size in meters
    pub pixel_size: [f64; 2],
}

impl EnviHeader {
    pub fn from_band(band: &BandMetadata) -> Self {
        EnviHeader {
            description: format!("{} ({})", band.long_name, band.app_version),
            samples: band.samples,
            lines: band.lines,
            bands: 1,
            header_offset: 0,
            data_type: band.data_type.envi_code(),
            band_names: vec![band.name.clone()],
            data_ignore_value: Some(f64::from(band.fill_value)),
            pixel_size: band.pixel_size,
        }
    }

    pub fn write(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        write!(file, "{self}")?;
        file.flush()
    }
}

impl fmt::Display for EnviHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ENVI")?;
        writeln!(f, "description = {{{}}}", self.description)?;
        writeln!(f, "samples = {}", self.samples)?;
        writeln!(f, "lines = {}", self.lines)?;
        writeln!(f, "bands = {}", self.bands)?;
        writeln!(f, "header offset = {}", self.header_offset)?;
        writeln!(f, "file type = ENVI Standard")?;
        writeln!(f, "data type = {}", self.data_type)?;
        writeln!(f, "interleave = bsq")?;
        // 0 = little endian
        writeln!(f, "byte order = {}", if cfg!(target_endian = "big") { 1 } else { 0 })?;
        writeln!(f, "band names = {{{}}}", self.band_names.join(", "))?;
        if let Some(value) = self.data_ignore_value {
            writeln!(f, "data ignore value = {value}")?;
        }
        writeln!(
            f,
            "pixel size = {{{}, {}, units=Meters}}",
            self.pixel_size[0], self.pixel_size[1]
        )?;
        Ok(())
    }
}
