// src/output/product.rs
use crate::error::{CfmaskError, Result};
use crate::metadata::{BandMetadata, MaskVariant, ProductionDate, SceneMetadata};
use crate::naming::header_file_name;
use crate::output::{EnviHeader, OutputOptions};
use crate::raw_binary::RawBinaryWriter;
use crate::types::GridSize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, error, info, warn};

/// Where an output product is in its lifecycle
///
/// Products move strictly forward: `Unopened -> Open -> Closed -> Freed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Unopened,
    Open,
    Closed,
    Freed,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Unopened => "unopened",
            LifecycleState::Open => "open",
            LifecycleState::Closed => "closed",
            LifecycleState::Freed => "freed",
        };
        f.write_str(name)
    }
}

// The writer only exists while the product is open.
#[derive(Debug)]
enum OutputState {
    Unopened,
    Open(RawBinaryWriter),
    Closed,
    Freed,
}

impl OutputState {
    fn lifecycle(&self) -> LifecycleState {
        match self {
            OutputState::Unopened => LifecycleState::Unopened,
            OutputState::Open(_) => LifecycleState::Open,
            OutputState::Closed => LifecycleState::Closed,
            OutputState::Freed => LifecycleState::Freed,
        }
    }
}

/// One classification mask output: its band metadata plus the raw binary
/// file it is streamed to.
#[derive(Debug)]
pub struct OutputProduct {
    variant: MaskVariant,
    grid: GridSize,
    band: BandMetadata,
    path: Option<PathBuf>,
    state: OutputState,
}

impl OutputProduct {
    /// Output products always hold a single band
    pub const BAND_COUNT: usize = 1;

    /// Build the descriptor for `variant`, stamped with the current time.
    ///
    /// No file is touched; the product starts out unopened.
    pub fn build(scene: &SceneMetadata, grid: GridSize, variant: MaskVariant) -> Result<Self> {
        Self::build_at(scene, grid, variant, SystemTime::now())
    }

    /// Build the descriptor with an explicit production time
    pub fn build_at(
        scene: &SceneMetadata,
        grid: GridSize,
        variant: MaskVariant,
        produced_at: SystemTime,
    ) -> Result<Self> {
        let reference = scene.reference_band()?;
        let production_date = ProductionDate::from_system_time(produced_at, variant.band_name())?;
        let band = BandMetadata::for_variant(reference, grid, variant, production_date)?;

        debug!(
            product = %band.name,
            short_name = %band.short_name,
            file_name = %band.file_name,
            %grid,
            "built output band metadata"
        );

        Ok(OutputProduct {
            variant,
            grid,
            band,
            path: None,
            state: OutputState::Unopened,
        })
    }

    /// Build the descriptor and open its file in `options.output_dir`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cfmask_rs::prelude::*;
    ///
    /// fn main() -> Result<()> {
    ///     let scene = SceneMetadata::new(vec![SceneBand::new(
    ///         "toa_band1", "toa_refl", "LC08_toa_band1.img", "LC8TOA", [30.0, 30.0],
    ///     )]);
    ///     let grid = GridSize::new(2, 2);
    ///     let options = OutputOptions::new("out");
    ///
    ///     let mut output = OutputProduct::create(&scene, grid, MaskVariant::Mask, &options)?;
    ///     output.write(&[0, 1, 4, 255])?;
    ///     let band = output.finish(&options)?;
    ///     assert_eq!(band.file_name, "LC08_cfmask.img");
    ///     Ok(())
    /// }
    /// ```
    pub fn create(
        scene: &SceneMetadata,
        grid: GridSize,
        variant: MaskVariant,
        options: &OutputOptions,
    ) -> Result<Self> {
        let mut output = Self::build(scene, grid, variant)?;
        output.open_in(options)?;
        Ok(output)
    }

    /// Open `path` for writing, truncating any existing file
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.open_path(path.as_ref(), true)
    }

    /// Open the product's own file name inside `options.output_dir`
    pub fn open_in(&mut self, options: &OutputOptions) -> Result<()> {
        let path = options.output_dir.join(&self.band.file_name);
        self.open_path(&path, options.overwrite)
    }

    fn open_path(&mut self, path: &Path, overwrite: bool) -> Result<()> {
        if !matches!(self.state, OutputState::Unopened) {
            return Err(self.invalid("open", format!("product is already {}", self.state())));
        }

        let writer = RawBinaryWriter::create(path, overwrite).map_err(|source| CfmaskError::StreamOpen {
            path: path.to_path_buf(),
            product: self.band.name.clone(),
            source,
        })?;

        info!(product = %self.band.name, path = %path.display(), "opened output file");
        self.path = Some(path.to_path_buf());
        self.state = OutputState::Open(writer);
        Ok(())
    }

    /// Write the full classification grid in one bulk write
    ///
    /// `buffer` must hold at least `lines * samples` values; anything past
    /// that is not written. On an I/O failure the product stays open, but a
    /// partial grid may already be in the file; writing again appends after it.
    pub fn write(&mut self, buffer: &[u8]) -> Result<()> {
        const OPERATION: &str = "write";

        let writer = match &mut self.state {
            OutputState::Open(writer) => writer,
            OutputState::Freed => return Err(self.invalid(OPERATION, "product has been freed")),
            _ => return Err(self.not_open(OPERATION)),
        };

        let needed = self.grid.pixel_count().unwrap_or(usize::MAX);
        if buffer.len() < needed {
            let reason = format!("buffer holds {} pixels, {} needs {}", buffer.len(), self.grid, needed);
            return Err(CfmaskError::InvalidArgument {
                operation: OPERATION,
                product: self.band.name.clone(),
                reason,
            });
        }

        writer
            .write_raw_binary(self.grid.lines, self.grid.samples, buffer)
            .map_err(|source| CfmaskError::Write {
                operation: OPERATION,
                product: self.band.name.clone(),
                source,
            })
    }

    /// Release the output file.
    ///
    /// The handle is released even if finishing the file fails; that failure is
    /// still reported.
    pub fn close(&mut self) -> Result<()> {
        const OPERATION: &str = "close";

        match std::mem::replace(&mut self.state, OutputState::Closed) {
            OutputState::Open(writer) => {
                let bytes = writer.bytes_written();
                writer.finish().map_err(|source| CfmaskError::Write {
                    operation: OPERATION,
                    product: self.band.name.clone(),
                    source,
                })?;
                info!(product = %self.band.name, bytes, "closed output file");
                Ok(())
            }
            OutputState::Freed => {
                self.state = OutputState::Freed;
                Err(self.invalid(OPERATION, "product has been freed"))
            }
            previous => {
                self.state = previous;
                Err(self.not_open(OPERATION))
            }
        }
    }

    /// Retire the product and hand back its band metadata for appending to
    /// the scene metadata document.
    ///
    /// Freeing a product whose file is still open is a caller bug and fails
    /// with [`CfmaskError::StillOpen`].
    pub fn free(&mut self) -> Result<BandMetadata> {
        const OPERATION: &str = "free";

        match self.state {
            OutputState::Open(_) => {
                error!(product = %self.band.name, "output freed while its file is still open");
                Err(CfmaskError::StillOpen {
                    operation: OPERATION,
                    product: self.band.name.clone(),
                })
            }
            OutputState::Freed => Err(self.invalid(OPERATION, "product has already been freed")),
            OutputState::Unopened | OutputState::Closed => {
                self.state = OutputState::Freed;
                debug!(product = %self.band.name, "freed output product");
                Ok(self.band.clone())
            }
        }
    }

    /// Close, write the ENVI header if configured, and free
    pub fn finish(&mut self, options: &OutputOptions) -> Result<BandMetadata> {
        self.close()?;
        if options.write_envi_header {
            self.write_envi_header(&options.output_dir)?;
        }
        self.free()
    }

    /// Write `{scene}_{band}.hdr` into `dir`, returning its path
    pub fn write_envi_header(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(header_file_name(&self.band.file_name));
        self.envi_header().write(&path).map_err(|source| CfmaskError::Write {
            operation: "write_envi_header",
            product: self.band.name.clone(),
            source,
        })?;
        debug!(product = %self.band.name, path = %path.display(), "wrote ENVI header");
        Ok(path)
    }

    pub fn envi_header(&self) -> EnviHeader {
        EnviHeader::from_band(&self.band)
    }

    pub fn band(&self) -> &BandMetadata {
        &self.band
    }

    pub fn variant(&self) -> MaskVariant {
        self.variant
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn band_count(&self) -> usize {
        Self::BAND_COUNT
    }

    /// Path the product was opened at, if it has been opened
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn state(&self) -> LifecycleState {
        self.state.lifecycle()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OutputState::Open(_))
    }

    fn not_open(&self, operation: &'static str) -> CfmaskError {
        CfmaskError::NotOpen {
            operation,
            product: self.band.name.clone(),
        }
    }

    fn invalid(&self, operation: &'static str, reason: impl Into<String>) -> CfmaskError {
        CfmaskError::InvalidArgument {
            operation,
            product: self.band.name.clone(),
            reason: reason.into(),
        }
    }
}

impl Drop for OutputProduct {
    fn drop(&mut self) {
        if let OutputState::Open(writer) = std::mem::replace(&mut self.state, OutputState::Freed) {
            warn!(product = %self.band.name, "output dropped while still open");
            let _ = writer.finish();
        }
    }
}
