// src/lib.rs
//! # cfmask-rs
//!
//! Output side of the CFmask cloud, cloud shadow, snow and water classifier:
//! builds the band metadata for the classification mask and its cloud
//! confidence companion, names the output files after the input scene, and
//! streams the finished grids to flat raw binary files.
//!
//! ## Features
//!
//! - **Typed lifecycle**: products move `Unopened -> Open -> Closed -> Freed`, and the write handle only exists while open
//! - **Deterministic naming**: `{scene}_{band}.img`, derived from the reference band's file name
//! - **Complete band metadata**: class tables, valid ranges, fill value and provenance ready to append to the scene metadata
//! - **ENVI headers**: optional `.hdr` written next to each image
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cfmask_rs::*;
//!
//! fn main() -> Result<()> {
//!     let scene = SceneMetadata::new(vec![SceneBand::new(
//!         "toa_band1",
//!         "toa_refl",
//!         "LC80470272013287LGN00_toa_band1.img",
//!         "LC8TOA",
//!         [30.0, 30.0],
//!     )]);
//!     let grid = GridSize::new(7801, 7661);
//!     let options = OutputOptions::new("output");
//!
//!     let mask = vec![0u8; 7801 * 7661];
//!     let mut output = OutputProduct::create(&scene, grid, MaskVariant::Mask, &options)?;
//!     output.write(&mask)?;
//!
//!     let band = output.finish(&options)?;
//!     println!("wrote {} ({} classes)", band.file_name, band.class_values.len());
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod metadata;
pub mod naming;
pub mod raw_binary;
pub mod output;

// Re-export commonly used types at the crate root for convenience
pub use error::{CfmaskError, Result};

// Type exports
pub use types::{
    DataType,
    GridSize,
    ClassValue,
    CF_FILL_PIXEL,
};

// Metadata exports
pub use metadata::{
    BandMetadata,
    MaskVariant,
    ProductionDate,
    SceneBand,
    SceneMetadata,
    ShortName,
};

// Naming exports
pub use naming::{derive_file_name, scene_identifier};

// Raw binary exports
pub use raw_binary::{read_raw_binary, RawBinaryWriter};

// Output exports
pub use output::{EnviHeader, LifecycleState, OutputOptions, OutputProduct};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use cfmask_rs::prelude::*;
    //! ```

    pub use crate::error::{CfmaskError, Result};
    pub use crate::types::GridSize;
    pub use crate::metadata::{BandMetadata, MaskVariant, SceneBand, SceneMetadata};
    pub use crate::output::{OutputOptions, OutputProduct};
}

// Version information
/// Application name recorded in output band metadata
pub const APP_NAME: &str = "cfmask";

/// The library version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `{APP_NAME}_{APP_VERSION}`, recorded as the producing application
pub fn app_version() -> String {
    format!("{}_{}", APP_NAME, APP_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert_eq!(APP_NAME, "cfmask");
        assert!(!APP_VERSION.is_empty());
        assert_eq!(app_version(), format!("cfmask_{}", APP_VERSION));
    }

    #[test]
    fn test_fill_pixel() {
        assert_eq!(CF_FILL_PIXEL, 255);
        for variant in MaskVariant::ALL {
            assert_eq!(variant.fill_value(), CF_FILL_PIXEL);
        }
    }

    #[test]
    fn test_reexported_naming() {
        assert_eq!(scene_identifier("LC08_L1TP_123.dat"), "LC08");
        assert_eq!(derive_file_name("LC08_L1TP_123.dat", "cfmask_conf"), "LC08_cfmask_conf.img");
    }

    #[test]
    fn test_both_products_side_by_side() {
        let dir = tempfile::tempdir().unwrap();
        let scene = test_helpers::landsat8_scene();
        let grid = GridSize::new(4, 9);
        let options = OutputOptions::new(dir.path()).with_envi_header(false);

        let mut outputs: Vec<(OutputProduct, Vec<u8>)> = MaskVariant::ALL
            .iter()
            .map(|&variant| {
                let output = OutputProduct::create(&scene, grid, variant, &options).unwrap();
                (output, test_helpers::generate_mask(grid, variant))
            })
            .collect();

        for (output, mask) in &mut outputs {
            output.write(mask).unwrap();
        }
        for (output, mask) in &mut outputs {
            let band = output.finish(&options).unwrap();
            let read: Vec<u8> = read_raw_binary(dir.path().join(&band.file_name), grid.lines, grid.samples).unwrap();
            assert_eq!(&read, mask);
            assert!(read.iter().all(|v| band.class_values.iter().any(|c| c.class == *v)));
        }
    }
}
