// src/metadata/band_metadata.rs
use crate::error::{CfmaskError, Result};
use crate::metadata::scene::{SceneBand, REFERENCE_PRODUCT};
use crate::metadata::{MaskVariant, ProductionDate, ShortName, FILL_DESCRIPTION};
use crate::naming::derive_file_name;
use crate::types::{ClassValue, DataType, GridSize, CF_FILL_PIXEL};
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Product name shared by both mask bands
pub const PRODUCT_NAME: &str = "cfmask";

/// Category recorded for both mask bands
pub const CATEGORY: &str = "qa";

pub const PIXEL_UNITS: &str = "meters";

pub const DATA_UNITS: &str = "quality/feature classification";

/// Class table storage; both variants fit inline
pub type ClassTable = SmallVec<[ClassValue; 6]>;

/// Band metadata record for one output mask band
///
/// This is the record appended to the scene's metadata document once the
/// band has been written. It holds:
/// - Identity (short name, product, source, category, names, file name)
/// - Geometry copied from the reference band and input grid
/// - Encoding (data type, fill value, valid range, units)
/// - Provenance (application version, production date)
/// - The enumerated class table
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BandMetadata {
    pub short_name: ShortName,
    pub product: String,
    pub source: String,
    pub category: String,
    pub name: String,
    pub long_name: String,
    pub file_name: String,

    pub lines: usize,
    pub samples: usize,
    pub pixel_size: [f64; 2],
    pub pixel_units: String,

    pub data_type: DataType,
    pub fill_value: u8,
    pub valid_range: [u8; 2],
    pub data_units: String,

    pub app_version: String,
    pub production_date: ProductionDate,

    /// Ascending by class code, fill entry last
    pub class_values: ClassTable,
}

impl BandMetadata {
    /// Populate the metadata for one mask variant
    ///
    /// # Arguments
    ///
    /// * `reference` - The TOA reflectance band used as template
    /// * `grid` - Dimensions of the input scene
    /// * `variant` - Which mask band to describe
    /// * `production_date` - Time stamp recorded as the production date
    ///
    /// # Example
    ///
    /// ```
    /// use cfmask_rs::metadata::{BandMetadata, MaskVariant, ProductionDate, SceneBand};
    /// use cfmask_rs::types::GridSize;
    ///
    /// let reference = SceneBand::new("toa_band1", "toa_refl", "LC08_toa_band1.img", "LC8TOA", [30.0, 30.0]);
    /// let date = ProductionDate::now("cfmask").unwrap();
    /// let band = BandMetadata::for_variant(&reference, GridSize::new(10, 20), MaskVariant::Mask, date).unwrap();
    ///
    /// assert_eq!(band.short_name.as_str(), "LC8CFMASK");
    /// assert_eq!(band.file_name, "LC08_cfmask.img");
    /// ```
    pub fn for_variant(
        reference: &SceneBand,
        grid: GridSize,
        variant: MaskVariant,
        production_date: ProductionDate,
    ) -> Result<Self> {
        let profile = variant.profile();
        let short_name = ShortName::from_reference(
            &reference.short_name,
            profile.short_name_suffix,
            profile.name,
        )?;

        Ok(BandMetadata {
            short_name,
            product: PRODUCT_NAME.to_string(),
            source: REFERENCE_PRODUCT.to_string(),
            category: CATEGORY.to_string(),
            name: profile.name.to_string(),
            long_name: profile.long_name.to_string(),
            file_name: derive_file_name(&reference.file_name, profile.name),
            lines: grid.lines,
            samples: grid.samples,
            pixel_size: reference.pixel_size,
            pixel_units: PIXEL_UNITS.to_string(),
            data_type: DataType::Uint8,
            fill_value: CF_FILL_PIXEL,
            valid_range: profile.valid_range,
            data_units: DATA_UNITS.to_string(),
            app_version: crate::app_version(),
            production_date,
            class_values: class_table(variant)?,
        })
    }

    pub fn grid(&self) -> GridSize {
        GridSize::new(self.lines, self.samples)
    }

    /// The class entry for the fill value, which is always last
    pub fn fill_class(&self) -> Option<&ClassValue> {
        self.class_values
            .last()
            .filter(|class| class.class == self.fill_value)
    }
}

fn class_table(variant: MaskVariant) -> Result<ClassTable> {
    let profile = variant.profile();
    let mut table = ClassTable::new();
    table
        .try_reserve_exact(variant.class_count())
        .map_err(|e| CfmaskError::AllocationFailure {
            what: "class values",
            product: profile.name.to_string(),
            reason: format!("{e:?}"),
        })?;

    table.extend(
        profile
            .classes
            .iter()
            .map(|(class, description)| ClassValue::new(*class, *description)),
    );
    table.push(ClassValue::new(CF_FILL_PIXEL, FILL_DESCRIPTION));
    Ok(table)
}
