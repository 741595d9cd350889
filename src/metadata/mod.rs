// src/metadata/mod.rs
mod scene;
mod short_name;
mod production_date;
mod variant;
mod band_metadata;

pub use scene::{SceneBand, SceneMetadata, REFERENCE_BAND_NAME, REFERENCE_PRODUCT};
pub use short_name::{ShortName, SHORT_NAME_MAX_LEN, SHORT_NAME_PREFIX_LEN};
pub use production_date::{ProductionDate, PRODUCTION_DATE_FORMAT};
pub use variant::{MaskVariant, VariantProfile, FILL_DESCRIPTION};
pub use band_metadata::{
    BandMetadata, ClassTable, CATEGORY, DATA_UNITS, PIXEL_UNITS, PRODUCT_NAME,
};
