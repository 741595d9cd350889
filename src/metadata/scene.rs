// src/metadata/scene.rs
use crate::error::{CfmaskError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Band used as the metadata template for every output product
pub const REFERENCE_BAND_NAME: &str = "toa_band1";

/// Product the reference band must belong to
pub const REFERENCE_PRODUCT: &str = "toa_refl";

/// The subset of one input band's metadata this crate consumes
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneBand {
    pub name: String,
    pub product: String,
    pub file_name: String,
    pub short_name: String,
    pub pixel_size: [f64; 2],
}

impl SceneBand {
    pub fn new(
        name: impl Into<String>,
        product: impl Into<String>,
        file_name: impl Into<String>,
        short_name: impl Into<String>,
        pixel_size: [f64; 2],
    ) -> Self {
        SceneBand {
            name: name.into(),
            product: product.into(),
            file_name: file_name.into(),
            short_name: short_name.into(),
            pixel_size,
        }
    }
}

/// Ordered band records of an input scene
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneMetadata {
    pub bands: Vec<SceneBand>,
}

impl SceneMetadata {
    pub fn new(bands: Vec<SceneBand>) -> Self {
        SceneMetadata { bands }
    }

    /// First band matching both `name` and `product`, in document order
    pub fn find_band(&self, name: &str, product: &str) -> Option<&SceneBand> {
        self.bands
            .iter()
            .find(|band| band.name == name && band.product == product)
    }

    /// The TOA reflectance band 1 record that output metadata is derived from
    pub fn reference_band(&self) -> Result<&SceneBand> {
        self.find_band(REFERENCE_BAND_NAME, REFERENCE_PRODUCT)
            .ok_or_else(|| CfmaskError::ReferenceBandNotFound {
                name: REFERENCE_BAND_NAME.to_string(),
                product: REFERENCE_PRODUCT.to_string(),
            })
    }
}
