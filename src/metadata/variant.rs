// src/metadata/variant.rs
use crate::types::CF_FILL_PIXEL;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which of the two classification bands an output product holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MaskVariant {
    /// Cloud/shadow/snow/water classification
    Mask,
    /// Cloud confidence level
    Confidence,
}

/// Fixed metadata that differs between the two mask variants
#[derive(Debug)]
pub struct VariantProfile {
    pub short_name_suffix: &'static str,
    pub name: &'static str,
    pub long_name: &'static str,
    pub valid_range: [u8; 2],
    /// Legal pixel values in ascending order, not including fill
    pub classes: &'static [(u8, &'static str)],
}

static MASK_PROFILE: VariantProfile = VariantProfile {
    short_name_suffix: "CFMASK",
    name: "cfmask",
    long_name: "cfmask_band",
    valid_range: [0, 4],
    classes: &[
        (0, "clear"),
        (1, "water"),
        (2, "cloud_shadow"),
        (3, "snow"),
        (4, "cloud"),
    ],
};

static CONFIDENCE_PROFILE: VariantProfile = VariantProfile {
    short_name_suffix: "CFMASK_CONF",
    name: "cfmask_conf",
    long_name: "cfmask_conf_band",
    valid_range: [0, 3],
    classes: &[
        (0, "None"),
        (1, "less than or equal to 12.5 Percent Cloud Confidence"),
        (2, "greater than 12.5 and less than or equal to 22.5 Percent Cloud Confidence"),
        (3, "greater than 22.5 Percent Cloud Confidence"),
    ],
};

/// Description recorded for the fill class in both variants
pub const FILL_DESCRIPTION: &str = "fill";

impl MaskVariant {
    pub const ALL: [MaskVariant; 2] = [MaskVariant::Mask, MaskVariant::Confidence];

    pub fn profile(&self) -> &'static VariantProfile {
        match self {
            MaskVariant::Mask => &MASK_PROFILE,
            MaskVariant::Confidence => &CONFIDENCE_PROFILE,
        }
    }

    /// Band name, also used in the output file name
    pub fn band_name(&self) -> &'static str {
        self.profile().name
    }

    /// Number of class table entries including the fill entry
    pub fn class_count(&self) -> usize {
        self.profile().classes.len() + 1
    }

    pub fn fill_value(&self) -> u8 {
        CF_FILL_PIXEL
    }
}

impl fmt::Display for MaskVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.band_name())
    }
}
