// src/metadata/short_name.rs
use crate::error::{CfmaskError, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of leading characters taken from the reference band's short name
pub const SHORT_NAME_PREFIX_LEN: usize = 3;

/// Upper bound on a composed band short name, in characters
pub const SHORT_NAME_MAX_LEN: usize = 15;

/// Platform/sensor prefix plus product suffix, e.g. `LC8CFMASK`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShortName(String);

impl ShortName {
    /// Build a short name from the first three characters of `reference`
    /// followed by `suffix`.
    ///
    /// A reference shorter than three characters is rejected instead of padded.
    ///
    /// # Example
    ///
    /// ```
    /// use cfmask_rs::metadata::ShortName;
    ///
    /// let name = ShortName::from_reference("LC8TOA", "CFMASK", "cfmask").unwrap();
    /// assert_eq!(name.as_str(), "LC8CFMASK");
    /// ```
    pub fn from_reference(reference: &str, suffix: &str, product: &str) -> Result<Self> {
        let prefix: String = reference.chars().take(SHORT_NAME_PREFIX_LEN).collect();
        if prefix.chars().count() < SHORT_NAME_PREFIX_LEN {
            return Err(CfmaskError::ShortNameTooShort {
                source_name: reference.to_string(),
                required: SHORT_NAME_PREFIX_LEN,
                product: product.to_string(),
            });
        }

        Self::new(prefix + suffix)
    }

    /// Wrap an already composed short name, enforcing the maximum length
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        let short_name = short_name.into();
        if short_name.chars().count() > SHORT_NAME_MAX_LEN {
            return Err(CfmaskError::ShortNameTooLong {
                short_name,
                max: SHORT_NAME_MAX_LEN,
            });
        }
        Ok(ShortName(short_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
