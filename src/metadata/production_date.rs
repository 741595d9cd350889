// src/metadata/production_date.rs
use crate::error::{CfmaskError, Result};
use chrono::{DateTime, Utc};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `strftime` pattern for production timestamps, e.g. `2016-03-01T18:04:11Z`
pub const PRODUCTION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// UTC production time of an output band, kept at whole-second precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProductionDate(DateTime<Utc>);

impl ProductionDate {
    /// Capture the current wall-clock time
    pub fn now(product: &str) -> Result<Self> {
        Self::from_system_time(SystemTime::now(), product)
    }

    /// Convert a system time to UTC, dropping sub-second precision.
    ///
    /// Times before the Unix epoch or outside chrono's range are treated as
    /// an unusable clock.
    pub fn from_system_time(time: SystemTime, product: &str) -> Result<Self> {
        let since_epoch = time.duration_since(UNIX_EPOCH).map_err(|e| CfmaskError::Clock {
            product: product.to_string(),
            reason: format!("unable to obtain current time: {e}"),
        })?;

        let seconds = i64::try_from(since_epoch.as_secs()).map_err(|_| CfmaskError::Clock {
            product: product.to_string(),
            reason: "current time out of range".to_string(),
        })?;

        DateTime::<Utc>::from_timestamp(seconds, 0)
            .map(ProductionDate)
            .ok_or_else(|| CfmaskError::Clock {
                product: product.to_string(),
                reason: "converting time to UTC".to_string(),
            })
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for ProductionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(PRODUCTION_DATE_FORMAT))
    }
}
