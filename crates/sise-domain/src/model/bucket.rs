//! Fixed-width mileage buckets

use serde::{Deserialize, Serialize};
use sise_types::{Error, Result};

/// Bucket width in km
pub const MILEAGE_BUCKET_WIDTH_KM: u64 = 50_000;

/// Largest odometer reading accepted from a source
pub const MAX_MILEAGE_KM: u64 = 10_000_000;

/// Half-open mileage interval `[lower_km, upper_km)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MileageBucket {
    pub lower_km: u64,
    pub upper_km: u64,
}

impl MileageBucket {
    pub fn contains(&self, mileage_km: u64) -> bool {
        self.lower_km <= mileage_km && mileage_km < self.upper_km
    }

    /// Bounds in 만 km, e.g. `5~10만km`
    pub fn label(&self) -> String {
        format!(
            "{}~{}만km",
            format_man(self.lower_km),
            format_man(self.upper_km)
        )
    }
}

fn format_man(km: u64) -> String {
    if km % 10_000 == 0 {
        (km / 10_000).to_string()
    } else {
        format!("{:.1}", km as f64 / 10_000.0)
    }
}

impl std::fmt::Display for MileageBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Contiguous buckets starting at 0 km
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MileageBuckets {
    width_km: u64,
    buckets: Vec<MileageBucket>,
}

impl MileageBuckets {
    /// Buckets of `width_km` from 0 up to the first multiple of the width above `max_km`.
    ///
    /// A zero width is clamped to 1 km. Fails when `max_km` is above
    /// [`MAX_MILEAGE_KM`].
    pub fn covering(max_km: u64, width_km: u64) -> Result<Self> {
        let out_of_range = || Error::MileageOutOfRange {
            mileage_km: max_km,
            max_km: MAX_MILEAGE_KM,
        };
        if max_km > MAX_MILEAGE_KM {
            return Err(out_of_range());
        }

        let width_km = width_km.max(1);
        let count = max_km / width_km + 1;
        // Every bound below is at most count * width_km
        count.checked_mul(width_km).ok_or_else(out_of_range)?;

        let buckets = (0..count)
            .map(|k| MileageBucket {
                lower_km: k * width_km,
                upper_km: (k + 1) * width_km,
            })
            .collect();
        Ok(Self { width_km, buckets })
    }

    pub fn width_km(&self) -> u64 {
        self.width_km
    }

    pub fn as_slice(&self) -> &[MileageBucket] {
        &self.buckets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MileageBucket> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Upper bound of the last bucket
    pub fn upper_km(&self) -> u64 {
        self.buckets.last().map(|b| b.upper_km).unwrap_or(0)
    }

    /// Bucket holding `mileage_km`, or `None` past the covered range
    pub fn locate(&self, mileage_km: u64) -> Option<MileageBucket> {
        let index = usize::try_from(mileage_km / self.width_km).ok()?;
        self.buckets.get(index).copied()
    }
}
