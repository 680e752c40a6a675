//! Location domain models.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::constants::MULTIPLIER_SCALE;
use crate::errors::{Error, Result};
use crate::goals::GoalCategory;

/// A cost-of-living scaling factor, stored in hundredths so the static table
/// stays `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiplier(u32);

impl Multiplier {
    /// The neutral multiplier (1.00).
    pub const ONE: Multiplier = Multiplier(100);

    /// Builds a multiplier from hundredths, rejecting zero.
    pub fn new(hundredths: u32) -> Result<Self> {
        if hundredths == 0 {
            return Err(Error::invalid_input("Multiplier must be positive"));
        }
        Ok(Multiplier(hundredths))
    }

    /// Unchecked; only the static table uses this.
    pub(crate) const fn from_hundredths(hundredths: u32) -> Self {
        Multiplier(hundredths)
    }

    pub const fn hundredths(&self) -> u32 {
        self.0
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(i64::from(self.0), MULTIPLIER_SCALE)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl Serialize for Multiplier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Serialize::serialize(&self.as_decimal(), serializer)
    }
}

/// Regional cost factors for a single city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationProfile {
    pub city: &'static str,
    pub property: Multiplier,
    pub living: Multiplier,
    pub general: Multiplier,
}

impl LocationProfile {
    pub(crate) const fn new(city: &'static str, property: u32, living: u32, general: u32) -> Self {
        LocationProfile {
            city,
            property: Multiplier::from_hundredths(property),
            living: Multiplier::from_hundredths(living),
            general: Multiplier::from_hundredths(general),
        }
    }

    /// Property goals scale with property prices; every other category
    /// scales with living costs.
    pub fn multiplier_for(&self, category: GoalCategory) -> Multiplier {
        match category {
            GoalCategory::Property => self.property,
            GoalCategory::Emergency | GoalCategory::Retirement | GoalCategory::Other => {
                self.living
            }
        }
    }
}
