//! Milestone and income bracket models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    GOLD_TIER_THRESHOLD, HIGH_INCOME_LOWER_BOUND, MEDIUM_INCOME_LOWER_BOUND,
    PLATINUM_TIER_THRESHOLD, SILVER_TIER_THRESHOLD,
};
use crate::errors::{Error, Result};

/// Celebration tier of a milestone, decided by its absolute amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MilestoneTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl MilestoneTier {
    /// Lower bounds are inclusive. Amounts below the Silver threshold are
    /// Bronze, including those under the nominal 10,000 Bronze floor.
    pub fn for_amount(amount: i64) -> Self {
        if amount >= PLATINUM_TIER_THRESHOLD {
            MilestoneTier::Platinum
        } else if amount >= GOLD_TIER_THRESHOLD {
            MilestoneTier::Gold
        } else if amount >= SILVER_TIER_THRESHOLD {
            MilestoneTier::Silver
        } else {
            MilestoneTier::Bronze
        }
    }
}

/// An intermediate checkpoint on the way to a goal's adjusted target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub target_amount: i64,
    pub tier: MilestoneTier,
    pub reached: bool,
}

impl Milestone {
    pub fn new(target_amount: i64) -> Self {
        Milestone {
            target_amount,
            tier: MilestoneTier::for_amount(target_amount),
            reached: false,
        }
    }
}

/// Coarse monthly-income range that picks the milestone step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeBracket {
    Low,
    Medium,
    High,
}

const LOW_STEPS: [i64; 4] = [10_000, 25_000, 50_000, 100_000];
const MEDIUM_STEPS: [i64; 4] = [25_000, 50_000, 100_000, 250_000];
const HIGH_STEPS: [i64; 4] = [50_000, 100_000, 250_000, 500_000];

impl IncomeBracket {
    pub const ALL: [IncomeBracket; 3] = [
        IncomeBracket::Low,
        IncomeBracket::Medium,
        IncomeBracket::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeBracket::Low => "low",
            IncomeBracket::Medium => "medium",
            IncomeBracket::High => "high",
        }
    }

    /// Inclusive lower bound of monthly income.
    pub fn lower_bound(&self) -> i64 {
        match self {
            IncomeBracket::Low => 0,
            IncomeBracket::Medium => MEDIUM_INCOME_LOWER_BOUND,
            IncomeBracket::High => HIGH_INCOME_LOWER_BOUND,
        }
    }

    /// Exclusive upper bound of monthly income; `None` for the top bracket.
    pub fn upper_bound(&self) -> Option<i64> {
        match self {
            IncomeBracket::Low => Some(MEDIUM_INCOME_LOWER_BOUND),
            IncomeBracket::Medium => Some(HIGH_INCOME_LOWER_BOUND),
            IncomeBracket::High => None,
        }
    }

    /// Ascending milestone checkpoints for this bracket.
    pub fn interval_steps(&self) -> &'static [i64] {
        match self {
            IncomeBracket::Low => &LOW_STEPS,
            IncomeBracket::Medium => &MEDIUM_STEPS,
            IncomeBracket::High => &HIGH_STEPS,
        }
    }

    pub fn from_monthly_income(monthly_income: i64) -> Result<Self> {
        if monthly_income < 0 {
            return Err(Error::invalid_input(format!(
                "Monthly income cannot be negative, got {}",
                monthly_income
            )));
        }
        IncomeBracket::ALL
            .into_iter()
            .find(|bracket| {
                let below_upper = match bracket.upper_bound() {
                    Some(upper) => monthly_income < upper,
                    None => true,
                };
                monthly_income >= bracket.lower_bound() && below_upper
            })
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "No income bracket covers monthly income {}",
                    monthly_income
                ))
            })
    }
}

impl fmt::Display for IncomeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeBracket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        IncomeBracket::ALL
            .into_iter()
            .find(|bracket| bracket.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| Error::invalid_input(format!("Unknown income bracket '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds_are_inclusive_on_lower_bound() {
        assert_eq!(MilestoneTier::for_amount(5_000), MilestoneTier::Bronze);
        assert_eq!(MilestoneTier::for_amount(10_000), MilestoneTier::Bronze);
        assert_eq!(MilestoneTier::for_amount(24_999), MilestoneTier::Bronze);
        assert_eq!(MilestoneTier::for_amount(25_000), MilestoneTier::Silver);
        assert_eq!(MilestoneTier::for_amount(99_999), MilestoneTier::Silver);
        assert_eq!(MilestoneTier::for_amount(100_000), MilestoneTier::Gold);
        assert_eq!(MilestoneTier::for_amount(499_999), MilestoneTier::Gold);
        assert_eq!(MilestoneTier::for_amount(500_000), MilestoneTier::Platinum);
        assert_eq!(MilestoneTier::for_amount(6_600_000), MilestoneTier::Platinum);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(MilestoneTier::Bronze < MilestoneTier::Silver);
        assert!(MilestoneTier::Silver < MilestoneTier::Gold);
        assert!(MilestoneTier::Gold < MilestoneTier::Platinum);
    }

    #[test]
    fn brackets_from_monthly_income() {
        assert_eq!(IncomeBracket::from_monthly_income(0).unwrap(), IncomeBracket::Low);
        assert_eq!(
            IncomeBracket::from_monthly_income(79_999).unwrap(),
            IncomeBracket::Low
        );
        assert_eq!(
            IncomeBracket::from_monthly_income(80_000).unwrap(),
            IncomeBracket::Medium
        );
        assert_eq!(
            IncomeBracket::from_monthly_income(249_999).unwrap(),
            IncomeBracket::Medium
        );
        assert_eq!(
            IncomeBracket::from_monthly_income(250_000).unwrap(),
            IncomeBracket::High
        );
        assert_eq!(
            IncomeBracket::from_monthly_income(i64::MAX).unwrap(),
            IncomeBracket::High
        );
        assert!(IncomeBracket::from_monthly_income(-1)
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn unknown_bracket_name_is_invalid_input() {
        assert_eq!("LOW".parse::<IncomeBracket>().unwrap(), IncomeBracket::Low);
        assert_eq!(" high".parse::<IncomeBracket>().unwrap(), IncomeBracket::High);
        assert!("ultra".parse::<IncomeBracket>().unwrap_err().is_invalid_input());
    }

    #[test]
    fn interval_steps_are_ascending() {
        for bracket in IncomeBracket::ALL {
            let steps = bracket.interval_steps();
            assert!(!steps.is_empty());
            assert!(steps.windows(2).all(|w| w[0] < w[1]), "{}", bracket);
            assert!(steps[0] > 0);
        }
    }

    #[test]
    fn milestone_serializes_camel_case() {
        let value = serde_json::to_value(Milestone::new(25_000)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "targetAmount": 25000, "tier": "Silver", "reached": false })
        );
    }
}
