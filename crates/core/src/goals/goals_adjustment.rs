//! Location-based goal adjustment.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::{CalculatorError, Error, Result};
use crate::goals::GoalCategory;
use crate::location::{resolve_location, Multiplier};

/// Scales a goal's base amount to the cost of living in `city`.
///
/// Property goals use the city's property multiplier, every other category
/// the living multiplier. Unknown cities leave the amount unchanged. The
/// result is rounded to the nearest whole rupee, halves rounding up.
pub fn adjust_goal(base_amount: i64, city: &str, category: GoalCategory) -> Result<i64> {
    let multiplier = resolve_location(city).multiplier_for(category);
    apply_multiplier(base_amount, multiplier)
}

/// Multiplies a positive amount and rounds half-up to a whole rupee.
pub fn apply_multiplier(base_amount: i64, multiplier: Multiplier) -> Result<i64> {
    if base_amount <= 0 {
        return Err(Error::invalid_input(format!(
            "Goal base amount must be positive, got {}",
            base_amount
        )));
    }

    let factor = multiplier.as_decimal();
    Decimal::from(base_amount)
        .checked_mul(factor)
        .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_i64())
        .ok_or_else(|| {
            CalculatorError::Overflow {
                amount: base_amount,
                multiplier: factor.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mumbai_property_goal() {
        assert_eq!(
            adjust_goal(3_000_000, "mumbai", GoalCategory::Property).unwrap(),
            6_600_000
        );
    }

    #[test]
    fn kochi_emergency_goal_uses_living_multiplier() {
        assert_eq!(
            adjust_goal(750_000, "kochi", GoalCategory::Emergency).unwrap(),
            675_000
        );
    }

    #[test]
    fn non_property_categories_share_the_living_multiplier() {
        let emergency = adjust_goal(100_000, "Delhi", GoalCategory::Emergency).unwrap();
        let retirement = adjust_goal(100_000, "Delhi", GoalCategory::Retirement).unwrap();
        let other = adjust_goal(100_000, "Delhi", GoalCategory::Other).unwrap();
        assert_eq!(emergency, 130_000);
        assert_eq!(retirement, emergency);
        assert_eq!(other, emergency);
    }

    #[test]
    fn unknown_city_leaves_amount_unchanged() {
        for category in GoalCategory::ALL {
            assert_eq!(adjust_goal(123_457, "Atlantis", category).unwrap(), 123_457);
        }
        let once = adjust_goal(6_600_000, "Atlantis", GoalCategory::Property).unwrap();
        let twice = adjust_goal(once, "Atlantis", GoalCategory::Property).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn halves_round_up() {
        // 10 * 1.15 = 11.5
        assert_eq!(
            adjust_goal(10, "Hyderabad", GoalCategory::Emergency).unwrap(),
            12
        );
        // 10 * 0.85 = 8.5
        assert_eq!(adjust_goal(10, "Lucknow", GoalCategory::Other).unwrap(), 9);
        // 1 * 0.75 = 0.75
        assert_eq!(adjust_goal(1, "Patna", GoalCategory::Property).unwrap(), 1);
        // 3 * 1.15 = 3.45
        assert_eq!(
            adjust_goal(3, "Pune", GoalCategory::Retirement).unwrap(),
            3
        );
    }

    #[test]
    fn non_positive_base_is_invalid_input() {
        assert!(adjust_goal(0, "Mumbai", GoalCategory::Property)
            .unwrap_err()
            .is_invalid_input());
        assert!(adjust_goal(-5, "Atlantis", GoalCategory::Other)
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn overflow_is_reported() {
        let err = adjust_goal(i64::MAX, "Mumbai", GoalCategory::Property).unwrap_err();
        assert!(matches!(
            err,
            Error::Calculation(CalculatorError::Overflow { amount, .. }) if amount == i64::MAX
        ));
    }
}
