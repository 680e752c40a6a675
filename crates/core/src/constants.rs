/// Decimal places kept on progress percentages
pub const PROGRESS_DECIMAL_PRECISION: u32 = 2;

/// Decimal places used when storing location multipliers (hundredths)
pub const MULTIPLIER_SCALE: u32 = 2;

/// Monthly income (whole rupees) at which the Medium bracket starts
pub const MEDIUM_INCOME_LOWER_BOUND: i64 = 80_000;

/// Monthly income (whole rupees) at which the High bracket starts
pub const HIGH_INCOME_LOWER_BOUND: i64 = 250_000;

/// Milestone amount at which the Silver tier starts
pub const SILVER_TIER_THRESHOLD: i64 = 25_000;

/// Milestone amount at which the Gold tier starts
pub const GOLD_TIER_THRESHOLD: i64 = 100_000;

/// Milestone amount at which the Platinum tier starts
pub const PLATINUM_TIER_THRESHOLD: i64 = 500_000;
