//! Goals domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::location::Multiplier;
use crate::milestones::Milestone;

/// What a goal is saving for. Decides which location multiplier applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Property,
    Emergency,
    Retirement,
    Other,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 4] = [
        GoalCategory::Property,
        GoalCategory::Emergency,
        GoalCategory::Retirement,
        GoalCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Property => "property",
            GoalCategory::Emergency => "emergency",
            GoalCategory::Retirement => "retirement",
            GoalCategory::Other => "other",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        GoalCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| Error::invalid_input(format!("Unknown goal category '{}'", s)))
    }
}

/// Domain model representing a user's savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    /// Target before any location adjustment, in whole rupees.
    pub base_target_amount: i64,
    pub category: GoalCategory,
    pub city: String,
    /// Latest saved amount, 0 until progress is recorded.
    pub amount_saved: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub base_target_amount: i64,
    pub category: GoalCategory,
    pub city: String,
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::MissingField("userId".to_string()).into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.base_target_amount <= 0 {
            return Err(Error::invalid_input(format!(
                "Goal base amount must be positive, got {}",
                self.base_target_amount
            )));
        }
        Ok(())
    }
}

/// A goal adjusted to its city and broken into milestones for one income
/// bracket. Derived on every request, never stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlan {
    pub goal_id: String,
    pub name: String,
    pub category: GoalCategory,
    pub city: String,
    /// False when the city fell back to the default profile.
    pub location_known: bool,
    pub multiplier: Multiplier,
    pub base_target_amount: i64,
    pub adjusted_target_amount: i64,
    pub amount_saved: i64,
    pub progress_percent: Decimal,
    pub milestones: Vec<Milestone>,
    pub next_milestone: Option<Milestone>,
}
