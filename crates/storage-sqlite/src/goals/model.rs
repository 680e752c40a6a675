//! Database models for goals.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use fizen_core::goals::{Goal, GoalCategory, NewGoal};
use fizen_core::Result;

/// Database model for goals
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub base_target_amount: i64,
    pub category: String,
    pub city: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new goal
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub base_target_amount: i64,
    pub category: String,
    pub city: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for the latest saved amount of a goal
#[derive(
    Insertable,
    Queryable,
    Identifiable,
    Associations,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(GoalDB, foreign_key = goal_id))]
#[diesel(primary_key(goal_id))]
#[diesel(table_name = crate::schema::goal_progress)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressDB {
    pub goal_id: String,
    pub user_id: String,
    pub amount_saved: i64,
    pub updated_at: NaiveDateTime,
}

impl GoalDB {
    /// Converts to the domain model. Fails if the stored category is unknown.
    pub fn into_domain(self, amount_saved: i64) -> Result<Goal> {
        let category: GoalCategory = self.category.parse()?;
        Ok(Goal {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            base_target_amount: self.base_target_amount,
            category,
            city: self.city,
            amount_saved,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl NewGoalDB {
    pub fn from_domain(domain: NewGoal, id: String, now: NaiveDateTime) -> Self {
        Self {
            id,
            user_id: domain.user_id,
            name: domain.name,
            base_target_amount: domain.base_target_amount,
            category: domain.category.as_str().to_string(),
            city: domain.city,
            created_at: now,
            updated_at: now,
        }
    }
}
