use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::PROGRESS_DECIMAL_PRECISION;
use crate::errors::{Error, Result};
use crate::goals::goals_adjustment::apply_multiplier;
use crate::goals::goals_model::{Goal, GoalPlan, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::location::{find_location, DEFAULT_LOCATION};
use crate::milestones::{generate_milestones, mark_reached, IncomeBracket};

pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repository }
    }

    /// Saved share of the adjusted target, capped at 100.
    fn progress_percent(amount_saved: i64, adjusted_target: i64) -> Decimal {
        if adjusted_target <= 0 || amount_saved <= 0 {
            return Decimal::ZERO;
        }
        let percent = Decimal::from(amount_saved) * dec!(100) / Decimal::from(adjusted_target);
        percent.round_dp(PROGRESS_DECIMAL_PRECISION).min(dec!(100))
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repository.load_goals(user_id)
    }

    fn plan_goal(&self, goal: &Goal, bracket: IncomeBracket) -> Result<GoalPlan> {
        let location = find_location(&goal.city);
        if location.is_none() {
            warn!(
                "Unknown city '{}' for goal {}; using default multipliers",
                goal.city, goal.id
            );
        }
        let multiplier = location
            .unwrap_or(&DEFAULT_LOCATION)
            .multiplier_for(goal.category);

        let adjusted_target_amount = apply_multiplier(goal.base_target_amount, multiplier)?;
        let mut milestones = generate_milestones(adjusted_target_amount, bracket)?;
        mark_reached(&mut milestones, goal.amount_saved);
        let next_milestone = milestones.iter().find(|m| !m.reached).cloned();

        debug!(
            "Planned goal {}: {} -> {} ({} milestones, bracket {})",
            goal.id,
            goal.base_target_amount,
            adjusted_target_amount,
            milestones.len(),
            bracket
        );

        Ok(GoalPlan {
            goal_id: goal.id.clone(),
            name: goal.name.clone(),
            category: goal.category,
            city: goal.city.clone(),
            location_known: location.is_some(),
            multiplier,
            base_target_amount: goal.base_target_amount,
            adjusted_target_amount,
            amount_saved: goal.amount_saved,
            progress_percent: Self::progress_percent(goal.amount_saved, adjusted_target_amount),
            milestones,
            next_milestone,
        })
    }

    fn get_goal_plans(&self, user_id: &str, bracket: IncomeBracket) -> Result<Vec<GoalPlan>> {
        self.goal_repository
            .load_goals(user_id)?
            .iter()
            .map(|goal| self.plan_goal(goal, bracket))
            .collect()
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        if find_location(&new_goal.city).is_none() {
            debug!(
                "Goal '{}' uses unlisted city '{}'",
                new_goal.name, new_goal.city
            );
        }
        self.goal_repository.insert_new_goal(new_goal).await
    }

    async fn save_goal_progress(
        &self,
        user_id: &str,
        goal_id: &str,
        amount_saved: i64,
    ) -> Result<()> {
        if amount_saved < 0 {
            return Err(Error::invalid_input(format!(
                "Saved amount cannot be negative, got {}",
                amount_saved
            )));
        }
        self.goal_repository
            .save_goal_progress(user_id, goal_id, amount_saved)
            .await
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        self.goal_repository.delete_goal(user_id, goal_id).await
    }
}
