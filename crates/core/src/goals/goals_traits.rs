use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalPlan, NewGoal};
use crate::milestones::IncomeBracket;
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Goals owned by `user_id`, oldest first, each with its latest saved amount.
    fn load_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    /// Records the saved amount for a goal. Fails with `NotFound` when the
    /// goal does not belong to `user_id`.
    async fn save_goal_progress(&self, user_id: &str, goal_id: &str, amount_saved: i64)
        -> Result<()>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn plan_goal(&self, goal: &Goal, bracket: IncomeBracket) -> Result<GoalPlan>;
    fn get_goal_plans(&self, user_id: &str, bracket: IncomeBracket) -> Result<Vec<GoalPlan>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn save_goal_progress(&self, user_id: &str, goal_id: &str, amount_saved: i64)
        -> Result<()>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize>;
}
