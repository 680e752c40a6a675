//! Goals module - domain models, location adjustment, services, and traits.

mod goals_adjustment;
mod goals_model;
mod goals_service;
mod goals_traits;

pub use goals_adjustment::{adjust_goal, apply_multiplier};
pub use goals_model::{Goal, GoalCategory, GoalPlan, NewGoal};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
