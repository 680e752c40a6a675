//! SQLite storage implementation for goals.

mod model;
mod repository;

pub use model::{GoalDB, GoalProgressDB, NewGoalDB};
pub use repository::GoalRepository;
