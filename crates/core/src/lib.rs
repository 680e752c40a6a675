//! Fi-Zen Core - goal planning domain, services, and traits.
//!
//! This crate adjusts savings goals to a user's city, breaks them into
//! tiered milestones for the user's income bracket, and defines the
//! repository traits implemented by the `storage-sqlite` crate. It is
//! database-agnostic.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod location;
pub mod milestones;

pub use goals::{adjust_goal, Goal, GoalCategory, GoalPlan, NewGoal};
pub use location::{find_location, resolve_location, LocationProfile, Multiplier};
pub use milestones::{generate_milestones, IncomeBracket, Milestone, MilestoneTier};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
