//! Milestones module - income brackets, tiers, and milestone generation.

mod milestones_generator;
mod milestones_model;

pub use milestones_generator::{generate_milestones, mark_reached};
pub use milestones_model::{IncomeBracket, Milestone, MilestoneTier};
