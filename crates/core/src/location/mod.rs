//! Location module - city cost-of-living profiles.

mod location_model;
mod location_table;

pub use location_model::{LocationProfile, Multiplier};
pub use location_table::{all_locations, find_location, resolve_location, DEFAULT_LOCATION};
