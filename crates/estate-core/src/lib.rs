pub mod error;
pub mod flight;
pub mod models;
pub mod rules;
pub mod stats;
pub mod traversal;

pub use error::EstateError;
pub use flight::{
    account_flight, flight_steps, plan_flight, plan_flight_with_rules, FlightStep, FlightSteps,
};
pub use models::{Cell, Estate, FlightResult, Plot, RestPoint, Tree, TreeStats};
pub use rules::EstateRules;
pub use stats::{compute_stats, median_height};
pub use traversal::{generate_coordinates, overlay_trees, trim_trailing_empty};
