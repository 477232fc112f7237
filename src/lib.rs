pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logger;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{Catalog, Meal, Plan, Slot, Weekday};
