pub mod constants;
pub mod generator;
pub mod pool;

pub use constants::*;
pub use generator::PlanGenerator;
pub use pool::MealPool;
