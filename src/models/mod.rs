mod meal;
mod plan;

pub use meal::{Catalog, Meal};
pub use plan::{DAYS_PER_WEEK, Plan, SLOTS_PER_DAY, Slot, Weekday};
