pub mod export;
pub mod prompts;
pub mod render;

pub use export::{CsvExporter, PlanExporter, write_plan_csv};
pub use prompts::{MenuAction, menu_actions, prompt_action, prompt_slot, prompt_yes_no};
pub use render::{display_catalog, display_meal_plan, display_no_plan, format_plan};
