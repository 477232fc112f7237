use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{Catalog, Meal, Plan};
use crate::planner::constants::PLAN_STORAGE_KEY;
use crate::state::Storage;

/// Load the saved plan from storage.
///
/// Absent, unreadable or malformed data all yield `None`.
pub fn load_plan<S: Storage + ?Sized>(storage: &S) -> Option<Plan> {
    let Some(raw) = storage.read(PLAN_STORAGE_KEY) else {
        tracing::debug!("no saved meal plan");
        return None;
    };

    match Plan::from_json(&raw) {
        Ok(plan) => {
            tracing::debug!("restored saved meal plan");
            Some(plan)
        }
        Err(e) => {
            tracing::warn!(error = %e, "discarding malformed saved meal plan");
            None
        }
    }
}

/// Save a plan to storage as JSON.
pub fn save_plan<S: Storage + ?Sized>(storage: &mut S, plan: &Plan) -> Result<()> {
    storage.write(PLAN_STORAGE_KEY, &plan.to_json()?)
}

/// Load a catalog from a JSON array of meal names.
///
/// Deduplicates by lowercase name (first occurrence wins).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let meals: Vec<Meal> = serde_json::from_str(&content)?;
    Catalog::new(meals)
}
