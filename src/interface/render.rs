use std::fmt::Write;

use crate::models::{Catalog, Meal, Plan, Slot, Weekday};

/// Format a plan as a fixed-width table.
///
/// While editing, each meal is prefixed with its slot number so it can be
/// picked for replacement.
pub fn format_plan(plan: &Plan, editing: bool) -> String {
    let day_width = Weekday::ALL
        .iter()
        .map(|d| d.name().chars().count())
        .max()
        .unwrap_or(9);
    let meal_width = plan
        .meals()
        .map(|m| m.name().chars().count())
        .max()
        .unwrap_or(10)
        .max(Slot::Dinner.name().chars().count());
    let marker_width = if editing { 4 } else { 0 };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<dw$} | {:<mw$} | {:<mw$}",
        "Day",
        Slot::Lunch.name(),
        Slot::Dinner.name(),
        dw = day_width,
        mw = meal_width + marker_width
    );
    let _ = writeln!(
        out,
        "{}-+-{}-+-{}",
        "-".repeat(day_width),
        "-".repeat(meal_width + marker_width),
        "-".repeat(meal_width + marker_width)
    );

    for day in Weekday::ALL {
        let cells: Vec<String> = Slot::ALL
            .into_iter()
            .map(|slot| {
                let meal = plan.get(day, slot);
                if editing {
                    let number = day.index() * Slot::ALL.len() + slot.index() + 1;
                    format!("[{:>2}]{}", number, meal)
                } else {
                    meal.to_string()
                }
            })
            .collect();

        let _ = writeln!(
            out,
            "{:<dw$} | {:<mw$} | {}",
            day.name(),
            cells[0],
            cells[1],
            dw = day_width,
            mw = meal_width + marker_width
        );
    }

    out
}

/// Display a plan in a formatted table.
pub fn display_meal_plan(plan: &Plan, editing: bool) {
    println!();
    println!("=== Weekly Meal Plan ===");
    println!();
    print!("{}", format_plan(plan, editing));
    println!();
}

/// Shown when there is nothing to display yet.
pub fn display_no_plan() {
    println!("No meal plan yet. Generate one to get started.");
}

/// Display the catalog, marking meals that are not scheduled this week.
pub fn display_catalog(catalog: &Catalog, available: &[Meal]) {
    println!();
    println!("=== Meal Catalog ({} meals, {} available) ===", catalog.len(), available.len());
    println!();

    for meal in catalog.meals() {
        let mark = if available.contains(meal) { " " } else { "*" };
        println!("  {} {}", mark, meal);
    }

    println!();
    println!("  * scheduled this week");
    println!();
}
