use dialoguer::{Confirm, Select};

use crate::error::Result;
use crate::models::{Plan, Slot, Weekday};
use crate::state::ViewState;

/// One entry in the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Generate,
    Edit,
    Save,
    Replace,
    Download,
    Quit,
}

impl MenuAction {
    fn label(self, state: ViewState) -> &'static str {
        match (self, state) {
            (MenuAction::Generate, ViewState::NoPlan) => "Generate plan",
            (MenuAction::Generate, _) => "Generate new plan",
            (MenuAction::Edit, _) => "Edit",
            (MenuAction::Save, _) => "Save",
            (MenuAction::Replace, _) => "Replace a meal",
            (MenuAction::Download, _) => "Download",
            (MenuAction::Quit, _) => "Quit",
        }
    }
}

/// Actions offered in a given view state.
pub fn menu_actions(state: ViewState) -> Vec<MenuAction> {
    match state {
        ViewState::NoPlan => vec![MenuAction::Generate, MenuAction::Quit],
        ViewState::PlanDisplayed { editing: false } => vec![
            MenuAction::Generate,
            MenuAction::Edit,
            MenuAction::Download,
            MenuAction::Quit,
        ],
        ViewState::PlanDisplayed { editing: true } => vec![
            MenuAction::Generate,
            MenuAction::Save,
            MenuAction::Replace,
            MenuAction::Download,
            MenuAction::Quit,
        ],
    }
}

/// Prompt for the next action.
pub fn prompt_action(state: ViewState) -> Result<MenuAction> {
    let actions = menu_actions(state);
    let labels: Vec<&str> = actions.iter().map(|a| a.label(state)).collect();

    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection])
}

/// Prompt for the slot to replace. `None` if the user backs out.
pub fn prompt_slot(plan: &Plan) -> Result<Option<(Weekday, Slot)>> {
    let entries: Vec<(Weekday, Slot)> = plan.entries().map(|(day, slot, _)| (day, slot)).collect();

    let mut options: Vec<String> = plan
        .entries()
        .map(|(day, slot, meal)| format!("{} {}: {}", day, slot.name().to_lowercase(), meal))
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Which meal should be replaced?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(entries.get(selection).copied())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
