use clap::Parser;
use rand::rngs::StdRng;

use weekly_meal_planner_rs::cli::{Cli, Command};
use weekly_meal_planner_rs::config::PlannerConfig;
use weekly_meal_planner_rs::error::Result;
use weekly_meal_planner_rs::interface::{
    CsvExporter, MenuAction, display_catalog, display_meal_plan, display_no_plan, prompt_action,
    prompt_slot, prompt_yes_no,
};
use weekly_meal_planner_rs::logger::init_logger;
use weekly_meal_planner_rs::models::{Slot, Weekday};
use weekly_meal_planner_rs::planner::constants::DEFAULT_EXPORT_FILE;
use weekly_meal_planner_rs::state::{FileStorage, PlannerSession};

type Session = PlannerSession<FileStorage, StdRng>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = PlannerConfig::from_cli(&cli)?;
    let mut session = PlannerSession::open(
        config.catalog.clone(),
        FileStorage::new(&config.state_path),
        config.rng(),
    );

    match cli.command.unwrap_or_default() {
        Command::Interactive => cmd_interactive(&mut session),
        Command::Generate => cmd_generate(&mut session),
        Command::Show => cmd_show(&session),
        Command::Replace { day, slot } => cmd_replace(&mut session, day, slot),
        Command::Export { output } => cmd_export(&session, &CsvExporter::new(output)),
        Command::Catalog => cmd_catalog(&session),
    }
}

/// Generate a new plan and print it.
fn cmd_generate(session: &mut Session) -> Result<()> {
    let plan = session.generate()?;
    display_meal_plan(plan, false);
    Ok(())
}

/// Print the saved plan.
fn cmd_show(session: &Session) -> Result<()> {
    match session.plan() {
        Some(plan) => display_meal_plan(plan, false),
        None => display_no_plan(),
    }
    Ok(())
}

/// Replace one slot: edit, replace, save.
fn cmd_replace(session: &mut Session, day: Weekday, slot: Slot) -> Result<()> {
    session.toggle_editing()?;
    let old = session.plan().map(|plan| plan.get(day, slot).clone());
    session.replace_slot(day, slot)?;
    session.toggle_editing()?;

    if let (Some(old), Some(plan)) = (old, session.plan()) {
        println!(
            "Replaced {} {} '{}' with '{}'.",
            day,
            slot.name().to_lowercase(),
            old,
            plan.get(day, slot)
        );
        display_meal_plan(plan, false);
    }
    Ok(())
}

/// Write the saved plan to a CSV file.
fn cmd_export(session: &Session, exporter: &CsvExporter) -> Result<()> {
    session.export(exporter)?;
    println!("Meal plan saved to {}", exporter.path().display());
    Ok(())
}

/// List the catalog, marking meals already scheduled.
fn cmd_catalog(session: &Session) -> Result<()> {
    display_catalog(session.catalog(), session.available());
    Ok(())
}

/// Menu loop mirroring the planner's buttons.
///
/// Failed actions are reported and the loop keeps running; only prompt
/// failures or Quit end it.
fn cmd_interactive(session: &mut Session) -> Result<()> {
    loop {
        match session.plan() {
            Some(plan) => display_meal_plan(plan, session.is_editing()),
            None => display_no_plan(),
        }

        match prompt_action(session.state())? {
            MenuAction::Generate => {
                if session.plan().is_some()
                    && !prompt_yes_no("Replace the current plan with a new one?", true)?
                {
                    continue;
                }
                if let Err(e) = session.generate() {
                    eprintln!("Could not generate meal plan: {}", e);
                }
            }
            MenuAction::Edit | MenuAction::Save => {
                if let Err(e) = session.toggle_editing() {
                    eprintln!("Could not switch editing mode: {}", e);
                }
            }
            MenuAction::Replace => {
                let Some(plan) = session.plan() else {
                    continue;
                };
                if let Some((day, slot)) = prompt_slot(plan)? {
                    if let Err(e) = session.replace_slot(day, slot) {
                        eprintln!("Could not replace meal: {}", e);
                    }
                }
            }
            MenuAction::Download => {
                let exporter = CsvExporter::new(DEFAULT_EXPORT_FILE);
                match session.export(&exporter) {
                    Ok(()) => println!("Meal plan saved to {}", exporter.path().display()),
                    Err(e) => eprintln!("Could not export meal plan: {}", e),
                }
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}
