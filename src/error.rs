use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Meal catalog is empty")]
    EmptyCatalog,

    #[error("No meal plan has been generated yet")]
    NoPlan,

    #[error("Plan is not in editing mode")]
    NotEditing,

    #[error("Invalid day index: {0}")]
    InvalidDay(usize),

    #[error("Invalid slot index: {0}")]
    InvalidSlot(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
