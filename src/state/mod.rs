mod persistence;
mod session;
mod storage;

pub use persistence::{load_catalog, load_plan, save_plan};
pub use session::{PlannerSession, ViewState};
pub use storage::{FileStorage, MemoryStorage, Storage};
