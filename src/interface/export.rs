use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{Plan, Slot, Weekday};

/// A sink the rendered plan can be exported to.
pub trait PlanExporter {
    fn export(&self, plan: &Plan) -> Result<()>;
}

/// Write a plan as CSV with one row per weekday.
pub fn write_plan_csv<W: io::Write>(plan: &Plan, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["Day", Slot::Lunch.name(), Slot::Dinner.name()])?;
    for day in Weekday::ALL {
        let [lunch, dinner] = plan.day(day);
        wtr.write_record([day.name(), lunch.name(), dinner.name()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports the plan to a CSV file.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlanExporter for CsvExporter {
    fn export(&self, plan: &Plan) -> Result<()> {
        let file = std::fs::File::create(&self.path)?;
        write_plan_csv(plan, file)?;
        tracing::info!(path = %self.path.display(), "exported meal plan");
        Ok(())
    }
}
