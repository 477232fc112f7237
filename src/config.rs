use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::Cli;
use crate::error::Result;
use crate::models::Catalog;
use crate::planner::constants::DEFAULT_MEALS;
use crate::state::load_catalog;

/// Runtime settings resolved from the command line.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub catalog: Catalog,
    pub state_path: PathBuf,
    pub seed: Option<u64>,
}

impl PlannerConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let catalog = match &cli.catalog {
            Some(path) => {
                let catalog = load_catalog(path)?;
                tracing::debug!(path = %path.display(), meals = catalog.len(), "loaded catalog");
                catalog
            }
            None => default_catalog()?,
        };

        Ok(Self {
            catalog,
            state_path: cli.state.clone(),
            seed: cli.seed,
        })
    }

    /// A seeded RNG when a seed was given, otherwise one seeded from the OS.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// The built-in catalog.
pub fn default_catalog() -> Result<Catalog> {
    Catalog::new(DEFAULT_MEALS.iter().copied())
}
