use rand::Rng;

use crate::error::{PlannerError, Result};
use crate::models::{Catalog, Meal, Plan, Slot, Weekday};
use crate::planner::constants::MIN_POOL_PER_DAY;
use crate::planner::pool::MealPool;
use crate::state::{Storage, load_plan, save_plan};

/// Builds and edits the weekly plan.
///
/// Sole owner of the current plan, the available pool derived from it, and
/// the storage the plan is persisted to. Every mutation recomputes the
/// available pool and writes the plan back before returning.
pub struct PlanGenerator<S, R> {
    pool: MealPool,
    plan: Option<Plan>,
    available: Vec<Meal>,
    storage: S,
    rng: R,
}

impl<S: Storage, R: Rng> PlanGenerator<S, R> {
    /// Create a generator with no plan. Call [`restore`](Self::restore) to
    /// pick up a previously saved one.
    pub fn new(catalog: Catalog, storage: S, rng: R) -> Self {
        let pool = MealPool::new(catalog);
        let available = pool.refill();
        Self {
            pool,
            plan: None,
            available,
            storage,
            rng,
        }
    }

    /// Load the saved plan, if any. Missing or malformed data leaves the
    /// generator without a plan.
    pub fn restore(&mut self) -> Option<&Plan> {
        let restored = load_plan(&self.storage);
        self.available = match &restored {
            Some(plan) => self.pool.recompute_available(plan),
            None => self.pool.refill(),
        };
        self.plan = restored;
        self.plan.as_ref()
    }

    /// Draw a fresh plan for the whole week, replacing the current one.
    ///
    /// Meals are drawn without replacement from a working copy of the
    /// catalog; the copy is refilled whenever it cannot cover another day.
    pub fn generate(&mut self) -> Result<&Plan> {
        let pool = &self.pool;
        let rng = &mut self.rng;
        let mut working = pool.refill();

        let days = Weekday::ALL.map(|day| {
            if working.len() < MIN_POOL_PER_DAY {
                tracing::debug!(%day, remaining = working.len(), "meal pool exhausted, refilling");
                working = pool.refill();
            }
            let lunch = pool.take(rng, &mut working);
            let dinner = pool.take(rng, &mut working);
            [lunch, dinner]
        });

        let plan = Plan::new(days);
        let available = self.pool.recompute_available(&plan);
        save_plan(&mut self.storage, &plan)?;

        self.available = available;
        tracing::info!(available = self.available.len(), "generated new meal plan");
        Ok(&*self.plan.insert(plan))
    }

    /// Swap the meal in one slot for a random meal not already scheduled.
    ///
    /// Only the addressed slot changes. Nothing changes in memory unless the
    /// updated plan was saved.
    pub fn replace_slot(&mut self, day: Weekday, slot: Slot) -> Result<&Plan> {
        let current = self.plan.as_ref().ok_or(PlannerError::NoPlan)?;
        let old = current.get(day, slot).clone();

        let reset;
        let candidates: &[Meal] = if self.available.is_empty() {
            tracing::debug!(%old, "available pool empty, resetting to catalog");
            reset = self.pool.all_except(&old);
            &reset
        } else {
            &self.available
        };

        // A single-meal catalog has nothing else to offer.
        let replacement = MealPool::draw(&mut self.rng, candidates)
            .cloned()
            .unwrap_or_else(|| old.clone());

        let mut updated = current.clone();
        updated.set(day, slot, replacement.clone());
        let available = self.pool.recompute_available(&updated);
        save_plan(&mut self.storage, &updated)?;

        tracing::info!(%day, %slot, %old, new = %replacement, "replaced meal");
        self.available = available;
        Ok(&*self.plan.insert(updated))
    }

    /// Same as [`replace_slot`](Self::replace_slot) but with raw indices.
    pub fn replace_slot_at(&mut self, day: usize, slot: usize) -> Result<&Plan> {
        let day = Weekday::from_index(day)?;
        let slot = Slot::from_index(slot)?;
        self.replace_slot(day, slot)
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Meals not scheduled anywhere in the current plan.
    pub fn available(&self) -> &[Meal] {
        &self.available
    }

    pub fn catalog(&self) -> &Catalog {
        self.pool.catalog()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Drop in-memory state and hand back the storage.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
