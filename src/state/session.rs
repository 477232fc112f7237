use rand::Rng;

use crate::error::{PlannerError, Result};
use crate::interface::PlanExporter;
use crate::models::{Catalog, Meal, Plan, Slot, Weekday};
use crate::planner::PlanGenerator;
use crate::state::Storage;

/// What the user is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    NoPlan,
    PlanDisplayed { editing: bool },
}

/// Drives the planner from user intents.
///
/// Wraps a [`PlanGenerator`] with the editing toggle; slot replacement is
/// only accepted while editing.
pub struct PlannerSession<S, R> {
    generator: PlanGenerator<S, R>,
    editing: bool,
}

impl<S: Storage, R: Rng> PlannerSession<S, R> {
    /// Open a session, restoring any saved plan. A restored plan is always
    /// shown outside of editing mode.
    pub fn open(catalog: Catalog, storage: S, rng: R) -> Self {
        let mut generator = PlanGenerator::new(catalog, storage, rng);
        generator.restore();
        Self {
            generator,
            editing: false,
        }
    }

    pub fn state(&self) -> ViewState {
        match self.generator.plan() {
            None => ViewState::NoPlan,
            Some(_) => ViewState::PlanDisplayed {
                editing: self.editing,
            },
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state(), ViewState::PlanDisplayed { editing: true })
    }

    pub fn generate(&mut self) -> Result<&Plan> {
        self.generator.generate()
    }

    /// Flip between viewing and editing. Returns the new editing flag.
    pub fn toggle_editing(&mut self) -> Result<bool> {
        if self.generator.plan().is_none() {
            return Err(PlannerError::NoPlan);
        }
        self.editing = !self.editing;
        tracing::debug!(editing = self.editing, "toggled editing");
        Ok(self.editing)
    }

    pub fn replace_slot(&mut self, day: Weekday, slot: Slot) -> Result<&Plan> {
        match self.state() {
            ViewState::NoPlan => Err(PlannerError::NoPlan),
            ViewState::PlanDisplayed { editing: false } => Err(PlannerError::NotEditing),
            ViewState::PlanDisplayed { editing: true } => self.generator.replace_slot(day, slot),
        }
    }

    pub fn export<E: PlanExporter + ?Sized>(&self, exporter: &E) -> Result<()> {
        let plan = self.generator.plan().ok_or(PlannerError::NoPlan)?;
        exporter.export(plan)
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.generator.plan()
    }

    pub fn available(&self) -> &[Meal] {
        self.generator.available()
    }

    pub fn catalog(&self) -> &Catalog {
        self.generator.catalog()
    }

    /// End the session, keeping only what was persisted.
    pub fn into_storage(self) -> S {
        self.generator.into_storage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::constants::PLAN_STORAGE_KEY;
    use crate::state::MemoryStorage;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;

    fn catalog() -> Catalog {
        Catalog::new((1..=10).map(|i| Meal::new(format!("M{}", i)))).unwrap()
    }

    fn open(storage: MemoryStorage) -> PlannerSession<MemoryStorage, StdRng> {
        PlannerSession::open(catalog(), storage, StdRng::seed_from_u64(11))
    }

    #[derive(Default)]
    struct RecordingExporter {
        exported: RefCell<Vec<Plan>>,
    }

    impl PlanExporter for RecordingExporter {
        fn export(&self, plan: &Plan) -> Result<()> {
            self.exported.borrow_mut().push(plan.clone());
            Ok(())
        }
    }

    #[test]
    fn test_starts_without_plan() {
        let mut session = open(MemoryStorage::new());
        assert_eq!(session.state(), ViewState::NoPlan);
        assert!(matches!(session.toggle_editing(), Err(PlannerError::NoPlan)));
        assert!(matches!(
            session.replace_slot(Weekday::Monday, Slot::Lunch),
            Err(PlannerError::NoPlan)
        ));
    }

    #[test]
    fn test_generate_then_toggle() {
        let mut session = open(MemoryStorage::new());
        session.generate().unwrap();
        assert_eq!(session.state(), ViewState::PlanDisplayed { editing: false });

        assert!(session.toggle_editing().unwrap());
        assert_eq!(session.state(), ViewState::PlanDisplayed { editing: true });

        assert!(!session.toggle_editing().unwrap());
        assert_eq!(session.state(), ViewState::PlanDisplayed { editing: false });
    }

    #[test]
    fn test_generate_keeps_editing_flag() {
        let mut session = open(MemoryStorage::new());
        session.generate().unwrap();
        session.toggle_editing().unwrap();
        session.generate().unwrap();
        assert!(session.is_editing());
    }

    #[test]
    fn test_replace_requires_editing() {
        let mut session = open(MemoryStorage::new());
        session.generate().unwrap();
        assert!(matches!(
            session.replace_slot(Weekday::Monday, Slot::Dinner),
            Err(PlannerError::NotEditing)
        ));

        let before = session.plan().unwrap().clone();
        session.toggle_editing().unwrap();
        let after = session
            .replace_slot(Weekday::Monday, Slot::Dinner)
            .unwrap()
            .clone();

        assert_ne!(
            before.get(Weekday::Monday, Slot::Dinner),
            after.get(Weekday::Monday, Slot::Dinner)
        );
        for (day, slot, meal) in before.entries() {
            if (day, slot) != (Weekday::Monday, Slot::Dinner) {
                assert_eq!(meal, after.get(day, slot));
            }
        }
    }

    #[test]
    fn test_reload_restores_plan_outside_editing() {
        let mut session = open(MemoryStorage::new());
        let plan = session.generate().unwrap().clone();
        session.toggle_editing().unwrap();

        let reloaded = open(session.into_storage());
        assert_eq!(reloaded.state(), ViewState::PlanDisplayed { editing: false });
        assert_eq!(reloaded.plan(), Some(&plan));
    }

    #[test]
    fn test_reload_with_malformed_storage() {
        let mut storage = MemoryStorage::new();
        storage.write(PLAN_STORAGE_KEY, "[[\"M1\",").unwrap();

        let session = open(storage);
        assert_eq!(session.state(), ViewState::NoPlan);
    }

    #[test]
    fn test_export_current_plan() {
        let exporter = RecordingExporter::default();
        let mut session = open(MemoryStorage::new());
        assert!(matches!(session.export(&exporter), Err(PlannerError::NoPlan)));

        let plan = session.generate().unwrap().clone();
        session.export(&exporter).unwrap();
        assert_eq!(exporter.exported.borrow().as_slice(), &[plan]);
    }
}
