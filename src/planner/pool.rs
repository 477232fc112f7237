use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Catalog, Meal, Plan};

/// Draws meals from a fixed catalog.
///
/// Holds no mutable state of its own: working pools and the available set
/// are owned by the caller and handed in per operation.
#[derive(Debug, Clone)]
pub struct MealPool {
    catalog: Catalog,
}

impl MealPool {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Pick one meal uniformly at random from `pool`.
    ///
    /// Returns `None` for an empty pool; callers refill first.
    pub fn draw<'a, R: Rng + ?Sized>(rng: &mut R, pool: &'a [Meal]) -> Option<&'a Meal> {
        pool.choose(rng)
    }

    /// Remove and return a random meal from a working pool, refilling it
    /// first if it is empty.
    pub fn take<R: Rng>(&self, rng: &mut R, working: &mut Vec<Meal>) -> Meal {
        if working.is_empty() {
            *working = self.refill();
        }
        let index = rng.gen_range(0..working.len());
        working.remove(index)
    }

    /// A fresh copy of the full catalog.
    pub fn refill(&self) -> Vec<Meal> {
        self.catalog.meals().to_vec()
    }

    /// Catalog meals not scheduled anywhere in `plan`, in catalog order.
    pub fn recompute_available(&self, plan: &Plan) -> Vec<Meal> {
        let scheduled: HashSet<String> = plan.meals().map(Meal::key).collect();
        self.catalog
            .meals()
            .iter()
            .filter(|meal| !scheduled.contains(&meal.key()))
            .cloned()
            .collect()
    }

    /// Catalog meals other than `excluded`.
    pub fn all_except(&self, excluded: &Meal) -> Vec<Meal> {
        let key = excluded.key();
        self.catalog
            .meals()
            .iter()
            .filter(|meal| meal.key() != key)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool_of(names: &[&str]) -> MealPool {
        MealPool::new(Catalog::new(names.iter().copied()).unwrap())
    }

    fn plan_of(names: [&str; 10]) -> Plan {
        let m = |i: usize| Meal::new(names[i]);
        Plan::new([
            [m(0), m(1)],
            [m(2), m(3)],
            [m(4), m(5)],
            [m(6), m(7)],
            [m(8), m(9)],
        ])
    }

    #[test]
    fn test_draw_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(MealPool::draw(&mut rng, &[]).is_none());
    }

    #[test]
    fn test_draw_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = vec![Meal::new("A"), Meal::new("B"), Meal::new("C")];
        for _ in 0..50 {
            let meal = MealPool::draw(&mut rng, &pool).unwrap();
            assert!(pool.contains(meal));
        }
    }

    #[test]
    fn test_draw_covers_every_meal() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = vec![Meal::new("A"), Meal::new("B"), Meal::new("C")];
        let seen: HashSet<&Meal> = (0..200)
            .filter_map(|_| MealPool::draw(&mut rng, &pool))
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_take_removes_drawn_meal() {
        let pool = pool_of(&["A", "B", "C"]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut working = pool.refill();

        let drawn: HashSet<Meal> = (0..3).map(|_| pool.take(&mut rng, &mut working)).collect();
        assert_eq!(drawn.len(), 3);
        assert!(working.is_empty());

        // Empty pool is refilled before drawing
        let meal = pool.take(&mut rng, &mut working);
        assert!(pool.catalog().contains(&meal));
        assert_eq!(working.len(), 2);
    }

    #[test]
    fn test_refill_is_full_catalog() {
        let pool = pool_of(&["A", "B", "C"]);
        let names: Vec<String> = pool.refill().iter().map(|m| m.to_string()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_recompute_available() {
        let pool = pool_of(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"]);
        let plan = plan_of(["A", "B", "C", "D", "E", "F", "G", "H", "I", "A"]);

        let available = pool.recompute_available(&plan);
        let names: Vec<&str> = available.iter().map(Meal::name).collect();
        assert_eq!(names, ["J", "K", "L"]);

        // Idempotent on an unchanged plan
        assert_eq!(pool.recompute_available(&plan), available);
    }

    #[test]
    fn test_recompute_available_empty_when_all_scheduled() {
        let pool = pool_of(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
        let plan = plan_of(["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
        assert!(pool.recompute_available(&plan).is_empty());
    }

    #[test]
    fn test_all_except() {
        let pool = pool_of(&["A", "B"]);
        let rest = pool.all_except(&Meal::new("a"));
        assert_eq!(rest, vec![Meal::new("B")]);
    }
}
