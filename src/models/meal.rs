use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// A meal, identified by its display text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meal(String);

impl Meal {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Canonical key for lookups (lowercase, trimmed name).
    pub fn key(&self) -> String {
        self.0.trim().to_lowercase()
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Meal {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The complete, ordered list of meals a plan may draw from.
///
/// Never empty and never holds two meals with the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    meals: Vec<Meal>,
}

impl Catalog {
    /// Build a catalog, dropping blank names and case-insensitive duplicates
    /// (first occurrence wins).
    pub fn new<I, M>(meals: I) -> Result<Self>
    where
        I: IntoIterator<Item = M>,
        M: Into<Meal>,
    {
        let mut seen = HashSet::new();
        let meals: Vec<Meal> = meals
            .into_iter()
            .map(Into::into)
            .filter(|meal| !meal.key().is_empty())
            .filter(|meal| seen.insert(meal.key()))
            .collect();

        if meals.is_empty() {
            return Err(PlannerError::EmptyCatalog);
        }

        Ok(Self { meals })
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn contains(&self, meal: &Meal) -> bool {
        self.meals.iter().any(|m| m.key() == meal.key())
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Never true for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_rejects_empty() {
        let result = Catalog::new(Vec::<Meal>::new());
        assert!(matches!(result, Err(PlannerError::EmptyCatalog)));

        let blanks = Catalog::new(["", "   "]);
        assert!(matches!(blanks, Err(PlannerError::EmptyCatalog)));
    }

    #[test]
    fn test_catalog_deduplicates_case_insensitive() {
        let catalog = Catalog::new(["Paella", "paella", "Gazpacho", " PAELLA "]).unwrap();
        assert_eq!(catalog.len(), 2);
        // First occurrence wins and order is kept
        assert_eq!(catalog.meals()[0].name(), "Paella");
        assert_eq!(catalog.meals()[1].name(), "Gazpacho");
    }

    #[test]
    fn test_meal_serializes_as_plain_string() {
        let meal = Meal::new("Tortilla");
        assert_eq!(serde_json::to_string(&meal).unwrap(), "\"Tortilla\"");
    }
}
