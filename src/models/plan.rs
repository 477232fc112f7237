use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::Meal;

/// Number of planned days per week.
pub const DAYS_PER_WEEK: usize = 5;

/// Number of meal slots per day.
pub const SLOTS_PER_DAY: usize = 2;

/// A planned weekday, Monday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(PlannerError::InvalidDay(index))
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a full day name, a three-letter prefix, or a 0-based index.
impl FromStr for Weekday {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim().to_lowercase();

        if let Ok(index) = input.parse::<usize>() {
            return Self::from_index(index);
        }

        Self::ALL
            .into_iter()
            .find(|day| {
                let name = day.name().to_lowercase();
                input.len() >= 3 && name.starts_with(&input)
            })
            .ok_or_else(|| PlannerError::InvalidInput(format!("Unknown day '{}'", s)))
    }
}

/// A meal slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Lunch,
    Dinner,
}

impl Slot {
    pub const ALL: [Slot; SLOTS_PER_DAY] = [Slot::Lunch, Slot::Dinner];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(PlannerError::InvalidSlot(index))
    }

    pub fn name(self) -> &'static str {
        match self {
            Slot::Lunch => "Lunch",
            Slot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Slot {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lunch" | "0" => Ok(Slot::Lunch),
            "dinner" | "1" => Ok(Slot::Dinner),
            _ => Err(PlannerError::InvalidInput(format!("Unknown slot '{}'", s))),
        }
    }
}

/// A week of meals: one `[lunch, dinner]` pair per weekday.
///
/// Serializes as a JSON array of five two-element string arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan {
    days: [[Meal; SLOTS_PER_DAY]; DAYS_PER_WEEK],
}

impl Plan {
    pub fn new(days: [[Meal; SLOTS_PER_DAY]; DAYS_PER_WEEK]) -> Self {
        Self { days }
    }

    pub fn get(&self, day: Weekday, slot: Slot) -> &Meal {
        &self.days[day.index()][slot.index()]
    }

    /// Set a slot, returning the meal it previously held.
    pub fn set(&mut self, day: Weekday, slot: Slot, meal: Meal) -> Meal {
        std::mem::replace(&mut self.days[day.index()][slot.index()], meal)
    }

    pub fn day(&self, day: Weekday) -> &[Meal; SLOTS_PER_DAY] {
        &self.days[day.index()]
    }

    pub fn days(&self) -> &[[Meal; SLOTS_PER_DAY]; DAYS_PER_WEEK] {
        &self.days
    }

    /// Every meal in the plan, in day then slot order.
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        self.days.iter().flatten()
    }

    /// Every `(day, slot, meal)` triple in the plan.
    pub fn entries(&self) -> impl Iterator<Item = (Weekday, Slot, &Meal)> {
        Weekday::ALL.into_iter().flat_map(move |day| {
            Slot::ALL
                .into_iter()
                .map(move |slot| (day, slot, self.get(day, slot)))
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
