//! Menu entities shared by the deterministic builder, the generation
//! prompt and the fidelity validator.
//!
//! Field names match the JSON shape the generation model is asked to return.

use crate::course::slot::CourseSlot;
use serde::{Deserialize, Serialize};

/// Food budget shown when the host gave none
pub const DEFAULT_FOOD_COST: &str = "$45-65 per guest";

/// Wine budget shown when the host gave none
pub const DEFAULT_WINE_COST: &str = "$30-45 per guest";

/// One course of a menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Slot label, e.g. "Main Course"
    #[serde(rename = "course")]
    pub slot: String,
    /// Display name of the dish
    pub name: String,
    /// Wine pairing, if one is poured
    #[serde(default)]
    pub wine: Option<String>,
}

impl Course {
    pub fn new(slot: CourseSlot, name: impl Into<String>) -> Self {
        Self {
            slot: slot.label().to_string(),
            name: name.into(),
            wine: None,
        }
    }

    pub fn with_wine(mut self, wine: impl Into<String>) -> Self {
        self.wine = Some(wine.into());
        self
    }
}

/// A complete five-course menu in one presentation style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuVariant {
    /// Stable id (1-5)
    #[serde(default)]
    pub id: u8,
    /// Style label, e.g. "Modernist"
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub description: String,
    pub courses: Vec<Course>,
    #[serde(default)]
    pub food_cost: String,
    #[serde(default)]
    pub wine_cost: String,
}

impl MenuVariant {
    /// The course served at a slot's position
    pub fn course_at(&self, slot: CourseSlot) -> Option<&Course> {
        self.courses.get(slot.index())
    }
}

/// Budget strings copied onto every menu
///
/// Both are display strings chosen by the host; empty or missing values
/// fall back to [`DEFAULT_FOOD_COST`] and [`DEFAULT_WINE_COST`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetContext {
    pub food_cost: Option<String>,
    pub wine_cost: Option<String>,
}

impl BudgetContext {
    pub fn new(food_cost: impl Into<String>, wine_cost: impl Into<String>) -> Self {
        Self {
            food_cost: Some(food_cost.into()),
            wine_cost: Some(wine_cost.into()),
        }
    }

    pub fn with_food_cost(mut self, food_cost: impl Into<String>) -> Self {
        self.food_cost = Some(food_cost.into());
        self
    }

    pub fn with_wine_cost(mut self, wine_cost: impl Into<String>) -> Self {
        self.wine_cost = Some(wine_cost.into());
        self
    }

    pub fn food_cost(&self) -> &str {
        Self::or_default(self.food_cost.as_deref(), DEFAULT_FOOD_COST)
    }

    pub fn wine_cost(&self) -> &str {
        Self::or_default(self.wine_cost.as_deref(), DEFAULT_WINE_COST)
    }

    fn or_default<'a>(value: Option<&'a str>, default: &'static str) -> &'a str {
        value.filter(|v| !v.trim().is_empty()).unwrap_or(default)
    }
}
