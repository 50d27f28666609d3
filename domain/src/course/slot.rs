//! Canonical course slots

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// One of the five fixed serving positions of a tasting menu (Value Object)
///
/// Variants are declared in serving order, so the derived `Ord` and
/// [`CourseSlot::index`] both follow the order courses reach the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CourseSlot {
    #[serde(rename = "Amuse-Bouche")]
    AmuseBouche,
    #[serde(rename = "First Course")]
    FirstCourse,
    #[serde(rename = "Second Course")]
    SecondCourse,
    #[serde(rename = "Main Course")]
    MainCourse,
    #[serde(rename = "Dessert")]
    Dessert,
}

impl CourseSlot {
    /// Number of canonical slots
    pub const COUNT: usize = 5;

    /// All slots in serving order
    pub const ALL: [CourseSlot; Self::COUNT] = [
        CourseSlot::AmuseBouche,
        CourseSlot::FirstCourse,
        CourseSlot::SecondCourse,
        CourseSlot::MainCourse,
        CourseSlot::Dessert,
    ];

    /// Display label used in menus and prompts
    pub fn label(&self) -> &'static str {
        match self {
            CourseSlot::AmuseBouche => "Amuse-Bouche",
            CourseSlot::FirstCourse => "First Course",
            CourseSlot::SecondCourse => "Second Course",
            CourseSlot::MainCourse => "Main Course",
            CourseSlot::Dessert => "Dessert",
        }
    }

    /// Position in serving order (0-based)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Slot at a serving position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Generic dish name used when the host gave no idea for this slot
    pub fn fallback_name(&self) -> &'static str {
        match self {
            CourseSlot::AmuseBouche => "Chef's seasonal amuse-bouche",
            CourseSlot::FirstCourse => "Seasonal first course",
            CourseSlot::SecondCourse => "Seasonal second course",
            CourseSlot::MainCourse => "Signature main course",
            CourseSlot::Dessert => "Seasonal dessert",
        }
    }

    /// Whether a wine pairing is poured with this course.
    ///
    /// The amuse-bouche and the second course are served without wine.
    pub fn carries_wine(&self) -> bool {
        !matches!(self, CourseSlot::AmuseBouche | CourseSlot::SecondCourse)
    }
}

impl std::fmt::Display for CourseSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for CourseSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match key.as_str() {
            "amusebouche" | "amuse" => Ok(CourseSlot::AmuseBouche),
            "firstcourse" | "first" => Ok(CourseSlot::FirstCourse),
            "secondcourse" | "second" => Ok(CourseSlot::SecondCourse),
            "maincourse" | "main" => Ok(CourseSlot::MainCourse),
            "dessert" => Ok(CourseSlot::Dessert),
            _ => Err(DomainError::UnknownCourseSlot(s.to_string())),
        }
    }
}
