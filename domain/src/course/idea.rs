//! Course ideas and the idea extractor
//!
//! A host describes the courses they want in a free-text block, usually one
//! dish per line. [`extract_ideas`] segments that block into at most
//! [`MAX_IDEAS`] [`CourseIdea`]s.

use crate::course::slot::CourseSlot;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Maximum number of ideas kept per request (one per canonical slot)
pub const MAX_IDEAS: usize = CourseSlot::COUNT;

/// Separators tried when the whole block fits on one line
const INLINE_SEPARATORS: [char; 4] = [';', ',', '|', '/'];

/// Bullets, list numbering and stray punctuation at the start of a line.
///
/// Numbering such as `1.` or `(2)` must be followed by whitespace, so
/// `"3.5 oz wagyu"` keeps its quantity.
static LEADING_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\s*(?:[-*•·‣◦–—>+~.:#]+|\(?\d{1,2}[.):](?:\s|$)|\(\d{1,2}\)(?:\s|$)|\d{1,2}\s+[-–—]))*\s*")
        .expect("leading marker pattern is valid")
});

/// A short description of one dish or course concept (Value Object)
///
/// May still carry a self-declared slot prefix such as `"Dessert: tart"`;
/// the prefix is interpreted later by the slot assigner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseIdea(String);

impl CourseIdea {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Get the idea text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CourseIdea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CourseIdea {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseIdea {
    fn from(s: &str) -> Self {
        CourseIdea::new(s)
    }
}

impl From<String> for CourseIdea {
    fn from(s: String) -> Self {
        CourseIdea::new(s)
    }
}

/// Segment a free-text block into ordered course ideas.
///
/// Lines are split on line breaks, stripped of leading list markers and
/// blank lines are dropped. A block that yields a single line is split
/// again on `;`, `,`, `|` or `/` when that produces more than one piece.
/// Anything beyond [`MAX_IDEAS`] is discarded.
///
/// # Examples
///
/// ```
/// use planner_domain::course::idea::extract_ideas;
///
/// let ideas = extract_ideas("1. Oyster\n2. Salad\n\n- Steak");
/// assert_eq!(ideas.len(), 3);
/// assert_eq!(ideas[0].as_str(), "Oyster");
///
/// let inline = extract_ideas("salad, soup, steak");
/// assert_eq!(inline.len(), 3);
///
/// assert!(extract_ideas("   ").is_empty());
/// ```
pub fn extract_ideas(text: &str) -> Vec<CourseIdea> {
    let mut lines: Vec<String> = text.lines().filter_map(clean_piece).collect();

    if lines.len() == 1 {
        let pieces: Vec<String> = lines[0]
            .split(INLINE_SEPARATORS)
            .filter_map(clean_piece)
            .collect();
        if pieces.len() > 1 {
            lines = pieces;
        }
    }

    lines
        .into_iter()
        .take(MAX_IDEAS)
        .map(CourseIdea::new)
        .collect()
}

/// [`extract_ideas`] for callers whose text field may be missing.
pub fn extract_ideas_opt(text: Option<&str>) -> Vec<CourseIdea> {
    text.map(extract_ideas).unwrap_or_default()
}

fn clean_piece(piece: &str) -> Option<String> {
    let stripped = LEADING_MARKER.replace(piece, "");
    let trimmed = stripped.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
