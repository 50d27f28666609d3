//! Explicit course tags
//!
//! Hosts often write the course they mean in front of the dish:
//! `"Dessert: panna cotta"`, `"Main - braised short rib"`,
//! `"Amuse-bouche — oyster"`. A tag is a slot synonym anchored at the start
//! of the idea and followed by a colon or a dash.

use crate::course::slot::CourseSlot;
use regex::Regex;
use std::sync::LazyLock;

/// Slot synonyms, one alternation per slot.
///
/// Longer spellings come first within each alternation so that
/// `"main course:"` is consumed as a whole rather than as `"main"`.
const TAG_SYNONYMS: [(CourseSlot, &str); CourseSlot::COUNT] = [
    (
        CourseSlot::AmuseBouche,
        r"amuse[\s-]*bouche|amuse|appeti[sz]er|starter",
    ),
    (CourseSlot::FirstCourse, r"first[\s-]*course|first"),
    (CourseSlot::SecondCourse, r"second[\s-]*course|second"),
    (CourseSlot::MainCourse, r"main[\s-]*course|main|entr[eé]e"),
    (CourseSlot::Dessert, r"dessert|sweet"),
];

/// Capture groups 1..=5 identify the slot, group 6 holds the remainder.
///
/// A colon or dash-like separator must follow the tag; an ASCII hyphen only
/// counts when whitespace sits on at least one side of it, so
/// `"sweet-potato soup"` is not a tag.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = TAG_SYNONYMS
        .iter()
        .map(|(_, synonyms)| format!("({})", synonyms))
        .collect();
    let pattern = format!(
        r"(?is)^\s*(?:{})s?(?:\s*[:–—]|\s+-+|-+\s)\s*(.*)$",
        alternatives.join("|")
    );
    Regex::new(&pattern).expect("tag pattern is valid")
});

/// An idea that declared its own slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedIdea {
    /// Slot named by the tag
    pub slot: CourseSlot,
    /// Text after the tag and separator, or the whole idea when nothing follows
    pub text: String,
}

/// Recognize a leading slot tag on a course idea.
///
/// Returns `None` when the idea carries no tag and must go through keyword
/// inference instead.
///
/// # Examples
///
/// ```
/// use planner_domain::course::slot::CourseSlot;
/// use planner_domain::course::tag::match_explicit_tag;
///
/// let tagged = match_explicit_tag("Dessert: panna cotta").unwrap();
/// assert_eq!(tagged.slot, CourseSlot::Dessert);
/// assert_eq!(tagged.text, "panna cotta");
///
/// assert!(match_explicit_tag("duck breast").is_none());
/// ```
pub fn match_explicit_tag(idea: &str) -> Option<TaggedIdea> {
    let captures = TAG_PATTERN.captures(idea)?;

    let slot = TAG_SYNONYMS
        .iter()
        .enumerate()
        .find(|(i, _)| captures.get(i + 1).is_some())
        .map(|(_, (slot, _))| *slot)?;

    let remainder = captures
        .get(CourseSlot::COUNT + 1)
        .map(|m| m.as_str().trim())
        .unwrap_or_default();

    let text = if remainder.is_empty() {
        idea.trim().to_string()
    } else {
        remainder.to_string()
    };

    Some(TaggedIdea { slot, text })
}
