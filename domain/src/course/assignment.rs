//! Slot assignment: placing course ideas into the five canonical slots
//!
//! Ideas are placed in three passes, each one only filling slots the
//! previous passes left empty:
//!
//! ```text
//! ideas ──► 1. explicit tag ──► 2. keyword ──► 3. positional ──► SlotAssignment
//!              (first claim       (first hit     (default order
//!               wins)              wins)          or canonical)
//! ```
//!
//! Ideas that find no free slot are dropped and recorded in
//! [`SlotAssignment::dropped`]; that is expected behavior, not an error.

use crate::course::idea::CourseIdea;
use crate::course::keyword::classify_by_keyword;
use crate::course::slot::CourseSlot;
use crate::course::tag::match_explicit_tag;
use serde::{Deserialize, Serialize};

/// How an idea ended up in its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// The host named the slot ("Dessert: ...")
    Explicit,
    /// Inferred from dish vocabulary
    Keyword,
    /// Filled by positional fallback
    Positional,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Explicit => "explicit",
            Placement::Keyword => "keyword",
            Placement::Positional => "positional",
        }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An idea committed to a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedIdea {
    /// Display text (explicit tag already stripped)
    pub text: String,
    /// Position of the idea in the host's input
    pub source_index: usize,
    pub placement: Placement,
}

/// Five optional ideas, index-aligned with [`CourseSlot::ALL`]
///
/// Each input idea occupies at most one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    slots: [Option<AssignedIdea>; CourseSlot::COUNT],
    dropped: Vec<CourseIdea>,
}

impl SlotAssignment {
    /// The idea placed in a slot, if any
    pub fn get(&self, slot: CourseSlot) -> Option<&AssignedIdea> {
        self.slots[slot.index()].as_ref()
    }

    /// Display text of the idea placed in a slot, if any
    pub fn text(&self, slot: CourseSlot) -> Option<&str> {
        self.get(slot).map(|idea| idea.text.as_str())
    }

    /// Every slot in serving order with its idea
    pub fn iter(&self) -> impl Iterator<Item = (CourseSlot, Option<&AssignedIdea>)> {
        CourseSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
    }

    /// Only the filled slots, in serving order
    pub fn assigned(&self) -> impl Iterator<Item = (CourseSlot, &AssignedIdea)> {
        self.iter()
            .filter_map(|(slot, idea)| idea.map(|idea| (slot, idea)))
    }

    pub fn assigned_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Slots the host gave no idea for
    pub fn empty_slots(&self) -> Vec<CourseSlot> {
        self.iter()
            .filter(|(_, idea)| idea.is_none())
            .map(|(slot, _)| slot)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned_count() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.assigned_count() == CourseSlot::COUNT
    }

    /// Ideas that found no free slot
    pub fn dropped(&self) -> &[CourseIdea] {
        &self.dropped
    }

    fn is_free(&self, slot: CourseSlot) -> bool {
        self.slots[slot.index()].is_none()
    }

    fn commit(&mut self, slot: CourseSlot, pending: Pending, placement: Placement) {
        self.slots[slot.index()] = Some(AssignedIdea {
            text: pending.text,
            source_index: pending.source_index,
            placement,
        });
    }
}

/// An idea waiting for a slot
#[derive(Debug)]
struct Pending {
    source_index: usize,
    text: String,
}

/// Positional defaults used when no idea carried any type signal, keyed by
/// how many ideas are waiting.
fn positional_order(count: usize) -> &'static [CourseSlot] {
    use CourseSlot::*;
    match count {
        0 => &[],
        1 => &[MainCourse],
        2 => &[FirstCourse, MainCourse],
        3 => &[FirstCourse, MainCourse, Dessert],
        4 => &[FirstCourse, SecondCourse, MainCourse, Dessert],
        _ => &CourseSlot::ALL,
    }
}

/// Place course ideas into the five canonical slots.
///
/// 1. Explicitly tagged ideas claim their slot; the earliest claim wins.
/// 2. Remaining ideas are classified by keyword and take their slot if free.
/// 3. Whatever is left fills empty slots positionally: by
///    [`positional_order`] when nothing was typed in passes 1–2, otherwise
///    in canonical serving order.
///
/// The result depends only on the input order.
///
/// # Examples
///
/// ```
/// use planner_domain::course::assignment::assign_slots;
/// use planner_domain::course::idea::CourseIdea;
/// use planner_domain::course::slot::CourseSlot;
///
/// let ideas = vec![CourseIdea::from("Dessert: panna cotta"), CourseIdea::from("duck breast")];
/// let assignment = assign_slots(&ideas);
/// assert_eq!(assignment.text(CourseSlot::Dessert), Some("panna cotta"));
/// assert_eq!(assignment.text(CourseSlot::MainCourse), Some("duck breast"));
/// ```
pub fn assign_slots(ideas: &[CourseIdea]) -> SlotAssignment {
    let mut assignment = SlotAssignment::default();

    // Pass 1: explicit tags
    let mut untyped = Vec::new();
    for (source_index, idea) in ideas.iter().enumerate() {
        match match_explicit_tag(idea.as_str()) {
            Some(tagged) if assignment.is_free(tagged.slot) => {
                let pending = Pending {
                    source_index,
                    text: tagged.text,
                };
                assignment.commit(tagged.slot, pending, Placement::Explicit);
            }
            Some(tagged) => untyped.push(Pending {
                source_index,
                text: tagged.text,
            }),
            None => untyped.push(Pending {
                source_index,
                text: idea.as_str().trim().to_string(),
            }),
        }
    }

    // Pass 2: keyword inference
    let mut remaining = Vec::new();
    for pending in untyped {
        match classify_by_keyword(&pending.text) {
            Some(slot) if assignment.is_free(slot) => {
                assignment.commit(slot, pending, Placement::Keyword);
            }
            _ => remaining.push(pending),
        }
    }

    // Pass 3: positional fallback
    let targets: &[CourseSlot] = if assignment.is_empty() {
        positional_order(remaining.len())
    } else {
        &CourseSlot::ALL
    };
    for pending in remaining {
        match targets.iter().copied().find(|slot| assignment.is_free(*slot)) {
            Some(slot) => assignment.commit(slot, pending, Placement::Positional),
            None => assignment
                .dropped
                .push(ideas[pending.source_index].clone()),
        }
    }

    assignment
}
