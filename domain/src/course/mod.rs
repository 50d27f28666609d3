//! Custom-course assignment engine
//!
//! Turns a host's free-text course list into a five-slot assignment:
//!
//! 1. [`idea::extract_ideas`]: segment the text into at most five ideas
//! 2. [`tag::match_explicit_tag`]: honor ideas that name their own slot
//! 3. [`keyword::classify_by_keyword`]: infer a slot from dish vocabulary
//! 4. [`assignment::assign_slots`]: combine both with positional fallback
//!
//! Everything here is pure and synchronous; identical input always yields
//! an identical assignment.

pub mod assignment;
pub mod idea;
pub mod keyword;
pub mod slot;
pub mod tag;

pub use assignment::{AssignedIdea, Placement, SlotAssignment, assign_slots};
pub use idea::{CourseIdea, MAX_IDEAS, extract_ideas, extract_ideas_opt};
pub use keyword::{KEYWORD_FAMILIES, KeywordFamily, classify_by_keyword};
pub use slot::CourseSlot;
pub use tag::{TaggedIdea, match_explicit_tag};
