//! Keyword-based slot inference for untagged ideas
//!
//! Vocabulary overlaps across courses ("chocolate pasta", "duck salad"), so
//! families are tested in a fixed priority order and the first hit wins:
//!
//! | Priority | Slot | Keywords |
//! |----------|------|----------|
//! | 1 | Dessert | cake, tart, pie, ice cream, sorbet, pudding, cookie |
//! | 2 | Amuse-Bouche | amuse, appetizer, starter, canapé, crostini |
//! | 3 | First Course | salad, soup, gazpacho, ceviche, carpaccio |
//! | 4 | Second Course | shrimp, pasta, risotto, gnocchi, seafood, fish, scallop |
//! | 5 | Main Course | beef, steak, lamb, pork, chicken, duck, turkey, entree, main |

use crate::core::string::{contains_compound, contains_phrase, normalize_words};
use crate::course::slot::CourseSlot;

/// A slot and the dish vocabulary that suggests it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordFamily {
    pub slot: CourseSlot,
    pub keywords: &'static [&'static str],
}

/// Keyword families in evaluation order
pub static KEYWORD_FAMILIES: [KeywordFamily; CourseSlot::COUNT] = [
    KeywordFamily {
        slot: CourseSlot::Dessert,
        keywords: &["cake", "tart", "pie", "ice cream", "sorbet", "pudding", "cookie"],
    },
    KeywordFamily {
        slot: CourseSlot::AmuseBouche,
        keywords: &["amuse", "appetizer", "starter", "canapé", "canape", "crostini"],
    },
    KeywordFamily {
        slot: CourseSlot::FirstCourse,
        keywords: &["salad", "soup", "gazpacho", "ceviche", "carpaccio"],
    },
    KeywordFamily {
        slot: CourseSlot::SecondCourse,
        keywords: &["shrimp", "pasta", "risotto", "gnocchi", "seafood", "fish", "scallop"],
    },
    KeywordFamily {
        slot: CourseSlot::MainCourse,
        keywords: &[
            "beef", "steak", "lamb", "pork", "chicken", "duck", "turkey", "entree", "entrée",
            "main",
        ],
    },
];

impl KeywordFamily {
    /// Check whether already-normalized text mentions any keyword of this family
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords
            .iter()
            .any(|kw| contains_phrase(normalized, kw) || contains_compound(normalized, kw))
    }
}

/// Infer a slot for an untagged idea from its dish vocabulary.
///
/// Keywords match whole words or the tail of a compound word (a trailing
/// plural is allowed), so `"cheesecake"` is a dessert while `"starter"` does
/// not trigger the dessert keyword `"tart"`.
///
/// # Examples
///
/// ```
/// use planner_domain::course::keyword::classify_by_keyword;
/// use planner_domain::course::slot::CourseSlot;
///
/// assert_eq!(classify_by_keyword("Chocolate tart"), Some(CourseSlot::Dessert));
/// assert_eq!(classify_by_keyword("Duck breast"), Some(CourseSlot::MainCourse));
/// assert_eq!(classify_by_keyword("Oyster"), None);
/// ```
pub fn classify_by_keyword(idea: &str) -> Option<CourseSlot> {
    let normalized = normalize_words(idea);
    KEYWORD_FAMILIES
        .iter()
        .find(|family| family.matches(&normalized))
        .map(|family| family.slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_family() {
        assert_eq!(classify_by_keyword("Lemon sorbet"), Some(CourseSlot::Dessert));
        assert_eq!(classify_by_keyword("Vanilla ice cream"), Some(CourseSlot::Dessert));
        assert_eq!(classify_by_keyword("Tomato crostini"), Some(CourseSlot::AmuseBouche));
        assert_eq!(classify_by_keyword("Canapé trio"), Some(CourseSlot::AmuseBouche));
        assert_eq!(classify_by_keyword("Beet carpaccio"), Some(CourseSlot::FirstCourse));
        assert_eq!(classify_by_keyword("Mushroom risotto"), Some(CourseSlot::SecondCourse));
        assert_eq!(classify_by_keyword("Herb-crusted lamb"), Some(CourseSlot::MainCourse));
    }

    #[test]
    fn test_priority_order_resolves_overlaps() {
        // Dessert outranks everything else
        assert_eq!(classify_by_keyword("Chocolate chicken pie"), Some(CourseSlot::Dessert));
        // First course outranks main course
        assert_eq!(classify_by_keyword("Duck salad"), Some(CourseSlot::FirstCourse));
        // Second course outranks main course
        assert_eq!(classify_by_keyword("Seafood and steak"), Some(CourseSlot::SecondCourse));
        // Amuse outranks first course
        assert_eq!(classify_by_keyword("Soup starter"), Some(CourseSlot::AmuseBouche));
    }

    #[test]
    fn test_whole_word_matching() {
        assert_eq!(classify_by_keyword("Starter plate"), Some(CourseSlot::AmuseBouche));
        assert_eq!(classify_by_keyword("Pieces of toast"), None);
        assert_eq!(classify_by_keyword("Remains of the garden"), None);
    }

    #[test]
    fn test_compound_dish_names() {
        assert_eq!(classify_by_keyword("Cheesecake"), Some(CourseSlot::Dessert));
        assert_eq!(classify_by_keyword("Cupcakes"), Some(CourseSlot::Dessert));
        assert_eq!(classify_by_keyword("Swordfish"), Some(CourseSlot::SecondCourse));
        assert_eq!(classify_by_keyword("Shellfish platter"), Some(CourseSlot::SecondCourse));
        assert_eq!(classify_by_keyword("Monkfish"), Some(CourseSlot::SecondCourse));
        // Compound matching must not pull these into Dessert
        assert_eq!(classify_by_keyword("Beef tartare"), Some(CourseSlot::MainCourse));
        assert_eq!(classify_by_keyword("Starter plate"), Some(CourseSlot::AmuseBouche));
    }

    #[test]
    fn test_plurals_and_punctuation() {
        assert_eq!(classify_by_keyword("Seared scallops!"), Some(CourseSlot::SecondCourse));
        assert_eq!(classify_by_keyword("Cookies & cream"), Some(CourseSlot::Dessert));
        assert_eq!(classify_by_keyword("ICE-CREAM sundae"), Some(CourseSlot::Dessert));
    }

    #[test]
    fn test_unclassifiable() {
        assert_eq!(classify_by_keyword("Oyster"), None);
        assert_eq!(classify_by_keyword("Lobster bisque"), None);
        assert_eq!(classify_by_keyword("Chocolate soufflé"), None);
        assert_eq!(classify_by_keyword(""), None);
    }

    #[test]
    fn test_family_order_is_fixed() {
        let order: Vec<CourseSlot> = KEYWORD_FAMILIES.iter().map(|f| f.slot).collect();
        assert_eq!(
            order,
            vec![
                CourseSlot::Dessert,
                CourseSlot::AmuseBouche,
                CourseSlot::FirstCourse,
                CourseSlot::SecondCourse,
                CourseSlot::MainCourse,
            ]
        );
    }
}
