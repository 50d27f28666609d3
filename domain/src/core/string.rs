//! String utilities for the domain layer.
//!
//! Two normalizations are used across the engine:
//!
//! | Function | Punctuation | Used by |
//! |----------|-------------|---------|
//! | [`normalize_words`] | replaced by a space | keyword classification |
//! | [`normalize_for_match`] | removed | fidelity matching |

/// Lower-case, turn every non-alphanumeric character into a word break and
/// collapse runs of whitespace.
///
/// `"Pan-Seared  Scallops!"` becomes `"pan seared scallops"`.
pub fn normalize_words(s: &str) -> String {
    let spaced: String = s
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    collapse_whitespace(&spaced)
}

/// Lower-case, drop every character that is neither alphanumeric nor
/// whitespace, and collapse runs of whitespace.
///
/// `"Pan-Seared  Scallops!"` becomes `"panseared scallops"`.
pub fn normalize_for_match(s: &str) -> String {
    let stripped: String = s
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    collapse_whitespace(&stripped)
}

/// Join whitespace-separated words with single spaces.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check whether `phrase` occurs as whole words inside already-normalized
/// `text`, allowing a trailing plural `s` or `es` on the last word.
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    let padded = format!(" {} ", text);
    ["", "s", "es"]
        .iter()
        .any(|suffix| padded.contains(&format!(" {}{} ", phrase, suffix)))
}

/// Shortest head a compound word needs before its keyword tail
/// (`"cheese"` + `"cake"`), so `"remain"` never reads as `"main"`.
pub const MIN_COMPOUND_HEAD: usize = 3;

/// Check whether some word of already-normalized `text` is a compound ending
/// in the single-word `keyword`, optionally pluralized with `s` or `es`.
///
/// `"cheesecake"`, `"cupcakes"` and `"swordfish"` qualify; the bare keyword
/// itself does not (see [`contains_phrase`]).
pub fn contains_compound(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() || keyword.contains(' ') {
        return false;
    }
    text.split(' ').any(|word| {
        ["", "s", "es"].iter().any(|suffix| {
            word.strip_suffix(suffix)
                .and_then(|stem| stem.strip_suffix(keyword))
                .is_some_and(|head| head.chars().count() >= MIN_COMPOUND_HEAD)
        })
    })
}
