//! Parsing generated menus out of free-form model responses.
//!
//! Models are asked for JSON but often wrap it in prose or a markdown
//! fence. The parser tries the whole response first, then the outermost
//! `{...}` object, then the outermost `[...]` array.
//!
//! Accepted payloads:
//!
//! 1. **Envelope** (preferred): `{"menus": [{...}, ...]}`
//! 2. **Bare list**: `[{...}, ...]`
//! 3. **Single menu**: `{"courses": [...]}`

use crate::core::error::DomainError;
use crate::menu::entities::MenuVariant;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum MenuPayload {
    Envelope { menus: Vec<MenuVariant> },
    List(Vec<MenuVariant>),
    Single(MenuVariant),
}

impl MenuPayload {
    fn into_menus(self) -> Vec<MenuVariant> {
        match self {
            MenuPayload::Envelope { menus } | MenuPayload::List(menus) => menus,
            MenuPayload::Single(menu) => vec![menu],
        }
    }
}

/// Parse the menus contained in a generation response.
///
/// Menus without an id are numbered by position (1-based).
///
/// # Examples
///
/// ```
/// use planner_domain::menu::parse_menus_response;
///
/// let response = r#"Here you go: {"menus": [
///     {"style": "Classic", "courses": [{"course": "Dessert", "name": "Tart"}]}
/// ]}"#;
/// let menus = parse_menus_response(response).unwrap();
/// assert_eq!(menus.len(), 1);
/// assert_eq!(menus[0].id, 1);
/// ```
pub fn parse_menus_response(response: &str) -> Result<Vec<MenuVariant>, DomainError> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MalformedResponse("empty response".to_string()));
    }

    let candidates = [
        Some(trimmed),
        outermost(trimmed, '{', '}'),
        outermost(trimmed, '[', ']'),
    ];

    let mut last_error = None;
    for candidate in candidates.into_iter().flatten() {
        match serde_json::from_str::<MenuPayload>(candidate) {
            Ok(payload) => {
                let mut menus = payload.into_menus();
                for (i, menu) in menus.iter_mut().enumerate() {
                    if menu.id == 0 {
                        menu.id = u8::try_from(i + 1).unwrap_or(u8::MAX);
                    }
                }
                return Ok(menus);
            }
            Err(e) => last_error = Some(e.to_string()),
        }
    }

    Err(DomainError::MalformedResponse(
        last_error.unwrap_or_else(|| "no JSON payload found".to_string()),
    ))
}

fn outermost(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}
