use std::borrow::Cow;

use serde_json::Value;
use validator::{Validate, ValidateNested, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::{Result, ShapeError, Violation};
use crate::models::{CursorPaging, Paging};

const ITEMS_EXCEED_LIMIT: &str = "items_exceed_limit";
const ITEMS_EXCEED_TOTAL: &str = "items_exceed_total";
const MISSING_CURSORS: &str = "missing_cursors";
const CHAPTER_COUNT_MISMATCH: &str = "chapter_count_mismatch";

/// Errors raised by a struct as a whole rather than by one of its fields.
const STRUCT_LEVEL: &str = "__all__";

/// Structural invariants a decoded value is expected to hold.
///
/// Decoding only guarantees field presence and types; the relations
/// between fields that the API documents are checked through
/// [`validator::Validate`] and reported here as [`Violation`]s.
pub trait Conformance {
    /// Every broken invariant, with `context` naming the location.
    fn violations_at(&self, context: &str) -> Vec<Violation>;

    fn violations(&self) -> Vec<Violation> {
        self.violations_at("$")
    }

    /// Fails with the first violation found.
    fn ensure(&self) -> Result<()> {
        match self.violations().into_iter().next() {
            Some(violation) => Err(ShapeError::Invariant(violation)),
            None => Ok(()),
        }
    }
}

impl<V: Validate> Conformance for V {
    fn violations_at(&self, context: &str) -> Vec<Violation> {
        let mut violations = Vec::new();
        if let Err(errors) = self.validate() {
            collect_violations(context, &errors, &mut violations);
        }
        violations
    }
}

impl<T> Validate for Paging<T> {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let errors = page_errors(self.items.len(), self.limit, self.offset, self.total);
        into_result(errors)
    }
}

impl<T> Validate for CursorPaging<T> {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = page_errors(self.items.len(), self.limit, 0, self.total);

        if !self.items.is_empty() && self.cursors.after.is_none() && self.cursors.before.is_none() {
            errors.push(ValidationError::new(MISSING_CURSORS));
        }

        into_result(errors)
    }
}

impl<'v_a, T> ValidateNested<'v_a> for Paging<T> {
    type Args = ();

    fn validate_nested(
        &self,
        field_name: &'static str,
        _args: Self::Args,
    ) -> std::result::Result<(), ValidationErrors> {
        nest(field_name, self.validate())
    }
}

impl<'v_a, T> ValidateNested<'v_a> for CursorPaging<T> {
    type Args = ();

    fn validate_nested(
        &self,
        field_name: &'static str,
        _args: Self::Args,
    ) -> std::result::Result<(), ValidationErrors> {
        nest(field_name, self.validate())
    }
}

// Mirrors what `#[derive(Validate)]` generates for `ValidateNested`.
fn nest(
    field_name: &'static str,
    result: std::result::Result<(), ValidationErrors>,
) -> std::result::Result<(), ValidationErrors> {
    result.map_err(|errors| {
        ValidationErrors(std::collections::HashMap::from([(
            field_name,
            ValidationErrorsKind::Struct(Box::new(errors)),
        )]))
    })
}

pub(crate) fn chapter_count_mismatch(total_chapters: u32, paged: u32) -> ValidationError {
    with_params(
        CHAPTER_COUNT_MISMATCH,
        &[("total_chapters", total_chapters as u64), ("paged", paged as u64)],
    )
}

fn page_errors(items: usize, limit: u32, offset: u32, total: u32) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if items > limit as usize {
        errors.push(with_params(
            ITEMS_EXCEED_LIMIT,
            &[("items", items as u64), ("limit", limit as u64)],
        ));
    }

    if offset as usize + items > total as usize {
        errors.push(with_params(
            ITEMS_EXCEED_TOTAL,
            &[
                ("offset", offset as u64),
                ("items", items as u64),
                ("total", total as u64),
            ],
        ));
    }

    errors
}

fn with_params(code: &'static str, params: &[(&'static str, u64)]) -> ValidationError {
    let mut error = ValidationError::new(code);
    for (name, value) in params {
        error.add_param(Cow::from(*name), value);
    }
    error
}

fn into_result(list: Vec<ValidationError>) -> std::result::Result<(), ValidationErrors> {
    if list.is_empty() {
        return Ok(());
    }
    let mut errors = ValidationErrors::new();
    for error in list {
        errors.add(STRUCT_LEVEL, error);
    }
    Err(errors)
}

// Struct-level errors come first, then fields in name order, so the
// result does not depend on map iteration.
fn collect_violations(context: &str, errors: &ValidationErrors, out: &mut Vec<Violation>) {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by_key(|(field, _)| (!is_struct_level(field), **field));

    for (field, kind) in fields {
        let location = if is_struct_level(field) {
            context.to_string()
        } else {
            format!("{context}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                out.extend(list.iter().filter_map(|error| violation(&location, error)))
            }
            ValidationErrorsKind::Struct(nested) => collect_violations(&location, nested, out),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    collect_violations(&format!("{location}[{index}]"), nested, out);
                }
            }
        }
    }
}

fn is_struct_level(field: &str) -> bool {
    field == STRUCT_LEVEL || field.starts_with("__")
}

fn violation(context: &str, error: &ValidationError) -> Option<Violation> {
    let param = |name: &str| error.params.get(name).and_then(Value::as_u64).unwrap_or_default();
    let context = context.to_string();

    let violation = match &*error.code {
        ITEMS_EXCEED_LIMIT => Violation::ItemsExceedLimit {
            context,
            items: param("items") as usize,
            limit: param("limit") as u32,
        },
        ITEMS_EXCEED_TOTAL => Violation::ItemsExceedTotal {
            context,
            offset: param("offset") as u32,
            items: param("items") as usize,
            total: param("total") as u32,
        },
        MISSING_CURSORS => Violation::MissingCursors { context },
        CHAPTER_COUNT_MISMATCH => Violation::ChapterCountMismatch {
            context,
            total_chapters: param("total_chapters") as u32,
            paged: param("paged") as u32,
        },
        other => {
            tracing::warn!("Ignoring unrecognised validation code {} at {}", other, context);
            return None;
        }
    };

    Some(violation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::artist::tests::artist_json;
    use crate::models::audiobook::tests::{simplified_audiobook_json, simplified_chapter_json};
    use crate::models::{Audiobook, Cursor, FollowedArtistsResults, SearchContent};
    use serde_json::json;

    fn page(items: Vec<u32>, limit: u32, offset: u32, total: u32) -> Paging<u32> {
        Paging {
            href: "https://api.spotify.com/v1/me/tracks".to_string(),
            items,
            limit,
            next: None,
            offset,
            previous: None,
            total,
        }
    }

    #[test]
    fn test_page_within_bounds() {
        let page = page(vec![1, 2, 3], 3, 10, 13);
        assert!(page.violations().is_empty());
        assert!(page.ensure().is_ok());
    }

    #[test]
    fn test_page_items_exceed_limit() {
        let page = page(vec![1, 2, 3], 2, 0, 50);
        assert_eq!(
            page.violations(),
            vec![Violation::ItemsExceedLimit {
                context: "$".to_string(),
                items: 3,
                limit: 2,
            }]
        );
        assert!(matches!(page.ensure(), Err(ShapeError::Invariant(_))));
    }

    #[test]
    fn test_page_items_exceed_total() {
        let page = page(vec![1, 2], 20, 40, 41);
        assert_eq!(
            page.violations(),
            vec![Violation::ItemsExceedTotal {
                context: "$".to_string(),
                offset: 40,
                items: 2,
                total: 41,
            }]
        );
    }

    #[test]
    fn test_cursor_page_needs_a_cursor() {
        let mut page = CursorPaging {
            href: "https://api.spotify.com/v1/me/following?type=artist".to_string(),
            items: vec!["a", "b"],
            limit: 20,
            next: None,
            cursors: Cursor::default(),
            total: 2,
        };
        assert_eq!(
            page.violations(),
            vec![Violation::MissingCursors {
                context: "$".to_string()
            }]
        );

        page.cursors.before = Some("0I2XqVXqHScXjHhk6AYYRe".to_string());
        assert!(page.violations().is_empty());

        page.items.clear();
        page.cursors.before = None;
        assert!(page.violations().is_empty());
    }

    #[test]
    fn test_audiobook_chapter_count_mismatch() {
        let mut json = simplified_audiobook_json();
        json["total_chapters"] = json!(5);
        json["chapters"] = json!({
            "href": "https://api.spotify.com/v1/audiobooks/7iHfbu1YPACw6oZPAFJtqe/chapters",
            "items": [simplified_chapter_json(0), simplified_chapter_json(1)],
            "limit": 1,
            "next": null,
            "offset": 0,
            "previous": null,
            "total": 2
        });

        let audiobook: Audiobook = serde_json::from_value(json).unwrap();
        let violations = audiobook.violations_at("audiobook");

        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0],
            Violation::ChapterCountMismatch {
                context: "audiobook".to_string(),
                total_chapters: 5,
                paged: 2,
            }
        );
        assert_eq!(violations[1].context(), "audiobook.chapters");
    }

    #[test]
    fn test_search_content_reports_category_context() {
        let content: SearchContent = serde_json::from_value(json!({
            "audiobooks": {
                "href": "https://api.spotify.com/v1/search?query=dune&type=audiobook",
                "items": [simplified_audiobook_json()],
                "limit": 1,
                "next": null,
                "offset": 0,
                "previous": null,
                "total": 0
            }
        }))
        .unwrap();

        let violations = content.violations_at("search");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].context(), "search.audiobooks");
    }

    #[test]
    fn test_validate_reports_codes_and_params() {
        let page = page(vec![1, 2, 3], 2, 0, 50);
        let errors = page.validate().unwrap_err();
        let field = errors.field_errors();
        let list = field.get(STRUCT_LEVEL).unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].code, ITEMS_EXCEED_LIMIT);
        assert_eq!(list[0].params.get("items"), Some(&serde_json::json!(3)));
        assert_eq!(list[0].params.get("limit"), Some(&serde_json::json!(2)));
    }

    #[test]
    fn test_audiobook_validate_nests_chapter_errors() {
        let mut json = simplified_audiobook_json();
        json["chapters"] = json!({
            "href": "https://api.spotify.com/v1/audiobooks/7iHfbu1YPACw6oZPAFJtqe/chapters",
            "items": [simplified_chapter_json(0), simplified_chapter_json(1)],
            "limit": 1,
            "next": null,
            "offset": 0,
            "previous": null,
            "total": 2
        });

        let audiobook: Audiobook = serde_json::from_value(json).unwrap();
        let errors = audiobook.validate().unwrap_err();
        assert!(errors.errors().contains_key("chapters"));
        assert_eq!(
            audiobook.violations(),
            vec![Violation::ItemsExceedLimit {
                context: "$.chapters".to_string(),
                items: 2,
                limit: 1,
            }]
        );
    }

    #[test]
    fn test_followed_artists_nest_cursor_errors() {
        let results: FollowedArtistsResults = serde_json::from_value(json!({
            "artists": {
                "href": "https://api.spotify.com/v1/me/following?type=artist",
                "items": [artist_json("0LcJLqbBmaGUft1e9Mm8HV", "ABBA")],
                "limit": 20,
                "next": null,
                "cursors": {"after": null, "before": null},
                "total": 1
            }
        }))
        .unwrap();

        assert!(results.validate().is_err());
        assert_eq!(
            results.violations(),
            vec![Violation::MissingCursors {
                context: "$.artists".to_string()
            }]
        );
    }

    #[test]
    fn test_unknown_code_is_skipped() {
        assert_eq!(violation("$", &ValidationError::new("length")), None);
    }
}
