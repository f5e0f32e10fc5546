//! Field-level validation for post payloads.
//!
//! Each rule is a pure function over one raw JSON value. [`PostDraft::from_fields`]
//! runs every rule independently and reports all failures at once.

use std::fmt;

use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::domain::PostDraft;

/// Schemes accepted for `imgSrc`.
const URL_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Missing,
    NotAString,
    Empty,
    InvalidUrl,
}

impl ViolationKind {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            ViolationKind::Missing => "required",
            ViolationKind::NotAString => "not_a_string",
            ViolationKind::Empty => "empty",
            ViolationKind::InvalidUrl => "invalid_url",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ViolationKind::Missing => "field is required",
            ViolationKind::NotAString => "must be a string",
            ViolationKind::Empty => "must not be empty",
            ViolationKind::InvalidUrl => "must be a valid absolute URL",
        };
        f.write_str(message)
    }
}

/// A rejected field and the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn new(field: &'static str, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// Every field violation found in one payload. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Names of the rejected fields, in payload order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.violations.iter().map(|v| v.field)
    }
}

pub type FieldResult<T> = Result<T, FieldViolation>;

/// A present, non-empty JSON string.
pub fn non_empty_string(field: &'static str, value: Option<&Value>) -> FieldResult<String> {
    match value {
        None | Some(Value::Null) => Err(FieldViolation::new(field, ViolationKind::Missing)),
        Some(Value::String(s)) if s.is_empty() => {
            Err(FieldViolation::new(field, ViolationKind::Empty))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FieldViolation::new(field, ViolationKind::NotAString)),
    }
}

/// A non-empty string in `scheme://host/...` form that parses as an absolute URL.
///
/// The value is stored exactly as sent, so anything the URL parser would repair
/// (whitespace, control characters, backslashes, missing `//`) is rejected up front.
pub fn absolute_url(field: &'static str, value: Option<&Value>) -> FieldResult<String> {
    let raw = non_empty_string(field, value)?;
    let invalid = || FieldViolation::new(field, ViolationKind::InvalidUrl);

    if raw
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || c == '\\')
    {
        return Err(invalid());
    }

    let (scheme, authority) = raw.split_once("://").ok_or_else(invalid)?;
    if authority.starts_with('/') {
        return Err(invalid());
    }

    match Url::parse(&raw) {
        Ok(url)
            if url.has_host()
                && url.scheme().eq_ignore_ascii_case(scheme)
                && URL_SCHEMES.contains(&url.scheme()) =>
        {
            Ok(raw)
        }
        _ => Err(invalid()),
    }
}

fn collect<T>(result: FieldResult<T>, violations: &mut Vec<FieldViolation>) -> Option<T> {
    result.map_err(|violation| violations.push(violation)).ok()
}

impl PostDraft {
    /// Validate the four raw payload fields into a draft.
    pub fn from_fields(
        title: Option<&Value>,
        img_src: Option<&Value>,
        pelicula: Option<&Value>,
        content: Option<&Value>,
    ) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        let title = collect(non_empty_string("title", title), &mut violations);
        let img_src = collect(absolute_url("imgSrc", img_src), &mut violations);
        let pelicula = collect(non_empty_string("pelicula", pelicula), &mut violations);
        let content = collect(non_empty_string("content", content), &mut violations);

        match (title, img_src, pelicula, content) {
            (Some(title), Some(img_src), Some(pelicula), Some(content)) => Ok(Self {
                title,
                img_src,
                pelicula,
                content,
            }),
            _ => Err(ValidationError { violations }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(payload: &Value) -> Result<PostDraft, ValidationError> {
        PostDraft::from_fields(
            payload.get("title"),
            payload.get("imgSrc"),
            payload.get("pelicula"),
            payload.get("content"),
        )
    }

    #[test]
    fn test_non_empty_string_rules() {
        assert_eq!(non_empty_string("title", Some(&json!("A"))), Ok("A".to_owned()));
        assert_eq!(
            non_empty_string("title", None),
            Err(FieldViolation::new("title", ViolationKind::Missing))
        );
        assert_eq!(
            non_empty_string("title", Some(&Value::Null)),
            Err(FieldViolation::new("title", ViolationKind::Missing))
        );
        assert_eq!(
            non_empty_string("title", Some(&json!(""))),
            Err(FieldViolation::new("title", ViolationKind::Empty))
        );
        assert_eq!(
            non_empty_string("title", Some(&json!(42))),
            Err(FieldViolation::new("title", ViolationKind::NotAString))
        );
    }

    #[test]
    fn test_absolute_url_accepts_web_urls() {
        for url in [
            "http://x.test/a.png",
            "https://image.tmdb.org/t/p/w500/poster.jpg",
            "ftp://files.example.com/cover.png",
        ] {
            assert_eq!(absolute_url("imgSrc", Some(&json!(url))), Ok(url.to_owned()));
        }
    }

    #[test]
    fn test_absolute_url_rejects_malformed_values() {
        for url in [
            "not a url",
            "x.test/a.png",
            "/relative/path.png",
            "mailto:someone@example.com",
            "javascript:alert(1)",
            " http://x.test/a.png",
            "http://x.test/a.png ",
        ] {
            assert_eq!(
                absolute_url("imgSrc", Some(&json!(url))),
                Err(FieldViolation::new("imgSrc", ViolationKind::InvalidUrl)),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_absolute_url_rejects_values_the_parser_would_rewrite() {
        for url in [
            "http://x.test/a b.png",
            "http://x.te\nst/a.png",
            "http://x.test/\ta.png",
            "http://x.test\\a.png",
            "http:x.test/a.png",
            "http:/x.test/a.png",
            "http:///x.test/a.png",
            "http://x.test/a.png\u{7f}",
        ] {
            assert_eq!(
                absolute_url("imgSrc", Some(&json!(url))),
                Err(FieldViolation::new("imgSrc", ViolationKind::InvalidUrl)),
                "{url:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_absolute_url_keeps_the_value_as_sent() {
        let url = "HTTPS://X.test/Poster%20One.png?size=w500";
        assert_eq!(absolute_url("imgSrc", Some(&json!(url))), Ok(url.to_owned()));
    }

    #[test]
    fn test_absolute_url_reports_emptiness_before_format() {
        assert_eq!(
            absolute_url("imgSrc", Some(&json!(""))),
            Err(FieldViolation::new("imgSrc", ViolationKind::Empty))
        );
    }

    #[test]
    fn test_valid_payload_builds_draft() {
        let draft = draft(&json!({
            "title": "A",
            "imgSrc": "http://x.test/a.png",
            "pelicula": "B",
            "content": "C"
        }))
        .unwrap();

        assert_eq!(draft.title(), "A");
        assert_eq!(draft.img_src(), "http://x.test/a.png");
        assert_eq!(draft.pelicula(), "B");
        assert_eq!(draft.content(), "C");
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let err = draft(&json!({ "title": "", "imgSrc": "nope", "pelicula": 7 })).unwrap_err();

        assert_eq!(
            err.violations,
            vec![
                FieldViolation::new("title", ViolationKind::Empty),
                FieldViolation::new("imgSrc", ViolationKind::InvalidUrl),
                FieldViolation::new("pelicula", ViolationKind::NotAString),
                FieldViolation::new("content", ViolationKind::Missing),
            ]
        );
        assert_eq!(err.to_string(), "4 field(s) failed validation");
    }

    #[test]
    fn test_single_bad_field_reports_only_that_field() {
        let err = draft(&json!({
            "title": "",
            "imgSrc": "http://x.test/a.png",
            "pelicula": "B",
            "content": "C"
        }))
        .unwrap_err();

        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["title"]);
    }

    #[test]
    fn test_whitespace_only_text_is_accepted() {
        let draft = draft(&json!({
            "title": " ",
            "imgSrc": "http://x.test/a.png",
            "pelicula": "B",
            "content": "C"
        }));

        assert!(draft.is_ok());
    }
}
