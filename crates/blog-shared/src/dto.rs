//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /posts` and `PUT /posts/{postId}`.
///
/// Fields stay as raw JSON so that missing, null and non-string values can each be
/// reported per field instead of failing deserialization as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPayload {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default, rename = "imgSrc")]
    pub img_src: Option<Value>,
    #[serde(default)]
    pub pelicula: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_keeps_raw_field_values() {
        let payload: PostPayload =
            serde_json::from_value(json!({ "title": 5, "imgSrc": "http://x.test/a.png" }))
                .unwrap();

        assert_eq!(payload.title, Some(json!(5)));
        assert_eq!(payload.img_src, Some(json!("http://x.test/a.png")));
        assert_eq!(payload.pelicula, None);
        assert_eq!(payload.content, None);
    }
}
