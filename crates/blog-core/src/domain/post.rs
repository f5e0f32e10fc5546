use std::fmt;

use serde::{Deserialize, Serialize};

/// Post entity - a movie review as stored in `blog_posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    #[serde(rename = "imgSrc")]
    pub img_src: String,
    pub pelicula: String,
    pub content: String,
}

impl Post {
    /// Materialize a stored post from its assigned id and field values.
    pub fn from_draft(id: i32, draft: PostDraft) -> Self {
        Self {
            id,
            title: draft.title,
            img_src: draft.img_src,
            pelicula: draft.pelicula,
            content: draft.content,
        }
    }
}

/// The four writable fields of a post, already validated.
///
/// Only [`PostDraft::from_fields`](crate::validation) hands these out, so a draft
/// reaching a repository always satisfies the field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub(crate) title: String,
    pub(crate) img_src: String,
    pub(crate) pelicula: String,
    pub(crate) content: String,
}

impl PostDraft {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn img_src(&self) -> &str {
        &self.img_src
    }

    pub fn pelicula(&self) -> &str {
        &self.pelicula
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Post identifier exactly as the client sent it.
///
/// Kept opaque: the store decides whether it matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(String);

impl PostId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PostId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for PostId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
