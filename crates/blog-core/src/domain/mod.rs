//! Domain entities - the core business objects.

mod mutation;
mod post;

pub use mutation::MutationOutcome;
pub use post::{Post, PostDraft, PostId};
