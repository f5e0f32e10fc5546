use async_trait::async_trait;

use crate::domain::{MutationOutcome, Post, PostDraft, PostId};
use crate::error::RepoError;

/// Post storage, one operation per lifecycle action.
///
/// Every call is a single statement against the store; implementations hold no
/// post data of their own between calls.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in the store's natural order.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// The post whose id matches, if any.
    async fn get_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError>;

    /// Insert a new post; the outcome carries the assigned id.
    async fn create(&self, draft: &PostDraft) -> Result<MutationOutcome, RepoError>;

    /// Overwrite all four fields of the matching post.
    async fn update(&self, id: &PostId, draft: &PostDraft) -> Result<MutationOutcome, RepoError>;

    /// Hard-delete the matching post.
    async fn delete(&self, id: &PostId) -> Result<MutationOutcome, RepoError>;
}
