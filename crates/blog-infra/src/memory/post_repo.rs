//! In-memory post repository with the same contract as the MySQL one.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{MutationOutcome, Post, PostDraft, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, Post>,
    last_id: i32,
}

/// Post repository over an ordered map, ids assigned like an auto-increment column.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids that do not parse as integers match nothing here. MySQL instead coerces the
    /// bound string against the INT column, so `1abc` finds post 1 there.
    fn key(id: &PostId) -> Option<i32> {
        id.as_str().trim().parse().ok()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(Self::key(id).and_then(|key| table.rows.get(&key).cloned()))
    }

    async fn create(&self, draft: &PostDraft) -> Result<MutationOutcome, RepoError> {
        let mut table = self.table.write().await;

        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Constraint("Post id space exhausted".to_string()))?;
        table.last_id = id;
        table.rows.insert(id, Post::from_draft(id, draft.clone()));

        Ok(MutationOutcome::inserted(u64::from(id.unsigned_abs()), 1))
    }

    async fn update(&self, id: &PostId, draft: &PostDraft) -> Result<MutationOutcome, RepoError> {
        let mut table = self.table.write().await;

        let existing = match Self::key(id) {
            Some(key) => table.rows.get_mut(&key),
            None => None,
        };
        let affected = match existing {
            Some(post) => {
                *post = Post::from_draft(post.id, draft.clone());
                1
            }
            None => 0,
        };

        Ok(MutationOutcome::affected(affected))
    }

    async fn delete(&self, id: &PostId) -> Result<MutationOutcome, RepoError> {
        let mut table = self.table.write().await;

        let removed = Self::key(id).and_then(|key| table.rows.remove(&key));
        Ok(MutationOutcome::affected(u64::from(removed.is_some())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(title: &str, img_src: &str) -> PostDraft {
        PostDraft::from_fields(
            Some(&json!(title)),
            Some(&json!(img_src)),
            Some(&json!("B")),
            Some(&json!("C")),
        )
        .unwrap()
    }

    fn id_of(outcome: MutationOutcome) -> PostId {
        PostId::new(outcome.insert_id.unwrap().to_string())
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = InMemoryPostRepository::new();

        let outcome = repo.create(&draft("A", "http://x.test/a.png")).await.unwrap();
        assert_eq!(outcome, MutationOutcome::inserted(1, 1));

        let post = repo.get_by_id(&id_of(outcome)).await.unwrap().unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "A");
        assert_eq!(post.img_src, "http://x.test/a.png");
        assert_eq!(post.pelicula, "B");
        assert_eq!(post.content, "C");
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let repo = InMemoryPostRepository::new();
        let id = id_of(repo.create(&draft("A", "http://x.test/a.png")).await.unwrap());

        let outcome = repo
            .update(&id, &draft("Z", "https://y.test/z.jpg"))
            .await
            .unwrap();
        assert_eq!(outcome.affected_rows, 1);

        let post = repo.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(post.title, "Z");
        assert_eq!(post.img_src, "https://y.test/z.jpg");
        assert_eq!(post.id, 1);
    }

    #[tokio::test]
    async fn test_missing_or_unparseable_ids_affect_nothing() {
        let repo = InMemoryPostRepository::new();
        repo.create(&draft("A", "http://x.test/a.png")).await.unwrap();

        for raw in ["999999", "abc", "1 OR 1=1"] {
            let id = PostId::from(raw);
            assert!(repo.get_by_id(&id).await.unwrap().is_none());
            assert_eq!(
                repo.update(&id, &draft("Z", "http://x.test/z.png")).await.unwrap(),
                MutationOutcome::affected(0)
            );
            assert_eq!(repo.delete(&id).await.unwrap(), MutationOutcome::affected(0));
        }

        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_reflects_creates_and_deletes() {
        let repo = InMemoryPostRepository::new();

        let mut ids = Vec::new();
        for n in 0..5 {
            let outcome = repo
                .create(&draft(&format!("Post {n}"), "http://x.test/a.png"))
                .await
                .unwrap();
            ids.push(id_of(outcome));
        }
        for id in &ids[..2] {
            assert_eq!(repo.delete(id).await.unwrap().affected_rows, 1);
        }

        let posts = repo.list_all().await.unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(
            posts.iter().map(|p| p.title.as_str()).collect::<Vec<_>>(),
            vec!["Post 2", "Post 3", "Post 4"]
        );
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryPostRepository::new();
        let first = id_of(repo.create(&draft("A", "http://x.test/a.png")).await.unwrap());
        repo.delete(&first).await.unwrap();

        let second = repo.create(&draft("B", "http://x.test/b.png")).await.unwrap();
        assert_eq!(second.insert_id, Some(2));
        assert!(repo.get_by_id(&first).await.unwrap().is_none());
    }
}
