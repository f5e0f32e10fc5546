//! MySQL post repository.
//!
//! Statements are built with SeaORM's query builder, so ids and field values always
//! travel as bound parameters and never as SQL text.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, DeleteMany, EntityTrait, Insert, QueryFilter, QueryTrait,
    Select, UpdateMany,
};

use blog_core::domain::{MutationOutcome, Post, PostDraft, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::connections::DatabasePool;
use super::entity::post::{self, Entity as PostEntity};

/// Post repository backed by the `blog_posts` table.
pub struct MySqlPostRepository {
    pool: DatabasePool,
}

impl MySqlPostRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

pub(crate) fn select_by_id(id: &PostId) -> Select<PostEntity> {
    PostEntity::find().filter(post::Column::Id.eq(id.as_str().to_owned()))
}

pub(crate) fn insert_post(draft: &PostDraft) -> Insert<post::ActiveModel> {
    PostEntity::insert(post::ActiveModel::from_draft(draft))
}

pub(crate) fn update_post(id: &PostId, draft: &PostDraft) -> UpdateMany<PostEntity> {
    PostEntity::update_many()
        .col_expr(post::Column::Title, Expr::value(draft.title().to_owned()))
        .col_expr(post::Column::ImgSrc, Expr::value(draft.img_src().to_owned()))
        .col_expr(post::Column::Pelicula, Expr::value(draft.pelicula().to_owned()))
        .col_expr(post::Column::Content, Expr::value(draft.content().to_owned()))
        .filter(post::Column::Id.eq(id.as_str().to_owned()))
}

pub(crate) fn delete_post(id: &PostId) -> DeleteMany<PostEntity> {
    PostEntity::delete_many().filter(post::Column::Id.eq(id.as_str().to_owned()))
}

fn repo_error(err: DbErr) -> RepoError {
    match &err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => RepoError::Connection(err.to_string()),
        _ => {
            let message = err.to_string();
            if message.contains("Duplicate") || message.contains("constraint") {
                RepoError::Constraint(message)
            } else {
                RepoError::Query(message)
            }
        }
    }
}

#[async_trait]
impl PostRepository for MySqlPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .all(self.pool.conn())
            .await
            .map_err(repo_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, "Finding post by id");

        let row = select_by_id(id)
            .one(self.pool.conn())
            .await
            .map_err(repo_error)?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, draft: &PostDraft) -> Result<MutationOutcome, RepoError> {
        let db = self.pool.conn();
        // Executed as a raw statement so the insert id and row count come back together.
        let statement = insert_post(draft).build(db.get_database_backend());
        let result = db.execute(statement).await.map_err(repo_error)?;

        tracing::debug!(insert_id = result.last_insert_id(), "Inserted post");
        Ok(MutationOutcome::inserted(
            result.last_insert_id(),
            result.rows_affected(),
        ))
    }

    async fn update(&self, id: &PostId, draft: &PostDraft) -> Result<MutationOutcome, RepoError> {
        let result = update_post(id, draft)
            .exec(self.pool.conn())
            .await
            .map_err(repo_error)?;

        Ok(MutationOutcome::affected(result.rows_affected))
    }

    async fn delete(&self, id: &PostId) -> Result<MutationOutcome, RepoError> {
        let result = delete_post(id)
            .exec(self.pool.conn())
            .await
            .map_err(repo_error)?;

        Ok(MutationOutcome::affected(result.rows_affected))
    }
}
