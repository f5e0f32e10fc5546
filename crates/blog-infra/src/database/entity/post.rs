//! `blog_posts` entity for SeaORM.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use blog_core::domain::{Post, PostDraft};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_name = "imgSrc", column_type = "Text")]
    pub img_src: String,
    #[sea_orm(column_type = "Text")]
    pub pelicula: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            img_src: model.img_src,
            pelicula: model.pelicula,
            content: model.content,
        }
    }
}

impl ActiveModel {
    /// Insertable row; the id is left to the store's auto-increment.
    pub fn from_draft(draft: &PostDraft) -> Self {
        Self {
            id: NotSet,
            title: Set(draft.title().to_owned()),
            img_src: Set(draft.img_src().to_owned()),
            pelicula: Set(draft.pelicula().to_owned()),
            content: Set(draft.content().to_owned()),
        }
    }
}
