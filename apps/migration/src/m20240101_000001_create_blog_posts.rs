use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogPosts::Id))
                    .col(text(BlogPosts::Title))
                    .col(text(BlogPosts::ImgSrc))
                    .col(text(BlogPosts::Pelicula))
                    .col(text(BlogPosts::Content))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    Title,
    #[sea_orm(iden = "imgSrc")]
    ImgSrc,
    Pelicula,
    Content,
}
