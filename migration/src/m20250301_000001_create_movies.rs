use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(pk_auto(Movies::Id))
                    .col(string(Movies::ReleaseDate))
                    .col(string(Movies::Title))
                    .col(text(Movies::Overview))
                    .col(double(Movies::Popularity))
                    .col(big_integer(Movies::VoteCount))
                    .col(double(Movies::VoteAverage))
                    .col(string(Movies::OriginalLanguage))
                    .col(string(Movies::Genre))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_genre")
                    .table(Movies::Table)
                    .col(Movies::Genre)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    #[sea_orm(iden = "Release_Date")]
    ReleaseDate,
    #[sea_orm(iden = "Title")]
    Title,
    #[sea_orm(iden = "Overview")]
    Overview,
    #[sea_orm(iden = "Popularity")]
    Popularity,
    #[sea_orm(iden = "Vote_Count")]
    VoteCount,
    #[sea_orm(iden = "Vote_Average")]
    VoteAverage,
    #[sea_orm(iden = "Original_Language")]
    OriginalLanguage,
    #[sea_orm(iden = "Genre")]
    Genre,
}
