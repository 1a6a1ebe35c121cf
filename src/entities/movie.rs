use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A fully populated movie row. Serialises with the same keys the table uses.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "Release_Date")]
    #[serde(rename = "Release_Date")]
    pub release_date: String,
    #[sea_orm(column_name = "Title")]
    #[serde(rename = "Title")]
    pub title: String,
    #[sea_orm(column_name = "Overview", column_type = "Text")]
    #[serde(rename = "Overview")]
    pub overview: String,
    #[sea_orm(column_name = "Popularity")]
    #[serde(rename = "Popularity")]
    pub popularity: f64,
    #[sea_orm(column_name = "Vote_Count")]
    #[serde(rename = "Vote_Count")]
    pub vote_count: i64,
    #[sea_orm(column_name = "Vote_Average")]
    #[serde(rename = "Vote_Average")]
    pub vote_average: f64,
    #[sea_orm(column_name = "Original_Language")]
    #[serde(rename = "Original_Language")]
    pub original_language: String,
    #[sea_orm(column_name = "Genre")]
    #[serde(rename = "Genre")]
    pub genre: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
