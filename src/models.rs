use jiff::civil::Date;
use sea_orm::{ActiveValue, FromQueryResult};
use serde::{Deserialize, Serialize};

use crate::{
    entities::movie,
    error::{AppError, AppResult, FieldError},
};

pub type Movie = movie::Model;

/// Body of `POST /movies`. Every attribute is required.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewMovie {
    #[serde(rename = "Release_Date")]
    pub release_date: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Overview")]
    pub overview: String,
    #[serde(rename = "Popularity")]
    pub popularity: f64,
    #[serde(rename = "Vote_Count")]
    pub vote_count: i64,
    #[serde(rename = "Vote_Average")]
    pub vote_average: f64,
    #[serde(rename = "Original_Language")]
    pub original_language: String,
    #[serde(rename = "Genre")]
    pub genre: String,
}

/// Body of `PUT /movies/{id}`. Absent (or `null`) fields keep their stored value.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct MovieUpdate {
    #[serde(rename = "Release_Date")]
    pub release_date: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Overview")]
    pub overview: Option<String>,
    #[serde(rename = "Popularity")]
    pub popularity: Option<f64>,
    #[serde(rename = "Vote_Count")]
    pub vote_count: Option<i64>,
    #[serde(rename = "Vote_Average")]
    pub vote_average: Option<f64>,
    #[serde(rename = "Original_Language")]
    pub original_language: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
}

/// Row shape returned by `GET /movies`.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize)]
pub struct MovieSummary {
    #[serde(rename = "Title")]
    pub title: String,
    pub id: i64,
    #[serde(rename = "Release_Date")]
    pub release_date: String,
    #[serde(rename = "Popularity")]
    pub popularity: f64,
    #[serde(rename = "Genre")]
    pub genre: String,
}

impl NewMovie {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();
        check_release_date(&self.release_date, &mut errors);
        check_finite("Popularity", self.popularity, &mut errors);
        check_vote_count(self.vote_count, &mut errors);
        check_finite("Vote_Average", self.vote_average, &mut errors);
        into_result(errors)
    }

    pub fn into_active_model(self) -> movie::ActiveModel {
        movie::ActiveModel {
            id: ActiveValue::NotSet,
            release_date: ActiveValue::Set(self.release_date),
            title: ActiveValue::Set(self.title),
            overview: ActiveValue::Set(self.overview),
            popularity: ActiveValue::Set(self.popularity),
            vote_count: ActiveValue::Set(self.vote_count),
            vote_average: ActiveValue::Set(self.vote_average),
            original_language: ActiveValue::Set(self.original_language),
            genre: ActiveValue::Set(self.genre),
        }
    }
}

impl MovieUpdate {
    /// Validates only the fields that are present.
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();
        if let Some(date) = &self.release_date {
            check_release_date(date, &mut errors);
        }
        if let Some(popularity) = self.popularity {
            check_finite("Popularity", popularity, &mut errors);
        }
        if let Some(count) = self.vote_count {
            check_vote_count(count, &mut errors);
        }
        if let Some(average) = self.vote_average {
            check_finite("Vote_Average", average, &mut errors);
        }
        into_result(errors)
    }

    /// JSON names of the attributes this update will write.
    pub fn fields(&self) -> Vec<&'static str> {
        [
            ("Release_Date", self.release_date.is_some()),
            ("Title", self.title.is_some()),
            ("Overview", self.overview.is_some()),
            ("Popularity", self.popularity.is_some()),
            ("Vote_Count", self.vote_count.is_some()),
            ("Vote_Average", self.vote_average.is_some()),
            ("Original_Language", self.original_language.is_some()),
            ("Genre", self.genre.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Builds an active model targeting `id` in which only the supplied
    /// attributes are `Set`; everything else stays `NotSet` and is left out
    /// of the UPDATE statement.
    pub fn into_active_model(self, id: i64) -> movie::ActiveModel {
        movie::ActiveModel {
            id: ActiveValue::Unchanged(id),
            release_date: present(self.release_date),
            title: present(self.title),
            overview: present(self.overview),
            popularity: present(self.popularity),
            vote_count: present(self.vote_count),
            vote_average: present(self.vote_average),
            original_language: present(self.original_language),
            genre: present(self.genre),
        }
    }
}

fn present<V: Into<sea_orm::Value>>(value: Option<V>) -> ActiveValue<V> {
    value.map_or(ActiveValue::NotSet, ActiveValue::Set)
}

fn check_release_date(value: &str, errors: &mut Vec<FieldError>) {
    if value.parse::<Date>().is_err() {
        errors.push(FieldError::new("Release_Date", "expected a calendar date (YYYY-MM-DD)"));
    }
}

fn check_finite(field: &str, value: f64, errors: &mut Vec<FieldError>) {
    if !value.is_finite() {
        errors.push(FieldError::new(field, "must be a finite number"));
    }
}

fn check_vote_count(value: i64, errors: &mut Vec<FieldError>) {
    if value < 0 {
        errors.push(FieldError::new("Vote_Count", "must not be negative"));
    }
}

fn into_result(errors: Vec<FieldError>) -> AppResult<()> {
    if errors.is_empty() { Ok(()) } else { Err(AppError::Validation(errors)) }
}
