use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::{
    AppState,
    error::AppResult,
    models::{Movie, MovieSummary, MovieUpdate, NewMovie},
    query::{ListParams, MovieQuery},
};

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<Json<Vec<MovieSummary>>> {
    let Query(params) = params?;
    let movies = state.store.list(&MovieQuery::from(params)).await?;
    Ok(Json(movies))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Movie>> {
    let Path(id) = id?;
    Ok(Json(state.store.get(id).await?))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewMovie>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let Json(payload) = payload?;
    payload.validate()?;

    let movie = state.store.create(payload).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<MovieUpdate>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let Path(id) = id?;
    let Json(update) = payload?;
    update.validate()?;

    Ok(Json(state.store.update(id, update).await?))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
