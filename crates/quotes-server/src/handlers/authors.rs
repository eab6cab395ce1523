//! Author handlers

use crate::error::ApiResult;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use quotes_core::{Author, AuthorChanges, NewAuthor, NewQuote, Quote};

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Author>>> {
    let authors = state.authors.list_authors().await?;
    Ok(Json(authors))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Author>> {
    let author = state.authors.get_author(id).await?;
    Ok(Json(author))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewAuthor>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Author>)> {
    let Json(new_author) = payload?;
    let author = state.authors.create_author(new_author).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<AuthorChanges>, JsonRejection>,
) -> ApiResult<Json<Author>> {
    let Json(changes) = payload?;
    let author = state.authors.update_author(id, changes).await?;
    Ok(Json(author))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Author>> {
    let author = state.authors.delete_author(id).await?;
    Ok(Json(author))
}

/// Quotes owned by one author
pub async fn list_quotes(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
) -> ApiResult<Json<Vec<Quote>>> {
    let quotes = state.quotes.list_author_quotes(author_id).await?;
    Ok(Json(quotes))
}

pub async fn create_quote(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
    payload: Result<Json<NewQuote>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Quote>)> {
    let Json(new_quote) = payload?;
    let quote = state.quotes.create_quote(author_id, new_quote).await?;
    Ok((StatusCode::CREATED, Json(quote)))
}
