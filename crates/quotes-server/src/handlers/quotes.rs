//! Quote handlers

use crate::error::ApiResult;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use quotes_core::{Quote, QuoteChanges};

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Quote>>> {
    let quotes = state.quotes.list_quotes().await?;
    Ok(Json(quotes))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Quote>> {
    let quote = state.quotes.get_quote(id).await?;
    Ok(Json(quote))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<QuoteChanges>, JsonRejection>,
) -> ApiResult<Json<Quote>> {
    let Json(changes) = payload?;
    let quote = state.quotes.update_quote(id, changes).await?;
    Ok(Json(quote))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Quote>> {
    let quote = state.quotes.delete_quote(id).await?;
    Ok(Json(quote))
}
