//! Quotes Server
//!
//! HTTP service for authors and their quotes, backed by an embedded SQLite
//! database. An author owns many quotes; deleting the author deletes them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;
pub mod storage;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ApiError, ApiResult};
use services::{AuthorService, QuoteService};
use storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub authors: Arc<AuthorService>,
    pub quotes: Arc<QuoteService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        let authors = Arc::new(AuthorService::new(db.clone()));
        let quotes = Arc::new(QuoteService::new(db.clone(), db.clone()));
        Self {
            db,
            authors,
            quotes,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/authors",
            get(handlers::authors::list).post(handlers::authors::create),
        )
        .route(
            "/authors/:id",
            get(handlers::authors::get)
                .put(handlers::authors::update)
                .delete(handlers::authors::delete),
        )
        .route(
            "/authors/:id/quotes",
            get(handlers::authors::list_quotes).post(handlers::authors::create_quote),
        )
        .route("/quotes", get(handlers::quotes::list))
        .route(
            "/quotes/:id",
            get(handlers::quotes::get)
                .put(handlers::quotes::update)
                .delete(handlers::quotes::delete),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
