//! Storage layer
//!
//! Uses SQLite (embedded) for both tables.

pub mod db;

pub use db::Database;
