//! Persistent favorites store (SQLite via sqlx).
//!
//! One row per discovered favorite, keyed on its view reference, carrying the
//! lifecycle timestamps and derived artifacts (download link, local filename).
//! Each phase re-queries "what remains to be done", so an interrupted run
//! resumes where it stopped.

mod db;
mod export;
mod items;
mod types;

pub use db::Store;
pub use export::EXPORT_COLUMNS;
pub use types::*;

#[cfg(test)]
mod tests;
