//! Item CRUD on `Store`, split by direction.

mod read;
mod write;

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::types::Item;

pub(super) const ITEM_COLUMNS: &str = "id, view_reference, title, author, discovered_at, \
     download_link, resolved_at, local_filename, resolve_attempts, last_attempt_at";

pub(super) fn item_from_row(row: &SqliteRow) -> Item {
    Item {
        id: row.get("id"),
        view_reference: row.get("view_reference"),
        title: row.get("title"),
        author: row.get("author"),
        discovered_at: row.get("discovered_at"),
        download_link: row.get("download_link"),
        resolved_at: row.get("resolved_at"),
        local_filename: row.get("local_filename"),
        resolve_attempts: row.get("resolve_attempts"),
        last_attempt_at: row.get("last_attempt_at"),
    }
}
