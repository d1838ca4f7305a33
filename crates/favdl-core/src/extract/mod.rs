//! Extraction engine: pattern-based parsing of the two page layouts we visit.
//!
//! Every function here is pure and total. Malformed or empty input yields an
//! empty set or `None`, never an error; the pipeline records the gap.

mod download;
mod entities;
mod favorites;
mod pagination;

pub use download::extract_download_url;
pub use entities::decode_entities;
pub use favorites::{extract_favorites, Favorite};
pub use pagination::extract_next_page;
