//! Page fetcher.
//!
//! One GET per call with the fixed browser-like header bundle and the session
//! cookie. Success is any 2xx; everything else is a [`FetchError`]. No retries:
//! the pipeline decides whether a failure skips an item or ends the phase.

mod cookie;
mod error;
mod headers;
mod http;

pub use cookie::read_cookie;
pub use error::FetchError;
pub use headers::{HeaderBundle, DEFAULT_USER_AGENT};
pub use http::HttpFetcher;

use std::io::Write;

/// Blocking fetch interface used by the pipeline.
///
/// The pipeline owns one implementation for the whole run and calls it from
/// `spawn_blocking`, hence `Send + Sync`.
pub trait Fetch: Send + Sync {
    /// GET `url` and return the body as text (invalid UTF-8 is replaced).
    fn get_page(&self, url: &str) -> Result<String, FetchError>;

    /// GET `url` and stream the body into `sink`. Returns the number of bytes written.
    /// Nothing is written to `sink` for a non-2xx response.
    fn get_bytes(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError>;
}
