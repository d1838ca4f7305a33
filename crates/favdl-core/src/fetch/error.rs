//! Fetch error type: transport failure vs. non-2xx response vs. local sink failure.

/// Error returned by a single GET. Callers branch on the variant to decide
/// between skip-and-continue and abort; none of them is retried here.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connect, timeout, TLS, ...).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    /// HTTP response had a non-2xx status. `body` is kept (truncated) for diagnostics.
    #[error("HTTP {status}")]
    Status { status: u32, body: String },
    /// Writing the response body to its destination failed (disk full, permissions).
    #[error("sink: {0}")]
    Sink(#[from] std::io::Error),
}

impl FetchError {
    /// HTTP status if the server answered at all.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
