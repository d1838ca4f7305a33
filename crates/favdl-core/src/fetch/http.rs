//! libcurl-backed [`Fetch`] implementation.

use std::cell::{Cell, RefCell};
use std::io::Write;
use std::str;
use std::time::Duration;

use super::{read_cookie, Fetch, FetchError, HeaderBundle};
use crate::config::{FavdlConfig, HttpConfig};

/// Bytes of an error body kept for diagnostics.
const ERROR_BODY_LIMIT: usize = 2048;

/// Fetcher over `curl::easy::Easy`. A fresh handle is used per request; the
/// header bundle and timeouts are fixed for the lifetime of the fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    headers: HeaderBundle,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(cookie: &str, http: &HttpConfig) -> Self {
        Self {
            headers: HeaderBundle::new(cookie, &http.user_agent),
            connect_timeout: Duration::from_secs(http.connect_timeout_secs),
            timeout: Duration::from_secs(http.timeout_secs),
        }
    }

    /// Fetcher for a run: cookie from `cookie_file`, `[http]` section or defaults.
    pub fn from_config(cfg: &FavdlConfig) -> Self {
        Self::new(&read_cookie(&cfg.cookie_file), &cfg.http_or_default())
    }

    pub fn headers(&self) -> &HeaderBundle {
        &self.headers
    }

    fn easy(&self, url: &str) -> Result<curl::easy::Easy, FetchError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        for (name, value) in self.headers.iter() {
            if name.eq_ignore_ascii_case("accept-encoding") {
                // Let libcurl send the header and decode the body.
                easy.accept_encoding(value)?;
                continue;
            }
            list.append(&format!("{}: {}", name, value))?;
        }
        easy.http_headers(list)?;
        Ok(easy)
    }

    /// Runs one GET. Body bytes of a 2xx response go to `on_body`; the body of any
    /// other response is buffered (bounded) and returned inside `FetchError::Status`.
    fn perform<F>(&self, url: &str, mut on_body: F) -> Result<u64, FetchError>
    where
        F: FnMut(&[u8]) -> std::io::Result<()>,
    {
        let mut easy = self.easy(url)?;

        // Status of the most recent response head (redirects produce several).
        let status = Cell::new(0u32);
        let written = Cell::new(0u64);
        let error_body = RefCell::new(Vec::new());
        let sink_error: RefCell<Option<std::io::Error>> = RefCell::new(None);

        let result = {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Some(code) = parse_status_line(data) {
                    status.set(code);
                }
                true
            })?;
            transfer.write_function(|data| {
                if is_success(status.get()) {
                    match on_body(data) {
                        Ok(()) => {
                            written.set(written.get() + data.len() as u64);
                            Ok(data.len())
                        }
                        Err(e) => {
                            tracing::warn!("write failed for {}: {}", url, e);
                            *sink_error.borrow_mut() = Some(e);
                            Ok(0) // abort transfer
                        }
                    }
                } else {
                    let mut buf = error_body.borrow_mut();
                    let room = ERROR_BODY_LIMIT.saturating_sub(buf.len());
                    buf.extend_from_slice(&data[..data.len().min(room)]);
                    Ok(data.len())
                }
            })?;
            transfer.perform()
        };

        if let Some(e) = sink_error.into_inner() {
            return Err(FetchError::Sink(e));
        }
        result?;

        let code = easy.response_code()?;
        if !is_success(code) {
            let body = String::from_utf8_lossy(&error_body.into_inner()).into_owned();
            tracing::error!("GET {} failed: HTTP {}", url, code);
            tracing::debug!("error body: {}", body);
            return Err(FetchError::Status { status: code, body });
        }
        Ok(written.get())
    }
}

impl Fetch for HttpFetcher {
    fn get_page(&self, url: &str) -> Result<String, FetchError> {
        let mut body = Vec::new();
        self.perform(url, |data| {
            body.extend_from_slice(data);
            Ok(())
        })?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn get_bytes(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError> {
        self.perform(url, |data| sink.write_all(data))
    }
}

fn is_success(code: u32) -> bool {
    (200..300).contains(&code)
}

/// Parses `HTTP/1.1 200 OK` / `HTTP/2 404` into the status code.
fn parse_status_line(line: &[u8]) -> Option<u32> {
    let line = str::from_utf8(line).ok()?;
    if !line.starts_with("HTTP/") {
        return None;
    }
    line.split_whitespace().nth(1)?.parse().ok()
}
