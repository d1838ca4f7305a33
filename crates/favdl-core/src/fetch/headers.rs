//! Fixed request header bundle.

pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9";

/// Encodings advertised to the server. libcurl decodes these itself, so the
/// list is limited to what every libcurl build supports.
pub const ACCEPT_ENCODING: &str = "gzip, deflate";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/83.0.4103.116 Safari/537.36";

/// Request headers sent with every GET, as `(name, value)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBundle {
    pairs: Vec<(&'static str, String)>,
}

impl HeaderBundle {
    pub fn new(cookie: &str, user_agent: &str) -> Self {
        let pairs = vec![
            ("Accept", ACCEPT.to_string()),
            ("Accept-Encoding", ACCEPT_ENCODING.to_string()),
            ("Accept-Language", "en-US,en;q=0.9".to_string()),
            ("Cache-Control", "no-cache".to_string()),
            ("Cookie", cookie.to_string()),
            ("User-Agent", user_agent.to_string()),
        ];
        Self { pairs }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
