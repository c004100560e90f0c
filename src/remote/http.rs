//! ureq-backed remote client

use super::{FetchError, FetchResult, Remote};

/// Browser-identifying request headers. The image host rejects bare
/// programmatic user agents with 403, so every request carries these.
const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "User-Agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36",
    ),
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    ),
    ("Accept-Language", "en-US,en;q=0.5"),
    ("Connection", "keep-alive"),
    ("Referer", "https://wynem.com/"),
    ("Upgrade-Insecure-Requests", "1"),
];

/// Blocking HTTP client used for both the catalog document and textures.
#[derive(Debug, Clone, Default)]
pub struct HttpRemote;

impl HttpRemote {
    /// Create a new client.
    pub fn new() -> Self {
        Self
    }
}

impl Remote for HttpRemote {
    fn get(&self, url: &str) -> FetchResult<Vec<u8>> {
        let mut request = ureq::get(url);
        for (name, value) in BROWSER_HEADERS {
            request = request.set(name, value);
        }

        let response = request.call().map_err(|err| match err {
            ureq::Error::Status(status, _) => FetchError::Status {
                status,
                url: url.to_string(),
            },
            other => FetchError::Transport {
                url: url.to_string(),
                message: other.to_string(),
            },
        })?;

        let mut bytes = Vec::new();
        std::io::Read::read_to_end(&mut response.into_reader(), &mut bytes).map_err(|err| {
            FetchError::Transport {
                url: url.to_string(),
                message: err.to_string(),
            }
        })?;
        Ok(bytes)
    }
}
