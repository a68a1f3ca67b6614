use url::Url;

use crate::error::{FetchError, Result};

/// Parse a manifest source string into an absolute `http`/`https` URL.
///
/// # Examples
///
/// ```
/// use imgpull_fetch::parse_source;
///
/// assert!(parse_source("https://example.test/a.jpg").is_ok());
/// assert!(parse_source("not-a-url").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Url> {
    let url = Url::parse(source).map_err(|e| FetchError::InvalidUrl {
        url: source.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::InvalidUrl {
                url: source.to_string(),
                reason: format!("unsupported scheme '{other}'"),
            });
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(FetchError::InvalidUrl {
            url: source.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}
