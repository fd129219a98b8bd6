//! Single bounded HTTP GET into memory.
//!
//! Uses the curl crate (libcurl): follows redirects, sends the configured
//! client identifier, and enforces connect and wall-clock timeouts. The
//! payload either arrives complete or the fetch fails; nothing touches the
//! filesystem here.

use crate::error::FetchError;
use std::time::Duration;
use url::Url;

/// Bound on dialing the remote host, separate from the transfer timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_REDIRECTS: u32 = 10;

/// Per-fetch knobs supplied by the caller.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Client identifier sent as `User-Agent`.
    pub user_agent: String,
    /// Hard wall-clock bound on the whole transfer.
    pub timeout: Duration,
}

/// Fetch the complete body of `url`, returning the payload bytes on success.
///
/// Rejects non-http(s) URLs before any network activity. A non-2xx status,
/// a curl-level failure (DNS, connect, TLS), or an exceeded timeout all
/// surface as `FetchError`; there is no retry.
pub fn fetch_bytes(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::Url(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::Url(format!(
                "{url}: scheme {other:?} not supported"
            )))
        }
    }

    let mut body: Vec<u8> = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    easy.useragent(&opts.user_agent)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(opts.timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    tracing::debug!(url, len = body.len(), "fetched payload");
    Ok(body)
}
