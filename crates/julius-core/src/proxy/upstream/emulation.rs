//! Browser header emulation for the Julius web API.
//!
//! The playground only serves requests that look like they come from its own
//! web client, so every chat call carries the same fixed header set. The set
//! lives here as one table instead of being spread across request builders.

use julius_types::RelayError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Header carrying the temporary session token.
pub const SESSION_HEADER: &str = "is-demo";
/// Header carrying the per-request conversation id.
pub const CONVERSATION_HEADER: &str = "conversation-id";

/// Chrome on Windows, matching the `sec-ch-ua-platform` below.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36";

/// Static headers sent with every chat request.
const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("content-type", "application/json"),
    ("platform", "web"),
    ("user-agent", BROWSER_USER_AGENT),
    ("interactive-charts", "true"),
    ("use-dict", "true"),
    ("gcs", "true"),
    ("is-native", "false"),
    ("sec-ch-ua-platform", "Windows"),
    ("accept", "*/*"),
    ("sec-fetch-site", "same-site"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-dest", "empty"),
];

/// Build the full header set for one chat call.
///
/// Fails only if the session token or conversation id contain bytes that are
/// not valid in a header value.
pub fn build_chat_headers(
    session_token: &str,
    conversation_id: &str,
) -> Result<HeaderMap, RelayError> {
    let mut headers = HeaderMap::with_capacity(BROWSER_HEADERS.len() + 2);
    for &(name, value) in BROWSER_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
    headers.insert(
        HeaderName::from_static(SESSION_HEADER),
        HeaderValue::from_str(session_token)
            .map_err(|e| RelayError::protocol(format!("Unusable session token: {}", e)))?,
    );
    headers.insert(
        HeaderName::from_static(CONVERSATION_HEADER),
        HeaderValue::from_str(conversation_id).map_err(|e| RelayError::RequestEncoding {
            message: format!("Invalid conversation id: {}", e),
        })?,
    );
    Ok(headers)
}
