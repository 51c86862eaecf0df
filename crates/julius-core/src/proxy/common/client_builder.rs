use julius_types::RelayError;

/// Build the shared outbound HTTP client.
///
/// No request timeout is set: a hung backend blocks its request until the
/// client gives up.
pub fn build_http_client() -> Result<reqwest::Client, RelayError> {
    reqwest::Client::builder()
        .tcp_nodelay(true)
        .build()
        .map_err(|e| RelayError::unavailable(format!("Failed to build HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client().is_ok());
    }
}
