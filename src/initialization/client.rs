//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used by the batch fetcher.
///
/// The client follows reqwest's default redirect policy. A request timeout is
/// only set when `config.timeout_seconds` is present; without one a stalled
/// server stalls its fetch indefinitely.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails,
/// e.g. when the user agent is not a valid header value.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let mut builder = ClientBuilder::new().user_agent(config.user_agent.clone());
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(Arc::new(builder.build()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_default_config() {
        assert!(init_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_init_client_with_timeout() {
        let config = Config {
            timeout_seconds: Some(1),
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_rejects_invalid_user_agent() {
        let config = Config {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            init_client(&config),
            Err(InitializationError::HttpClientError(_))
        ));
    }
}
