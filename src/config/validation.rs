//! Semantic validation of a deserialized configuration.
//!
//! Serde already guarantees the shapes; these checks catch values that parse
//! but cannot work at runtime (unparseable addresses, non-http URLs).

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    #[error("invalid upstream base URL '{0}': {1}")]
    BaseUrl(String, url::ParseError),

    #[error("upstream base URL '{0}' must use http or https")]
    BaseUrlScheme(String),

    #[error("upstream user agent must not be empty")]
    EmptyUserAgent,

    #[error("{0} timeout must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a configuration, collecting every failure rather than stopping
/// at the first.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(_) => errors.push(ValidationError::BaseUrlScheme(
            config.upstream.base_url.clone(),
        )),
        Err(e) => errors.push(ValidationError::BaseUrl(
            config.upstream.base_url.clone(),
            e,
        )),
    }

    if config.upstream.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request"));
    }
    if config.upstream.request_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout("upstream request"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn rejects_bad_bind_address() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::BindAddress(_)));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = GatewayConfig::default();
        config.upstream.base_url = "ftp://bananominer.com".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::BaseUrlScheme(_)));
    }

    #[test]
    fn collects_multiple_failures() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "nope".into();
        config.upstream.user_agent = "  ".into();
        config.timeouts.request_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
