//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check addresses parse and upstream URLs are absolute http(s)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::SiteConfig;

/// A single semantic configuration problem.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}': {1}")]
    BindAddress(String, std::net::AddrParseError),

    #[error("invalid metrics address '{0}': {1}")]
    MetricsAddress(String, std::net::AddrParseError),

    #[error("invalid upstream URL '{0}': {1}")]
    UpstreamUrl(String, url::ParseError),

    #[error("upstream URL '{0}' must use http or https")]
    UpstreamScheme(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
            e,
        ));
    }

    if config.observability.metrics_enabled {
        if let Err(e) = config.observability.metrics_address.parse::<SocketAddr>() {
            errors.push(ValidationError::MetricsAddress(
                config.observability.metrics_address.clone(),
                e,
            ));
        }
    }

    for raw in [
        &config.upstream.primary_base_url,
        &config.upstream.fallback_base_url,
    ] {
        match Url::parse(raw) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(_) => errors.push(ValidationError::UpstreamScheme(raw.clone())),
            Err(e) => errors.push(ValidationError::UpstreamUrl(raw.clone(), e)),
        }
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
    fn test_defaults_validate() {
        assert!(validate_config(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_bind_address() {
        let mut config = SiteConfig::default();
        config.listener.bind_address = "localhost".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::BindAddress(..)));
    }

    #[test]
    fn test_non_http_upstream_scheme() {
        let mut config = SiteConfig::default();
        config.upstream.fallback_base_url = "ftp://example.com".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::UpstreamScheme(_)));
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = SiteConfig::default();
        config.listener.bind_address = "nope".to_string();
        config.upstream.primary_base_url = "not a url".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = SiteConfig::default();
        config.observability.metrics_address = "bogus".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
