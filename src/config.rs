//! Backend Configuration
//!
//! Base URL for the REST backend, overridable at build time.

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Base URL all API paths are appended to.
///
/// Set `API_BASE_URL` in the build environment to point at a deployed
/// backend; otherwise the local development address is used.
pub fn api_base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_has_scheme() {
        let url = api_base_url();
        assert!(url.starts_with("http://") || url.starts_with("https://"));
    }

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
    }
}
