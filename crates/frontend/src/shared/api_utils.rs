//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Build a full API URL from a base and a path
///
/// An empty base keeps the URL relative, i.e. same origin as the page.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("http://localhost:8000/", "/api/get-upload-settings/");
/// assert_eq!(url, "http://localhost:8000/api/get-upload-settings/");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_same_origin() {
        assert_eq!(
            api_url("", "/api/get-upload-settings/"),
            "/api/get-upload-settings/"
        );
        assert_eq!(api_url("", "api/x/"), "/api/x/");
    }

    #[test]
    fn test_api_url_with_base() {
        assert_eq!(
            api_url("http://127.0.0.1:8000/", "/api/save-upload-settings/"),
            "http://127.0.0.1:8000/api/save-upload-settings/"
        );
        assert_eq!(
            api_url("http://a", "https://b/upload"),
            "https://b/upload"
        );
    }
}
