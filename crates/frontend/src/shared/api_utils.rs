//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Build a full API URL from a configured base and a path
///
/// An empty base keeps the URL relative, so requests go to the origin that
/// served the page.
///
/// # Arguments
/// * `base` - API base URL, e.g. "http://127.0.0.1:8000" or ""
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust
/// use legal_analyzer_web::shared::api_utils::api_url;
/// assert_eq!(api_url("http://localhost:8000/", "/api/ingest"), "http://localhost:8000/api/ingest");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') || base.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
