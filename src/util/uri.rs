use http::uri::{InvalidUri, InvalidUriParts, PathAndQuery};
use http::Uri;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UriError {
    #[error(transparent)]
    InvalidUri(#[from] InvalidUri),

    #[error(transparent)]
    InvalidUriParts(#[from] InvalidUriParts),
}

/// Build a request URI from a base URI plus a path and optional query,
/// keeping the base's scheme and authority.
pub fn make_uri(base_uri: &Uri, path: &str, query: Option<&str>) -> Result<Uri, UriError> {
    let mut parts = base_uri.clone().into_parts();
    parts.path_and_query = if let Some(qs) = query {
        Some(PathAndQuery::from_maybe_shared(format!("{path}?{qs}"))?)
    } else {
        Some(PathAndQuery::from_str(path)?)
    };
    Ok(Uri::from_parts(parts)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_uri_replaces_path() {
        let base = Uri::from_static("https://example.com");
        let uri = make_uri(&base, "/api/rest/v1/inventory/devices", None).unwrap();
        assert_eq!(
            uri.to_string(),
            "https://example.com/api/rest/v1/inventory/devices"
        );
    }

    #[test]
    fn test_make_uri_appends_query() {
        let base = Uri::from_static("https://example.com/ignored/path");
        let uri = make_uri(&base, "/api/rest/v1/inventory/managers", Some("limit=1&offset=0")).unwrap();
        assert_eq!(
            uri.to_string(),
            "https://example.com/api/rest/v1/inventory/managers?limit=1&offset=0"
        );
    }

    #[test]
    fn test_make_uri_rejects_invalid_path() {
        let base = Uri::from_static("https://example.com");
        assert!(make_uri(&base, "not a path", None).is_err());
    }
}
