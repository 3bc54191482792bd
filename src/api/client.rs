//! HTTP implementation of [`PostSource`]
//!
//! Issues `GET <endpoint>?q=<text>&skip=<offset>&limit=<size>` and decodes
//! the `{ posts, total }` envelope.

use super::error::{ApiError, Result};
use super::{PageQuery, PostSource};
use crate::post::PostPage;
use log::debug;
use std::time::Duration;
use url::Url;

/// Search endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/posts/search";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP client for the post search endpoint
#[derive(Clone)]
pub struct HttpPostSource {
    endpoint: Url,
    agent: ureq::Agent,
}

impl HttpPostSource {
    /// Create a client for `endpoint` with the default timeout
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidEndpoint`] if the URL does not parse or is
    /// not `http`/`https`.
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a client for `endpoint` with a custom request timeout
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidEndpoint`] if the URL does not parse or is
    /// not `http`/`https`.
    pub fn with_timeout(endpoint: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let endpoint = normalize_endpoint(endpoint.as_ref())?;
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("postdeck/", env!("CARGO_PKG_VERSION")))
            .build();
        Ok(Self { endpoint, agent })
    }

    /// The normalized endpoint this client queries
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the full request URL for `query`
    #[must_use]
    pub fn search_url(&self, query: &PageQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("q", &query.query)
            .append_pair("skip", &query.skip.to_string())
            .append_pair("limit", &query.limit.to_string());
        url
    }
}

impl PostSource for HttpPostSource {
    fn search(&self, query: &PageQuery) -> Result<PostPage> {
        let url = self.search_url(query);
        debug!("event=fetch_request module=api url={url}");

        let response = self
            .agent
            .get(url.as_str())
            .set("Accept", "application/json")
            .call();

        match response {
            Ok(resp) => read_json_response(resp),
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(ApiError::Status { status, body })
            }
            Err(ureq::Error::Transport(err)) => Err(ApiError::Transport(err.to_string())),
        }
    }
}

fn read_json_response(response: ureq::Response) -> Result<PostPage> {
    let body = response.into_string()?;
    let page: PostPage = serde_json::from_str(&body)?;
    debug!(
        "event=fetch_response module=api posts={} total={}",
        page.posts.len(),
        page.total
    );
    Ok(page)
}

/// Parse and validate a search endpoint
///
/// Only `http` and `https` are accepted. Any query string or fragment is
/// dropped since the client owns the query parameters.
///
/// # Errors
///
/// Returns [`ApiError::InvalidEndpoint`] when the URL is malformed or uses
/// another scheme.
pub fn normalize_endpoint(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|err| ApiError::InvalidEndpoint {
        endpoint: trimmed.to_string(),
        reason: err.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ApiError::InvalidEndpoint {
            endpoint: trimmed.to_string(),
            reason: "endpoint must use http or https".to_string(),
        });
    }

    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_contains_query_parameters() {
        let source = HttpPostSource::new(DEFAULT_ENDPOINT).unwrap();
        let url = source.search_url(&PageQuery::new("love", 20, 10));

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "love".to_string()),
                ("skip".to_string(), "20".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
        assert_eq!(url.path(), "/posts/search");
    }

    #[test]
    fn test_search_url_encodes_search_text() {
        let source = HttpPostSource::new("http://localhost:8080/posts/search").unwrap();
        let url = source.search_url(&PageQuery::new("a&b=c d", 0, 5));

        let q = url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned());
        assert_eq!(q.as_deref(), Some("a&b=c d"));
        assert!(!url.as_str().contains("a&b=c d"));
    }

    #[test]
    fn test_search_url_with_empty_query() {
        let source = HttpPostSource::new(DEFAULT_ENDPOINT).unwrap();
        let url = source.search_url(&PageQuery::new("", 0, 10));
        assert_eq!(url.query(), Some("q=&skip=0&limit=10"));
    }

    #[test]
    fn test_normalize_endpoint_strips_query_and_fragment() {
        let url = normalize_endpoint(" https://example.com/search?q=old#frag ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/search");
    }

    #[test]
    fn test_normalize_endpoint_rejects_other_schemes() {
        let err = normalize_endpoint("ftp://example.com/posts").unwrap_err();
        assert!(matches!(err, ApiError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_normalize_endpoint_rejects_garbage() {
        assert!(normalize_endpoint("not a url").is_err());
        assert!(normalize_endpoint("").is_err());
    }
}
