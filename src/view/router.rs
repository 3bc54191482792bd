//! Navigation history
//!
//! State changes write a location (`?page=2`, `?page=1&search=love`,
//! `?page=1&tags=a,b`) the way a browser route would. Locations are written
//! but never read back into the view state. Each write counts as a route
//! change and triggers an immediate fetch.

use std::fmt;
use url::form_urlencoded;

/// Query parameters of one navigation entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// `page` parameter
    pub page: Option<u32>,
    /// `search` parameter
    pub search: Option<String>,
    /// `tags` parameter, comma-joined when rendered
    pub tags: Option<Vec<String>>,
}

impl Location {
    /// Location written after a page change
    #[must_use]
    pub const fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            search: None,
            tags: None,
        }
    }

    /// Location written after a search submit (always page 1)
    #[must_use]
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            page: Some(1),
            search: Some(text.into()),
            tags: None,
        }
    }

    /// Location written after a tag selection change (always page 1)
    #[must_use]
    pub fn tags(tags: &[String]) -> Self {
        Self {
            page: Some(1),
            search: None,
            tags: Some(tags.to_vec()),
        }
    }

    /// Render as a `?key=value&...` query string
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(page) = self.page {
            serializer.append_pair("page", &page.to_string());
        }
        if let Some(search) = &self.search {
            serializer.append_pair("search", search);
        }
        let mut query = serializer.finish();
        if let Some(tags) = &self.tags {
            // Each tag is encoded on its own so the separator stays a bare comma
            let joined = tags
                .iter()
                .map(|tag| form_urlencoded::byte_serialize(tag.as_bytes()).collect::<String>())
                .collect::<Vec<_>>()
                .join(",");
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str("tags=");
            query.push_str(&joined);
        }
        format!("?{query}")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// In-memory navigation history
#[derive(Debug, Clone, Default)]
pub struct Router {
    history: Vec<Location>,
}

impl Router {
    /// Empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Push a new location
    pub fn navigate(&mut self, location: Location) {
        log::debug!("event=navigate module=view location={location}");
        self.history.push(location);
    }

    /// Most recent location, if any navigation happened
    #[must_use]
    pub fn current(&self) -> Option<&Location> {
        self.history.last()
    }

    /// All locations, oldest first
    #[must_use]
    pub fn history(&self) -> &[Location] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_location() {
        assert_eq!(Location::page(3).to_query_string(), "?page=3");
    }

    #[test]
    fn test_search_location() {
        assert_eq!(
            Location::search("love").to_query_string(),
            "?page=1&search=love"
        );
        assert_eq!(Location::search("").to_query_string(), "?page=1&search=");
    }

    #[test]
    fn test_search_location_is_encoded() {
        assert_eq!(
            Location::search("a&b").to_query_string(),
            "?page=1&search=a%26b"
        );
    }

    #[test]
    fn test_tags_location_is_comma_joined() {
        let location = Location::tags(&["history".into(), "crime".into()]);
        assert_eq!(location.to_query_string(), "?page=1&tags=history,crime");
        assert_eq!(location.tags.as_deref().map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_tags_are_encoded_individually() {
        let location = Location::tags(&["sci fi".into(), "a,b".into(), "é".into()]);
        assert_eq!(location.to_query_string(), "?page=1&tags=sci+fi,a%2Cb,%C3%A9");
        assert_eq!(Location::tags(&[]).to_query_string(), "?page=1&tags=");
    }

    #[test]
    fn test_tags_without_page() {
        let location = Location {
            tags: Some(vec!["x".into()]),
            ..Location::default()
        };
        assert_eq!(location.to_query_string(), "?tags=x");
    }

    #[test]
    fn test_empty_location() {
        assert_eq!(Location::default().to_string(), "?");
    }

    #[test]
    fn test_router_history() {
        let mut router = Router::new();
        assert!(router.current().is_none());

        router.navigate(Location::page(2));
        router.navigate(Location::search("x"));

        assert_eq!(router.history().len(), 2);
        assert_eq!(router.current(), Some(&Location::search("x")));
    }
}
