//! Ambient route parameters and query strings.
//!
//! - [`AmbientParams`] — the organization and project slugs that every
//!   dashboard route is implicitly rooted under. They come from the
//!   application context rather than from the caller of
//!   [`href`](crate::DecoratedRoute::href), so they are threaded into the
//!   resolver explicitly.
//! - [`QueryParams`] — ordered `key=value` pairs appended to links, encoded
//!   the way browsers encode form data.
//!
//! # Example
//!
//! ```
//! use gram_routes::{AmbientParams, QueryParams};
//!
//! let ambient = AmbientParams::new("acme", "proj1");
//! assert_eq!(ambient.prefix(), "/acme/proj1");
//!
//! let query: QueryParams = [("tab", "tools"), ("q", "a b")].into_iter().collect();
//! assert_eq!(query.to_query_string(), "tab=tools&q=a+b");
//! ```

/// Template segment resolved from [`AmbientParams::org_slug`].
pub const AMBIENT_ORG: &str = ":orgSlug";

/// Template segment resolved from [`AmbientParams::project_slug`].
pub const AMBIENT_PROJECT: &str = ":projectSlug";

/// Prefix every relative top-level route is rooted under.
pub const AMBIENT_PREFIX: &str = "/:orgSlug/:projectSlug";

/// Empty positional parameter list, for routes without dynamic segments.
pub const NO_PARAMS: &[&str] = &[];

/// Organization and project slugs of the current session
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AmbientParams {
    /// Current organization slug
    pub org_slug: String,
    /// Current project slug
    pub project_slug: String,
}

impl AmbientParams {
    /// Create ambient params from the two slugs.
    pub fn new(org_slug: impl Into<String>, project_slug: impl Into<String>) -> Self {
        Self {
            org_slug: org_slug.into(),
            project_slug: project_slug.into(),
        }
    }

    /// Value for an ambient template segment, `None` for any other segment.
    pub fn lookup(&self, segment: &str) -> Option<&str> {
        match segment {
            AMBIENT_ORG => Some(&self.org_slug),
            AMBIENT_PROJECT => Some(&self.project_slug),
            _ => None,
        }
    }

    /// Resolved `/<org>/<project>` prefix.
    pub fn prefix(&self) -> String {
        format!("/{}/{}", self.org_slug, self.project_slug)
    }
}

/// Check if a template segment is resolved from ambient context
pub fn is_ambient_segment(segment: &str) -> bool {
    segment == AMBIENT_ORG || segment == AMBIENT_PROJECT
}

/// Query parameters appended to a link
///
/// Keeps insertion order so generated links are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create empty query parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, keeping earlier pairs with the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Return the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Serialize into a query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    encode_form_component(key),
                    encode_form_component(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Form-urlencoded component encoding: space becomes `+`, every byte outside
/// `A-Z a-z 0-9 * - . _` is percent-encoded.
fn encode_form_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(char::from(byte));
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_lookup() {
        let ambient = AmbientParams::new("acme", "proj1");
        assert_eq!(ambient.lookup(":orgSlug"), Some("acme"));
        assert_eq!(ambient.lookup(":projectSlug"), Some("proj1"));
        assert_eq!(ambient.lookup(":toolsetSlug"), None);
        assert_eq!(ambient.lookup("orgSlug"), None);
    }

    #[test]
    fn test_is_ambient_segment() {
        assert!(is_ambient_segment(":orgSlug"));
        assert!(is_ambient_segment(":projectSlug"));
        assert!(!is_ambient_segment(":toolName"));
    }

    #[test]
    fn test_query_string_keeps_order_and_duplicates() {
        let query = QueryParams::new()
            .with("tag", "a")
            .with("page", "2")
            .with("tag", "b");
        assert_eq!(query.to_query_string(), "tag=a&page=2&tag=b");
        assert_eq!(query.get("tag"), Some("a"));
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn test_form_encoding() {
        assert_eq!(encode_form_component("hello world"), "hello+world");
        assert_eq!(encode_form_component("a@b.com"), "a%40b.com");
        assert_eq!(encode_form_component("x/y?z"), "x%2Fy%3Fz");
        assert_eq!(encode_form_component("é"), "%C3%A9");
    }

    #[test]
    fn test_empty_query() {
        let query = QueryParams::new();
        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
    }
}
