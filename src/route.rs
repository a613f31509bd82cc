//! Static route definitions.
//!
//! A [`RouteDef`] is one node of the dashboard's route tree: a title, a
//! path segment and an optional icon, plus either the marker that the route
//! points off-site ([`RouteKind::External`]) or the in-app [`Page`] data
//! (views, auth flag, nested sub-pages). Encoding the two shapes as an enum
//! means an external route can never carry a view or sub-pages.
//!
//! Routes are built with [`RouteDef::page`] and [`RouteDef::external`]:
//!
//! ```
//! use gram_routes::{RouteDef, RouteMap};
//!
//! let routes = RouteMap::new()
//!     .route(
//!         "prompts",
//!         RouteDef::page("Prompts", "prompts")
//!             .icon("newspaper")
//!             .view("PromptsRoot")
//!             .index_view("Prompts")
//!             .sub_page("prompt", RouteDef::page("Edit Prompt", ":promptName").view("PromptPage")),
//!     )
//!     .route("docs", RouteDef::external("Docs", "https://docs.getgram.ai").icon("book-open"));
//!
//! assert_eq!(routes.len(), 2);
//! assert!(routes.get("docs").unwrap().is_external());
//! assert!(routes.get("prompts").unwrap().sub_pages().unwrap().get("prompt").is_some());
//! ```

use std::borrow::Cow;
use std::fmt;

/// Identifier of the view a route renders.
///
/// The host maps it to a concrete widget; this crate only carries it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ViewId(Cow<'static, str>);

impl ViewId {
    /// Create a view identifier.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ViewId {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of an icon in the host's icon set (e.g. `"blocks"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IconName(Cow<'static, str>);

impl IconName {
    /// Create an icon name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The icon name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for IconName {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// In-app route data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// View rendered for the route itself (a layout when it has sub-pages)
    pub view: Option<ViewId>,
    /// View rendered at the route's own path below `view`
    pub index_view: Option<ViewId>,
    /// Reachable without a session
    pub unauthenticated: bool,
    /// Nested routes, keyed by name
    pub sub_pages: RouteMap,
}

/// Either an off-site link or an in-app page
#[derive(Debug, Clone, PartialEq)]
pub enum RouteKind {
    /// `url` is a full off-site URL used verbatim
    External,
    /// `url` is a path segment inside the app
    Internal(Page),
}

/// One node of the static route tree
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDef {
    /// Display title
    pub title: String,
    /// Path segment (relative, absolute when it starts with `/`, or a full
    /// URL for external routes)
    pub url: String,
    /// Optional icon
    pub icon: Option<IconName>,
    /// Shape of the route
    pub kind: RouteKind,
}

impl RouteDef {
    /// Start building an in-app route.
    pub fn page(title: impl Into<String>, url: impl Into<String>) -> PageRoute {
        PageRoute {
            def: RouteDef {
                title: title.into(),
                url: url.into(),
                icon: None,
                kind: RouteKind::Internal(Page::default()),
            },
            page: Page::default(),
        }
    }

    /// Start building an off-site route.
    pub fn external(title: impl Into<String>, url: impl Into<String>) -> ExternalRoute {
        ExternalRoute {
            def: RouteDef {
                title: title.into(),
                url: url.into(),
                icon: None,
                kind: RouteKind::External,
            },
        }
    }

    /// Check if the route points off-site
    pub fn is_external(&self) -> bool {
        matches!(self.kind, RouteKind::External)
    }

    /// Check if the raw url is absolute (starts with `/`)
    ///
    /// External routes are never absolute paths, whatever their url.
    pub fn is_absolute(&self) -> bool {
        !self.is_external() && self.url.starts_with('/')
    }

    /// In-app data, `None` for external routes
    pub fn page_data(&self) -> Option<&Page> {
        match &self.kind {
            RouteKind::Internal(page) => Some(page),
            RouteKind::External => None,
        }
    }

    /// View rendered for this route
    pub fn view(&self) -> Option<&ViewId> {
        self.page_data().and_then(|p| p.view.as_ref())
    }

    /// Index view rendered at this route's own path
    pub fn index_view(&self) -> Option<&ViewId> {
        self.page_data().and_then(|p| p.index_view.as_ref())
    }

    /// Check if the route is reachable without a session
    pub fn is_unauthenticated(&self) -> bool {
        self.page_data().is_some_and(|p| p.unauthenticated)
    }

    /// Nested routes, `None` when there are none
    pub fn sub_pages(&self) -> Option<&RouteMap> {
        self.page_data()
            .map(|p| &p.sub_pages)
            .filter(|sub| !sub.is_empty())
    }
}

/// Builder for an in-app [`RouteDef`]
#[derive(Debug, Clone)]
pub struct PageRoute {
    def: RouteDef,
    page: Page,
}

impl PageRoute {
    /// Set the icon.
    pub fn icon(mut self, icon: impl Into<IconName>) -> Self {
        self.def.icon = Some(icon.into());
        self
    }

    /// Set the view rendered for the route.
    pub fn view(mut self, view: impl Into<ViewId>) -> Self {
        self.page.view = Some(view.into());
        self
    }

    /// Set the index view.
    pub fn index_view(mut self, view: impl Into<ViewId>) -> Self {
        self.page.index_view = Some(view.into());
        self
    }

    /// Mark the route reachable without a session.
    pub fn unauthenticated(mut self) -> Self {
        self.page.unauthenticated = true;
        self
    }

    /// Add a nested route.
    pub fn sub_page(mut self, key: impl Into<String>, route: impl Into<RouteDef>) -> Self {
        self.page.sub_pages.insert(key, route);
        self
    }

    /// Finish the route.
    pub fn build(self) -> RouteDef {
        RouteDef {
            kind: RouteKind::Internal(self.page),
            ..self.def
        }
    }
}

impl From<PageRoute> for RouteDef {
    fn from(builder: PageRoute) -> Self {
        builder.build()
    }
}

/// Builder for an off-site [`RouteDef`]
#[derive(Debug, Clone)]
pub struct ExternalRoute {
    def: RouteDef,
}

impl ExternalRoute {
    /// Set the icon.
    pub fn icon(mut self, icon: impl Into<IconName>) -> Self {
        self.def.icon = Some(icon.into());
        self
    }

    /// Finish the route.
    pub fn build(self) -> RouteDef {
        self.def
    }
}

impl From<ExternalRoute> for RouteDef {
    fn from(builder: ExternalRoute) -> Self {
        builder.build()
    }
}

/// Insertion-ordered `key → route` map
///
/// Used both for the top-level table and for sub-pages. Declaration order is
/// kept because menus render in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteMap {
    entries: Vec<(String, RouteDef)>,
}

/// The top-level route table.
pub type RouteTable = RouteMap;

impl RouteMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route, replacing an existing route with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, route: impl Into<RouteDef>) {
        let key = key.into();
        let route = route.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = route;
        } else {
            self.entries.push((key, route));
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn route(mut self, key: impl Into<String>, route: impl Into<RouteDef>) -> Self {
        self.insert(key, route);
        self
    }

    /// Get a route by key.
    pub fn get(&self, key: &str) -> Option<&RouteDef> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, route)| route)
    }

    /// Iterate over `(key, route)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteDef)> {
        self.entries.iter().map(|(k, route)| (k.as_str(), route))
    }

    /// Return `true` if there are no routes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the number of routes at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
