//! Route tree decoration
//!
//! [`decorate`] walks the static [`RouteTable`] top-down once per location
//! and produces a [`DecoratedRoutes`] tree of the same shape. Each node
//! carries its full template, its `active` flag for the given location and
//! the helpers presentation code needs (`href`, `go_to`, `link`,
//! `icon_view`).
//!
//! # Active state
//!
//! A node is active when its template matches the location segment for
//! segment, or when any of its descendants is active:
//!
//! ```text
//! location: /acme/proj1/toolsets/abc
//!
//! toolsets   /:orgSlug/:projectSlug/toolsets                        active (child)
//!   toolset  /:orgSlug/:projectSlug/toolsets/:toolsetSlug           active (match)
//!     update /:orgSlug/:projectSlug/toolsets/:toolsetSlug/update    inactive
//! ```
//!
//! External routes are never active.
//!
//! # Example
//!
//! ```
//! use gram_routes::{dashboard_routes, decorate, AmbientParams};
//!
//! let routes = decorate(
//!     &dashboard_routes(),
//!     "/acme/proj1/toolsets/abc",
//!     &AmbientParams::new("acme", "proj1"),
//! );
//!
//! let toolset = routes.at(&["toolsets", "toolset"]).unwrap();
//! assert!(toolset.active);
//! assert_eq!(toolset.href(&["xyz"]).unwrap(), "/acme/proj1/toolsets/xyz");
//! ```

use crate::error::RouteError;
use crate::matching::matches_template;
use crate::params::{AmbientParams, QueryParams};
use crate::resolve::{compose_template, resolve_path};
use crate::route::{IconName, RouteDef, RouteMap, RouteTable, ViewId};
use crate::state::{NavigationOutcome, Navigator};
use crate::widgets::{Icon, Link};
use crate::{debug_log, trace_log};
use std::sync::Arc;

/// A route with its per-location state and navigation helpers
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DecoratedRoute {
    /// Key of the route within its parent
    pub key: String,
    /// Display title
    pub title: String,
    /// Raw url as declared
    pub url: String,
    /// Icon name
    pub icon: Option<IconName>,
    /// Points off-site
    pub external: bool,
    /// View rendered for the route
    pub view: Option<ViewId>,
    /// Index view rendered at the route's own path
    pub index_view: Option<ViewId>,
    /// Reachable without a session
    pub unauthenticated: bool,
    /// Full path template (`/:orgSlug/:projectSlug/...`)
    pub template: String,
    /// Matches the location, directly or through a descendant
    pub active: bool,
    /// Decorated sub-pages
    pub children: DecoratedRoutes,
    #[cfg_attr(feature = "serde", serde(skip))]
    ambient: Arc<AmbientParams>,
    #[cfg_attr(feature = "serde", serde(skip))]
    absolute: bool,
}

impl DecoratedRoute {
    /// Resolve the route's path, filling dynamic segments from `params` in
    /// order.
    pub fn href<S: AsRef<str>>(&self, params: &[S]) -> Result<String, RouteError> {
        if self.external {
            return Ok(self.url.clone());
        }
        resolve_path(&self.template, &self.ambient, params)
    }

    /// Navigate to the route.
    ///
    /// Absolute routes do not navigate and return their literal url; external
    /// routes return the url for the caller to open. Navigating to the current
    /// location leaves the navigator untouched.
    pub fn go_to<S: AsRef<str>>(
        &self,
        navigator: &mut dyn Navigator,
        params: &[S],
    ) -> Result<NavigationOutcome, RouteError> {
        if self.absolute {
            return Ok(NavigationOutcome::Absolute {
                path: self.url.clone(),
            });
        }
        if self.external {
            return Ok(NavigationOutcome::External {
                url: self.url.clone(),
            });
        }

        let path = self.href(params)?;
        if navigator.current_path() == path {
            trace_log!("Already at '{}', skipping navigation", path);
            return Ok(NavigationOutcome::Unchanged { path });
        }

        debug_log!("Navigating to '{}' via route '{}'", path, self.key);
        navigator.navigate(&path);
        Ok(NavigationOutcome::Navigated { path })
    }

    /// Link to the route, with `query` appended when non-empty.
    pub fn link<S: AsRef<str>>(
        &self,
        params: &[S],
        query: &QueryParams,
    ) -> Result<Link, RouteError> {
        let href = self.href(params)?;
        if query.is_empty() {
            Ok(Link::new(href))
        } else {
            Ok(Link::new(format!("{}?{}", href, query.to_query_string())))
        }
    }

    /// Icon of the route, `None` when it has none.
    pub fn icon_view(&self) -> Option<Icon> {
        self.icon.clone().map(Icon::new)
    }

    /// Check if the route can be shown to a session with the given auth state
    pub fn is_accessible(&self, authenticated: bool) -> bool {
        authenticated || self.unauthenticated
    }

    /// Check if the route has sub-pages
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Get a sub-page by key.
    pub fn child(&self, key: &str) -> Option<&DecoratedRoute> {
        self.children.get(key)
    }
}

/// Ordered `key → DecoratedRoute` map, same shape as the route table
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DecoratedRoutes {
    routes: Vec<DecoratedRoute>,
}

impl DecoratedRoutes {
    /// Get a route by key.
    pub fn get(&self, key: &str) -> Option<&DecoratedRoute> {
        self.routes.iter().find(|r| r.key == key)
    }

    /// Follow a chain of keys down the tree, e.g. `["toolsets", "toolset", "update"]`.
    pub fn at(&self, keys: &[&str]) -> Option<&DecoratedRoute> {
        let (first, rest) = keys.split_first()?;
        rest.iter()
            .try_fold(self.get(first)?, |route, key| route.child(key))
    }

    /// Dotted-path form of [`at`](Self::at), e.g. `"toolsets.toolset.update"`.
    pub fn at_path(&self, dotted: &str) -> Result<&DecoratedRoute, RouteError> {
        let keys: Vec<&str> = dotted.split('.').collect();
        self.at(&keys).ok_or_else(|| RouteError::UnknownRoute {
            key: dotted.to_string(),
        })
    }

    /// Iterate over the routes at this level in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &DecoratedRoute> {
        self.routes.iter()
    }

    /// Return `true` if there are no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Return the number of routes at this level.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if any route at this level is active
    pub fn any_active(&self) -> bool {
        self.routes.iter().any(|r| r.active)
    }

    /// Chain of active routes from this level down to the deepest active one.
    ///
    /// Used for breadcrumbs. When several siblings are active the first in
    /// declaration order wins.
    pub fn active_trail(&self) -> Vec<&DecoratedRoute> {
        let mut trail = Vec::new();
        let mut level = self;
        while let Some(route) = level.routes.iter().find(|r| r.active) {
            trail.push(route);
            level = &route.children;
        }
        trail
    }

    /// Routes at this level that carry an icon, for menus.
    pub fn nav_items(&self) -> Vec<&DecoratedRoute> {
        self.routes.iter().filter(|r| r.icon.is_some()).collect()
    }

    /// Routes at this level visible to a session with the given auth state.
    pub fn accessible(&self, authenticated: bool) -> Vec<&DecoratedRoute> {
        self.routes
            .iter()
            .filter(|r| r.is_accessible(authenticated))
            .collect()
    }
}

impl<'a> IntoIterator for &'a DecoratedRoutes {
    type Item = &'a DecoratedRoute;
    type IntoIter = std::slice::Iter<'a, DecoratedRoute>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// Decorate the whole route table for `location`.
pub fn decorate(table: &RouteTable, location: &str, ambient: &AmbientParams) -> DecoratedRoutes {
    debug_log!(
        "Decorating {} routes for location '{}'",
        table.len(),
        location
    );
    let ambient = Arc::new(ambient.clone());
    decorate_map(table, None, location, &ambient)
}

fn decorate_map(
    routes: &RouteMap,
    parent: Option<&str>,
    location: &str,
    ambient: &Arc<AmbientParams>,
) -> DecoratedRoutes {
    DecoratedRoutes {
        routes: routes
            .iter()
            .map(|(key, route)| decorate_route(key, route, parent, location, ambient))
            .collect(),
    }
}

fn decorate_route(
    key: &str,
    route: &RouteDef,
    parent: Option<&str>,
    location: &str,
    ambient: &Arc<AmbientParams>,
) -> DecoratedRoute {
    let template = compose_template(route, parent);

    let children = route
        .sub_pages()
        .map(|sub| decorate_map(sub, Some(&template), location, ambient))
        .unwrap_or_default();

    let external = route.is_external();
    let active = (!external && matches_template(&template, location)) || children.any_active();
    trace_log!(
        "Route '{}' template='{}' active={}",
        key,
        template,
        active
    );

    DecoratedRoute {
        key: key.to_string(),
        title: route.title.clone(),
        url: route.url.clone(),
        icon: route.icon.clone(),
        external,
        view: route.view().cloned(),
        index_view: route.index_view().cloned(),
        unauthenticated: route.is_unauthenticated(),
        template,
        active,
        children,
        ambient: Arc::clone(ambient),
        absolute: route.is_absolute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::NO_PARAMS;
    use crate::state::History;

    fn table() -> RouteTable {
        RouteTable::new()
            .route("login", RouteDef::page("Login", "/login").unauthenticated())
            .route("home", RouteDef::page("Home", "").icon("home"))
            .route(
                "toolsets",
                RouteDef::page("Toolsets", "toolsets").icon("blocks").sub_page(
                    "toolset",
                    RouteDef::page("Toolset", ":toolsetSlug")
                        .sub_page("update", RouteDef::page("Update", "update")),
                ),
            )
            .route("docs", RouteDef::external("Docs", "https://docs.example.com"))
    }

    fn decorate_at(location: &str) -> DecoratedRoutes {
        decorate(&table(), location, &AmbientParams::new("acme", "proj1"))
    }

    #[test]
    fn test_templates() {
        let routes = decorate_at("/");
        assert_eq!(routes.get("login").unwrap().template, "/login");
        assert_eq!(routes.get("home").unwrap().template, "/:orgSlug/:projectSlug/");
        assert_eq!(
            routes.at(&["toolsets", "toolset", "update"]).unwrap().template,
            "/:orgSlug/:projectSlug/toolsets/:toolsetSlug/update"
        );
    }

    #[test]
    fn test_active_propagates_upward() {
        let routes = decorate_at("/acme/proj1/toolsets/abc/update");
        assert!(routes.at(&["toolsets", "toolset", "update"]).unwrap().active);
        assert!(routes.at(&["toolsets", "toolset"]).unwrap().active);
        assert!(routes.get("toolsets").unwrap().active);
        assert!(!routes.get("home").unwrap().active);
    }

    #[test]
    fn test_leaf_inactive_parent_active() {
        let routes = decorate_at("/acme/proj1/toolsets/abc");
        assert!(!routes.at(&["toolsets", "toolset", "update"]).unwrap().active);
        assert!(routes.at(&["toolsets", "toolset"]).unwrap().active);
    }

    #[test]
    fn test_external_never_active() {
        let routes = decorate_at("/acme/proj1/https:/docs.example.com");
        assert!(!routes.get("docs").unwrap().active);
    }

    #[test]
    fn test_go_to_navigates() {
        let routes = decorate_at("/acme/proj1");
        let mut history = History::starting_at("/acme/proj1");

        let outcome = routes
            .at(&["toolsets", "toolset"])
            .unwrap()
            .go_to(&mut history, &["abc"])
            .unwrap();
        assert_eq!(
            outcome,
            NavigationOutcome::Navigated {
                path: "/acme/proj1/toolsets/abc".to_string()
            }
        );
        assert_eq!(history.current_path(), "/acme/proj1/toolsets/abc");
    }

    #[test]
    fn test_go_to_current_location_is_unchanged() {
        let routes = decorate_at("/acme/proj1/toolsets");
        let mut history = History::starting_at("/acme/proj1/toolsets");

        let outcome = routes.get("toolsets").unwrap().go_to(&mut history, NO_PARAMS).unwrap();
        assert!(matches!(outcome, NavigationOutcome::Unchanged { .. }));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_go_to_absolute_is_noop() {
        let routes = decorate_at("/");
        let mut history = History::new();

        let outcome = routes.get("login").unwrap().go_to(&mut history, NO_PARAMS).unwrap();
        assert_eq!(
            outcome,
            NavigationOutcome::Absolute {
                path: "/login".to_string()
            }
        );
        assert_eq!(history.len(), 1);
        assert_eq!(routes.get("login").unwrap().href(NO_PARAMS).unwrap(), "/login");
    }

    #[test]
    fn test_absolute_child_href_nests_but_go_to_is_literal() {
        let table = RouteTable::new().route(
            "a",
            RouteDef::page("A", "a").sub_page("b", RouteDef::page("B", "/b")),
        );
        let routes = decorate(&table, "/acme/proj1/a/b", &AmbientParams::new("acme", "proj1"));
        let child = routes.at(&["a", "b"]).unwrap();
        let mut history = History::new();

        assert_eq!(child.template, "/:orgSlug/:projectSlug/a/b");
        assert!(child.active);
        assert_eq!(child.href(NO_PARAMS).unwrap(), "/acme/proj1/a/b");
        assert_eq!(
            child.go_to(&mut history, NO_PARAMS).unwrap(),
            NavigationOutcome::Absolute {
                path: "/b".to_string()
            }
        );
        assert_eq!(history.current_path(), "/");
    }

    #[test]
    fn test_go_to_external_returns_url() {
        let routes = decorate_at("/");
        let mut history = History::new();

        let docs = routes.get("docs").unwrap();
        let outcome = docs.go_to(&mut history, NO_PARAMS).unwrap();
        assert_eq!(outcome.target(), "https://docs.example.com");
        assert_eq!(docs.href(&["ignored"]).unwrap(), "https://docs.example.com");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_go_to_missing_param_does_not_navigate() {
        let routes = decorate_at("/");
        let mut history = History::new();

        let err = routes
            .at(&["toolsets", "toolset"])
            .unwrap()
            .go_to(&mut history, NO_PARAMS)
            .unwrap_err();
        assert!(err.is_missing_param());
        assert_eq!(history.current_path(), "/");
    }

    #[test]
    fn test_link_with_and_without_query() {
        let routes = decorate_at("/");
        let toolsets = routes.get("toolsets").unwrap();

        let link = toolsets.link(NO_PARAMS, &QueryParams::new()).unwrap();
        assert_eq!(link.to, "/acme/proj1/toolsets");

        let link = toolsets
            .link(NO_PARAMS, &QueryParams::new().with("tab", "tools"))
            .unwrap();
        assert_eq!(link.to, "/acme/proj1/toolsets?tab=tools");
        assert_eq!(link.class_name, "hover:underline");
    }

    #[test]
    fn test_icon_view() {
        let routes = decorate_at("/");
        assert_eq!(
            routes.get("toolsets").unwrap().icon_view().unwrap().name.as_str(),
            "blocks"
        );
        assert!(routes.get("login").unwrap().icon_view().is_none());
    }

    #[test]
    fn test_active_trail() {
        let routes = decorate_at("/acme/proj1/toolsets/abc/update");
        let trail: Vec<&str> = routes.active_trail().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(trail, vec!["toolsets", "toolset", "update"]);

        assert!(decorate_at("/nowhere/at/all/x/y/z").active_trail().is_empty());
    }

    #[test]
    fn test_nav_items_and_accessible() {
        let routes = decorate_at("/");
        let nav: Vec<&str> = routes.nav_items().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(nav, vec!["home", "toolsets"]);

        let anonymous: Vec<&str> = routes
            .accessible(false)
            .iter()
            .map(|r| r.key.as_str())
            .collect();
        assert_eq!(anonymous, vec!["login"]);
        assert_eq!(routes.accessible(true).len(), routes.len());
    }

    #[test]
    fn test_at_path() {
        let routes = decorate_at("/");
        assert_eq!(routes.at_path("toolsets.toolset").unwrap().key, "toolset");
        assert_eq!(
            routes.at_path("toolsets.nope").unwrap_err(),
            RouteError::UnknownRoute {
                key: "toolsets.nope".to_string()
            }
        );
        assert!(routes.at(&[]).is_none());
    }
}
