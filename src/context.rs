//! Route service: the entry point a host talks to.
//!
//! [`RouteService`] owns the static [`RouteTable`] and the session's
//! [`AmbientParams`], and hands out the decorated tree for a location. With
//! the `cache` feature the decorated trees are memoized per location, so all
//! the menus, breadcrumbs and links drawn during one render pass share a
//! single walk of the table.
//!
//! # Example
//!
//! ```
//! use gram_routes::{AmbientParams, History, Navigator, RouteService, NO_PARAMS};
//!
//! let mut service = RouteService::dashboard(AmbientParams::new("acme", "proj1"));
//! let mut history = History::starting_at("/acme/proj1");
//!
//! let routes = service.routes_for(history.current_path());
//! assert!(routes.get("openapi").unwrap().active);
//!
//! routes.get("toolsets").unwrap().go_to(&mut history, NO_PARAMS).unwrap();
//! let routes = service.routes_for(history.current_path());
//! assert!(routes.get("toolsets").unwrap().active);
//! assert!(!routes.get("openapi").unwrap().active);
//! ```

use crate::config::RouterConfig;
use crate::debug_log;
use crate::decorate::{decorate, DecoratedRoutes};
use crate::params::AmbientParams;
use crate::route::RouteTable;
use crate::state::Navigator;
use crate::table::dashboard_routes;
use std::sync::Arc;

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, DecorationCache};

/// Decorated route provider for one session
#[derive(Debug)]
pub struct RouteService {
    table: RouteTable,
    ambient: AmbientParams,
    config: RouterConfig,
    #[cfg(feature = "cache")]
    cache: DecorationCache,
}

impl RouteService {
    /// Create a service over `table` with default configuration.
    pub fn new(table: RouteTable, ambient: AmbientParams) -> Self {
        Self::with_config(table, ambient, RouterConfig::default())
    }

    /// Create a service over `table` with `config`.
    pub fn with_config(table: RouteTable, ambient: AmbientParams, config: RouterConfig) -> Self {
        Self {
            #[cfg(feature = "cache")]
            cache: DecorationCache::with_capacity(config.cache_capacity),
            table,
            ambient,
            config,
        }
    }

    /// Create a service over the dashboard route table.
    pub fn dashboard(ambient: AmbientParams) -> Self {
        Self::new(dashboard_routes(), ambient)
    }

    /// Decorated route tree for `location`.
    pub fn routes_for(&mut self, location: &str) -> Arc<DecoratedRoutes> {
        #[cfg(feature = "cache")]
        {
            if let Some(routes) = self.cache.get(location) {
                return routes;
            }
        }

        let routes = Arc::new(decorate(&self.table, location, &self.ambient));

        #[cfg(feature = "cache")]
        self.cache.insert(location.to_string(), Arc::clone(&routes));

        routes
    }

    /// Decorated route tree for the navigator's current location.
    pub fn current_routes(&mut self, navigator: &dyn Navigator) -> Arc<DecoratedRoutes> {
        self.routes_for(navigator.current_path())
    }

    /// Switch organization or project.
    ///
    /// Every memoized tree resolves against the old slugs, so the memo is
    /// dropped when the slugs actually change.
    pub fn set_ambient(&mut self, ambient: AmbientParams) {
        if self.ambient == ambient {
            return;
        }
        debug_log!(
            "Switching ambient params to org='{}' project='{}'",
            ambient.org_slug,
            ambient.project_slug
        );
        self.ambient = ambient;
        #[cfg(feature = "cache")]
        self.cache.clear();
    }

    /// Current ambient params.
    pub fn ambient(&self) -> &AmbientParams {
        &self.ambient
    }

    /// Static route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Active configuration.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Base URL of the Gram server for a page served from `origin`.
    pub fn server_url(&self, origin: &str) -> String {
        self.config.server_url(origin)
    }

    /// Decoration memo statistics.
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &CacheStats {
        self.cache.stats()
    }
}
