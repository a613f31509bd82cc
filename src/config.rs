//! Environment-aware configuration.
//!
//! The dashboard talks to the Gram server at the page's own origin unless a
//! server URL was injected. Two injection points exist:
//!
//! - **build time**: `GRAM_SERVER_URL` set while compiling, read with
//!   [`option_env!`] by [`server_url`];
//! - **run time**: `GRAM_SERVER_URL` in the process environment, read by
//!   [`RouterConfig::from_env`].
//!
//! An empty override counts as unset.

use crate::debug_log;
use std::num::NonZeroUsize;

/// Environment variable naming the server URL override.
pub const SERVER_URL_VAR: &str = "GRAM_SERVER_URL";

/// Environment variable setting the decoration cache capacity.
pub const CACHE_CAPACITY_VAR: &str = "GRAM_ROUTE_CACHE_CAPACITY";

/// Server URL override captured at build time, if any.
const BUILD_SERVER_URL: Option<&str> = option_env!("GRAM_SERVER_URL");

/// Base URL of the Gram server: the build-time override when present,
/// else `origin`.
pub fn server_url(origin: &str) -> String {
    resolve_server_url(BUILD_SERVER_URL, origin)
}

/// Pick `override_url` when it is set and non-empty, else `origin`.
///
/// # Examples
///
/// ```
/// use gram_routes::config::resolve_server_url;
///
/// assert_eq!(resolve_server_url(Some("https://api.getgram.ai"), "http://localhost:5173"), "https://api.getgram.ai");
/// assert_eq!(resolve_server_url(Some(""), "http://localhost:5173"), "http://localhost:5173");
/// assert_eq!(resolve_server_url(None, "http://localhost:5173"), "http://localhost:5173");
/// ```
pub fn resolve_server_url(override_url: Option<&str>, origin: &str) -> String {
    match override_url {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => origin.to_string(),
    }
}

/// Runtime configuration of a [`RouteService`](crate::RouteService)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Server URL override; falls back to the build-time override
    pub server_url_override: Option<String>,
    /// Number of locations the decoration cache keeps
    pub cache_capacity: NonZeroUsize,
}

impl RouterConfig {
    /// Read the configuration from the process environment.
    ///
    /// An unparsable or zero capacity falls back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(SERVER_URL_VAR).filter(|u| !u.is_empty()) {
            debug_log!("Using server URL override from {}: {}", SERVER_URL_VAR, url);
            config.server_url_override = Some(url);
        }

        if let Some(raw) = lookup(CACHE_CAPACITY_VAR) {
            match raw.trim().parse::<NonZeroUsize>() {
                Ok(capacity) => config.cache_capacity = capacity,
                Err(_) => {
                    debug_log!(
                        "Ignoring invalid {}='{}', keeping {}",
                        CACHE_CAPACITY_VAR,
                        raw,
                        config.cache_capacity
                    );
                }
            }
        }

        config
    }

    /// Base URL of the Gram server for a page served from `origin`.
    pub fn server_url(&self, origin: &str) -> String {
        match self.server_url_override.as_deref() {
            Some(url) => resolve_server_url(Some(url), origin),
            None => server_url(origin),
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            server_url_override: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Number of locations the decoration cache keeps by default.
pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(capacity) => capacity,
    None => panic!("default capacity must be non-zero"),
};
