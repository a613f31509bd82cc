//! # gram-routes
//!
//! Route table and navigation helpers for the Gram dashboard.
//!
//! The dashboard declares its pages once, as a static tree of
//! [`RouteDef`]s ([`dashboard_routes`]). On every location change the tree
//! is decorated ([`decorate`], or memoized through [`RouteService`]) into
//! [`DecoratedRoutes`]: the same shape, with each node knowing whether it is
//! active and how to build its URL, navigate to itself, and describe its
//! link and icon.
//!
//! ```
//! use gram_routes::{AmbientParams, History, QueryParams, RouteService, NO_PARAMS};
//!
//! let mut service = RouteService::dashboard(AmbientParams::new("acme", "proj1"));
//! let mut history = History::starting_at("/acme/proj1/toolsets/abc/update");
//! let routes = service.current_routes(&history);
//!
//! // Active state propagates from the deepest match upwards.
//! let crumbs: Vec<&str> = routes.active_trail().iter().map(|r| r.title.as_str()).collect();
//! assert_eq!(crumbs, ["Toolsets", "Toolset", "Update"]);
//!
//! // Dynamic segments are filled left to right; org and project come from context.
//! let prompt = routes.at(&["prompts", "prompt"]).unwrap();
//! assert_eq!(prompt.href(&["greeting"]).unwrap(), "/acme/proj1/prompts/greeting");
//! assert!(prompt.href(NO_PARAMS).is_err());
//!
//! let link = routes.get("mcp").unwrap().link(NO_PARAMS, &QueryParams::new().with("tab", "logs")).unwrap();
//! assert_eq!(link.to, "/acme/proj1/mcp?tab=logs");
//!
//! routes.get("settings").unwrap().go_to(&mut history, NO_PARAMS).unwrap();
//! ```
//!
//! The crate also carries the small UI string helpers the dashboard shares:
//! [`cn!`] for class names, [`text`] case helpers, [`config::server_url`]
//! and [`ensure!`].
//!
//! ## Feature flags
//!
//! | Feature   | Default | Effect                                         |
//! |-----------|---------|------------------------------------------------|
//! | `log`     | yes     | log through the `log` crate                    |
//! | `tracing` | no      | log through the `tracing` crate instead        |
//! | `cache`   | yes     | memoize decorated trees per location (`lru`)   |
//! | `serde`   | no      | `Serialize` for decorated routes, links, icons |

pub mod logging;

pub mod assert;
#[cfg(feature = "cache")]
pub mod cache;
pub mod classes;
pub mod config;
pub mod context;
pub mod decorate;
pub mod error;
pub mod matching;
pub mod params;
pub mod resolve;
pub mod route;
pub mod state;
pub mod table;
pub mod text;
pub mod widgets;

pub use assert::ensure;
#[cfg(feature = "cache")]
pub use cache::{CacheStats, DecorationCache};
pub use classes::{clsx, cn, merge_classes, ClassValue};
pub use config::RouterConfig;
pub use context::RouteService;
pub use decorate::{decorate, DecoratedRoute, DecoratedRoutes};
pub use error::RouteError;
pub use matching::matches_template;
pub use params::{AmbientParams, QueryParams, NO_PARAMS};
pub use resolve::{compose_template, resolve_path};
pub use route::{
    ExternalRoute, IconName, Page, PageRoute, RouteDef, RouteKind, RouteMap, RouteTable, ViewId,
};
pub use state::{History, NavigationOutcome, Navigator};
pub use table::dashboard_routes;
pub use text::{capitalize, title_case};
pub use widgets::{Icon, Link};
