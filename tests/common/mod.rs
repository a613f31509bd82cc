//! Test utilities for route decoration tests
//!
//! Provides fixtures and assertion helpers shared by the integration tests.

#![allow(dead_code)]

use gram_routes::*;

/// Ambient params used throughout the tests
pub fn ambient() -> AmbientParams {
    AmbientParams::new("acme", "proj1")
}

/// Decorate the dashboard table at `location`
pub fn dashboard_at(location: &str) -> DecoratedRoutes {
    init_logging();
    decorate(&dashboard_routes(), location, &ambient())
}

/// Route at a dotted key path, panicking with a readable message
pub fn route<'a>(routes: &'a DecoratedRoutes, dotted: &str) -> &'a DecoratedRoute {
    routes
        .at_path(dotted)
        .unwrap_or_else(|err| panic!("route '{}' should exist: {}", dotted, err))
}

/// Assert that exactly the listed dotted routes are active
pub fn assert_active(routes: &DecoratedRoutes, expected: &[&str]) {
    let mut active = Vec::new();
    collect_active(routes, "", &mut active);
    assert_eq!(active, expected, "unexpected set of active routes");
}

fn collect_active(routes: &DecoratedRoutes, prefix: &str, out: &mut Vec<String>) {
    for route in routes {
        let key = if prefix.is_empty() {
            route.key.clone()
        } else {
            format!("{}.{}", prefix, route.key)
        };
        if route.active {
            out.push(key.clone());
        }
        collect_active(&route.children, &key, out);
    }
}

/// Route log output to the test harness (ignored if already initialized)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
