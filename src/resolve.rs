//! Path template composition and resolution
//!
//! # Templates
//!
//! Each route's full template is built by [`compose_template`] while the
//! decorator walks the tree:
//!
//! ```text
//! toolsets             → /:orgSlug/:projectSlug/toolsets
//!   toolset            → /:orgSlug/:projectSlug/toolsets/:toolsetSlug
//!     update           → /:orgSlug/:projectSlug/toolsets/:toolsetSlug/update
//! /login               → /login                    (absolute, not prefixed)
//! :orgSlug/:projectSlug/onboarding
//!                      → /:orgSlug/:projectSlug/:orgSlug/:projectSlug/onboarding
//! ```
//!
//! Only a top-level absolute url escapes the ambient prefix. Below the top
//! level every url extends its parent's template, a leading `/` included:
//!
//! ```text
//! a                    → /:orgSlug/:projectSlug/a
//!   /b                 → /:orgSlug/:projectSlug/a/b
//! ```
//!
//! # Resolution
//!
//! [`resolve_path`] substitutes values into a template:
//!
//! - `:orgSlug` and `:projectSlug` come from [`AmbientParams`] and never
//!   consume a positional value.
//! - Every other `:param` consumes the next positional value, left to right.
//!   Running out (or hitting an empty value) is a
//!   [`RouteError::MissingParam`]. Surplus values are ignored.
//!
//! ```
//! use gram_routes::resolve::resolve_path;
//! use gram_routes::AmbientParams;
//!
//! let ambient = AmbientParams::new("acme", "proj1");
//! let path = resolve_path("/:orgSlug/:projectSlug/toolsets/:toolsetSlug/update", &ambient, &["abc"]);
//! assert_eq!(path.unwrap(), "/acme/proj1/toolsets/abc/update");
//! ```

use crate::error::RouteError;
use crate::matching::{is_param_segment, split_path};
use crate::params::{is_ambient_segment, AmbientParams, AMBIENT_PREFIX};
use crate::route::RouteDef;
use crate::{trace_log, warn_log};

/// Build the full template of `route` given its parent's template.
///
/// `parent` is `None` for top-level routes.
pub fn compose_template(route: &RouteDef, parent: Option<&str>) -> String {
    if route.is_external() {
        return route.url.clone();
    }

    let url = route.url.trim_start_matches('/');
    match parent {
        Some(parent) => format!("{}/{}", parent, url),
        None if route.is_absolute() => route.url.clone(),
        None => format!("{}/{}", AMBIENT_PREFIX, url),
    }
}

/// Substitute ambient and positional values into `template`.
pub fn resolve_path<S: AsRef<str>>(
    template: &str,
    ambient: &AmbientParams,
    params: &[S],
) -> Result<String, RouteError> {
    let mut positional = params.iter().map(AsRef::as_ref);
    let mut resolved: Vec<&str> = Vec::new();

    for segment in split_path(template) {
        if !is_param_segment(segment) {
            resolved.push(segment);
            continue;
        }

        if let Some(value) = ambient.lookup(segment) {
            resolved.push(value);
            continue;
        }

        match positional.next() {
            Some(value) if !value.is_empty() => resolved.push(value),
            _ => {
                warn_log!(
                    "No value provided for {} while resolving '{}'",
                    segment,
                    template
                );
                return Err(RouteError::MissingParam {
                    segment: segment.to_string(),
                    template: template.to_string(),
                });
            }
        }
    }

    let path = format!("/{}", resolved.join("/"));
    trace_log!("Resolved '{}' to '{}'", template, path);
    Ok(path)
}

/// Count the dynamic segments of `template` that need a positional value.
pub fn positional_count(template: &str) -> usize {
    split_path(template)
        .into_iter()
        .filter(|s| is_param_segment(s) && !is_ambient_segment(s))
        .count()
}
