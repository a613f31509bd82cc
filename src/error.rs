//! Error handling for route resolution.
//!
//! Every failure in this crate is a caller error: a path template resolved
//! with too few positional values, a lookup of a route key that does not
//! exist, or a failed [`ensure`](crate::assert::ensure). None of them are
//! retried; they are returned as [`RouteError`] so the caller sees a hard
//! failure instead of a silently wrong URL.
//!
//! # Examples
//!
//! ```
//! use gram_routes::RouteError;
//!
//! let err = RouteError::MissingParam {
//!     segment: ":toolsetSlug".into(),
//!     template: "/:orgSlug/:projectSlug/toolsets/:toolsetSlug".into(),
//! };
//! assert_eq!(err.to_string(), "No value provided for :toolsetSlug");
//! assert!(err.is_missing_param());
//! ```

use std::fmt;

/// Detailed error variants returned by resolution and lookup.
///
/// Implements [`std::error::Error`] and [`Display`](std::fmt::Display) for
/// idiomatic error handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A dynamic segment had no positional value left to consume
    MissingParam { segment: String, template: String },

    /// No route is registered under this key path
    UnknownRoute { key: String },

    /// An [`ensure`](crate::assert::ensure) condition did not hold
    Assertion { message: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::MissingParam { segment, .. } => {
                write!(f, "No value provided for {}", segment)
            }
            RouteError::UnknownRoute { key } => {
                write!(f, "Unknown route: {}", key)
            }
            RouteError::Assertion { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for RouteError {}

impl RouteError {
    /// Check if a positional value was missing
    pub fn is_missing_param(&self) -> bool {
        matches!(self, RouteError::MissingParam { .. })
    }

    /// Check if a route lookup failed
    pub fn is_unknown_route(&self) -> bool {
        matches!(self, RouteError::UnknownRoute { .. })
    }

    /// Check if an assertion failed
    pub fn is_assertion(&self) -> bool {
        matches!(self, RouteError::Assertion { .. })
    }
}
