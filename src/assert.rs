//! Assertion helper for caller preconditions.
//!
//! [`ensure`] turns a failed condition into [`RouteError::Assertion`] so the
//! failure propagates with `?` instead of panicking:
//!
//! ```
//! use gram_routes::{ensure, RouteError};
//!
//! fn toolset_href(slug: &str) -> Result<String, RouteError> {
//!     ensure!(!slug.is_empty(), "toolset slug is required");
//!     Ok(format!("/toolsets/{slug}"))
//! }
//!
//! assert!(toolset_href("abc").is_ok());
//! assert_eq!(toolset_href("").unwrap_err().to_string(), "toolset slug is required");
//! ```

use crate::error::RouteError;
use crate::warn_log;

/// Return [`RouteError::Assertion`] with `message` unless `condition` holds.
pub fn ensure(condition: bool, message: impl Into<String>) -> Result<(), RouteError> {
    if condition {
        return Ok(());
    }
    let message = message.into();
    warn_log!("Assertion failed: {}", message);
    Err(RouteError::Assertion { message })
}

/// Early-return [`RouteError::Assertion`] from the enclosing function unless
/// the condition holds.
#[macro_export]
macro_rules! ensure {
    ($condition:expr, $message:expr $(,)?) => {
        $crate::assert::ensure($condition, $message)?
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_passes() {
        assert!(ensure(true, "unused").is_ok());
    }

    #[test]
    fn test_ensure_fails_with_message() {
        let err = ensure(1 + 1 == 3, "math is broken").unwrap_err();
        assert_eq!(
            err,
            RouteError::Assertion {
                message: "math is broken".to_string()
            }
        );
    }

    #[test]
    fn test_ensure_macro_returns_early() {
        fn check(value: Option<u32>) -> Result<u32, RouteError> {
            ensure!(value.is_some(), format!("missing value {:?}", value));
            Ok(value.unwrap_or_default() * 2)
        }

        assert_eq!(check(Some(2)), Ok(4));
        assert!(check(None).unwrap_err().is_assertion());
    }
}
