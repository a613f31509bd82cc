//! Segment-based active-route matching
//!
//! A route is "active" when its full template lines up with the current
//! location segment for segment.
//!
//! # Design
//!
//! - Split paths by '/' into segments, dropping empty ones
//! - Segment counts must be equal (no prefix matches)
//! - Literal segments match exactly
//! - `:param` segments match any value
//!
//! Upward propagation (a parent is active when a descendant is) is done by
//! the decorator, see [`crate::decorate`].

/// Split a path into segments, filtering empty segments
///
/// # Examples
///
/// ```
/// use gram_routes::matching::split_path;
///
/// assert_eq!(split_path("/toolsets/abc"), vec!["toolsets", "abc"]);
/// assert!(split_path("/").is_empty());
/// assert_eq!(split_path("//login"), vec!["login"]);
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Extract parameter name from a route segment
///
/// # Examples
///
/// ```
/// use gram_routes::matching::extract_param_name;
///
/// assert_eq!(extract_param_name(":toolsetSlug"), Some("toolsetSlug"));
/// assert_eq!(extract_param_name("toolsets"), None);
/// ```
pub fn extract_param_name(segment: &str) -> Option<&str> {
    segment.strip_prefix(':')
}

/// Check if a route segment is a parameter
pub fn is_param_segment(segment: &str) -> bool {
    segment.starts_with(':')
}

/// Check whether `current` is a location of the route `template`
///
/// # Examples
///
/// ```
/// use gram_routes::matching::matches_template;
///
/// let template = "/:orgSlug/:projectSlug/toolsets/:toolsetSlug/update";
/// assert!(matches_template(template, "/acme/proj1/toolsets/abc/update"));
/// assert!(!matches_template(template, "/acme/proj1/toolsets/abc"));
/// ```
pub fn matches_template(template: &str, current: &str) -> bool {
    let template_segments = split_path(template);
    let current_segments = split_path(current);

    if template_segments.len() != current_segments.len() {
        return false;
    }

    template_segments
        .iter()
        .zip(current_segments.iter())
        .all(|(template_seg, current_seg)| {
            is_param_segment(template_seg) || template_seg == current_seg
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/users/123"), vec!["users", "123"]);
        assert_eq!(split_path("/users/123/profile"), vec!["users", "123", "profile"]);
        assert_eq!(split_path("/"), Vec::<&str>::new());
        assert_eq!(split_path(""), Vec::<&str>::new());
        assert_eq!(split_path("/users/"), vec!["users"]);
        assert_eq!(split_path("users"), vec!["users"]);
    }

    #[test]
    fn test_extract_param_name() {
        assert_eq!(extract_param_name(":id"), Some("id"));
        assert_eq!(extract_param_name(":orgSlug"), Some("orgSlug"));
        assert_eq!(extract_param_name("users"), None);
        assert_eq!(extract_param_name(""), None);
    }

    #[test]
    fn test_is_param_segment() {
        assert!(is_param_segment(":id"));
        assert!(!is_param_segment("users"));
        assert!(!is_param_segment(""));
    }

    #[test]
    fn test_literal_match() {
        assert!(matches_template("/login", "/login"));
        assert!(matches_template("/login", "/login/"));
        assert!(!matches_template("/login", "/logout"));
    }

    #[test]
    fn test_dynamic_segments_match_anything() {
        let template = "/:orgSlug/:projectSlug/prompts/:promptName";
        assert!(matches_template(template, "/acme/proj1/prompts/greeting"));
        assert!(matches_template(template, "/other/p/prompts/new"));
        assert!(!matches_template(template, "/acme/proj1/toolsets/greeting"));
    }

    #[test]
    fn test_segment_count_must_be_equal() {
        let template = "/:orgSlug/:projectSlug/toolsets";
        assert!(!matches_template(template, "/acme/proj1"));
        assert!(!matches_template(template, "/acme/proj1/toolsets/abc"));
    }

    #[test]
    fn test_root_template_matches_root_only() {
        assert!(matches_template("/", "/"));
        assert!(matches_template("", "/"));
        assert!(!matches_template("/", "/acme"));
    }
}
