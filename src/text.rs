//! String-case helpers for titles and labels.

/// Word characters for [`title_case`]: ASCII letters, digits and `_`.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Uppercase the first character of every word.
///
/// A word starts at a word character that follows a non-word character or
/// the start of the string, so `custom-tool` becomes `Custom-Tool`.
///
/// # Examples
///
/// ```
/// use gram_routes::text::title_case;
///
/// assert_eq!(title_case("custom tool"), "Custom Tool");
/// assert_eq!(title_case("slack-app settings"), "Slack-App Settings");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_word = false;
    for c in s.chars() {
        let is_word = is_word_char(c);
        if is_word && !prev_is_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

/// Uppercase the first character, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use gram_routes::text::capitalize;
///
/// assert_eq!(capitalize("gram"), "Gram");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("custom tool"), "Custom Tool");
        assert_eq!(title_case("already Title"), "Already Title");
        assert_eq!(title_case("  two  spaces"), "  Two  Spaces");
        assert_eq!(title_case("snake_case word"), "Snake_case Word");
        assert_eq!(title_case("v2 api"), "V2 Api");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_leaves_rest_of_word() {
        assert_eq!(title_case("mCP details"), "MCP Details");
        assert_eq!(title_case("it's"), "It'S");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("gram"), "Gram");
        assert_eq!(capitalize("Gram"), "Gram");
        assert_eq!(capitalize("tool builder"), "Tool builder");
        assert_eq!(capitalize("émoji"), "Émoji");
    }
}
