//! Class-name combination.
//!
//! Two steps, applied by [`cn`]:
//!
//! 1. [`clsx`] joins conditional fragments ([`ClassValue`]) into one string,
//!    skipping falsy ones.
//! 2. [`merge_classes`] resolves conflicting utility classes: when two
//!    classes set the same property under the same variants, the later one
//!    wins. Shorthands override their longhands (`px-2 p-4` keeps only
//!    `p-4`), a later longhand refines an earlier shorthand (`p-4 px-2`
//!    keeps both).
//!
//! ```
//! use gram_routes::cn;
//!
//! let active = true;
//! assert_eq!(cn!["p-2 text-sm", ("p-4", active), ("hidden", !active)], "text-sm p-4");
//! assert_eq!(cn!["hover:bg-muted", "bg-card", "hover:bg-accent"], "bg-card hover:bg-accent");
//! ```
//!
//! Classes that are not recognised as utilities are always kept.

use std::collections::HashSet;

/// One conditional class-name fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassValue<'a> {
    /// Always included
    Str(&'a str),
    /// Always included, owned
    Owned(String),
    /// Included when the flag is true
    When(&'a str, bool),
    /// Nested fragments
    List(Vec<ClassValue<'a>>),
    /// Never included
    Empty,
}

impl<'a> From<&'a str> for ClassValue<'a> {
    fn from(class: &'a str) -> Self {
        ClassValue::Str(class)
    }
}

impl From<String> for ClassValue<'_> {
    fn from(class: String) -> Self {
        ClassValue::Owned(class)
    }
}

impl<'a> From<(&'a str, bool)> for ClassValue<'a> {
    fn from((class, on): (&'a str, bool)) -> Self {
        ClassValue::When(class, on)
    }
}

impl<'a> From<Option<&'a str>> for ClassValue<'a> {
    fn from(class: Option<&'a str>) -> Self {
        class.map_or(ClassValue::Empty, ClassValue::Str)
    }
}

impl From<Option<String>> for ClassValue<'_> {
    fn from(class: Option<String>) -> Self {
        class.map_or(ClassValue::Empty, ClassValue::Owned)
    }
}

impl<'a> From<Vec<ClassValue<'a>>> for ClassValue<'a> {
    fn from(values: Vec<ClassValue<'a>>) -> Self {
        ClassValue::List(values)
    }
}

impl ClassValue<'_> {
    fn push_into(&self, out: &mut Vec<String>) {
        match self {
            ClassValue::Str(class) | ClassValue::When(class, true) => push_fragment(class, out),
            ClassValue::Owned(class) => push_fragment(class, out),
            ClassValue::List(values) => values.iter().for_each(|v| v.push_into(out)),
            ClassValue::When(_, false) | ClassValue::Empty => {}
        }
    }
}

fn push_fragment(class: &str, out: &mut Vec<String>) {
    let class = class.trim();
    if !class.is_empty() {
        out.push(class.to_string());
    }
}

/// Join the truthy fragments with single spaces.
pub fn clsx<'a, I, V>(values: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<ClassValue<'a>>,
{
    let mut out = Vec::new();
    for value in values {
        value.into().push_into(&mut out);
    }
    out.join(" ")
}

/// [`clsx`] followed by [`merge_classes`].
pub fn cn<'a, I, V>(values: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<ClassValue<'a>>,
{
    merge_classes(&clsx(values))
}

/// Build a class string from heterogeneous fragments, see [`cn`].
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::classes::cn([$($crate::classes::ClassValue::from($value)),+])
    };
}

/// Resolve utility-class conflicts, keeping the last class per property.
pub fn merge_classes(classes: &str) -> String {
    let mut taken: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::new();

    for class in classes.split_whitespace().rev() {
        let Some(parsed) = parse_class(class) else {
            kept.push(class);
            continue;
        };

        let key = parsed.key(parsed.group);
        if taken.contains(&key) {
            continue;
        }

        for overridden in conflicting_groups(parsed.group) {
            taken.insert(parsed.key(overridden));
        }
        taken.insert(key);
        kept.push(class);
    }

    kept.reverse();
    kept.join(" ")
}

/// A utility class split into its conflict-relevant parts
struct ParsedClass<'a> {
    variants: Vec<&'a str>,
    important: bool,
    group: &'static str,
}

impl ParsedClass<'_> {
    fn key(&self, group: &str) -> String {
        format!("{}|{}|{}", self.variants.join(":"), self.important, group)
    }
}

fn parse_class(class: &str) -> Option<ParsedClass<'_>> {
    let (mut variants, base) = split_variants(class);
    variants.sort_unstable();

    let (base, important) = if let Some(rest) = base.strip_prefix('!') {
        (rest, true)
    } else if let Some(rest) = base.strip_suffix('!') {
        (rest, true)
    } else {
        (base, false)
    };
    let base = base.strip_prefix('-').unwrap_or(base);

    class_group(base).map(|group| ParsedClass {
        variants,
        important,
        group,
    })
}

/// Split `md:hover:p-4` into `["md", "hover"]` and `p-4`, ignoring colons
/// inside arbitrary values (`bg-[url(a:b)]`).
fn split_variants(class: &str) -> (Vec<&str>, &str) {
    let mut variants = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in class.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                variants.push(&class[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    (variants, &class[start..])
}

/// Value after `prefix-`, or `""` when `base` is exactly `prefix`.
fn value_of<'a>(base: &'a str, prefix: &str) -> Option<&'a str> {
    if base == prefix {
        return Some("");
    }
    base.strip_prefix(prefix)?.strip_prefix('-')
}

fn is_length(value: &str) -> bool {
    value.is_empty() || value.chars().all(|c| c.is_ascii_digit()) || value.starts_with('[')
}

const EXACT_CLASSES: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("table", "display"),
    ("contents", "display"),
    ("flow-root", "display"),
    ("hidden", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("visible", "visibility"),
    ("invisible", "visibility"),
    ("collapse", "visibility"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
    ("truncate", "text-overflow"),
    ("text-ellipsis", "text-overflow"),
    ("text-clip", "text-overflow"),
];

/// Prefixed utilities whose group is the prefix itself. Longer prefixes come
/// first so `gap-x-2` is not taken for `gap`.
const PREFIXED_CLASSES: &[&str] = &[
    "px", "py", "pt", "pr", "pb", "pl", "ps", "pe", "p",
    "mx", "my", "mt", "mr", "mb", "ml", "ms", "me", "m",
    "gap-x", "gap-y", "gap",
    "space-x", "space-y",
    "min-w", "max-w", "min-h", "max-h", "size", "w", "h",
    "inset-x", "inset-y", "inset", "top", "right", "bottom", "left",
    "overflow-x", "overflow-y", "overflow",
    "opacity", "z", "cursor", "leading", "tracking", "shadow",
    "grow", "shrink", "basis", "order",
];

/// Prefixed utilities that are also valid without a value.
const BARE_CLASSES: &[&str] = &["shadow", "grow", "shrink"];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const BORDER_SIDES: &[&str] = &["x", "y", "t", "r", "b", "l", "s", "e"];
const ROUNDED_SIDES: &[&str] = &[
    "tl", "tr", "br", "bl", "ss", "se", "es", "ee", "t", "r", "b", "l", "s", "e",
];

fn class_group(base: &str) -> Option<&'static str> {
    if let Some((_, group)) = EXACT_CLASSES.iter().find(|(class, _)| *class == base) {
        return Some(*group);
    }

    if let Some(value) = value_of(base, "text") {
        return Some(if FONT_SIZES.contains(&value) {
            "font-size"
        } else if TEXT_ALIGNS.contains(&value) {
            "text-align"
        } else {
            "text-color"
        });
    }

    if let Some(value) = value_of(base, "font") {
        return Some(if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        });
    }

    if let Some(value) = value_of(base, "bg") {
        return Some(match value {
            "auto" | "cover" | "contain" => "bg-size",
            "fixed" | "local" | "scroll" => "bg-attachment",
            v if v == "none" || v.starts_with("gradient") => "bg-image",
            _ => "bg-color",
        });
    }

    if let Some(group) = border_group(base) {
        return Some(group);
    }

    if let Some(group) = rounded_group(base) {
        return Some(group);
    }

    if let Some(value) = value_of(base, "flex") {
        return Some(match value {
            "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
            "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
            _ => "flex",
        });
    }

    if value_of(base, "items").is_some() {
        return Some("align-items");
    }
    if value_of(base, "justify").is_some() {
        return Some("justify-content");
    }

    PREFIXED_CLASSES
        .iter()
        .find(|prefix| {
            value_of(base, prefix).is_some_and(|v| !v.is_empty() || BARE_CLASSES.contains(*prefix))
        })
        .copied()
}

fn border_group(base: &str) -> Option<&'static str> {
    let value = value_of(base, "border")?;
    if is_length(value) {
        return Some("border-w");
    }
    if BORDER_STYLES.contains(&value) {
        return Some("border-style");
    }
    for side in BORDER_SIDES {
        if let Some(rest) = value_of(value, side) {
            if is_length(rest) {
                return Some(match *side {
                    "x" => "border-w-x",
                    "y" => "border-w-y",
                    "t" => "border-w-t",
                    "r" => "border-w-r",
                    "b" => "border-w-b",
                    "l" => "border-w-l",
                    "s" => "border-w-s",
                    _ => "border-w-e",
                });
            }
        }
    }
    Some("border-color")
}

fn rounded_group(base: &str) -> Option<&'static str> {
    let value = value_of(base, "rounded")?;
    for side in ROUNDED_SIDES {
        if value_of(value, side).is_some() {
            return Some(match *side {
                "tl" => "rounded-tl",
                "tr" => "rounded-tr",
                "br" => "rounded-br",
                "bl" => "rounded-bl",
                "ss" => "rounded-ss",
                "se" => "rounded-se",
                "es" => "rounded-es",
                "ee" => "rounded-ee",
                "t" => "rounded-t",
                "r" => "rounded-r",
                "b" => "rounded-b",
                "l" => "rounded-l",
                "s" => "rounded-s",
                _ => "rounded-e",
            });
        }
    }
    Some("rounded")
}

/// Groups a class in `group` overrides besides its own.
fn conflicting_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "size" => &["w", "h"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "overflow" => &["overflow-x", "overflow-y"],
        "border-w" => &[
            "border-w-x", "border-w-y", "border-w-t", "border-w-r", "border-w-b", "border-w-l",
            "border-w-s", "border-w-e",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "rounded" => &[
            "rounded-t", "rounded-r", "rounded-b", "rounded-l", "rounded-s", "rounded-e",
            "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl", "rounded-ss", "rounded-se",
            "rounded-es", "rounded-ee",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clsx_skips_falsy() {
        let hidden: Option<&str> = None;
        assert_eq!(
            clsx([
                ClassValue::from("a"),
                ClassValue::from(("b", false)),
                ClassValue::from(("c", true)),
                ClassValue::from(hidden),
                ClassValue::from("  "),
                ClassValue::from(vec![ClassValue::from("d"), ClassValue::from(String::from("e"))]),
            ]),
            "a c d e"
        );
    }

    #[test]
    fn test_last_conflicting_class_wins() {
        assert_eq!(merge_classes("p-2 p-4"), "p-4");
        assert_eq!(merge_classes("text-sm text-lg font-bold"), "text-lg font-bold");
        assert_eq!(merge_classes("bg-red-500 bg-primary"), "bg-primary");
        assert_eq!(merge_classes("block flex hidden"), "hidden");
    }

    #[test]
    fn test_different_properties_coexist() {
        assert_eq!(merge_classes("text-sm text-red-500"), "text-sm text-red-500");
        assert_eq!(merge_classes("text-center text-muted"), "text-center text-muted");
        assert_eq!(
            merge_classes("border border-red-500 border-dashed"),
            "border border-red-500 border-dashed"
        );
    }

    #[test]
    fn test_shorthand_overrides_longhand() {
        assert_eq!(merge_classes("px-2 py-1 p-4"), "p-4");
        assert_eq!(merge_classes("p-4 px-2"), "p-4 px-2");
        assert_eq!(merge_classes("rounded-t-lg rounded-md"), "rounded-md");
        assert_eq!(merge_classes("w-4 h-4 size-6"), "size-6");
    }

    #[test]
    fn test_variants_scope_conflicts() {
        assert_eq!(merge_classes("hover:p-2 p-4"), "hover:p-2 p-4");
        assert_eq!(merge_classes("hover:p-2 hover:p-4"), "hover:p-4");
        assert_eq!(merge_classes("md:hover:p-2 hover:md:p-4"), "hover:md:p-4");
    }

    #[test]
    fn test_important_scopes_conflicts() {
        assert_eq!(merge_classes("!p-2 p-4"), "!p-2 p-4");
        assert_eq!(merge_classes("!p-2 !p-4"), "!p-4");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(merge_classes("-mt-2 mt-4"), "mt-4");
    }

    #[test]
    fn test_unknown_classes_are_kept() {
        assert_eq!(merge_classes("sidebar p-2 sidebar p-4"), "sidebar sidebar p-4");
    }

    #[test]
    fn test_recognised_duplicates_collapse() {
        assert_eq!(merge_classes("p-4 flex p-4"), "flex p-4");
        assert_eq!(merge_classes("hover:underline hover:underline"), "hover:underline");
    }

    #[test]
    fn test_arbitrary_values() {
        assert_eq!(merge_classes("w-[10px] w-[12px]"), "w-[12px]");
        assert_eq!(merge_classes("bg-[url(a:b)] bg-red-500"), "bg-red-500");
    }

    #[test]
    fn test_cn_macro() {
        assert_eq!(cn!(), "");
        assert_eq!(cn!["p-2", "p-4"], "p-4");
        let extra = String::from("font-medium");
        assert_eq!(cn!["text-sm", ("text-lg", true), extra], "text-lg font-medium");
    }
}
