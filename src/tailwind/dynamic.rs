//! Arbitrary-value bracket patterns (`prefix-[value]`).
//!
//! Ordered list of `(matcher, properties)` pairs, first match wins.
//! The editor leans on these for theme tokens (`bg-[var(--color-primary)]`)
//! and one-off values (`px-[18px]`); underscores inside a bracket encode
//! spaces (`shadow-[0_2px_4px_rgba(0,0,0,0.1)]`).

use crate::style::StyleMap;
use regex::Regex;
use std::sync::LazyLock;

/// Properties that receive the captured value, camelCase.
type Props = &'static [&'static str];

#[rustfmt::skip]
static PATTERNS: LazyLock<Vec<(Regex, Props)>> = LazyLock::new(|| {
    // (pattern, properties) in priority order; `text-[length:...]`
    // must be tested before the color form of `text-[...]`.
    let table: &[(&str, Props)] = &[
        (r"^bg-\[(.+)\]$", &["backgroundColor"]),
        (r"^text-\[length:(.+)\]$", &["fontSize"]),
        (r"^text-\[(.+)\]$", &["color"]),
        (r"^border-\[(.+)\]$", &["borderColor"]),
        (r"^rounded-\[(.+)\]$", &["borderRadius"]),
        (r"^w-\[(.+)\]$", &["width"]),
        (r"^h-\[(.+)\]$", &["height"]),
        (r"^min-w-\[(.+)\]$", &["minWidth"]),
        (r"^min-h-\[(.+)\]$", &["minHeight"]),
        (r"^max-w-\[(.+)\]$", &["maxWidth"]),
        (r"^max-h-\[(.+)\]$", &["maxHeight"]),
        (r"^p-\[(.+)\]$", &["padding"]),
        (r"^px-\[(.+)\]$", &["paddingLeft", "paddingRight"]),
        (r"^py-\[(.+)\]$", &["paddingTop", "paddingBottom"]),
        (r"^pt-\[(.+)\]$", &["paddingTop"]),
        (r"^pr-\[(.+)\]$", &["paddingRight"]),
        (r"^pb-\[(.+)\]$", &["paddingBottom"]),
        (r"^pl-\[(.+)\]$", &["paddingLeft"]),
        (r"^m-\[(.+)\]$", &["margin"]),
        (r"^mx-\[(.+)\]$", &["marginLeft", "marginRight"]),
        (r"^my-\[(.+)\]$", &["marginTop", "marginBottom"]),
        (r"^mt-\[(.+)\]$", &["marginTop"]),
        (r"^mr-\[(.+)\]$", &["marginRight"]),
        (r"^mb-\[(.+)\]$", &["marginBottom"]),
        (r"^ml-\[(.+)\]$", &["marginLeft"]),
        (r"^gap-\[(.+)\]$", &["gap"]),
        (r"^gap-x-\[(.+)\]$", &["columnGap"]),
        (r"^gap-y-\[(.+)\]$", &["rowGap"]),
        (r"^top-\[(.+)\]$", &["top"]),
        (r"^right-\[(.+)\]$", &["right"]),
        (r"^bottom-\[(.+)\]$", &["bottom"]),
        (r"^left-\[(.+)\]$", &["left"]),
        (r"^font-\[(.+)\]$", &["fontFamily"]),
        (r"^leading-\[(.+)\]$", &["lineHeight"]),
        (r"^tracking-\[(.+)\]$", &["letterSpacing"]),
        (r"^shadow-\[(.+)\]$", &["boxShadow"]),
        (r"^grid-cols-\[(.+)\]$", &["gridTemplateColumns"]),
    ];

    table
        .iter()
        .map(|(pattern, props)| (Regex::new(pattern).unwrap(), *props))
        .collect()
});

/// Resolve an arbitrary-value token, or `None` if no pattern matches.
pub fn resolve(token: &str) -> Option<StyleMap> {
    for (re, props) in PATTERNS.iter() {
        if let Some(caps) = re.captures(token) {
            let value = decode_value(caps.get(1)?.as_str());
            return Some(
                props
                    .iter()
                    .map(|p| ((*p).to_string(), value.clone()))
                    .collect(),
            );
        }
    }
    None
}

/// Underscores encode spaces inside bracket values.
fn decode_value(raw: &str) -> String {
    raw.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_token_value() {
        let styles = resolve("bg-[var(--color-primary)]").unwrap();
        assert_eq!(
            styles.get("backgroundColor").map(String::as_str),
            Some("var(--color-primary)")
        );
    }

    #[test]
    fn test_axis_patterns_set_both_sides() {
        let styles = resolve("px-[2rem]").unwrap();
        assert_eq!(styles.get("paddingLeft").map(String::as_str), Some("2rem"));
        assert_eq!(styles.get("paddingRight").map(String::as_str), Some("2rem"));
        assert_eq!(styles.len(), 2);
    }

    #[test]
    fn test_text_length_form_beats_color_form() {
        let styles = resolve("text-[length:18px]").unwrap();
        assert_eq!(styles.get("fontSize").map(String::as_str), Some("18px"));

        let styles = resolve("text-[#112233]").unwrap();
        assert_eq!(styles.get("color").map(String::as_str), Some("#112233"));
    }

    #[test]
    fn test_underscores_decode_to_spaces() {
        let styles = resolve("shadow-[0_2px_4px_rgba(0,0,0,0.1)]").unwrap();
        assert_eq!(
            styles.get("boxShadow").map(String::as_str),
            Some("0 2px 4px rgba(0,0,0,0.1)")
        );
    }

    #[test]
    fn test_no_match() {
        assert!(resolve("bg-red-500").is_none());
        assert!(resolve("p-4").is_none());
        assert!(resolve("bogus-[x").is_none());
    }
}
