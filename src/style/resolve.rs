//! Theme token resolution.
//!
//! Style values may embed `var(--token)` references. At generation time
//! each recognized token is textually substituted with its concrete
//! value; unrecognized tokens stay literal so consumer-owned CSS custom
//! properties pass through untouched.

use std::sync::LazyLock;

use regex::Regex;

use super::kebab_to_camel;
use crate::tailwind::ScaleTables;
use crate::theme::Theme;

static VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var\(--([a-zA-Z0-9-]+)\)").unwrap());

/// Fixed values for the shared button appearance tokens.
const BUTTON_TOKENS: [(&str, &str); 3] = [
    ("button-padding-x", "1.25rem"),
    ("button-padding-y", "0.625rem"),
    ("button-radius", "0.5rem"),
];

/// Substitute every recognized `var(--token)` in a style value.
///
/// Token categories, first match wins: spacing steps, text sizes,
/// button tokens, radius steps, theme colors, theme fonts. Unknown
/// tokens are left as literal `var(...)` text.
pub fn resolve_value(value: &str, theme: &Theme, scale: &ScaleTables) -> String {
    if !value.contains("var(") {
        return value.to_string();
    }
    VAR_RE
        .replace_all(value, |caps: &regex::Captures| {
            let token = &caps[1];
            match resolve_token(token, theme, scale) {
                Some(resolved) => resolved,
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn resolve_token(token: &str, theme: &Theme, scale: &ScaleTables) -> Option<String> {
    // spacing-{n}: computed from the configured step size
    if let Some(raw) = token.strip_prefix("spacing-")
        && let Ok(steps) = raw.parse::<f32>()
        && steps.is_finite()
        && steps >= 0.0
    {
        return Some(scale.spacing(steps));
    }

    if let Some(key) = token.strip_prefix("text-") {
        return scale.text_size(key).map(str::to_string);
    }

    if let Some((_, fixed)) = BUTTON_TOKENS.iter().find(|(name, _)| *name == token) {
        return Some((*fixed).to_string());
    }

    if let Some(key) = token.strip_prefix("radius-") {
        return scale.radius(key).map(str::to_string);
    }

    // color-{name}: theme colors are keyed camelCase, tokens are kebab
    if let Some(key) = token.strip_prefix("color-") {
        return theme.color(&kebab_to_camel(key)).map(str::to_string);
    }

    match token {
        "font-heading" => Some(font_stack(&theme.fonts.heading)),
        "font-body" => Some(font_stack(&theme.fonts.body)),
        _ => None,
    }
}

fn font_stack(family: &str) -> String {
    format!("'{family}', sans-serif")
}

// ============================================================================
// Tests
// ============================================================================
