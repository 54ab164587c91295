//! Tailwind-like utility class parsing.
//!
//! Maps utility class tokens to CSS declarations. Resolution order,
//! first match wins:
//!
//! 1. static keyword table (`flex`, `truncate`, `items-center`)
//! 2. arbitrary bracket values (`bg-[var(--color-primary)]`)
//! 3. scale driven utilities (`p-4`, `text-2xl`, `rounded-lg`)
//!
//! Unknown classes warn and drop; one bad class never fails a publish.

mod dynamic;
mod scale;
mod table;

pub use scale::ScaleTables;

use crate::style::{StyleMap, kebab_to_camel};
use indexmap::IndexMap;

/// Responsive prefixes, stripped unconditionally: published pages emit
/// one fixed layout, media queries are not part of the output.
const RESPONSIVE_PREFIXES: [&str; 5] = ["sm:", "md:", "lg:", "xl:", "2xl:"];

/// Pseudo-state prefixes and the selector names they bucket under.
const PSEUDO_PREFIXES: [(&str, &str); 5] = [
    ("hover:", "hover"),
    ("focus:", "focus"),
    ("active:", "active"),
    ("disabled:", "disabled"),
    ("group-hover:", "group-hover"),
];

/// Spacing-scale prefixes, longest first so `px-` wins over `p-`.
#[rustfmt::skip]
const SPACING_PREFIXES: &[(&str, &[&str])] = &[
    ("px-", &["paddingLeft", "paddingRight"]),
    ("py-", &["paddingTop", "paddingBottom"]),
    ("pt-", &["paddingTop"]),
    ("pr-", &["paddingRight"]),
    ("pb-", &["paddingBottom"]),
    ("pl-", &["paddingLeft"]),
    ("p-", &["padding"]),
    ("mx-", &["marginLeft", "marginRight"]),
    ("my-", &["marginTop", "marginBottom"]),
    ("mt-", &["marginTop"]),
    ("mr-", &["marginRight"]),
    ("mb-", &["marginBottom"]),
    ("ml-", &["marginLeft"]),
    ("m-", &["margin"]),
    ("gap-x-", &["columnGap"]),
    ("gap-y-", &["rowGap"]),
    ("gap-", &["gap"]),
    ("w-", &["width"]),
    ("h-", &["height"]),
];

/// One parsed class: declarations plus the pseudo-state it was scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass {
    pub styles: StyleMap,
    pub pseudo: Option<&'static str>,
}

/// Batch parse result for a space-delimited class string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedClasses {
    /// Merged declarations of all non-pseudo classes, last write wins.
    pub base: StyleMap,
    /// Declarations bucketed by pseudo-state name.
    pub pseudos: IndexMap<String, StyleMap>,
}

/// Utility class parser.
///
/// Deterministic: the same token always parses to the same result.
/// Carries no state beyond the scale tables it is built with.
#[derive(Debug, Clone, Default)]
pub struct ClassParser {
    scale: ScaleTables,
}

impl ClassParser {
    pub fn new(scale: ScaleTables) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> &ScaleTables {
        &self.scale
    }

    /// Parse a single class token.
    ///
    /// Returns `None` (with a warning) for unrecognized classes.
    pub fn parse(&self, token: &str) -> Option<ParsedClass> {
        let stripped = strip_responsive(token);
        let (base, pseudo) = split_pseudo(stripped);

        match self.resolve_base(base) {
            Some(styles) => Some(ParsedClass { styles, pseudo }),
            None => {
                crate::log!("warn"; "unknown class `{token}`, dropped");
                None
            }
        }
    }

    /// Parse a space-delimited class string into base and pseudo buckets.
    pub fn parse_class_string(&self, classes: &str) -> ParsedClasses {
        let mut result = ParsedClasses::default();
        for token in classes.split_whitespace() {
            let Some(parsed) = self.parse(token) else {
                continue;
            };
            match parsed.pseudo {
                Some(name) => result
                    .pseudos
                    .entry(name.to_string())
                    .or_default()
                    .extend(parsed.styles),
                None => result.base.extend(parsed.styles),
            }
        }
        result
    }

    fn resolve_base(&self, token: &str) -> Option<StyleMap> {
        if let Some(static_styles) = table::STATIC_CLASSES.get(token) {
            return Some(
                static_styles
                    .iter()
                    .map(|(p, v)| ((*p).to_string(), (*v).to_string()))
                    .collect(),
            );
        }

        if let Some(styles) = dynamic::resolve(token) {
            return Some(styles);
        }

        self.resolve_scaled(token)
    }

    /// Scale driven utilities: spacing steps, size tables, counts.
    fn resolve_scaled(&self, token: &str) -> Option<StyleMap> {
        // text-{size} from the text table
        if let Some(key) = token.strip_prefix("text-")
            && let Some(size) = self.scale.text_size(key)
        {
            return Some(single("fontSize", size));
        }

        // rounded / rounded-{size} from the radius table
        if token == "rounded" {
            return self.scale.radius("md").map(|v| single("borderRadius", v));
        }
        if let Some(key) = token.strip_prefix("rounded-")
            && let Some(radius) = self.scale.radius(key)
        {
            return Some(single("borderRadius", radius));
        }

        // grid-cols-{n}
        if let Some(raw) = token.strip_prefix("grid-cols-")
            && let Ok(n) = raw.parse::<u32>()
        {
            return Some(single(
                "gridTemplateColumns",
                &format!("repeat({n}, minmax(0, 1fr))"),
            ));
        }

        // opacity-{n}: percent
        if let Some(raw) = token.strip_prefix("opacity-")
            && let Ok(n) = raw.parse::<u32>()
            && n <= 100
        {
            return Some(single("opacity", &format!("{}", n as f32 / 100.0)));
        }

        // border-{n}: pixel widths
        if let Some(raw) = token.strip_prefix("border-")
            && let Ok(n) = raw.parse::<u32>()
        {
            let mut styles = single("borderWidth", &format!("{n}px"));
            styles.insert("borderStyle".to_string(), "solid".to_string());
            return Some(styles);
        }

        // duration-{n}: milliseconds
        if let Some(raw) = token.strip_prefix("duration-")
            && raw.parse::<u32>().is_ok()
        {
            return Some(single("transitionDuration", &format!("{raw}ms")));
        }

        // z-{n}
        if let Some(raw) = token.strip_prefix("z-")
            && raw.parse::<u32>().is_ok()
        {
            return Some(single("zIndex", raw));
        }

        // numeric spacing scale
        for (prefix, props) in SPACING_PREFIXES {
            if let Some(raw) = token.strip_prefix(prefix)
                && let Ok(steps) = raw.parse::<f32>()
                && steps.is_finite()
                && steps >= 0.0
            {
                let value = self.scale.spacing(steps);
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
}

/// Parse an inline `prop: value; prop2: value2` style string.
///
/// Property names are converted to camelCase. Malformed declarations
/// (missing colon) are skipped without a warning.
pub fn parse_inline_style(style: &str) -> StyleMap {
    let mut map = StyleMap::new();
    for decl in style.split(';') {
        let Some((prop, value)) = decl.split_once(':') else {
            continue;
        };
        let prop = prop.trim();
        let value = value.trim();
        if prop.is_empty() || value.is_empty() {
            continue;
        }
        map.insert(kebab_to_camel(prop), value.to_string());
    }
    map
}

fn strip_responsive(token: &str) -> &str {
    for prefix in RESPONSIVE_PREFIXES {
        if let Some(rest) = token.strip_prefix(prefix) {
            return rest;
        }
    }
    token
}

fn split_pseudo(token: &str) -> (&str, Option<&'static str>) {
    for (prefix, name) in PSEUDO_PREFIXES {
        if let Some(rest) = token.strip_prefix(prefix) {
            return (rest, Some(name));
        }
    }
    (token, None)
}

fn single(prop: &str, value: &str) -> StyleMap {
    StyleMap::from_iter([(prop.to_string(), value.to_string())])
}

// ============================================================================
// Tests
// ============================================================================
