//! Per-run style generation state.
//!
//! One [`GenerationContext`] lives for exactly one generation run (one
//! project render). It owns the class name counter, the active theme,
//! and the stylesheet collector, so concurrent publishes never share
//! mutable state.

use indexmap::IndexMap;

use super::{CssSheet, StyleMap, resolve};
use crate::tailwind::{self, ClassParser, ScaleTables};
use crate::theme::Theme;

/// Style sources for one rendered element.
///
/// Merge order on conflicts: tailwind classes, then the inline style
/// string, then `extra`. Later sources win per property.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementStyles<'a> {
    pub class_name: &'a str,
    pub tailwind: Option<&'a str>,
    pub inline: Option<&'a str>,
    pub extra: Option<&'a StyleMap>,
}

/// Mutable state for one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    parser: ClassParser,
    theme: Option<Theme>,
    sheet: CssSheet,
    counter: u32,
    missing_theme_warned: bool,
}

impl GenerationContext {
    pub fn new(scale: ScaleTables) -> Self {
        Self {
            parser: ClassParser::new(scale),
            ..Self::default()
        }
    }

    /// Set the active theme. Must happen before elements are processed,
    /// otherwise `var()` tokens pass through unresolved.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    /// Mint a class name unique within this run, e.g. `hero_0`.
    pub fn root_class(&mut self, prefix: &str) -> String {
        let n = self.counter;
        self.counter += 1;
        format!("{prefix}_{n}")
    }

    /// Derive a child class name from its parent, e.g. `hero_0_inner`.
    pub fn child_class(&self, parent: &str, child: &str) -> String {
        format!("{parent}_{child}")
    }

    /// Merge an element's style sources, resolve theme tokens, and
    /// register the result under the element's class name.
    ///
    /// Returns the class name unchanged so call sites can register and
    /// emit in one expression.
    pub fn process_element<'a>(&mut self, element: ElementStyles<'a>) -> &'a str {
        let mut base = StyleMap::new();
        let mut pseudos: IndexMap<String, StyleMap> = IndexMap::new();

        if let Some(classes) = element.tailwind {
            let parsed = self.parser.parse_class_string(classes);
            base.extend(parsed.base);
            pseudos = parsed.pseudos;
        }
        if let Some(style) = element.inline {
            base.extend(tailwind::parse_inline_style(style));
        }
        if let Some(extra) = element.extra {
            base.extend(extra.iter().map(|(p, v)| (p.clone(), v.clone())));
        }

        let base = self.resolve_map(base);
        self.sheet.add_class(element.class_name, &base);

        for (pseudo, styles) in pseudos {
            let styles = self.resolve_map(styles);
            self.sheet.add_pseudo_class(element.class_name, &pseudo, &styles);
        }

        element.class_name
    }

    /// Render everything collected so far.
    pub fn css(&self) -> String {
        self.sheet.to_css()
    }

    /// Clear all run state so the context can serve another project.
    pub fn reset(&mut self) {
        self.theme = None;
        self.sheet.reset();
        self.counter = 0;
        self.missing_theme_warned = false;
    }

    fn resolve_map(&mut self, styles: StyleMap) -> StyleMap {
        let Some(theme) = &self.theme else {
            if !self.missing_theme_warned {
                crate::log!("warn"; "no active theme, leaving var() tokens unresolved");
                self.missing_theme_warned = true;
            }
            return styles;
        };
        styles
            .into_iter()
            .map(|(prop, value)| {
                let resolved = resolve::resolve_value(&value, theme, self.parser.scale());
                (prop, resolved)
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
