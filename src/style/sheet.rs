//! Stylesheet collector.
//!
//! Accumulates per-class declarations during a generation run and
//! serializes them once at the end. Classes keep insertion order so
//! the emitted stylesheet is stable across runs.

use indexmap::IndexMap;

use super::{StyleMap, camel_to_kebab};

/// Declarations collected for a single class name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRules {
    pub base: StyleMap,
    pub pseudos: IndexMap<String, StyleMap>,
}

/// Collects class rules and renders them as one stylesheet.
#[derive(Debug, Clone, Default)]
pub struct CssSheet {
    classes: IndexMap<String, ClassRules>,
}

impl CssSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge declarations into a class. Repeated adds to the same class
    /// shallow-merge, later values win per property.
    pub fn add_class(&mut self, name: &str, styles: &StyleMap) {
        if styles.is_empty() {
            return;
        }
        self.classes
            .entry(name.to_string())
            .or_default()
            .base
            .extend(styles.iter().map(|(p, v)| (p.clone(), v.clone())));
    }

    /// Merge declarations into a `.class:pseudo` rule.
    pub fn add_pseudo_class(&mut self, name: &str, pseudo: &str, styles: &StyleMap) {
        if styles.is_empty() {
            return;
        }
        self.classes
            .entry(name.to_string())
            .or_default()
            .pseudos
            .entry(pseudo.to_string())
            .or_default()
            .extend(styles.iter().map(|(p, v)| (p.clone(), v.clone())));
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Drop all collected rules, keeping the allocation.
    pub fn reset(&mut self) {
        self.classes.clear();
    }

    /// Render the collected rules.
    ///
    /// Base rules come first in insertion order, pseudo rules after them,
    /// so a `:hover` block always wins over its base block at equal
    /// specificity. Classes that collected no declarations are omitted.
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        for (name, rules) in &self.classes {
            if rules.base.is_empty() {
                continue;
            }
            write_block(&mut css, &format!(".{name}"), &rules.base);
        }

        for (name, rules) in &self.classes {
            for (pseudo, styles) in &rules.pseudos {
                if styles.is_empty() {
                    continue;
                }
                write_block(&mut css, &format!(".{name}:{pseudo}"), styles);
            }
        }

        css
    }
}

fn write_block(css: &mut String, selector: &str, styles: &StyleMap) {
    css.push_str(selector);
    css.push_str(" {\n");
    for (prop, value) in styles {
        css.push_str("  ");
        css.push_str(&camel_to_kebab(prop));
        css.push_str(": ");
        css.push_str(value);
        css.push_str(";\n");
    }
    css.push_str("}\n");
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn styles(pairs: &[(&str, &str)]) -> StyleMap {
        pairs
            .iter()
            .map(|(p, v)| (p.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_base_block_renders_kebab_case() {
        let mut sheet = CssSheet::new();
        sheet.add_class("hero_0", &styles(&[("backgroundColor", "#112233"), ("padding", "1rem")]));

        let css = sheet.to_css();
        assert_eq!(css, ".hero_0 {\n  background-color: #112233;\n  padding: 1rem;\n}\n");
    }

    #[test]
    fn test_repeated_add_shallow_merges() {
        let mut sheet = CssSheet::new();
        sheet.add_class("card", &styles(&[("padding", "1rem"), ("color", "red")]));
        sheet.add_class("card", &styles(&[("padding", "2rem")]));

        let css = sheet.to_css();
        assert!(css.contains("padding: 2rem;"));
        assert!(css.contains("color: red;"));
        assert!(!css.contains("padding: 1rem;"));
    }

    #[test]
    fn test_pseudo_blocks_come_after_base_blocks() {
        let mut sheet = CssSheet::new();
        sheet.add_pseudo_class("cta", "hover", &styles(&[("opacity", "0.9")]));
        sheet.add_class("cta", &styles(&[("opacity", "1")]));
        sheet.add_class("late", &styles(&[("color", "blue")]));

        let css = sheet.to_css();
        let base = css.find(".cta {").unwrap();
        let late = css.find(".late {").unwrap();
        let hover = css.find(".cta:hover {").unwrap();
        assert!(base < late && late < hover);
    }

    #[test]
    fn test_empty_class_omitted() {
        let mut sheet = CssSheet::new();
        sheet.add_class("ghost", &StyleMap::new());
        assert!(sheet.is_empty());
        assert_eq!(sheet.to_css(), "");
    }

    #[test]
    fn test_pseudo_only_class_emits_no_base_block() {
        let mut sheet = CssSheet::new();
        sheet.add_pseudo_class("link", "hover", &styles(&[("textDecoration", "underline")]));

        let css = sheet.to_css();
        assert!(!css.contains(".link {"));
        assert!(css.contains(".link:hover {\n  text-decoration: underline;\n}\n"));
    }

    #[test]
    fn test_reset_clears_rules() {
        let mut sheet = CssSheet::new();
        sheet.add_class("a", &styles(&[("color", "red")]));
        sheet.reset();
        assert!(sheet.is_empty());
        assert_eq!(sheet.to_css(), "");
    }
}
