//! Style representation shared across the pipeline.
//!
//! Style maps use camelCase property keys internally (the convention
//! the editor stores overrides in); the sheet converts them to
//! kebab-case only when serializing CSS.

pub mod context;
pub mod resolve;
pub mod sheet;

pub use context::{ElementStyles, GenerationContext};
pub use sheet::CssSheet;

use indexmap::IndexMap;

/// Flat style map: camelCase CSS property -> value.
///
/// Insertion order is preserved so generated CSS is stable for a run.
pub type StyleMap = IndexMap<String, String>;

/// Convert a camelCase property name to kebab-case.
///
/// `backgroundColor` -> `background-color`
pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert a kebab-case property name to camelCase.
///
/// `background-color` -> `backgroundColor`
pub fn kebab_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for ch in name.chars() {
        if ch == '-' {
            upper = true;
            continue;
        }
        if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}
