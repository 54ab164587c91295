//! Theme records: named color and font token sets.
//!
//! Themes are stored alongside projects and referenced by id. Style
//! strings reference tokens symbolically (`var(--color-primary)`); the
//! resolver substitutes concrete values at generation time, never
//! before.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Font pair for a theme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeFonts {
    pub heading: String,
    pub body: String,
}

impl Default for ThemeFonts {
    fn default() -> Self {
        Self {
            heading: "Inter".into(),
            body: "Inter".into(),
        }
    }
}

/// A named token set referenced by `var(--...)` placeholders.
///
/// Color keys are camelCase in the record (`primaryForeground`);
/// `var(--color-primary-foreground)` reaches them through a
/// kebab-to-camel conversion in the resolver.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Theme {
    pub id: String,
    pub name: String,

    /// Color tokens (`background`, `foreground`, `primary`,
    /// `primaryForeground`, `muted`, `border`, ...). Open map: themes
    /// may carry additional tokens the generator does not know about.
    pub colors: IndexMap<String, String>,

    pub fonts: ThemeFonts,
}

impl Theme {
    /// Exact color lookup by record key (camelCase).
    pub fn color(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }
}
