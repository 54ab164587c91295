//! Numeric scale data shared by the class parser and theme resolver.
//!
//! The spacing step size and the text/radius lookup tables are design
//! system data, not algorithm. They carry defaults matching the stock
//! Tailwind scale and can be retuned per deployment through `[scale]`
//! config.

use crate::config::ScaleConfig;
use indexmap::IndexMap;

/// Default text size table (`text-sm`, `text-2xl`, ...).
const TEXT_SIZES: [(&str, &str); 9] = [
    ("xs", "0.75rem"),
    ("sm", "0.875rem"),
    ("base", "1rem"),
    ("lg", "1.125rem"),
    ("xl", "1.25rem"),
    ("2xl", "1.5rem"),
    ("3xl", "1.875rem"),
    ("4xl", "2.25rem"),
    ("5xl", "3rem"),
];

/// Default radius table (`rounded-md`, `rounded-full`, ...).
const RADII: [(&str, &str); 8] = [
    ("none", "0"),
    ("sm", "0.125rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
];

/// Resolved scale tables for one generation run.
#[derive(Debug, Clone)]
pub struct ScaleTables {
    spacing_unit: f32,
    text: IndexMap<String, String>,
    radius: IndexMap<String, String>,
}

impl Default for ScaleTables {
    fn default() -> Self {
        Self::from_config(&ScaleConfig::default())
    }
}

impl ScaleTables {
    /// Build tables from `[scale]` config: defaults first, overrides on top.
    pub fn from_config(config: &ScaleConfig) -> Self {
        let mut text: IndexMap<String, String> = TEXT_SIZES
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        for (key, value) in &config.text {
            text.insert(key.clone(), value.clone());
        }

        let mut radius: IndexMap<String, String> = RADII
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        for (key, value) in &config.radius {
            radius.insert(key.clone(), value.clone());
        }

        Self {
            spacing_unit: config.spacing_unit,
            text,
            radius,
        }
    }

    /// Spacing for a numeric step count (`4` -> `"1rem"` on the default scale).
    pub fn spacing(&self, steps: f32) -> String {
        let value = steps * self.spacing_unit;
        if value == 0.0 {
            return "0".to_string();
        }
        format!("{value}rem")
    }

    /// Text size lookup (`"2xl"` -> `"1.5rem"`).
    pub fn text_size(&self, key: &str) -> Option<&str> {
        self.text.get(key).map(String::as_str)
    }

    /// Radius lookup (`"md"` -> `"0.375rem"`).
    pub fn radius(&self, key: &str) -> Option<&str> {
        self.radius.get(key).map(String::as_str)
    }
}
