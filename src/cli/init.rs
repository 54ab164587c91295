//! Workspace initialization.
//!
//! Creates `lands.toml` plus a starter project and theme so
//! `lands publish my-site` works right after init.

use crate::log;
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "lands.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Starter project: one of each common section, stock content.
const SAMPLE_PROJECT: &str = r#"{
  "id": "prj_demo",
  "userId": "usr_demo",
  "slug": "my-site",
  "title": "My Site",
  "themeId": "th_slate",
  "sections": [
    { "id": "sec_header", "type": "header" },
    { "id": "sec_hero", "type": "hero", "variant": "centered" },
    { "id": "sec_cards", "type": "cards" },
    { "id": "sec_cta", "type": "cta" },
    { "id": "sec_footer", "type": "footer" }
  ]
}
"#;

/// Starter theme with the full token set the generators reference.
const SAMPLE_THEME: &str = r##"{
  "id": "th_slate",
  "name": "Slate",
  "colors": {
    "background": "#ffffff",
    "foreground": "#0f172a",
    "muted": "#f1f5f9",
    "mutedForeground": "#64748b",
    "primary": "#2563eb",
    "primaryForeground": "#ffffff",
    "accent": "#f1f5f9",
    "border": "#e2e8f0"
  },
  "fonts": { "heading": "Inter", "body": "Inter" }
}
"##;

/// Create a new workspace with a starter project and theme.
///
/// # Steps
/// 1. Refuse directories that already hold a config
/// 2. Write lands.toml
/// 3. Write sample records under the default store layout
/// 4. Write ignore files covering the edge output
pub fn new_workspace(name: Option<&Path>) -> Result<()> {
    let root = name.unwrap_or(Path::new("."));
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create '{}'", root.display()))?;

    let config_path = root.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!(
            "'{}' already exists, refusing to reinitialize",
            config_path.display()
        );
    }

    write_config(root)?;
    write_sample_records(root)?;
    write_ignore_files(root)?;

    log!("init"; "workspace ready, try `lands publish my-site --user usr_demo`");
    Ok(())
}

/// Generate lands.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Lands configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str("[store]\n");
    out.push_str("projects = \"projects\"   # project records, one JSON file per slug\n");
    out.push_str("themes = \"themes\"       # theme records\n");
    out.push_str("edge = \"edge\"           # published blob output\n\n");

    out.push_str("[publish]\n");
    out.push_str("minify = true            # strip indentation from published HTML\n");
    out.push_str("parallel = true          # publish --all fans out across cores\n\n");

    out.push_str("[preview]\n");
    out.push_str("interface = \"127.0.0.1\"\n");
    out.push_str("port = 4807\n\n");

    out.push_str("# [scale]\n");
    out.push_str("# spacing_unit = 0.25    # rem per spacing step (p-4 = 1rem)\n");

    out
}

/// Write default lands.toml configuration
fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}

/// Write the starter project and theme records
fn write_sample_records(root: &Path) -> Result<()> {
    write_once(&root.join("projects/my-site.json"), SAMPLE_PROJECT)?;
    write_once(&root.join("themes/th_slate.json"), SAMPLE_THEME)?;
    fs::create_dir_all(root.join("edge"))?;
    Ok(())
}

/// Write .gitignore and .ignore covering generated output
fn write_ignore_files(root: &Path) -> Result<()> {
    let content = "/edge/\n.DS_Store\n";
    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }
    Ok(())
}

/// Write a file unless it already exists.
fn write_once(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))
}
