//! Configuration management for `lands.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[store]`   | Project/theme record and edge output locations   |
//! | `[publish]` | Publish behavior (minify, parallel fan-out)      |
//! | `[preview]` | Local preview server (interface, port)           |
//! | `[scale]`   | Style scale data (spacing unit, size tables)     |

mod diagnostics;

pub use diagnostics::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
};

/// Text size keys understood by the class parser and theme resolver.
pub const TEXT_SIZE_KEYS: [&str; 9] = [
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl",
];

/// Radius size keys understood by the class parser and theme resolver.
pub const RADIUS_KEYS: [&str; 8] = ["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing lands.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Record store locations
    #[serde(default)]
    pub store: StoreConfig,

    /// Publish behavior
    #[serde(default)]
    pub publish: PublishConfig,

    /// Preview server settings
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Style scale data
    #[serde(default)]
    pub scale: ScaleConfig,
}

impl AppConfig {
    /// Load configuration for a command run.
    ///
    /// Searches upward from cwd to find the config file; the project
    /// root is the config file's parent directory. `allow_missing` is
    /// set by `init`, which runs before any config exists.
    pub fn load(config_name: &Path, allow_missing: bool) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(config_name)?;

        if !exists && !allow_missing {
            log!(
                "error";
                "Config file '{}' not found. Run 'lands init' to create a project.",
                config_name.display()
            );
            std::process::exit(1);
        }

        let mut config = if exists {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        config.normalize_paths();

        if exists {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve the config file path, searching upward from cwd.
    fn resolve_config_path(config_name: &Path) -> Result<(PathBuf, bool)> {
        if config_name.is_absolute() {
            return Ok((config_name.to_path_buf(), config_name.exists()));
        }

        let cwd = std::env::current_dir()?;
        let mut current = cwd.as_path();
        loop {
            let candidate = current.join(config_name);
            if candidate.exists() {
                return Ok((candidate, true));
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => return Ok((cwd.join(config_name), false)),
            }
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        // Unknown fields warn and continue; publish runs are not interactive
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warn"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Resolve store paths relative to the project root.
    fn normalize_paths(&mut self) {
        self.store.projects = self.root.join(&self.store.projects);
        self.store.themes = self.root.join(&self.store.themes);
        self.store.edge = self.root.join(&self.store.edge);
    }

    /// Validate configuration, collecting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.scale.validate(&mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }
}

// ============================================================================
// [store] section
// ============================================================================

/// Record store locations.
///
/// ```toml
/// [store]
/// projects = "projects"   # project records, one JSON file per slug
/// themes = "themes"       # theme records
/// edge = "edge"           # published blob output (KV emulation)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding project records.
    pub projects: PathBuf,

    /// Directory holding theme records.
    pub themes: PathBuf,

    /// Directory the edge store writes published blobs into.
    pub edge: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            projects: PathBuf::from("projects"),
            themes: PathBuf::from("themes"),
            edge: PathBuf::from("edge"),
        }
    }
}

// ============================================================================
// [publish] section
// ============================================================================

/// Publish behavior.
///
/// ```toml
/// [publish]
/// minify = true     # strip indentation from published HTML
/// parallel = true   # publish --all fans out across cores
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Minify published HTML.
    pub minify: bool,

    /// Fan out `publish --all` across cores.
    pub parallel: bool,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            minify: true,
            parallel: true,
        }
    }
}

// ============================================================================
// [preview] section
// ============================================================================

/// Preview server settings.
///
/// ```toml
/// [preview]
/// interface = "127.0.0.1"   # 0.0.0.0 for LAN access
/// port = 4807
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Network interface to bind.
    pub interface: IpAddr,

    /// HTTP port number.
    pub port: u16,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 4807,
        }
    }
}

// ============================================================================
// [scale] section
// ============================================================================

/// Style scale data used by the class parser and theme resolver.
///
/// The numeric spacing scale and the size lookup tables are data, not
/// code; deployments with a different design scale override them here.
///
/// ```toml
/// [scale]
/// spacing_unit = 0.25          # rem per spacing step (p-4 = 1rem)
///
/// [scale.text]
/// "2xl" = "1.625rem"           # override individual text sizes
///
/// [scale.radius]
/// md = "0.5rem"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Rem units per spacing step.
    pub spacing_unit: f32,

    /// Overrides for the text size table (keys like "sm", "2xl").
    pub text: IndexMap<String, String>,

    /// Overrides for the radius table (keys like "md", "full").
    pub radius: IndexMap<String, String>,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            spacing_unit: 0.25,
            text: IndexMap::new(),
            radius: IndexMap::new(),
        }
    }
}

impl ScaleConfig {
    pub const FIELD_SPACING_UNIT: FieldPath = FieldPath::new("scale.spacing_unit");
    pub const FIELD_TEXT: FieldPath = FieldPath::new("scale.text");
    pub const FIELD_RADIUS: FieldPath = FieldPath::new("scale.radius");

    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(self.spacing_unit > 0.0) {
            diag.error_with_hint(
                Self::FIELD_SPACING_UNIT,
                format!("must be positive, got {}", self.spacing_unit),
                "the default Tailwind scale uses 0.25 (rem per step)",
            );
        }

        for key in self.text.keys() {
            if !TEXT_SIZE_KEYS.contains(&key.as_str()) {
                diag.warn(Self::FIELD_TEXT, format!("unknown size key `{key}`"));
            }
        }
        for key in self.radius.keys() {
            if !RADIUS_KEYS.contains(&key.as_str()) {
                diag.warn(Self::FIELD_RADIUS, format!("unknown size key `{key}`"));
            }
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> AppConfig {
    let (parsed, ignored) = AppConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
