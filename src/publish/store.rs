//! Storage seams for the publish flow.
//!
//! The orchestrator talks to two stores: the relational-style project
//! store and the edge key-value store for published blobs. Both are
//! traits so the flow can be embedded behind other backends; the
//! filesystem implementations are what the CLI uses, the in-memory
//! ones serve embedding and tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::StoreError;
use crate::section::Project;
use crate::theme::Theme;

use super::PublishBlob;

/// Relational-store view the publish flow needs.
pub trait ProjectStore: Send + Sync {
    fn load_project(&self, slug: &str) -> Result<Option<Project>, StoreError>;
    fn load_theme(&self, id: &str) -> Result<Option<Theme>, StoreError>;
    fn list_slugs(&self) -> Result<Vec<String>, StoreError>;
    /// Flip the published flag, recording the publish time when set.
    fn set_published(
        &self,
        slug: &str,
        published: bool,
        at: Option<&str>,
    ) -> Result<(), StoreError>;
}

/// Edge key-value store holding one blob per published site.
pub trait EdgeStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<PublishBlob>, StoreError>;
    fn write(&self, key: &str, blob: &PublishBlob) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

// ============================================================================
// Filesystem implementations
// ============================================================================

/// Projects and themes as one JSON file each.
pub struct FsProjectStore {
    projects_dir: PathBuf,
    themes_dir: PathBuf,
}

impl FsProjectStore {
    pub fn new(projects_dir: impl Into<PathBuf>, themes_dir: impl Into<PathBuf>) -> Self {
        Self {
            projects_dir: projects_dir.into(),
            themes_dir: themes_dir.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.store.projects, &config.store.themes)
    }

    fn project_path(&self, slug: &str) -> PathBuf {
        self.projects_dir.join(format!("{slug}.json"))
    }

    fn theme_path(&self, id: &str) -> PathBuf {
        self.themes_dir.join(format!("{id}.json"))
    }
}

impl ProjectStore for FsProjectStore {
    fn load_project(&self, slug: &str) -> Result<Option<Project>, StoreError> {
        read_json(&self.project_path(slug))
    }

    fn load_theme(&self, id: &str) -> Result<Option<Theme>, StoreError> {
        read_json(&self.theme_path(id))
    }

    fn list_slugs(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.projects_dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::Io(self.projects_dir.clone(), err)),
        };

        let mut slugs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::Io(self.projects_dir.clone(), e))?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                slugs.push(stem.to_string());
            }
        }
        slugs.sort();
        Ok(slugs)
    }

    fn set_published(
        &self,
        slug: &str,
        published: bool,
        at: Option<&str>,
    ) -> Result<(), StoreError> {
        let path = self.project_path(slug);
        let Some(mut project) = read_json::<Project>(&path)? else {
            return Err(StoreError::Other(format!("project `{slug}` does not exist")));
        };
        project.published = published;
        project.published_at = at.map(str::to_string);
        write_json(&path, &project)
    }
}

/// One JSON blob per key, file name derived from the key.
pub struct FsEdgeStore {
    dir: PathBuf,
}

impl FsEdgeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.store.edge)
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl EdgeStore for FsEdgeStore {
    fn read(&self, key: &str) -> Result<Option<PublishBlob>, StoreError> {
        read_json(&self.blob_path(key))
    }

    fn write(&self, key: &str, blob: &PublishBlob) -> Result<(), StoreError> {
        write_json(&self.blob_path(key), blob)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.blob_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(path, err)),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(StoreError::Io(path.to_path_buf(), err)),
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| StoreError::Malformed(path.to_path_buf(), e))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StoreError::Io(parent.to_path_buf(), e))?;
    }
    let bytes = serde_json::to_vec_pretty(value)
        .map_err(|e| StoreError::Other(format!("serializing {}: {e}", path.display())))?;
    fs::write(path, bytes).map_err(|e| StoreError::Io(path.to_path_buf(), e))
}

// ============================================================================
// In-memory implementations
// ============================================================================

/// Project store backed by maps, with failure injection for exercising
/// the orchestrator's partial-failure handling.
#[derive(Default)]
pub struct MemoryProjectStore {
    projects: Mutex<FxHashMap<String, Project>>,
    themes: Mutex<FxHashMap<String, Theme>>,
    fail_set_published: Mutex<bool>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_project(&self, project: Project) {
        self.projects.lock().insert(project.slug.clone(), project);
    }

    pub fn insert_theme(&self, theme: Theme) {
        self.themes.lock().insert(theme.id.clone(), theme);
    }

    /// Make every following `set_published` call fail.
    pub fn fail_set_published(&self, fail: bool) {
        *self.fail_set_published.lock() = fail;
    }

    pub fn project(&self, slug: &str) -> Option<Project> {
        self.projects.lock().get(slug).cloned()
    }
}

impl ProjectStore for MemoryProjectStore {
    fn load_project(&self, slug: &str) -> Result<Option<Project>, StoreError> {
        Ok(self.projects.lock().get(slug).cloned())
    }

    fn load_theme(&self, id: &str) -> Result<Option<Theme>, StoreError> {
        Ok(self.themes.lock().get(id).cloned())
    }

    fn list_slugs(&self) -> Result<Vec<String>, StoreError> {
        let mut slugs: Vec<String> = self.projects.lock().keys().cloned().collect();
        slugs.sort();
        Ok(slugs)
    }

    fn set_published(
        &self,
        slug: &str,
        published: bool,
        at: Option<&str>,
    ) -> Result<(), StoreError> {
        if *self.fail_set_published.lock() {
            return Err(StoreError::Other("injected set_published failure".to_string()));
        }
        let mut projects = self.projects.lock();
        let Some(project) = projects.get_mut(slug) else {
            return Err(StoreError::Other(format!("project `{slug}` does not exist")));
        };
        project.published = published;
        project.published_at = at.map(str::to_string);
        Ok(())
    }
}

/// Edge store backed by a map, with write failure injection.
#[derive(Default)]
pub struct MemoryEdgeStore {
    blobs: Mutex<FxHashMap<String, PublishBlob>>,
    fail_writes: Mutex<bool>,
}

impl MemoryEdgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `write` and `remove` call fail.
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock() = fail;
    }
}

impl EdgeStore for MemoryEdgeStore {
    fn read(&self, key: &str) -> Result<Option<PublishBlob>, StoreError> {
        Ok(self.blobs.lock().get(key).cloned())
    }

    fn write(&self, key: &str, blob: &PublishBlob) -> Result<(), StoreError> {
        if *self.fail_writes.lock() {
            return Err(StoreError::Other("injected edge write failure".to_string()));
        }
        self.blobs.lock().insert(key.to_string(), blob.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        if *self.fail_writes.lock() {
            return Err(StoreError::Other("injected edge remove failure".to_string()));
        }
        self.blobs.lock().remove(key);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::section::Visibility;

    use super::*;

    fn blob(html: &str) -> PublishBlob {
        PublishBlob {
            html: html.to_string(),
            css: String::new(),
            visibility: Visibility::Public,
            password_hash: None,
            updated_at: "2026-08-25T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_fs_edge_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsEdgeStore::new(dir.path());

        assert!(store.read("my-site").unwrap().is_none());
        store.write("my-site", &blob("<p>v1</p>")).unwrap();
        assert_eq!(store.read("my-site").unwrap().unwrap().html, "<p>v1</p>");

        store.remove("my-site").unwrap();
        assert!(store.read("my-site").unwrap().is_none());
        // removing again is fine
        store.remove("my-site").unwrap();
    }

    #[test]
    fn test_fs_project_store_lists_and_updates() {
        let dir = tempfile::tempdir().unwrap();
        let projects_dir = dir.path().join("projects");
        let store = FsProjectStore::new(&projects_dir, dir.path().join("themes"));

        assert!(store.list_slugs().unwrap().is_empty());

        let project = Project {
            id: "prj_1".to_string(),
            user_id: "usr_1".to_string(),
            slug: "my-site".to_string(),
            ..Project::default()
        };
        write_json(&projects_dir.join("my-site.json"), &project).unwrap();

        assert_eq!(store.list_slugs().unwrap(), vec!["my-site".to_string()]);
        assert!(!store.load_project("my-site").unwrap().unwrap().published);

        store
            .set_published("my-site", true, Some("2026-08-25T12:00:00Z"))
            .unwrap();
        let reloaded = store.load_project("my-site").unwrap().unwrap();
        assert!(reloaded.published);
        assert_eq!(reloaded.published_at.as_deref(), Some("2026-08-25T12:00:00Z"));
    }

    #[test]
    fn test_fs_store_reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsEdgeStore::new(dir.path());
        fs::write(dir.path().join("broken.json"), b"{ not json").unwrap();

        assert!(matches!(
            store.read("broken").unwrap_err(),
            StoreError::Malformed(..)
        ));
    }

    #[test]
    fn test_memory_store_failure_injection() {
        let store = MemoryProjectStore::new();
        store.insert_project(Project {
            slug: "my-site".to_string(),
            ..Project::default()
        });

        store.fail_set_published(true);
        assert!(store.set_published("my-site", true, None).is_err());

        store.fail_set_published(false);
        assert!(store.set_published("my-site", true, None).is_ok());
        assert!(store.project("my-site").unwrap().published);
    }
}
