//! Publish orchestration.
//!
//! End to end: load the project and its theme, verify the caller may
//! touch it, render, write the blob to the edge store, flip the
//! relational published flag. A failed flag update rolls the edge
//! write back so the two stores never silently disagree.

pub mod blob;
pub mod store;

pub use blob::PublishBlob;
pub use store::{
    EdgeStore, FsEdgeStore, FsProjectStore, MemoryEdgeStore, MemoryProjectStore, ProjectStore,
};

use rayon::prelude::*;

use crate::config::AppConfig;
use crate::error::PublishError;
use crate::generator;
use crate::section::{Project, Visibility};
use crate::tailwind::ScaleTables;
use crate::utils::{hash, time};
use crate::{debug, log};

/// Who is asking. Admins can publish any project.
#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: String,
    pub admin: bool,
}

impl Caller {
    pub fn user(id: impl Into<String>) -> Self {
        Self { user_id: id.into(), admin: false }
    }

    pub fn admin(id: impl Into<String>) -> Self {
        Self { user_id: id.into(), admin: true }
    }

    fn may_touch(&self, project: &Project) -> bool {
        self.admin || self.user_id == project.user_id
    }
}

/// Options for one publish request.
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// Plaintext password to hash when the project is password gated.
    pub password: Option<String>,
    pub minify: bool,
}

/// What a successful publish wrote.
#[derive(Debug, Clone)]
pub struct PublishReceipt {
    pub slug: String,
    /// Edge key the blob lives under (slug or custom domain).
    pub key: String,
    /// Content fingerprint of the rendered html and css.
    pub fingerprint: String,
    pub updated_at: String,
}

/// Publish one project.
pub fn publish(
    projects: &dyn ProjectStore,
    edge: &dyn EdgeStore,
    config: &AppConfig,
    caller: &Caller,
    slug: &str,
    opts: &PublishOptions,
) -> Result<PublishReceipt, PublishError> {
    let project = projects
        .load_project(slug)?
        .ok_or_else(|| PublishError::ProjectNotFound(slug.to_string()))?;
    if !caller.may_touch(&project) {
        return Err(PublishError::Forbidden {
            user: caller.user_id.clone(),
            slug: slug.to_string(),
        });
    }

    let theme = match &project.theme_id {
        Some(id) => Some(
            projects
                .load_theme(id)?
                .ok_or_else(|| PublishError::ThemeNotFound(id.clone()))?,
        ),
        None => None,
    };

    let scale = ScaleTables::from_config(&config.scale);
    let site = generator::render_site(&project, theme, scale, opts.minify)?;
    debug!("publish"; "rendered `{slug}`: {} bytes html, {} bytes css", site.html.len(), site.css.len());

    let password_hash = resolve_password_hash(&project, opts)?;
    let updated_at = time::DateTimeUtc::now().to_rfc3339();
    let blob = PublishBlob {
        html: site.html,
        css: site.css,
        visibility: project.visibility,
        password_hash,
        updated_at: updated_at.clone(),
    };
    let fingerprint = hash::fingerprint(&[blob.html.as_bytes(), blob.css.as_bytes()].concat());

    // Keep whatever was live so a failed flag update can put the edge
    // back instead of leaving the two stores disagreeing.
    let key = project.store_key().to_string();
    let previous = edge.read(&key)?;
    edge.write(&key, &blob)?;

    if let Err(flag_err) = projects.set_published(slug, true, Some(&updated_at)) {
        rollback_edge(edge, &key, previous);
        return Err(flag_err.into());
    }

    log!("publish"; "published `{slug}` -> `{key}` ({fingerprint})");
    Ok(PublishReceipt { slug: slug.to_string(), key, fingerprint, updated_at })
}

/// Take one project offline.
///
/// The published flag is authoritative and flips first; removing the
/// edge blob is best effort, a leftover blob for an unpublished slug is
/// ignored by the delivery worker.
pub fn unpublish(
    projects: &dyn ProjectStore,
    edge: &dyn EdgeStore,
    caller: &Caller,
    slug: &str,
) -> Result<(), PublishError> {
    let project = projects
        .load_project(slug)?
        .ok_or_else(|| PublishError::ProjectNotFound(slug.to_string()))?;
    if !caller.may_touch(&project) {
        return Err(PublishError::Forbidden {
            user: caller.user_id.clone(),
            slug: slug.to_string(),
        });
    }

    projects.set_published(slug, false, None)?;
    if let Err(err) = edge.remove(project.store_key()) {
        log!("warn"; "could not remove edge blob for `{slug}`: {err}");
    }

    log!("publish"; "unpublished `{slug}`");
    Ok(())
}

/// Publish every project in the store, in parallel when configured.
///
/// Each project renders through its own generation context, so runs
/// never share style state. Per-project failures do not stop the batch.
pub fn publish_all(
    projects: &dyn ProjectStore,
    edge: &dyn EdgeStore,
    config: &AppConfig,
    caller: &Caller,
    opts: &PublishOptions,
) -> Result<Vec<(String, Result<PublishReceipt, PublishError>)>, PublishError> {
    let slugs = projects.list_slugs()?;
    log!("publish"; "publishing {} project(s)", slugs.len());

    let run = |slug: &String| (slug.clone(), publish(projects, edge, config, caller, slug, opts));
    let results = if config.publish.parallel {
        slugs.par_iter().map(run).collect()
    } else {
        slugs.iter().map(run).collect()
    };
    Ok(results)
}

/// Hash a plaintext site password.
pub fn hash_password(password: &str) -> String {
    blake3::hash(password.as_bytes()).to_hex().to_string()
}

fn resolve_password_hash(
    project: &Project,
    opts: &PublishOptions,
) -> Result<Option<String>, PublishError> {
    if project.visibility != Visibility::Password {
        return Ok(None);
    }
    if let Some(password) = &opts.password {
        return Ok(Some(hash_password(password)));
    }
    // fall back to the hash already on the project record
    match &project.password_hash {
        Some(existing) => Ok(Some(existing.clone())),
        None => Err(PublishError::MissingPassword(project.slug.clone())),
    }
}

fn rollback_edge(edge: &dyn EdgeStore, key: &str, previous: Option<PublishBlob>) {
    let result = match previous {
        Some(blob) => edge.write(key, &blob),
        None => edge.remove(key),
    };
    if let Err(err) = result {
        log!("error"; "edge rollback for `{key}` failed, stores disagree: {err}");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::config::test_parse_config;
    use crate::section::SectionRecord;
    use crate::theme::Theme;

    use super::*;

    fn theme() -> Theme {
        serde_json::from_str(
            r##"{
                "id": "th_slate",
                "name": "Slate",
                "colors": {
                    "background": "#ffffff",
                    "foreground": "#0f172a",
                    "primary": "#2563eb",
                    "primaryForeground": "#ffffff",
                    "mutedForeground": "#64748b",
                    "border": "#e2e8f0"
                },
                "fonts": { "heading": "Poppins", "body": "Inter" }
            }"##,
        )
        .unwrap()
    }

    fn project(slug: &str, kinds: &[&str]) -> Project {
        Project {
            id: format!("prj_{slug}"),
            user_id: "usr_1".to_string(),
            slug: slug.to_string(),
            theme_id: Some("th_slate".to_string()),
            sections: kinds
                .iter()
                .enumerate()
                .map(|(i, kind)| SectionRecord {
                    id: format!("sec_{i}"),
                    kind: (*kind).to_string(),
                    ..SectionRecord::default()
                })
                .collect(),
            ..Project::default()
        }
    }

    fn stores_with(projects: Vec<Project>) -> (MemoryProjectStore, MemoryEdgeStore) {
        let store = MemoryProjectStore::new();
        store.insert_theme(theme());
        for p in projects {
            store.insert_project(p);
        }
        (store, MemoryEdgeStore::new())
    }

    #[test]
    fn test_publish_writes_blob_and_flips_flag() {
        let (projects, edge) = stores_with(vec![project("my-site", &["hero", "footer"])]);
        let config = test_parse_config("");

        let receipt = publish(
            &projects,
            &edge,
            &config,
            &Caller::user("usr_1"),
            "my-site",
            &PublishOptions::default(),
        )
        .unwrap();

        assert_eq!(receipt.key, "my-site");
        assert_eq!(receipt.fingerprint.len(), 8);

        let blob = edge.read("my-site").unwrap().unwrap();
        assert!(blob.html.contains("class=\"hero_0\""));
        assert!(blob.css.contains(".hero_0 {"));
        assert_eq!(blob.visibility, Visibility::Public);
        assert!(blob.password_hash.is_none());
        assert_eq!(blob.updated_at, receipt.updated_at);
        assert!(blob.updated_at.ends_with('Z'));

        let stored = projects.project("my-site").unwrap();
        assert!(stored.published);
        assert_eq!(stored.published_at.as_deref(), Some(receipt.updated_at.as_str()));
    }

    #[test]
    fn test_publish_requires_ownership() {
        let (projects, edge) = stores_with(vec![project("my-site", &["hero"])]);
        let config = test_parse_config("");

        let err = publish(
            &projects,
            &edge,
            &config,
            &Caller::user("usr_2"),
            "my-site",
            &PublishOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PublishError::Forbidden { .. }));
        assert!(edge.read("my-site").unwrap().is_none());

        // an admin may publish on behalf of anyone
        publish(
            &projects,
            &edge,
            &config,
            &Caller::admin("usr_2"),
            "my-site",
            &PublishOptions::default(),
        )
        .unwrap();
    }

    #[test]
    fn test_publish_unknown_project() {
        let (projects, edge) = stores_with(vec![]);
        let config = test_parse_config("");

        let err = publish(
            &projects,
            &edge,
            &config,
            &Caller::user("usr_1"),
            "ghost",
            &PublishOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PublishError::ProjectNotFound(slug) if slug == "ghost"));
    }

    #[test]
    fn test_publish_missing_theme_fails() {
        let (projects, edge) = stores_with(vec![]);
        let mut p = project("my-site", &["hero"]);
        p.theme_id = Some("th_ghost".to_string());
        projects.insert_project(p);
        let config = test_parse_config("");

        let err = publish(
            &projects,
            &edge,
            &config,
            &Caller::user("usr_1"),
            "my-site",
            &PublishOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PublishError::ThemeNotFound(id) if id == "th_ghost"));
    }

    #[test]
    fn test_password_gated_publish_hashes_request_password() {
        let (projects, edge) = stores_with(vec![]);
        let mut p = project("gated", &["hero"]);
        p.visibility = Visibility::Password;
        projects.insert_project(p);
        let config = test_parse_config("");

        let opts = PublishOptions {
            password: Some("hunter2".to_string()),
            ..PublishOptions::default()
        };
        publish(&projects, &edge, &config, &Caller::user("usr_1"), "gated", &opts).unwrap();

        let blob = edge.read("gated").unwrap().unwrap();
        assert_eq!(blob.password_hash.as_deref(), Some(hash_password("hunter2").as_str()));
    }

    #[test]
    fn test_password_gated_publish_reuses_stored_hash() {
        let (projects, edge) = stores_with(vec![]);
        let mut p = project("gated", &["hero"]);
        p.visibility = Visibility::Password;
        p.password_hash = Some("cafebabe".to_string());
        projects.insert_project(p);
        let config = test_parse_config("");

        publish(
            &projects,
            &edge,
            &config,
            &Caller::user("usr_1"),
            "gated",
            &PublishOptions::default(),
        )
        .unwrap();
        let blob = edge.read("gated").unwrap().unwrap();
        assert_eq!(blob.password_hash.as_deref(), Some("cafebabe"));
    }

    #[test]
    fn test_password_gated_publish_without_any_password_fails() {
        let (projects, edge) = stores_with(vec![]);
        let mut p = project("gated", &["hero"]);
        p.visibility = Visibility::Password;
        projects.insert_project(p);
        let config = test_parse_config("");

        let err = publish(
            &projects,
            &edge,
            &config,
            &Caller::user("usr_1"),
            "gated",
            &PublishOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PublishError::MissingPassword(_)));
    }

    #[test]
    fn test_failed_flag_update_removes_fresh_blob() {
        let (projects, edge) = stores_with(vec![project("my-site", &["hero"])]);
        let config = test_parse_config("");

        projects.fail_set_published(true);
        let err = publish(
            &projects,
            &edge,
            &config,
            &Caller::user("usr_1"),
            "my-site",
            &PublishOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(err, PublishError::Store(_)));
        // nothing was live before, so the edge is empty again
        assert!(edge.read("my-site").unwrap().is_none());
        assert!(!projects.project("my-site").unwrap().published);
    }

    #[test]
    fn test_failed_flag_update_restores_previous_blob() {
        let (projects, edge) = stores_with(vec![project("my-site", &["hero"])]);
        let config = test_parse_config("");
        let caller = Caller::user("usr_1");

        publish(&projects, &edge, &config, &caller, "my-site", &PublishOptions::default())
            .unwrap();
        let live = edge.read("my-site").unwrap().unwrap();

        // change the content, then fail the flag update
        let mut changed = project("my-site", &["hero", "cards"]);
        changed.published = true;
        projects.insert_project(changed);
        projects.fail_set_published(true);

        publish(&projects, &edge, &config, &caller, "my-site", &PublishOptions::default())
            .unwrap_err();

        // the previously live blob is back
        assert_eq!(edge.read("my-site").unwrap().unwrap(), live);
    }

    #[test]
    fn test_republish_overwrites_blob() {
        let (projects, edge) = stores_with(vec![project("my-site", &["hero"])]);
        let config = test_parse_config("");
        let caller = Caller::user("usr_1");

        let first = publish(&projects, &edge, &config, &caller, "my-site", &PublishOptions::default())
            .unwrap();
        projects.insert_project(project("my-site", &["hero", "cards", "footer"]));
        let second = publish(&projects, &edge, &config, &caller, "my-site", &PublishOptions::default())
            .unwrap();

        assert_ne!(first.fingerprint, second.fingerprint);
        let blob = edge.read("my-site").unwrap().unwrap();
        assert!(blob.html.contains("class=\"cards_1\""));
    }

    #[test]
    fn test_custom_domain_becomes_edge_key() {
        let (projects, edge) = stores_with(vec![]);
        let mut p = project("my-site", &["hero"]);
        p.custom_domain = Some("example.com".to_string());
        projects.insert_project(p);
        let config = test_parse_config("");

        let receipt = publish(
            &projects,
            &edge,
            &config,
            &Caller::user("usr_1"),
            "my-site",
            &PublishOptions::default(),
        )
        .unwrap();

        assert_eq!(receipt.key, "example.com");
        assert!(edge.read("example.com").unwrap().is_some());
        assert!(edge.read("my-site").unwrap().is_none());
    }

    #[test]
    fn test_unpublish_flips_flag_and_drops_blob() {
        let (projects, edge) = stores_with(vec![project("my-site", &["hero"])]);
        let config = test_parse_config("");
        let caller = Caller::user("usr_1");

        publish(&projects, &edge, &config, &caller, "my-site", &PublishOptions::default())
            .unwrap();
        unpublish(&projects, &edge, &caller, "my-site").unwrap();

        assert!(!projects.project("my-site").unwrap().published);
        assert!(edge.read("my-site").unwrap().is_none());
    }

    #[test]
    fn test_unpublish_survives_edge_failure() {
        let (projects, edge) = stores_with(vec![project("my-site", &["hero"])]);
        let config = test_parse_config("");
        let caller = Caller::user("usr_1");

        publish(&projects, &edge, &config, &caller, "my-site", &PublishOptions::default())
            .unwrap();
        edge.fail_writes(true);
        unpublish(&projects, &edge, &caller, "my-site").unwrap();

        // flag is authoritative even though the blob lingers
        assert!(!projects.project("my-site").unwrap().published);
        edge.fail_writes(false);
        assert!(edge.read("my-site").unwrap().is_some());
    }

    #[test]
    fn test_publish_all_renders_every_project() {
        let (projects, edge) = stores_with(vec![
            project("site-a", &["hero"]),
            project("site-b", &["cards", "footer"]),
        ]);
        let config = test_parse_config("");

        let results = publish_all(
            &projects,
            &edge,
            &config,
            &Caller::admin("ops"),
            &PublishOptions::default(),
        )
        .unwrap();

        assert_eq!(results.len(), 2);
        for (slug, result) in &results {
            assert!(result.is_ok(), "publish of {slug} failed: {result:?}");
        }
        assert!(edge.read("site-a").unwrap().is_some());
        assert!(edge.read("site-b").unwrap().is_some());
    }

    #[test]
    fn test_publish_all_isolates_failures() {
        let (projects, edge) = stores_with(vec![project("good", &["hero"])]);
        let mut broken = project("broken", &["hero"]);
        broken.sections.push(SectionRecord {
            id: "sec_x".to_string(),
            kind: "carousel".to_string(),
            ..SectionRecord::default()
        });
        projects.insert_project(broken);
        let config = test_parse_config("");

        let results = publish_all(
            &projects,
            &edge,
            &config,
            &Caller::admin("ops"),
            &PublishOptions::default(),
        )
        .unwrap();

        let by_slug: std::collections::HashMap<_, _> =
            results.iter().map(|(s, r)| (s.as_str(), r)).collect();
        assert!(by_slug["good"].is_ok());
        assert!(by_slug["broken"].is_err());
        assert!(edge.read("good").unwrap().is_some());
        assert!(edge.read("broken").unwrap().is_none());
    }

    // End to end: structured content flows through hydration, class
    // generation, and collection into a referentially closed pair.
    #[test]
    fn test_published_html_and_css_reference_each_other() {
        let (projects, edge) = stores_with(vec![]);
        let mut p = project("closure", &[]);
        p.sections = vec![
            SectionRecord {
                id: "sec_hero".to_string(),
                kind: "hero".to_string(),
                data: json!({ "headline": "Welcome" }).as_object().cloned(),
                ..SectionRecord::default()
            },
            SectionRecord {
                id: "sec_cards".to_string(),
                kind: "cards".to_string(),
                data: json!({
                    "items": [
                        { "title": "One", "description": "first" },
                        { "title": "Two", "description": "second" },
                        { "title": "Three", "description": "third" }
                    ]
                })
                .as_object()
                .cloned(),
                ..SectionRecord::default()
            },
        ];
        projects.insert_project(p);
        let config = test_parse_config("");

        publish(
            &projects,
            &edge,
            &config,
            &Caller::user("usr_1"),
            "closure",
            &PublishOptions::default(),
        )
        .unwrap();
        let blob = edge.read("closure").unwrap().unwrap();

        // every stylesheet selector is used by the html
        for line in blob.css.lines() {
            let Some(rest) = line.strip_prefix('.') else { continue };
            let Some(class) = rest.split([':', ' ']).next() else { continue };
            assert!(
                blob.html.contains(&format!("class=\"{class}\"")),
                "selector .{class} unused in html"
            );
        }

        // every class the html uses has rules in the stylesheet
        for chunk in blob.html.split("class=\"").skip(1) {
            let Some(class) = chunk.split('"').next() else { continue };
            assert!(
                blob.css.contains(&format!(".{class}")),
                "html class {class} missing from stylesheet"
            );
        }
    }
}
