//! Section hydration.
//!
//! Turns sparse persisted records into complete [`SectionInstance`]s:
//! defaults filled in, kind and variant validated, style buckets always
//! present. Pure, no I/O, never mutates its input.

use crate::error::PublishError;

use super::{Project, SectionInstance, SectionKind, SectionRecord, defaults};

/// Hydrate every section of a project, in order.
///
/// Fails on the first unknown section kind. Rendering unrecognized
/// content is a hard stop, not a degraded-render case.
pub fn hydrate_project(project: &Project) -> Result<Vec<SectionInstance>, PublishError> {
    project.sections.iter().map(hydrate_section).collect()
}

/// Hydrate a single section record.
pub fn hydrate_section(record: &SectionRecord) -> Result<SectionInstance, PublishError> {
    let kind = SectionKind::parse(&record.kind).ok_or_else(|| PublishError::UnknownSection {
        id: record.id.clone(),
        kind: record.kind.clone(),
    })?;

    // Persisted keys win. Top-level shallow merge only: a persisted
    // nested object replaces the default one wholesale.
    let mut data = defaults::default_data(kind);
    if let Some(persisted) = &record.data {
        for (key, value) in persisted {
            data.insert(key.clone(), value.clone());
        }
    }

    let variant = resolve_variant(kind, record.variant.as_deref());

    Ok(SectionInstance {
        id: record.id.clone(),
        kind,
        variant: variant.to_string(),
        data,
        styles: record.styles.clone().unwrap_or_default(),
        field_styles: record.field_styles.clone().unwrap_or_default(),
        item_styles: record.item_styles.clone().unwrap_or_default(),
    })
}

fn resolve_variant(kind: SectionKind, requested: Option<&str>) -> &'static str {
    let variants = kind.variants();
    let Some(requested) = requested else {
        return variants[0];
    };
    match variants.iter().find(|known| **known == requested) {
        Some(found) => found,
        None => {
            crate::log!(
                "warn";
                "unknown variant `{requested}` for {kind} section, using `{}`",
                variants[0]
            );
            variants[0]
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn record(kind: &str) -> SectionRecord {
        SectionRecord {
            id: "sec_1".to_string(),
            kind: kind.to_string(),
            ..SectionRecord::default()
        }
    }

    #[test]
    fn test_sparse_record_gets_full_defaults() {
        let section = hydrate_section(&record("hero")).unwrap();
        assert_eq!(section.kind, SectionKind::Hero);
        assert!(section.data.contains_key("headline"));
        assert!(section.data.contains_key("primaryCTA"));
        assert!(section.styles.is_empty());
        assert!(section.field_styles.is_empty());
        assert!(section.item_styles.is_empty());
    }

    #[test]
    fn test_persisted_keys_win_over_defaults() {
        let mut rec = record("hero");
        rec.data = Some(
            json!({ "headline": "Custom headline" })
                .as_object()
                .unwrap()
                .clone(),
        );

        let section = hydrate_section(&rec).unwrap();
        assert_eq!(section.str_field("headline"), Some("Custom headline"));
        // untouched defaults survive
        assert!(section.data.contains_key("subheadline"));
    }

    #[test]
    fn test_nested_objects_replace_wholesale() {
        let mut rec = record("hero");
        rec.data = Some(
            json!({ "primaryCTA": { "label": "Buy" } })
                .as_object()
                .unwrap()
                .clone(),
        );

        let section = hydrate_section(&rec).unwrap();
        let cta = section.object_field("primaryCTA").unwrap();
        assert_eq!(cta.get("label").and_then(Value::as_str), Some("Buy"));
        // the default object's `url` is gone, not deep-merged in
        assert!(!cta.contains_key("url"));
    }

    #[test]
    fn test_unknown_kind_is_fatal_with_context() {
        let err = hydrate_section(&record("carousel")).unwrap_err();
        match err {
            PublishError::UnknownSection { id, kind } => {
                assert_eq!(id, "sec_1");
                assert_eq!(kind, "carousel");
            }
            other => panic!("expected UnknownSection, got {other:?}"),
        }
    }

    #[test]
    fn test_project_hydration_fails_on_first_unknown_kind() {
        let project = Project {
            sections: vec![record("hero"), record("carousel")],
            ..Project::default()
        };
        assert!(hydrate_project(&project).is_err());
    }

    #[test]
    fn test_missing_variant_uses_default() {
        let section = hydrate_section(&record("cards")).unwrap();
        assert_eq!(section.variant, "grid");
    }

    #[test]
    fn test_unknown_variant_falls_back_to_default() {
        let mut rec = record("cards");
        rec.variant = Some("hexagonal".to_string());
        let section = hydrate_section(&rec).unwrap();
        assert_eq!(section.variant, "grid");
    }

    #[test]
    fn test_known_variant_is_kept() {
        let mut rec = record("cards");
        rec.variant = Some("list".to_string());
        let section = hydrate_section(&rec).unwrap();
        assert_eq!(section.variant, "list");
    }

    #[test]
    fn test_hydration_is_repeatable() {
        let rec = record("cards");
        let first = hydrate_section(&rec).unwrap();
        let second = hydrate_section(&rec).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_legacy_kinds_still_hydrate() {
        for legacy in ["faq", "menu", "services", "events", "products"] {
            assert!(hydrate_section(&record(legacy)).is_ok(), "{legacy} failed");
        }
    }
}
