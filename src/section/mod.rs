//! Section and project records.
//!
//! A project is an ordered list of section instances. Persisted records
//! can be sparse (old schema versions, half-filled editor state), so
//! every section passes through [`hydrate`] before rendering.

pub mod defaults;
pub mod hydrate;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::style::StyleMap;

/// Closed set of renderable section types.
///
/// The trailing five are legacy aliases kept so older published
/// projects keep republishing; the authoring surface no longer offers
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Header,
    Hero,
    #[serde(rename = "media-text")]
    MediaText,
    Text,
    Cards,
    Links,
    Accordion,
    Cta,
    Subscribe,
    Contact,
    Gallery,
    Footer,
    #[serde(rename = "logoList")]
    LogoList,
    Promo,
    Faq,
    Menu,
    Services,
    Events,
    Products,
}

impl SectionKind {
    pub const ALL: [SectionKind; 19] = [
        Self::Header,
        Self::Hero,
        Self::MediaText,
        Self::Text,
        Self::Cards,
        Self::Links,
        Self::Accordion,
        Self::Cta,
        Self::Subscribe,
        Self::Contact,
        Self::Gallery,
        Self::Footer,
        Self::LogoList,
        Self::Promo,
        Self::Faq,
        Self::Menu,
        Self::Services,
        Self::Events,
        Self::Products,
    ];

    /// Wire name as stored in project records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Hero => "hero",
            Self::MediaText => "media-text",
            Self::Text => "text",
            Self::Cards => "cards",
            Self::Links => "links",
            Self::Accordion => "accordion",
            Self::Cta => "cta",
            Self::Subscribe => "subscribe",
            Self::Contact => "contact",
            Self::Gallery => "gallery",
            Self::Footer => "footer",
            Self::LogoList => "logoList",
            Self::Promo => "promo",
            Self::Faq => "faq",
            Self::Menu => "menu",
            Self::Services => "services",
            Self::Events => "events",
            Self::Products => "products",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == raw)
    }

    /// Layout variants for this kind, first entry is the default.
    pub fn variants(self) -> &'static [&'static str] {
        match self {
            Self::Header => &["inline", "centered"],
            Self::Hero => &["centered", "split"],
            Self::MediaText => &["left", "right"],
            Self::Text => &["default", "narrow"],
            Self::Cards | Self::Services | Self::Products => &["grid", "list"],
            Self::Links => &["stacked", "inline"],
            Self::Accordion | Self::Faq => &["default"],
            Self::Cta => &["banner", "card"],
            Self::Subscribe => &["inline", "stacked"],
            Self::Contact => &["default"],
            Self::Gallery => &["grid", "strip"],
            Self::Footer => &["default", "minimal"],
            Self::LogoList => &["row"],
            Self::Promo => &["banner"],
            Self::Menu => &["default"],
            Self::Events => &["list"],
        }
    }

    pub fn default_variant(self) -> &'static str {
        self.variants()[0]
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field style override maps, keyed by field name.
pub type FieldStyles = IndexMap<String, StyleMap>;

/// One section as persisted. `kind` stays a raw string here so an
/// unrecognized value can be reported verbatim during hydration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleMap>,
    #[serde(rename = "fieldStyles", default, skip_serializing_if = "Option::is_none")]
    pub field_styles: Option<FieldStyles>,
    #[serde(rename = "itemStyles", default, skip_serializing_if = "Option::is_none")]
    pub item_styles: Option<StyleMap>,
}

/// A hydrated section: complete data, validated kind and variant,
/// style buckets never absent.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionInstance {
    pub id: String,
    pub kind: SectionKind,
    pub variant: String,
    pub data: Map<String, Value>,
    pub styles: StyleMap,
    pub field_styles: FieldStyles,
    /// Shared styles for every child of a repeater group. Children
    /// never carry individual visual styles, only content.
    pub item_styles: StyleMap,
}

impl SectionInstance {
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    pub fn object_field(&self, key: &str) -> Option<&Map<String, Value>> {
        self.data.get(key).and_then(Value::as_object)
    }

    /// The `items` repeater array, empty slice when absent.
    pub fn items(&self) -> &[Value] {
        self.data
            .get("items")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Style overrides for one named field.
    pub fn field_style(&self, field: &str) -> Option<&StyleMap> {
        self.field_styles.get(field)
    }
}

/// Who can see a published site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Password,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Password => "password",
        }
    }
}

/// A project as stored in the relational store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub user_id: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl Project {
    /// Key the published blob is stored under: the custom domain when
    /// one is attached, the slug otherwise.
    pub fn store_key(&self) -> &str {
        self.custom_domain.as_deref().unwrap_or(&self.slug)
    }

    /// Page title shown in the browser tab.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.slug)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_names_round_trip() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_kind_mixed_case_wire_names() {
        assert_eq!(SectionKind::parse("media-text"), Some(SectionKind::MediaText));
        assert_eq!(SectionKind::parse("logoList"), Some(SectionKind::LogoList));
        assert_eq!(SectionKind::parse("logolist"), None);
        assert_eq!(SectionKind::parse("carousel"), None);
    }

    #[test]
    fn test_kind_serde_matches_as_str() {
        for kind in SectionKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_every_kind_has_a_default_variant() {
        for kind in SectionKind::ALL {
            assert!(!kind.variants().is_empty());
            assert_eq!(kind.default_variant(), kind.variants()[0]);
        }
    }

    #[test]
    fn test_project_parses_sparse_record() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": "prj_1",
                "userId": "usr_1",
                "slug": "my-site",
                "sections": [{ "id": "sec_1", "type": "hero" }]
            }"#,
        )
        .unwrap();

        assert_eq!(project.visibility, Visibility::Public);
        assert!(!project.published);
        assert_eq!(project.sections.len(), 1);
        assert_eq!(project.sections[0].kind, "hero");
        assert!(project.sections[0].data.is_none());
    }

    #[test]
    fn test_store_key_prefers_custom_domain() {
        let mut project = Project {
            slug: "my-site".to_string(),
            ..Project::default()
        };
        assert_eq!(project.store_key(), "my-site");

        project.custom_domain = Some("example.com".to_string());
        assert_eq!(project.store_key(), "example.com");
    }
}
