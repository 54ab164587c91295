//! Static site generation.
//!
//! Renders a hydrated project into one self-contained HTML document and
//! one stylesheet. Every rendered element registers its styles against
//! a generated class name; the stylesheet contains exactly those
//! classes and nothing else.

pub mod minify;

mod accordion;
mod cards;
mod contact;
mod cta;
mod events;
mod footer;
mod gallery;
mod header;
mod hero;
mod links;
mod logo_list;
mod media_text;
mod menu;
mod promo;
mod subscribe;
mod text;

use serde_json::{Map, Value};

use crate::error::PublishError;
use crate::section::{Project, SectionInstance, SectionKind, hydrate};
use crate::style::{ElementStyles, GenerationContext, StyleMap};
use crate::tailwind::ScaleTables;
use crate::theme::Theme;
use crate::utils::html::{escape, escape_attr};

/// Primary call-to-action link appearance, shared by every section
/// that renders a button.
pub(crate) const BUTTON_CLASSES: &str = "inline-block px-[var(--button-padding-x)] py-[var(--button-padding-y)] rounded-[var(--button-radius)] bg-[var(--color-primary)] text-[var(--color-primary-foreground)] font-medium no-underline transition-colors hover:opacity-90";

/// Outline variant for secondary actions.
pub(crate) const OUTLINE_BUTTON_CLASSES: &str = "inline-block px-[var(--button-padding-x)] py-[var(--button-padding-y)] rounded-[var(--button-radius)] border border-[var(--color-border)] text-[var(--color-foreground)] font-medium no-underline transition-colors hover:opacity-90";

/// One generated site: a full HTML document plus its stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSite {
    pub html: String,
    pub css: String,
}

/// Render a project end to end.
///
/// Hydrates every section, renders them in order through a fresh
/// [`GenerationContext`], and wraps the result in the page shell.
/// Fails only on data integrity problems (unknown section kind);
/// styling problems degrade with warnings.
pub fn render_site(
    project: &Project,
    theme: Option<Theme>,
    scale: ScaleTables,
    minify_output: bool,
) -> Result<RenderedSite, PublishError> {
    let sections = hydrate::hydrate_project(project)?;

    let mut ctx = GenerationContext::new(scale);
    let fonts = theme.as_ref().map(font_links).unwrap_or_default();
    let reset = base_style(theme.as_ref());
    if let Some(theme) = theme {
        ctx.set_theme(theme);
    }

    let mut body = String::new();
    for section in &sections {
        body.push_str(&render_section(&mut ctx, section));
        body.push('\n');
    }

    let css = ctx.css();
    let html = page_shell(project.display_title(), &fonts, &reset, &body);

    if minify_output {
        Ok(RenderedSite {
            html: minify::html(&html),
            css: minify::css(&css),
        })
    } else {
        Ok(RenderedSite { html, css })
    }
}

fn render_section(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    match section.kind {
        SectionKind::Header => header::render(ctx, section),
        SectionKind::Hero => hero::render(ctx, section),
        SectionKind::MediaText => media_text::render(ctx, section),
        SectionKind::Text => text::render(ctx, section),
        SectionKind::Cards | SectionKind::Services | SectionKind::Products => {
            cards::render(ctx, section)
        }
        SectionKind::Links => links::render(ctx, section),
        SectionKind::Accordion | SectionKind::Faq => accordion::render(ctx, section),
        SectionKind::Cta => cta::render(ctx, section),
        SectionKind::Subscribe => subscribe::render(ctx, section),
        SectionKind::Contact => contact::render(ctx, section),
        SectionKind::Gallery => gallery::render(ctx, section),
        SectionKind::Footer => footer::render(ctx, section),
        SectionKind::LogoList => logo_list::render(ctx, section),
        SectionKind::Promo => promo::render(ctx, section),
        SectionKind::Menu => menu::render(ctx, section),
        SectionKind::Events => events::render(ctx, section),
    }
}

// ============================================================================
// Page shell
// ============================================================================

fn page_shell(title: &str, font_links: &str, base_style: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>");
    html.push_str(&escape(title));
    html.push_str("</title>\n");
    html.push_str(font_links);
    html.push_str("<link rel=\"stylesheet\" href=\"/style.css\">\n");
    html.push_str("<style>");
    html.push_str(base_style);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

/// Google Fonts links for the theme's font families.
fn font_links(theme: &Theme) -> String {
    let mut families: Vec<&str> = vec![&theme.fonts.heading];
    if theme.fonts.body != theme.fonts.heading {
        families.push(&theme.fonts.body);
    }
    let query = families
        .iter()
        .map(|family| format!("family={}:wght@400;500;600;700", family.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&");

    let mut links = String::new();
    links.push_str("<link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">\n");
    links.push_str("<link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>\n");
    links.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"https://fonts.googleapis.com/css2?{query}&display=swap\">\n"
    ));
    links
}

/// Minimal reset plus theme-level page defaults. Inlined in the head so
/// the stylesheet blob stays generated-classes only.
fn base_style(theme: Option<&Theme>) -> String {
    let mut css = String::from(
        "*,*::before,*::after{box-sizing:border-box}\
         body{margin:0;-webkit-font-smoothing:antialiased}\
         h1,h2,h3,h4,p,ul{margin:0;padding:0}\
         ul{list-style:none}\
         img{max-width:100%;display:block}",
    );
    let Some(theme) = theme else {
        return css;
    };

    css.push_str(&format!("body{{font-family:'{}',sans-serif;", theme.fonts.body));
    if let Some(bg) = theme.color("background") {
        css.push_str(&format!("background-color:{bg};"));
    }
    if let Some(fg) = theme.color("foreground") {
        css.push_str(&format!("color:{fg};"));
    }
    css.push('}');
    css.push_str(&format!(
        "h1,h2,h3,h4{{font-family:'{}',sans-serif}}",
        theme.fonts.heading
    ));
    css
}

// ============================================================================
// Shared element helpers
// ============================================================================

/// Mint the root class, register root styles, and write the opening tag
/// with the section's id as an anchor.
pub(crate) fn open_root(
    ctx: &mut GenerationContext,
    html: &mut String,
    section: &SectionInstance,
    tag: &str,
    tailwind: &str,
    root_styles: &StyleMap,
) -> String {
    let class = ctx.root_class(section.kind.as_str());
    ctx.process_element(ElementStyles {
        class_name: &class,
        tailwind: Some(tailwind),
        extra: Some(root_styles),
        ..Default::default()
    });
    html.push('<');
    html.push_str(tag);
    html.push_str(" class=\"");
    html.push_str(&class);
    html.push_str("\" id=\"");
    html.push_str(&escape_attr(&section.id));
    html.push_str("\">");
    class
}

pub(crate) fn open_el(
    ctx: &mut GenerationContext,
    html: &mut String,
    tag: &str,
    class: &str,
    tailwind: &str,
    extra: Option<&StyleMap>,
) {
    ctx.process_element(ElementStyles {
        class_name: class,
        tailwind: Some(tailwind),
        extra,
        ..Default::default()
    });
    html.push('<');
    html.push_str(tag);
    html.push_str(" class=\"");
    html.push_str(class);
    html.push_str("\">");
}

pub(crate) fn close_el(html: &mut String, tag: &str) {
    html.push_str("</");
    html.push_str(tag);
    html.push('>');
}

/// Render a text element, skipped entirely when the content is empty.
pub(crate) fn push_text(
    ctx: &mut GenerationContext,
    html: &mut String,
    tag: &str,
    class: &str,
    tailwind: &str,
    extra: Option<&StyleMap>,
    content: &str,
) {
    if content.is_empty() {
        return;
    }
    open_el(ctx, html, tag, class, tailwind, extra);
    html.push_str(&escape(content));
    close_el(html, tag);
}

/// Render an anchor, skipped when the label is empty.
pub(crate) fn push_link(
    ctx: &mut GenerationContext,
    html: &mut String,
    class: &str,
    tailwind: &str,
    extra: Option<&StyleMap>,
    url: &str,
    label: &str,
) {
    if label.is_empty() {
        return;
    }
    ctx.process_element(ElementStyles {
        class_name: class,
        tailwind: Some(tailwind),
        extra,
        ..Default::default()
    });
    html.push_str("<a class=\"");
    html.push_str(class);
    html.push_str("\" href=\"");
    html.push_str(&escape_attr(if url.is_empty() { "#" } else { url }));
    html.push_str("\">");
    html.push_str(&escape(label));
    html.push_str("</a>");
}

/// Render a `{label, url}` object as a button-styled link.
pub(crate) fn push_button(
    ctx: &mut GenerationContext,
    html: &mut String,
    class: &str,
    button_classes: &str,
    extra: Option<&StyleMap>,
    cta: Option<&Map<String, Value>>,
) {
    let Some(cta) = cta else {
        return;
    };
    let label = cta.get("label").and_then(Value::as_str).unwrap_or("");
    let url = cta.get("url").and_then(Value::as_str).unwrap_or("#");
    push_link(ctx, html, class, button_classes, extra, url, label);
}

/// Render an `{src, alt}` object as an image, skipped when `src` is empty.
pub(crate) fn push_image(
    ctx: &mut GenerationContext,
    html: &mut String,
    class: &str,
    tailwind: &str,
    extra: Option<&StyleMap>,
    image: Option<&Map<String, Value>>,
) {
    let Some(image) = image else {
        return;
    };
    let src = image.get("src").and_then(Value::as_str).unwrap_or("");
    if src.is_empty() {
        return;
    }
    let alt = image.get("alt").and_then(Value::as_str).unwrap_or("");
    ctx.process_element(ElementStyles {
        class_name: class,
        tailwind: Some(tailwind),
        extra,
        ..Default::default()
    });
    html.push_str("<img class=\"");
    html.push_str(class);
    html.push_str("\" src=\"");
    html.push_str(&escape_attr(src));
    html.push_str("\" alt=\"");
    html.push_str(&escape_attr(alt));
    html.push_str("\">");
}

// ============================================================================
// Style bucket routing
// ============================================================================

/// Split a section's flat style bucket into root styles and styles for
/// one named child group. A key like `cardPaddingX` targets the `card`
/// group as `paddingX`; everything else stays on the root.
pub(crate) fn split_group_styles(styles: &StyleMap, group: &str) -> (StyleMap, StyleMap) {
    let mut root = StyleMap::new();
    let mut child = StyleMap::new();
    for (key, value) in styles {
        match strip_group_prefix(key, group) {
            Some(prop) => insert_expanded(&mut child, &prop, value),
            None => insert_expanded(&mut root, key, value),
        }
    }
    (root, child)
}

/// Expand axis shorthands in a bucket that applies to a single element.
pub(crate) fn expand_styles(styles: &StyleMap) -> StyleMap {
    let mut out = StyleMap::new();
    for (key, value) in styles {
        insert_expanded(&mut out, key, value);
    }
    out
}

/// Combined shared-child styles: group-prefixed keys from `styles`
/// overlaid with the dedicated `itemStyles` bucket.
pub(crate) fn merged_item_styles(group_styles: &StyleMap, item_styles: &StyleMap) -> StyleMap {
    let mut merged = group_styles.clone();
    for (key, value) in item_styles {
        insert_expanded(&mut merged, key, value);
    }
    merged
}

fn strip_group_prefix(key: &str, group: &str) -> Option<String> {
    let rest = key.strip_prefix(group)?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }
    Some(first.to_ascii_lowercase().to_string() + chars.as_str())
}

/// `paddingX`/`marginY` style axis keys expand to their CSS side pairs.
fn insert_expanded(map: &mut StyleMap, prop: &str, value: &str) {
    let sides: &[&str] = match prop {
        "paddingX" => &["paddingLeft", "paddingRight"],
        "paddingY" => &["paddingTop", "paddingBottom"],
        "marginX" => &["marginLeft", "marginRight"],
        "marginY" => &["marginTop", "marginBottom"],
        _ => {
            map.insert(prop.to_string(), value.to_string());
            return;
        }
    };
    for side in sides {
        map.insert((*side).to_string(), value.to_string());
    }
}

pub(crate) fn item_str<'a>(item: &'a Value, key: &str) -> &'a str {
    item.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Label of a `{label, url}` object, empty when absent.
pub(crate) fn cta_label(cta: Option<&Map<String, Value>>) -> &str {
    cta.and_then(|c| c.get("label")).and_then(Value::as_str).unwrap_or("")
}

pub(crate) fn item_object<'a>(item: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    item.get(key).and_then(Value::as_object)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::section::{Project, SectionRecord};

    use super::*;

    fn theme() -> Theme {
        serde_json::from_str(
            r##"{
                "id": "th_1",
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

    fn project(kinds: &[&str]) -> Project {
        Project {
            id: "prj_1".to_string(),
            user_id: "usr_1".to_string(),
            slug: "my-site".to_string(),
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

    #[test]
    fn test_render_site_produces_document_and_stylesheet() {
        let site =
            render_site(&project(&["hero"]), Some(theme()), ScaleTables::default(), false).unwrap();

        assert!(site.html.starts_with("<!DOCTYPE html>"));
        assert!(site.html.contains("<title>my-site</title>"));
        assert!(site.html.contains("class=\"hero_0\""));
        assert!(site.css.contains(".hero_0 {"));
    }

    #[test]
    fn test_every_kind_renders() {
        let kinds: Vec<&str> = SectionKind::ALL.iter().map(|k| k.as_str()).collect();
        let site =
            render_site(&project(&kinds), Some(theme()), ScaleTables::default(), false).unwrap();

        for (i, kind) in kinds.iter().enumerate() {
            assert!(
                site.html.contains(&format!("id=\"sec_{i}\"")),
                "section {i} ({kind}) missing from output"
            );
        }
    }

    #[test]
    fn test_unknown_kind_aborts_render() {
        let err = render_site(&project(&["carousel"]), Some(theme()), ScaleTables::default(), false)
            .unwrap_err();
        assert!(matches!(err, PublishError::UnknownSection { .. }));
    }

    #[test]
    fn test_theme_fonts_linked_in_head() {
        let site =
            render_site(&project(&["hero"]), Some(theme()), ScaleTables::default(), false).unwrap();
        assert!(site.html.contains("fonts.googleapis.com/css2?family=Poppins"));
        assert!(site.html.contains("family=Inter"));
    }

    #[test]
    fn test_stylesheet_selectors_all_referenced_by_html() {
        let site = render_site(
            &project(&["header", "hero", "cards", "footer"]),
            Some(theme()),
            ScaleTables::default(),
            false,
        )
        .unwrap();

        for line in site.css.lines() {
            let Some(selector) = line.strip_prefix('.') else {
                continue;
            };
            let Some(class) = selector.split([':', ' ']).next() else {
                continue;
            };
            assert!(
                site.html.contains(class),
                "stylesheet rule .{class} not referenced by the html"
            );
        }
    }

    #[test]
    fn test_theme_tokens_resolved_in_stylesheet() {
        let site =
            render_site(&project(&["cta"]), Some(theme()), ScaleTables::default(), false).unwrap();
        assert!(site.css.contains("#2563eb"));
        assert!(!site.css.contains("var(--color-primary)"));
    }

    #[test]
    fn test_minify_flag_compacts_output() {
        let plain =
            render_site(&project(&["hero"]), Some(theme()), ScaleTables::default(), false).unwrap();
        let compact =
            render_site(&project(&["hero"]), Some(theme()), ScaleTables::default(), true).unwrap();

        assert!(compact.html.len() < plain.html.len());
        assert!(!compact.css.contains('\n'));
    }

    #[test]
    fn test_split_group_styles_routes_prefixed_keys() {
        let styles = StyleMap::from_iter([
            ("backgroundColor".to_string(), "#fafafa".to_string()),
            ("cardPaddingX".to_string(), "2rem".to_string()),
            ("cardBorderRadius".to_string(), "12px".to_string()),
        ]);

        let (root, card) = split_group_styles(&styles, "card");
        assert_eq!(root.get("backgroundColor").map(String::as_str), Some("#fafafa"));
        assert!(root.get("cardPaddingX").is_none());
        assert_eq!(card.get("paddingLeft").map(String::as_str), Some("2rem"));
        assert_eq!(card.get("paddingRight").map(String::as_str), Some("2rem"));
        assert_eq!(card.get("borderRadius").map(String::as_str), Some("12px"));
    }

    #[test]
    fn test_item_styles_win_over_group_styles() {
        let group = StyleMap::from_iter([("color".to_string(), "red".to_string())]);
        let items = StyleMap::from_iter([("color".to_string(), "blue".to_string())]);
        let merged = merged_item_styles(&group, &items);
        assert_eq!(merged.get("color").map(String::as_str), Some("blue"));
    }

    #[test]
    fn test_data_content_is_escaped() {
        let record = SectionRecord {
            id: "sec_0".to_string(),
            kind: "text".to_string(),
            data: Some(
                serde_json::json!({ "headline": "Fish & <Chips>" })
                    .as_object()
                    .unwrap()
                    .clone(),
            ),
            ..SectionRecord::default()
        };
        let project = Project {
            slug: "escape-test".to_string(),
            sections: vec![record],
            ..Project::default()
        };

        let site = render_site(&project, Some(theme()), ScaleTables::default(), false).unwrap();
        assert!(site.html.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(!site.html.contains("<Chips>"));
    }
}
