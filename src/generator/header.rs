//! Site header: brand, navigation links, optional call to action.

use serde_json::Value;

use crate::section::SectionInstance;
use crate::style::GenerationContext;

use super::{
    BUTTON_CLASSES, close_el, item_str, merged_item_styles, open_el, open_root, push_button,
    push_link, split_group_styles,
};

pub fn render(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    let mut html = String::new();
    let (root_styles, link_styles) = split_group_styles(&section.styles, "link");

    let root = open_root(
        ctx,
        &mut html,
        section,
        "header",
        "w-full bg-[var(--color-background)] border-b border-[var(--color-border)]",
        &root_styles,
    );

    let inner = ctx.child_class(&root, "inner");
    let inner_layout = if section.variant == "centered" {
        "flex flex-col items-center gap-4 px-6 py-4 max-w-6xl mx-auto"
    } else {
        "flex flex-row items-center justify-between gap-8 px-6 py-4 max-w-6xl mx-auto"
    };
    open_el(ctx, &mut html, "div", &inner, inner_layout, None);

    let brand = ctx.child_class(&root, "brand");
    push_link(
        ctx,
        &mut html,
        &brand,
        "font-bold text-xl no-underline text-[var(--color-foreground)]",
        section.field_style("siteName"),
        "#",
        section.str_field("siteName").unwrap_or(""),
    );

    let nav_links = section
        .data
        .get("navLinks")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    if !nav_links.is_empty() {
        let nav = ctx.child_class(&root, "nav");
        open_el(ctx, &mut html, "nav", &nav, "flex flex-row items-center gap-6", None);

        // one shared class for every nav link
        let link_class = ctx.child_class(&root, "link");
        let link_extra = merged_item_styles(&link_styles, &section.item_styles);
        for link in nav_links {
            push_link(
                ctx,
                &mut html,
                &link_class,
                "no-underline text-[var(--color-foreground)] transition-colors hover:underline",
                Some(&link_extra),
                item_str(link, "url"),
                item_str(link, "label"),
            );
        }

        close_el(&mut html, "nav");
    }

    let show_cta = section
        .data
        .get("showCTA")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if show_cta {
        let cta = ctx.child_class(&root, "cta");
        push_button(
            ctx,
            &mut html,
            &cta,
            BUTTON_CLASSES,
            section.field_style("cta"),
            section.object_field("cta"),
        );
    }

    close_el(&mut html, "div");
    close_el(&mut html, "header");
    html
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::section::{SectionRecord, hydrate};

    use super::*;

    fn header(data: serde_json::Value) -> SectionInstance {
        let record = SectionRecord {
            id: "sec_header".to_string(),
            kind: "header".to_string(),
            data: data.as_object().cloned(),
            ..SectionRecord::default()
        };
        hydrate::hydrate_section(&record).unwrap()
    }

    #[test]
    fn test_nav_links_share_one_class() {
        let mut ctx = GenerationContext::default();
        let html = render(
            &mut ctx,
            &header(json!({
                "navLinks": [
                    { "label": "Home", "url": "/" },
                    { "label": "Pricing", "url": "/pricing" }
                ]
            })),
        );

        assert_eq!(html.matches("class=\"header_0_link\"").count(), 2);
        assert!(html.contains("href=\"/pricing\""));
    }

    #[test]
    fn test_cta_hidden_when_disabled() {
        let mut ctx = GenerationContext::default();
        let html = render(&mut ctx, &header(json!({ "showCTA": false })));
        assert!(!html.contains("header_0_cta"));
    }

    #[test]
    fn test_brand_uses_site_name() {
        let mut ctx = GenerationContext::default();
        let html = render(&mut ctx, &header(json!({ "siteName": "Acme Co" })));
        assert!(html.contains(">Acme Co</a>"));
    }
}
