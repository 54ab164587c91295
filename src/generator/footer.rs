//! Site footer.

use serde_json::Value;

use crate::section::SectionInstance;
use crate::style::GenerationContext;

use super::{
    close_el, item_str, merged_item_styles, open_el, open_root, push_link, push_text,
    split_group_styles,
};

pub fn render(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    let mut html = String::new();
    let (root_styles, link_styles) = split_group_styles(&section.styles, "link");

    let root = open_root(
        ctx,
        &mut html,
        section,
        "footer",
        "flex flex-col items-center gap-4 px-6 py-12 border-t border-[var(--color-border)]",
        &root_styles,
    );

    let brand = ctx.child_class(&root, "brand");
    push_text(
        ctx,
        &mut html,
        "div",
        &brand,
        "font-semibold",
        section.field_style("siteName"),
        section.str_field("siteName").unwrap_or(""),
    );

    let minimal = section.variant == "minimal";
    if !minimal {
        let tagline = ctx.child_class(&root, "tagline");
        push_text(
            ctx,
            &mut html,
            "p",
            &tagline,
            "text-sm text-[var(--color-muted-foreground)]",
            section.field_style("tagline"),
            section.str_field("tagline").unwrap_or(""),
        );

        let links = section
            .data
            .get("links")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        if !links.is_empty() {
            let row = ctx.child_class(&root, "links");
            open_el(
                ctx,
                &mut html,
                "div",
                &row,
                "flex flex-row flex-wrap justify-center gap-4",
                None,
            );

            let link_class = ctx.child_class(&root, "link");
            let link_extra = merged_item_styles(&link_styles, &section.item_styles);
            for link in links {
                push_link(
                    ctx,
                    &mut html,
                    &link_class,
                    "no-underline text-sm text-[var(--color-muted-foreground)] hover:underline",
                    Some(&link_extra),
                    item_str(link, "url"),
                    item_str(link, "label"),
                );
            }

            close_el(&mut html, "div");
        }
    }

    let legal = ctx.child_class(&root, "legal");
    push_text(
        ctx,
        &mut html,
        "p",
        &legal,
        "text-xs text-[var(--color-muted-foreground)]",
        section.field_style("legal"),
        section.str_field("legal").unwrap_or(""),
    );

    close_el(&mut html, "footer");
    html
}
