//! Link list: a stack or row of labelled links.

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
        "section",
        "flex flex-col items-center gap-6 px-6 py-12",
        &root_styles,
    );

    let headline = ctx.child_class(&root, "headline");
    push_text(
        ctx,
        &mut html,
        "h2",
        &headline,
        "text-2xl font-semibold",
        section.field_style("headline"),
        section.str_field("headline").unwrap_or(""),
    );

    let list = ctx.child_class(&root, "list");
    let list_layout = if section.variant == "inline" {
        "flex flex-row flex-wrap justify-center gap-4"
    } else {
        "flex flex-col gap-3 w-full max-w-md"
    };
    open_el(ctx, &mut html, "div", &list, list_layout, None);

    let link_class = ctx.child_class(&root, "link");
    let link_extra = merged_item_styles(&link_styles, &section.item_styles);
    for item in section.items() {
        push_link(
            ctx,
            &mut html,
            &link_class,
            "block w-full text-center px-[var(--button-padding-x)] py-[var(--button-padding-y)] rounded-[var(--button-radius)] border border-[var(--color-border)] no-underline text-[var(--color-foreground)] transition-colors hover:opacity-90",
            Some(&link_extra),
            item_str(item, "url"),
            item_str(item, "label"),
        );
    }

    close_el(&mut html, "div");
    close_el(&mut html, "section");
    html
}
