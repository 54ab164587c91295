//! Logo strip, typically "trusted by" rows.

use crate::section::SectionInstance;
use crate::style::GenerationContext;

use super::{
    close_el, merged_item_styles, open_el, open_root, push_image, push_text, split_group_styles,
};

pub fn render(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    let mut html = String::new();
    let (root_styles, logo_styles) = split_group_styles(&section.styles, "logo");

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
        "p",
        &headline,
        "text-sm uppercase tracking-wide text-[var(--color-muted-foreground)]",
        section.field_style("headline"),
        section.str_field("headline").unwrap_or(""),
    );

    let row = ctx.child_class(&root, "row");
    open_el(
        ctx,
        &mut html,
        "div",
        &row,
        "flex flex-row flex-wrap items-center justify-center gap-10",
        None,
    );

    let logo_class = ctx.child_class(&root, "logo");
    let logo_extra = merged_item_styles(&logo_styles, &section.item_styles);
    for item in section.items() {
        push_image(
            ctx,
            &mut html,
            &logo_class,
            "h-8 w-auto object-contain opacity-90",
            Some(&logo_extra),
            item.as_object(),
        );
    }

    close_el(&mut html, "div");
    close_el(&mut html, "section");
    html
}
