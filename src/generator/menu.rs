//! Legacy menu section: name/description/price rows.

use crate::section::SectionInstance;
use crate::style::GenerationContext;

use super::{
    close_el, item_str, merged_item_styles, open_el, open_root, push_text, split_group_styles,
};

pub fn render(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    let mut html = String::new();
    let (root_styles, row_styles) = split_group_styles(&section.styles, "item");

    let root = open_root(
        ctx,
        &mut html,
        section,
        "section",
        "flex flex-col gap-6 px-6 py-16 max-w-2xl mx-auto",
        &root_styles,
    );

    let headline = ctx.child_class(&root, "headline");
    push_text(
        ctx,
        &mut html,
        "h2",
        &headline,
        "text-3xl font-bold text-center",
        section.field_style("headline"),
        section.str_field("headline").unwrap_or(""),
    );

    let row_class = ctx.child_class(&root, "item");
    let row_extra = merged_item_styles(&row_styles, &section.item_styles);
    let body_class = ctx.child_class(&row_class, "body");
    let name_class = ctx.child_class(&row_class, "name");
    let desc_class = ctx.child_class(&row_class, "description");
    let price_class = ctx.child_class(&row_class, "price");

    for item in section.items() {
        open_el(
            ctx,
            &mut html,
            "div",
            &row_class,
            "flex flex-row items-baseline justify-between gap-4 border-b border-[var(--color-border)] py-3",
            Some(&row_extra),
        );

        open_el(ctx, &mut html, "div", &body_class, "flex flex-col gap-1", None);
        push_text(
            ctx,
            &mut html,
            "span",
            &name_class,
            "font-semibold",
            None,
            item_str(item, "name"),
        );
        push_text(
            ctx,
            &mut html,
            "p",
            &desc_class,
            "text-sm text-[var(--color-muted-foreground)]",
            None,
            item_str(item, "description"),
        );
        close_el(&mut html, "div");

        push_text(
            ctx,
            &mut html,
            "span",
            &price_class,
            "font-semibold whitespace-nowrap",
            None,
            item_str(item, "price"),
        );

        close_el(&mut html, "div");
    }

    close_el(&mut html, "section");
    html
}
