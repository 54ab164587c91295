//! Image gallery.

use crate::section::SectionInstance;
use crate::style::GenerationContext;

use super::{
    close_el, merged_item_styles, open_el, open_root, push_image, push_text, split_group_styles,
};

pub fn render(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    let mut html = String::new();
    let (root_styles, image_styles) = split_group_styles(&section.styles, "image");

    let root = open_root(ctx, &mut html, section, "section", "px-6 py-16", &root_styles);

    let headline = ctx.child_class(&root, "headline");
    push_text(
        ctx,
        &mut html,
        "h2",
        &headline,
        "text-3xl font-bold text-center mb-8",
        section.field_style("headline"),
        section.str_field("headline").unwrap_or(""),
    );

    let grid = ctx.child_class(&root, "grid");
    let grid_layout = if section.variant == "strip" {
        "flex flex-row gap-4 overflow-x-auto max-w-6xl mx-auto"
    } else {
        "grid grid-cols-3 gap-4 max-w-5xl mx-auto"
    };
    open_el(ctx, &mut html, "div", &grid, grid_layout, None);

    let image_class = ctx.child_class(&root, "image");
    let image_extra = merged_item_styles(&image_styles, &section.item_styles);
    for item in section.items() {
        push_image(
            ctx,
            &mut html,
            &image_class,
            "w-full h-auto rounded-lg object-cover",
            Some(&image_extra),
            item.as_object(),
        );
    }

    close_el(&mut html, "div");
    close_el(&mut html, "section");
    html
}
