//! Plain text block.

use crate::section::SectionInstance;
use crate::style::GenerationContext;

use super::{close_el, expand_styles, open_root, push_text};

pub fn render(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    let mut html = String::new();
    let root_styles = expand_styles(&section.styles);

    let layout = if section.variant == "narrow" {
        "flex flex-col gap-4 px-6 py-12 max-w-2xl mx-auto"
    } else {
        "flex flex-col gap-4 px-6 py-12 max-w-3xl mx-auto"
    };
    let root = open_root(ctx, &mut html, section, "section", layout, &root_styles);

    let headline = ctx.child_class(&root, "headline");
    push_text(
        ctx,
        &mut html,
        "h2",
        &headline,
        "text-3xl font-bold",
        section.field_style("headline"),
        section.str_field("headline").unwrap_or(""),
    );

    let paragraph = ctx.child_class(&root, "paragraph");
    push_text(
        ctx,
        &mut html,
        "p",
        &paragraph,
        "leading-relaxed",
        section.field_style("paragraph"),
        section.str_field("paragraph").unwrap_or(""),
    );

    close_el(&mut html, "section");
    html
}
