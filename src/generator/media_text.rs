//! Media + text split: image on one side, copy on the other.

use crate::section::SectionInstance;
use crate::style::GenerationContext;

use super::{
    BUTTON_CLASSES, close_el, expand_styles, open_el, open_root, push_button, push_image,
    push_text,
};

pub fn render(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    let mut html = String::new();
    let root_styles = expand_styles(&section.styles);

    let layout = if section.variant == "right" {
        "flex flex-row-reverse items-center gap-12 px-6 py-16 max-w-5xl mx-auto"
    } else {
        "flex flex-row items-center gap-12 px-6 py-16 max-w-5xl mx-auto"
    };
    let root = open_root(ctx, &mut html, section, "section", layout, &root_styles);

    let image = ctx.child_class(&root, "image");
    push_image(
        ctx,
        &mut html,
        &image,
        "w-full max-w-md rounded-lg object-cover shrink-0",
        section.field_style("image"),
        section.object_field("image"),
    );

    let body = ctx.child_class(&root, "body");
    open_el(ctx, &mut html, "div", &body, "flex flex-col gap-4", None);

    let headline = ctx.child_class(&root, "headline");
    push_text(
        ctx,
        &mut html,
        "h2",
        &headline,
        "text-3xl font-bold leading-tight",
        section.field_style("headline"),
        section.str_field("headline").unwrap_or(""),
    );

    let paragraph = ctx.child_class(&root, "paragraph");
    push_text(
        ctx,
        &mut html,
        "p",
        &paragraph,
        "leading-relaxed text-[var(--color-muted-foreground)]",
        section.field_style("paragraph"),
        section.str_field("paragraph").unwrap_or(""),
    );

    let cta = ctx.child_class(&root, "cta");
    push_button(
        ctx,
        &mut html,
        &cta,
        BUTTON_CLASSES,
        section.field_style("cta"),
        section.object_field("cta"),
    );

    close_el(&mut html, "div");
    close_el(&mut html, "section");
    html
}
