//! Hero section: headline, supporting copy, up to two calls to action,
//! optional image.

use crate::section::SectionInstance;
use crate::style::GenerationContext;

use super::{
    BUTTON_CLASSES, OUTLINE_BUTTON_CLASSES, close_el, cta_label, expand_styles, open_el,
    open_root, push_button, push_image, push_text,
};

pub fn render(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    let mut html = String::new();
    let root_styles = expand_styles(&section.styles);

    let split = section.variant == "split";
    let layout = if split {
        "flex flex-row items-center justify-between gap-12 px-6 py-20 max-w-6xl mx-auto"
    } else {
        "flex flex-col items-center text-center gap-6 px-6 py-20"
    };
    let root = open_root(ctx, &mut html, section, "section", layout, &root_styles);

    let inner = ctx.child_class(&root, "inner");
    let inner_layout = if split {
        "flex flex-col gap-6 max-w-xl"
    } else {
        "flex flex-col items-center gap-6 max-w-2xl mx-auto"
    };
    open_el(ctx, &mut html, "div", &inner, inner_layout, None);

    let headline = ctx.child_class(&root, "headline");
    push_text(
        ctx,
        &mut html,
        "h1",
        &headline,
        "text-5xl font-bold leading-tight tracking-tight",
        section.field_style("headline"),
        section.str_field("headline").unwrap_or(""),
    );

    let subheadline = ctx.child_class(&root, "subheadline");
    push_text(
        ctx,
        &mut html,
        "p",
        &subheadline,
        "text-xl text-[var(--color-muted-foreground)]",
        section.field_style("subheadline"),
        section.str_field("subheadline").unwrap_or(""),
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

    let primary_cta = section.object_field("primaryCTA");
    let secondary_cta = section.object_field("secondaryCTA");
    if !cta_label(primary_cta).is_empty() || !cta_label(secondary_cta).is_empty() {
        let actions = ctx.child_class(&root, "actions");
        open_el(ctx, &mut html, "div", &actions, "flex flex-row flex-wrap gap-4", None);

        let primary = ctx.child_class(&root, "primaryCTA");
        push_button(
            ctx,
            &mut html,
            &primary,
            BUTTON_CLASSES,
            section.field_style("primaryCTA"),
            primary_cta,
        );

        let secondary = ctx.child_class(&root, "secondaryCTA");
        push_button(
            ctx,
            &mut html,
            &secondary,
            OUTLINE_BUTTON_CLASSES,
            section.field_style("secondaryCTA"),
            secondary_cta,
        );

        close_el(&mut html, "div");
    }

    close_el(&mut html, "div");

    let image = ctx.child_class(&root, "image");
    push_image(
        ctx,
        &mut html,
        &image,
        "w-full max-w-lg rounded-xl object-cover",
        section.field_style("image"),
        section.object_field("image"),
    );

    close_el(&mut html, "section");
    html
}
