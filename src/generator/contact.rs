//! Contact details with a mailto action.

use crate::section::SectionInstance;
use crate::style::GenerationContext;

use super::{BUTTON_CLASSES, close_el, expand_styles, open_el, open_root, push_link, push_text};

pub fn render(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    let mut html = String::new();
    let root_styles = expand_styles(&section.styles);

    let root = open_root(
        ctx,
        &mut html,
        section,
        "section",
        "flex flex-col items-center text-center gap-4 px-6 py-16",
        &root_styles,
    );

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
        "text-[var(--color-muted-foreground)]",
        section.field_style("paragraph"),
        section.str_field("paragraph").unwrap_or(""),
    );

    let email = section.str_field("email").unwrap_or("");
    let phone = section.str_field("phone").unwrap_or("");
    if !email.is_empty() || !phone.is_empty() {
        let details = ctx.child_class(&root, "details");
        open_el(ctx, &mut html, "div", &details, "flex flex-col gap-2", None);

        let email_class = ctx.child_class(&root, "email");
        push_link(
            ctx,
            &mut html,
            &email_class,
            "no-underline font-medium text-[var(--color-primary)]",
            section.field_style("email"),
            &format!("mailto:{email}"),
            email,
        );

        let phone_class = ctx.child_class(&root, "phone");
        push_text(
            ctx,
            &mut html,
            "span",
            &phone_class,
            "text-[var(--color-muted-foreground)]",
            section.field_style("phone"),
            phone,
        );

        close_el(&mut html, "div");
    }

    if !email.is_empty() {
        let button = ctx.child_class(&root, "button");
        push_link(
            ctx,
            &mut html,
            &button,
            BUTTON_CLASSES,
            section.field_style("buttonLabel"),
            &format!("mailto:{email}"),
            section.str_field("buttonLabel").unwrap_or(""),
        );
    }

    close_el(&mut html, "section");
    html
}
