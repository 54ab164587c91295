//! Email capture form.

use crate::section::SectionInstance;
use crate::style::{ElementStyles, GenerationContext};
use crate::utils::html::{escape, escape_attr};

use super::{BUTTON_CLASSES, close_el, expand_styles, open_root, push_text};

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

    let form = ctx.child_class(&root, "form");
    let form_layout = if section.variant == "stacked" {
        "flex flex-col gap-3 w-full max-w-md"
    } else {
        "flex flex-row gap-3 w-full max-w-md"
    };
    ctx.process_element(ElementStyles {
        class_name: &form,
        tailwind: Some(form_layout),
        ..Default::default()
    });
    html.push_str("<form class=\"");
    html.push_str(&form);
    html.push_str("\" method=\"post\" action=\"");
    html.push_str(&escape_attr(section.str_field("action").unwrap_or("#")));
    html.push_str("\">");

    let input = ctx.child_class(&root, "input");
    ctx.process_element(ElementStyles {
        class_name: &input,
        tailwind: Some(
            "grow px-4 py-3 rounded-[var(--button-radius)] border border-[var(--color-border)] bg-[var(--color-background)] text-[var(--color-foreground)]",
        ),
        extra: section.field_style("placeholder"),
        ..Default::default()
    });
    html.push_str("<input class=\"");
    html.push_str(&input);
    html.push_str("\" type=\"email\" name=\"email\" placeholder=\"");
    html.push_str(&escape_attr(section.str_field("placeholder").unwrap_or("")));
    html.push_str("\" required>");

    let button = ctx.child_class(&root, "button");
    ctx.process_element(ElementStyles {
        class_name: &button,
        tailwind: Some(BUTTON_CLASSES),
        extra: section.field_style("buttonLabel"),
        ..Default::default()
    });
    html.push_str("<button class=\"");
    html.push_str(&button);
    html.push_str("\" type=\"submit\">");
    html.push_str(&escape(section.str_field("buttonLabel").unwrap_or("Subscribe")));
    html.push_str("</button>");

    close_el(&mut html, "form");
    close_el(&mut html, "section");
    html
}
