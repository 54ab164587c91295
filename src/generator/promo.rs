//! Promo banner with a badge and a single action.

use crate::section::SectionInstance;
use crate::style::GenerationContext;

use super::{BUTTON_CLASSES, close_el, expand_styles, open_root, push_button, push_text};

pub fn render(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    let mut html = String::new();
    let root_styles = expand_styles(&section.styles);

    let root = open_root(
        ctx,
        &mut html,
        section,
        "section",
        "flex flex-col items-center text-center gap-3 px-6 py-10 bg-[var(--color-accent)]",
        &root_styles,
    );

    let badge = ctx.child_class(&root, "badge");
    push_text(
        ctx,
        &mut html,
        "span",
        &badge,
        "inline-block px-3 py-1 rounded-full text-xs font-semibold uppercase tracking-wide bg-[var(--color-primary)] text-[var(--color-primary-foreground)]",
        section.field_style("badge"),
        section.str_field("badge").unwrap_or(""),
    );

    let headline = ctx.child_class(&root, "headline");
    push_text(
        ctx,
        &mut html,
        "h2",
        &headline,
        "text-2xl font-bold",
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

    let cta = ctx.child_class(&root, "cta");
    push_button(
        ctx,
        &mut html,
        &cta,
        BUTTON_CLASSES,
        section.field_style("cta"),
        section.object_field("cta"),
    );

    close_el(&mut html, "section");
    html
}

#[cfg(test)]
mod tests {
    use crate::section::{SectionRecord, hydrate};

    use super::*;

    #[test]
    fn test_badge_and_action_render() {
        let record = SectionRecord {
            id: "sec_promo".to_string(),
            kind: "promo".to_string(),
            ..SectionRecord::default()
        };
        let section = hydrate::hydrate_section(&record).unwrap();

        let mut ctx = GenerationContext::default();
        let html = render(&mut ctx, &section);

        assert!(html.contains("class=\"promo_0_badge\">New</span>"));
        assert!(html.contains(">See it</a>"));
    }
}
