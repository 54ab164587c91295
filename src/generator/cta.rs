//! Call-to-action band.

use crate::section::SectionInstance;
use crate::style::GenerationContext;

use super::{close_el, expand_styles, open_el, open_root, push_button, push_text};

/// Button colors flip against the primary-colored banner background.
const INVERTED_BUTTON_CLASSES: &str = "inline-block px-[var(--button-padding-x)] py-[var(--button-padding-y)] rounded-[var(--button-radius)] bg-[var(--color-background)] text-[var(--color-foreground)] font-medium no-underline transition-colors hover:opacity-90";

pub fn render(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    let mut html = String::new();
    let root_styles = expand_styles(&section.styles);

    let card = section.variant == "card";
    let layout = if card {
        "px-6 py-16"
    } else {
        "flex flex-col items-center text-center gap-4 px-6 py-16 bg-[var(--color-primary)]"
    };
    let root = open_root(ctx, &mut html, section, "section", layout, &root_styles);

    if card {
        let inner = ctx.child_class(&root, "inner");
        open_el(
            ctx,
            &mut html,
            "div",
            &inner,
            "flex flex-col items-center text-center gap-4 max-w-2xl mx-auto p-12 rounded-xl border border-[var(--color-border)]",
            None,
        );
    }

    let on_banner = !card;
    let headline = ctx.child_class(&root, "headline");
    push_text(
        ctx,
        &mut html,
        "h2",
        &headline,
        if on_banner {
            "text-3xl font-bold text-[var(--color-primary-foreground)]"
        } else {
            "text-3xl font-bold"
        },
        section.field_style("headline"),
        section.str_field("headline").unwrap_or(""),
    );

    let paragraph = ctx.child_class(&root, "paragraph");
    push_text(
        ctx,
        &mut html,
        "p",
        &paragraph,
        if on_banner {
            "text-[var(--color-primary-foreground)] opacity-90"
        } else {
            "text-[var(--color-muted-foreground)]"
        },
        section.field_style("paragraph"),
        section.str_field("paragraph").unwrap_or(""),
    );

    let button = ctx.child_class(&root, "cta");
    push_button(
        ctx,
        &mut html,
        &button,
        if on_banner {
            INVERTED_BUTTON_CLASSES
        } else {
            super::BUTTON_CLASSES
        },
        section.field_style("cta"),
        section.object_field("cta"),
    );

    if card {
        close_el(&mut html, "div");
    }
    close_el(&mut html, "section");
    html
}

#[cfg(test)]
mod tests {
    use crate::section::{SectionRecord, hydrate};

    use super::*;

    fn cta(variant: Option<&str>) -> SectionInstance {
        let record = SectionRecord {
            id: "sec_cta".to_string(),
            kind: "cta".to_string(),
            variant: variant.map(str::to_string),
            ..SectionRecord::default()
        };
        hydrate::hydrate_section(&record).unwrap()
    }

    #[test]
    fn test_banner_paints_primary_background() {
        let mut ctx = GenerationContext::default();
        render(&mut ctx, &cta(None));
        assert!(ctx.css().contains(".cta_0 {"));
        assert!(ctx.css().contains("background-color: var(--color-primary);"));
    }

    #[test]
    fn test_card_variant_wraps_content() {
        let mut ctx = GenerationContext::default();
        let html = render(&mut ctx, &cta(Some("card")));
        assert!(html.contains("class=\"cta_0_inner\""));
    }

    #[test]
    fn test_default_button_renders() {
        let mut ctx = GenerationContext::default();
        let html = render(&mut ctx, &cta(None));
        assert!(html.contains("class=\"cta_0_cta\""));
        assert!(html.contains(">Get Started</a>"));
    }
}
