//! Accordion: question/answer pairs as native `details` disclosures.
//! Also renders the legacy `faq` kind.

use crate::section::SectionInstance;
use crate::style::GenerationContext;

use super::{
    close_el, item_str, merged_item_styles, open_el, open_root, push_text, split_group_styles,
};

pub fn render(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    let mut html = String::new();
    let (root_styles, item_group_styles) = split_group_styles(&section.styles, "item");

    let root = open_root(
        ctx,
        &mut html,
        section,
        "section",
        "flex flex-col gap-4 px-6 py-16 max-w-3xl mx-auto",
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

    let item_class = ctx.child_class(&root, "item");
    let item_extra = merged_item_styles(&item_group_styles, &section.item_styles);
    let question_class = ctx.child_class(&item_class, "question");
    let answer_class = ctx.child_class(&item_class, "answer");

    for item in section.items() {
        open_el(
            ctx,
            &mut html,
            "details",
            &item_class,
            "border-b border-[var(--color-border)] py-4",
            Some(&item_extra),
        );
        push_text(
            ctx,
            &mut html,
            "summary",
            &question_class,
            "text-lg font-semibold cursor-pointer",
            None,
            item_str(item, "question"),
        );
        push_text(
            ctx,
            &mut html,
            "p",
            &answer_class,
            "leading-relaxed mt-3 text-[var(--color-muted-foreground)]",
            None,
            item_str(item, "answer"),
        );
        close_el(&mut html, "details");
    }

    close_el(&mut html, "section");
    html
}

#[cfg(test)]
mod tests {
    use crate::section::{SectionRecord, hydrate};

    use super::*;

    #[test]
    fn test_items_render_as_details_disclosures() {
        let record = SectionRecord {
            id: "sec_acc".to_string(),
            kind: "accordion".to_string(),
            ..SectionRecord::default()
        };
        let section = hydrate::hydrate_section(&record).unwrap();

        let mut ctx = GenerationContext::default();
        let html = render(&mut ctx, &section);

        // three default questions, one shared class
        assert_eq!(html.matches("<details class=\"accordion_0_item\">").count(), 3);
        assert!(html.contains("<summary class=\"accordion_0_item_question\">"));
        assert!(html.contains("How does it work?"));
    }

    #[test]
    fn test_faq_alias_renders_with_its_own_prefix() {
        let record = SectionRecord {
            id: "sec_faq".to_string(),
            kind: "faq".to_string(),
            ..SectionRecord::default()
        };
        let section = hydrate::hydrate_section(&record).unwrap();

        let mut ctx = GenerationContext::default();
        let html = render(&mut ctx, &section);
        assert!(html.contains("class=\"faq_0\""));
    }
}
