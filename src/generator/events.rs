//! Legacy events section: dated entries with location and blurb.

use crate::section::SectionInstance;
use crate::style::GenerationContext;

use super::{
    close_el, item_str, merged_item_styles, open_el, open_root, push_text, split_group_styles,
};

pub fn render(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    let mut html = String::new();
    let (root_styles, event_styles) = split_group_styles(&section.styles, "item");

    let root = open_root(
        ctx,
        &mut html,
        section,
        "section",
        "flex flex-col gap-6 px-6 py-16 max-w-3xl mx-auto",
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

    let event_class = ctx.child_class(&root, "item");
    let event_extra = merged_item_styles(&event_styles, &section.item_styles);
    let title_class = ctx.child_class(&event_class, "title");
    let meta_class = ctx.child_class(&event_class, "meta");
    let date_class = ctx.child_class(&event_class, "date");
    let location_class = ctx.child_class(&event_class, "location");
    let desc_class = ctx.child_class(&event_class, "description");

    for item in section.items() {
        open_el(
            ctx,
            &mut html,
            "div",
            &event_class,
            "flex flex-col gap-2 p-6 rounded-lg border border-[var(--color-border)]",
            Some(&event_extra),
        );

        push_text(
            ctx,
            &mut html,
            "h3",
            &title_class,
            "text-xl font-semibold",
            None,
            item_str(item, "title"),
        );

        open_el(
            ctx,
            &mut html,
            "div",
            &meta_class,
            "flex flex-row gap-4 text-sm text-[var(--color-muted-foreground)]",
            None,
        );
        push_text(ctx, &mut html, "span", &date_class, "font-medium", None, item_str(item, "date"));
        push_text(
            ctx,
            &mut html,
            "span",
            &location_class,
            "font-normal",
            None,
            item_str(item, "location"),
        );
        close_el(&mut html, "div");

        push_text(
            ctx,
            &mut html,
            "p",
            &desc_class,
            "leading-relaxed",
            None,
            item_str(item, "description"),
        );

        close_el(&mut html, "div");
    }

    close_el(&mut html, "section");
    html
}

#[cfg(test)]
mod tests {
    use crate::section::{SectionRecord, hydrate};

    use super::*;

    #[test]
    fn test_events_render_date_and_location() {
        let record = SectionRecord {
            id: "sec_events".to_string(),
            kind: "events".to_string(),
            ..SectionRecord::default()
        };
        let section = hydrate::hydrate_section(&record).unwrap();

        let mut ctx = GenerationContext::default();
        let html = render(&mut ctx, &section);

        assert_eq!(html.matches("class=\"events_0_item\"").count(), 2);
        assert!(html.contains(">Friday 19:00</span>"));
        assert!(html.contains(">Main hall</span>"));
    }
}
