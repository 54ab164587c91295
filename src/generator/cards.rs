//! Card grid: also renders the legacy `services` and `products` kinds,
//! which share the shape (products add a price per item).

use crate::section::SectionInstance;
use crate::style::GenerationContext;

use super::{
    close_el, expand_styles, item_object, item_str, merged_item_styles, open_el, open_root,
    push_image, push_text, split_group_styles,
};

pub fn render(ctx: &mut GenerationContext, section: &SectionInstance) -> String {
    let mut html = String::new();
    let (root_styles, card_styles) = split_group_styles(&section.styles, "card");

    let root = open_root(ctx, &mut html, section, "section", "px-6 py-16", &root_styles);

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

    let subheadline = ctx.child_class(&root, "subheadline");
    push_text(
        ctx,
        &mut html,
        "p",
        &subheadline,
        "text-center text-[var(--color-muted-foreground)] mt-2",
        section.field_style("subheadline"),
        section.str_field("subheadline").unwrap_or(""),
    );

    let grid = ctx.child_class(&root, "grid");
    let grid_layout = if section.variant == "list" {
        "flex flex-col gap-6 max-w-3xl mx-auto mt-8"
    } else {
        "grid grid-cols-3 gap-6 max-w-5xl mx-auto mt-8"
    };
    open_el(ctx, &mut html, "div", &grid, grid_layout, None);

    // shared classes for every card and its fields
    let card_class = ctx.child_class(&root, "card");
    let card_extra = merged_item_styles(&card_styles, &section.item_styles);
    let image_class = ctx.child_class(&card_class, "image");
    let title_class = ctx.child_class(&card_class, "title");
    let desc_class = ctx.child_class(&card_class, "description");
    let price_class = ctx.child_class(&card_class, "price");

    for item in section.items() {
        open_el(
            ctx,
            &mut html,
            "div",
            &card_class,
            "flex flex-col gap-3 p-6 rounded-lg border border-[var(--color-border)] bg-[var(--color-background)]",
            Some(&card_extra),
        );

        push_image(
            ctx,
            &mut html,
            &image_class,
            "w-full h-auto rounded-md object-cover",
            None,
            item_object(item, "image"),
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
        push_text(
            ctx,
            &mut html,
            "p",
            &desc_class,
            "leading-relaxed text-[var(--color-muted-foreground)]",
            None,
            item_str(item, "description"),
        );
        push_text(
            ctx,
            &mut html,
            "span",
            &price_class,
            "text-lg font-semibold mt-auto",
            None,
            item_str(item, "price"),
        );

        close_el(&mut html, "div");
    }

    close_el(&mut html, "div");
    close_el(&mut html, "section");
    html
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::section::{SectionRecord, hydrate};

    use super::*;

    fn cards(kind: &str, data: Option<serde_json::Value>) -> SectionInstance {
        let record = SectionRecord {
            id: "sec_cards".to_string(),
            kind: kind.to_string(),
            data: data.and_then(|d| d.as_object().cloned()),
            ..SectionRecord::default()
        };
        hydrate::hydrate_section(&record).unwrap()
    }

    #[test]
    fn test_default_renders_three_cards() {
        let mut ctx = GenerationContext::default();
        let html = render(&mut ctx, &cards("cards", None));
        assert_eq!(html.matches("class=\"cards_0_card\"").count(), 3);
    }

    #[test]
    fn test_all_cards_share_one_class() {
        let mut ctx = GenerationContext::default();
        let html = render(
            &mut ctx,
            &cards(
                "cards",
                Some(json!({
                    "items": [
                        { "title": "A", "description": "first" },
                        { "title": "B", "description": "second" }
                    ]
                })),
            ),
        );

        // content differs per card, the class never does
        assert_eq!(html.matches("class=\"cards_0_card\"").count(), 2);
        assert!(!html.contains("cards_0_card_0"));
        assert!(!html.contains("cards_0_card_1"));
    }

    #[test]
    fn test_products_render_prices() {
        let mut ctx = GenerationContext::default();
        let html = render(&mut ctx, &cards("products", None));
        assert!(html.contains("class=\"products_0_card_price\""));
        assert!(html.contains(">19</span>"));
    }

    #[test]
    fn test_item_styles_apply_to_shared_card_class() {
        let record = SectionRecord {
            id: "sec_cards".to_string(),
            kind: "cards".to_string(),
            item_styles: Some(crate::style::StyleMap::from_iter([(
                "backgroundColor".to_string(),
                "#f8fafc".to_string(),
            )])),
            ..SectionRecord::default()
        };
        let section = hydrate::hydrate_section(&record).unwrap();

        let mut ctx = GenerationContext::default();
        render(&mut ctx, &section);
        assert!(ctx.css().contains(".cards_0_card {"));
        assert!(ctx.css().contains("background-color: #f8fafc;"));
    }
}
