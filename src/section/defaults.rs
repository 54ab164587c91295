//! Default content for every section kind.
//!
//! Each factory builds a fresh, fully populated `data` object. Hydration
//! merges the persisted payload over these defaults, so renderers can
//! assume every field they read exists.

use serde_json::{Map, Value, json};

use super::SectionKind;

/// Build the default `data` payload for a section kind.
///
/// Returns a new object on every call; callers own it outright and can
/// merge into it freely.
pub fn default_data(kind: SectionKind) -> Map<String, Value> {
    let value = match kind {
        SectionKind::Header => json!({
            "siteName": "Your Site",
            "navLinks": [
                { "label": "Home", "url": "#" },
                { "label": "About", "url": "#about" },
                { "label": "Contact", "url": "#contact" }
            ],
            "showCTA": true,
            "cta": { "label": "Get Started", "url": "#contact" }
        }),
        SectionKind::Hero => json!({
            "headline": "Build something people want",
            "subheadline": "Launch your landing page in minutes",
            "paragraph": "Describe what you offer and why it matters. Keep it short and concrete.",
            "primaryCTA": { "label": "Get Started", "url": "#contact" },
            "secondaryCTA": { "label": "Learn More", "url": "#about" },
            "image": { "src": "", "alt": "" }
        }),
        SectionKind::MediaText => json!({
            "headline": "Show, then tell",
            "paragraph": "Pair an image with a short explanation of a single benefit.",
            "image": { "src": "", "alt": "" },
            "cta": { "label": "", "url": "" }
        }),
        SectionKind::Text => json!({
            "headline": "A clear headline",
            "paragraph": "One or two sentences of supporting copy."
        }),
        SectionKind::Cards => json!({
            "headline": "What you get",
            "subheadline": "Three reasons to care",
            "items": [
                { "title": "Fast", "description": "Ship a page before lunch.", "image": { "src": "", "alt": "" } },
                { "title": "Simple", "description": "No code, no build step.", "image": { "src": "", "alt": "" } },
                { "title": "Yours", "description": "Your domain, your content.", "image": { "src": "", "alt": "" } }
            ]
        }),
        SectionKind::Links => json!({
            "headline": "Find me elsewhere",
            "items": [
                { "label": "Twitter", "url": "#" },
                { "label": "GitHub", "url": "#" },
                { "label": "Email", "url": "#" }
            ]
        }),
        SectionKind::Accordion | SectionKind::Faq => json!({
            "headline": "Frequently asked questions",
            "items": [
                { "question": "How does it work?", "answer": "Pick sections, fill in your content, publish." },
                { "question": "Can I use my own domain?", "answer": "Yes, attach a custom domain in settings." },
                { "question": "Is there a free plan?", "answer": "Yes, one published site is free forever." }
            ]
        }),
        SectionKind::Cta => json!({
            "headline": "Ready to start?",
            "paragraph": "Join today, cancel anytime.",
            "cta": { "label": "Get Started", "url": "#" }
        }),
        SectionKind::Subscribe => json!({
            "headline": "Stay in the loop",
            "paragraph": "Occasional updates, no spam.",
            "placeholder": "you@example.com",
            "buttonLabel": "Subscribe",
            "action": "#"
        }),
        SectionKind::Contact => json!({
            "headline": "Get in touch",
            "paragraph": "We usually reply within a day.",
            "email": "hello@example.com",
            "phone": "",
            "buttonLabel": "Send"
        }),
        SectionKind::Gallery => json!({
            "headline": "Gallery",
            "items": [
                { "src": "", "alt": "" },
                { "src": "", "alt": "" },
                { "src": "", "alt": "" }
            ]
        }),
        SectionKind::Footer => json!({
            "siteName": "Your Site",
            "tagline": "Made with care",
            "links": [
                { "label": "Privacy", "url": "#" },
                { "label": "Terms", "url": "#" }
            ],
            "legal": "All rights reserved."
        }),
        SectionKind::LogoList => json!({
            "headline": "Trusted by",
            "items": [
                { "src": "", "alt": "Logo" },
                { "src": "", "alt": "Logo" },
                { "src": "", "alt": "Logo" },
                { "src": "", "alt": "Logo" }
            ]
        }),
        SectionKind::Promo => json!({
            "badge": "New",
            "headline": "Something just launched",
            "paragraph": "A short announcement with a single action.",
            "cta": { "label": "See it", "url": "#" }
        }),
        SectionKind::Menu => json!({
            "headline": "Menu",
            "items": [
                { "name": "House espresso", "description": "Double shot, seasonal blend.", "price": "3.50" },
                { "name": "Flat white", "description": "Velvety milk, single origin.", "price": "4.20" },
                { "name": "Almond croissant", "description": "Baked every morning.", "price": "3.80" }
            ]
        }),
        SectionKind::Services => json!({
            "headline": "Services",
            "items": [
                { "title": "Consulting", "description": "An hour of focused advice." },
                { "title": "Design", "description": "From sketch to final asset." },
                { "title": "Support", "description": "Ongoing help when you need it." }
            ]
        }),
        SectionKind::Events => json!({
            "headline": "Upcoming events",
            "items": [
                { "title": "Open studio", "date": "Friday 19:00", "location": "Main hall", "description": "Drop by and say hi." },
                { "title": "Workshop", "date": "Saturday 10:00", "location": "Room 2", "description": "Hands-on, bring a laptop." }
            ]
        }),
        SectionKind::Products => json!({
            "headline": "Products",
            "items": [
                { "title": "Starter kit", "description": "Everything to begin.", "price": "19", "image": { "src": "", "alt": "" } },
                { "title": "Pro bundle", "description": "For growing teams.", "price": "49", "image": { "src": "", "alt": "" } },
                { "title": "Lifetime", "description": "Pay once, keep forever.", "price": "199", "image": { "src": "", "alt": "" } }
            ]
        }),
    };

    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================
