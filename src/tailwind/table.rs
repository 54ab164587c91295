//! Static utility class table.
//!
//! Fixed class-to-declaration mappings for keyword utilities. Scale
//! driven utilities (`p-4`, `text-2xl`) and arbitrary values
//! (`bg-[...]`) live in their own resolvers; palette color classes
//! (`bg-red-500`) are deliberately absent, themes own all color.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Declarations for one static class, camelCase property names.
pub type StaticStyles = &'static [(&'static str, &'static str)];

#[rustfmt::skip]
const STATIC_TABLE: &[(&str, StaticStyles)] = &[
    // Display
    ("block", &[("display", "block")]),
    ("inline-block", &[("display", "inline-block")]),
    ("inline", &[("display", "inline")]),
    ("flex", &[("display", "flex")]),
    ("inline-flex", &[("display", "inline-flex")]),
    ("grid", &[("display", "grid")]),
    ("hidden", &[("display", "none")]),

    // Flexbox
    ("flex-row", &[("flexDirection", "row")]),
    ("flex-row-reverse", &[("flexDirection", "row-reverse")]),
    ("flex-col", &[("flexDirection", "column")]),
    ("flex-col-reverse", &[("flexDirection", "column-reverse")]),
    ("flex-wrap", &[("flexWrap", "wrap")]),
    ("flex-nowrap", &[("flexWrap", "nowrap")]),
    ("flex-1", &[("flex", "1 1 0%")]),
    ("flex-auto", &[("flex", "1 1 auto")]),
    ("flex-none", &[("flex", "none")]),
    ("grow", &[("flexGrow", "1")]),
    ("grow-0", &[("flexGrow", "0")]),
    ("shrink", &[("flexShrink", "1")]),
    ("shrink-0", &[("flexShrink", "0")]),

    // Alignment
    ("items-start", &[("alignItems", "flex-start")]),
    ("items-center", &[("alignItems", "center")]),
    ("items-end", &[("alignItems", "flex-end")]),
    ("items-stretch", &[("alignItems", "stretch")]),
    ("items-baseline", &[("alignItems", "baseline")]),
    ("justify-start", &[("justifyContent", "flex-start")]),
    ("justify-center", &[("justifyContent", "center")]),
    ("justify-end", &[("justifyContent", "flex-end")]),
    ("justify-between", &[("justifyContent", "space-between")]),
    ("justify-around", &[("justifyContent", "space-around")]),
    ("justify-evenly", &[("justifyContent", "space-evenly")]),
    ("self-start", &[("alignSelf", "flex-start")]),
    ("self-center", &[("alignSelf", "center")]),
    ("self-end", &[("alignSelf", "flex-end")]),
    ("self-stretch", &[("alignSelf", "stretch")]),

    // Position
    ("static", &[("position", "static")]),
    ("relative", &[("position", "relative")]),
    ("absolute", &[("position", "absolute")]),
    ("fixed", &[("position", "fixed")]),
    ("sticky", &[("position", "sticky")]),
    ("inset-0", &[("top", "0"), ("right", "0"), ("bottom", "0"), ("left", "0")]),
    ("top-0", &[("top", "0")]),
    ("right-0", &[("right", "0")]),
    ("bottom-0", &[("bottom", "0")]),
    ("left-0", &[("left", "0")]),

    // Sizing
    ("w-full", &[("width", "100%")]),
    ("w-auto", &[("width", "auto")]),
    ("w-screen", &[("width", "100vw")]),
    ("w-fit", &[("width", "fit-content")]),
    ("w-min", &[("width", "min-content")]),
    ("w-max", &[("width", "max-content")]),
    ("h-full", &[("height", "100%")]),
    ("h-auto", &[("height", "auto")]),
    ("h-screen", &[("height", "100vh")]),
    ("min-h-screen", &[("minHeight", "100vh")]),
    ("min-w-0", &[("minWidth", "0")]),
    ("max-w-full", &[("maxWidth", "100%")]),
    ("max-w-none", &[("maxWidth", "none")]),
    ("max-w-md", &[("maxWidth", "28rem")]),
    ("max-w-lg", &[("maxWidth", "32rem")]),
    ("max-w-xl", &[("maxWidth", "36rem")]),
    ("max-w-2xl", &[("maxWidth", "42rem")]),
    ("max-w-3xl", &[("maxWidth", "48rem")]),
    ("max-w-4xl", &[("maxWidth", "56rem")]),
    ("max-w-5xl", &[("maxWidth", "64rem")]),
    ("max-w-6xl", &[("maxWidth", "72rem")]),

    // Typography
    ("text-left", &[("textAlign", "left")]),
    ("text-center", &[("textAlign", "center")]),
    ("text-right", &[("textAlign", "right")]),
    ("text-justify", &[("textAlign", "justify")]),
    ("font-light", &[("fontWeight", "300")]),
    ("font-normal", &[("fontWeight", "400")]),
    ("font-medium", &[("fontWeight", "500")]),
    ("font-semibold", &[("fontWeight", "600")]),
    ("font-bold", &[("fontWeight", "700")]),
    ("font-extrabold", &[("fontWeight", "800")]),
    ("italic", &[("fontStyle", "italic")]),
    ("not-italic", &[("fontStyle", "normal")]),
    ("underline", &[("textDecoration", "underline")]),
    ("no-underline", &[("textDecoration", "none")]),
    ("line-through", &[("textDecoration", "line-through")]),
    ("uppercase", &[("textTransform", "uppercase")]),
    ("lowercase", &[("textTransform", "lowercase")]),
    ("capitalize", &[("textTransform", "capitalize")]),
    ("normal-case", &[("textTransform", "none")]),
    ("truncate", &[("overflow", "hidden"), ("textOverflow", "ellipsis"), ("whiteSpace", "nowrap")]),
    ("whitespace-nowrap", &[("whiteSpace", "nowrap")]),
    ("whitespace-pre-wrap", &[("whiteSpace", "pre-wrap")]),
    ("break-words", &[("overflowWrap", "break-word")]),
    ("leading-none", &[("lineHeight", "1")]),
    ("leading-tight", &[("lineHeight", "1.25")]),
    ("leading-snug", &[("lineHeight", "1.375")]),
    ("leading-normal", &[("lineHeight", "1.5")]),
    ("leading-relaxed", &[("lineHeight", "1.625")]),
    ("leading-loose", &[("lineHeight", "2")]),
    ("tracking-tight", &[("letterSpacing", "-0.025em")]),
    ("tracking-normal", &[("letterSpacing", "0")]),
    ("tracking-wide", &[("letterSpacing", "0.025em")]),
    ("tracking-widest", &[("letterSpacing", "0.1em")]),

    // Background
    ("bg-transparent", &[("backgroundColor", "transparent")]),
    ("bg-cover", &[("backgroundSize", "cover")]),
    ("bg-center", &[("backgroundPosition", "center")]),
    ("bg-no-repeat", &[("backgroundRepeat", "no-repeat")]),

    // Overflow
    ("overflow-hidden", &[("overflow", "hidden")]),
    ("overflow-auto", &[("overflow", "auto")]),
    ("overflow-visible", &[("overflow", "visible")]),
    ("overflow-scroll", &[("overflow", "scroll")]),
    ("overflow-x-auto", &[("overflowX", "auto")]),
    ("overflow-y-auto", &[("overflowY", "auto")]),

    // Transitions
    ("transition", &[
        ("transitionProperty", "color, background-color, border-color, opacity, box-shadow, transform"),
        ("transitionDuration", "150ms"),
        ("transitionTimingFunction", "ease-in-out"),
    ]),
    ("transition-all", &[
        ("transitionProperty", "all"),
        ("transitionDuration", "150ms"),
        ("transitionTimingFunction", "ease-in-out"),
    ]),
    ("transition-colors", &[
        ("transitionProperty", "color, background-color, border-color"),
        ("transitionDuration", "150ms"),
        ("transitionTimingFunction", "ease-in-out"),
    ]),
    ("transition-opacity", &[
        ("transitionProperty", "opacity"),
        ("transitionDuration", "150ms"),
        ("transitionTimingFunction", "ease-in-out"),
    ]),
    ("transition-transform", &[
        ("transitionProperty", "transform"),
        ("transitionDuration", "150ms"),
        ("transitionTimingFunction", "ease-in-out"),
    ]),

    // Cursor / interaction
    ("cursor-pointer", &[("cursor", "pointer")]),
    ("cursor-default", &[("cursor", "default")]),
    ("cursor-not-allowed", &[("cursor", "not-allowed")]),
    ("select-none", &[("userSelect", "none")]),
    ("pointer-events-none", &[("pointerEvents", "none")]),

    // Borders
    ("border", &[("borderWidth", "1px"), ("borderStyle", "solid")]),
    ("border-t", &[("borderTopWidth", "1px"), ("borderTopStyle", "solid")]),
    ("border-b", &[("borderBottomWidth", "1px"), ("borderBottomStyle", "solid")]),
    ("border-none", &[("borderStyle", "none")]),

    // Objects / media
    ("object-cover", &[("objectFit", "cover")]),
    ("object-contain", &[("objectFit", "contain")]),
    ("object-center", &[("objectPosition", "center")]),

    // Margin keywords (numeric margins handled by the scale resolver)
    ("mx-auto", &[("marginLeft", "auto"), ("marginRight", "auto")]),
    ("ml-auto", &[("marginLeft", "auto")]),
    ("mr-auto", &[("marginRight", "auto")]),
    ("mt-auto", &[("marginTop", "auto")]),

    // Misc
    ("list-none", &[("listStyle", "none")]),
    ("appearance-none", &[("appearance", "none")]),
    ("outline-none", &[("outline", "none")]),
    ("shadow-none", &[("boxShadow", "none")]),
];

/// Static class lookup map, built once.
pub static STATIC_CLASSES: LazyLock<FxHashMap<&'static str, StaticStyles>> =
    LazyLock::new(|| STATIC_TABLE.iter().copied().collect());
