//! Output minification.
//!
//! Line-based whitespace stripping. Generated markup never relies on
//! inter-line whitespace (no `pre` blocks, text always within one
//! line), so trimming and joining lines is lossless for rendering.

/// Minify an HTML document.
pub fn html(content: &str) -> String {
    join_trimmed(content)
}

/// Minify a stylesheet.
pub fn css(content: &str) -> String {
    join_trimmed(content)
}

fn join_trimmed(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("")
}
