//! Front matter handling for article bodies
//!
//! Article markdown may open with a metadata block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! tags: [rust]
//! ---
//! # Hello
//! ```
//!
//! The block is only recognized at the very start of the text. A `---` pair
//! further down (a horizontal rule, say) is body content.

use regex::Regex;
use std::sync::LazyLock;

static FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(?:(.*?)\r?\n)?---(?:\r?\n|\z)")
        .expect("front matter pattern is valid")
});

/// Split `text` into its front matter (without fences) and the body
///
/// Returns `(None, text)` when the text does not open with a fenced block.
/// An empty block yields `Some("")`.
pub fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    match FRONT_MATTER.captures(text) {
        Some(caps) => {
            let whole = caps.get(0).map_or(0, |m| m.end());
            let meta = caps.get(1).map_or("", |m| m.as_str());
            (Some(meta), &text[whole..])
        }
        None => (None, text),
    }
}

/// Remove a leading front matter block, including both fences and the
/// newline after the closing fence
pub fn strip_front_matter(text: &str) -> &str {
    split_front_matter(text).1
}
