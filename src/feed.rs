//! Terminal rendering of the feed.
//!
//! Each post becomes a small text card carrying the transformed media URL:
//! images with the caption burned in, videos with the preview preset and the
//! caption printed underneath.

use crate::model::{MediaKind, Post};
use crate::transform::media_url;

/// Shown when the feed has no posts.
pub const EMPTY_FEED: &str = "No posts yet! Be the first to share something.";

/// Render a single post card.
pub fn render_post(post: &Post) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&post.email);
    out.push_str(" • ");
    out.push_str(&post.created_at.format("%Y-%m-%d").to_string());
    if post.is_owner {
        out.push_str("  [yours, id ");
        out.push_str(&post.id);
        out.push(']');
    }
    out.push('\n');

    // Media
    let icon = match post.media_kind() {
        MediaKind::Image => "🖼️ ",
        MediaKind::Video => "🎬",
    };
    out.push_str(icon);
    out.push(' ');
    out.push_str(&media_url(post));
    out.push('\n');

    // Videos can't carry the overlay, so the caption goes below
    if post.media_kind() == MediaKind::Video {
        if let Some(caption) = post.caption() {
            out.push_str("   ");
            out.push_str(caption);
            out.push('\n');
        }
    }

    out
}

/// Render the whole feed, cards separated by blank lines.
pub fn render_feed(posts: &[Post]) -> String {
    if posts.is_empty() {
        return format!("{EMPTY_FEED}\n");
    }
    posts
        .iter()
        .map(render_post)
        .collect::<Vec<_>>()
        .join("\n")
}
