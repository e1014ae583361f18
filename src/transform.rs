//! ImageKit transformation URLs
//!
//! Builds CDN URLs that ask ImageKit to transform media at request time:
//! - Caption text overlays on images (`l-text,ie-<token>,...,l-end`)
//! - Resize/pad presets for video previews
//!
//! Overlay text is carried as a percent-encoded Base64 token of its UTF-8
//! bytes, so any Unicode caption survives the trip through the URL path.
//!
//! # Example
//!
//! ```rust
//! use simple_social::transform::transformed_url;
//!
//! let url = transformed_url("https://ik.io/abc/folder/file.jpg", "w-400,h-200", None);
//! assert_eq!(url, "https://ik.io/abc/tr:w-400,h-200/folder/file.jpg");
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::model::{MediaKind, Post};

/// Resize/pad preset applied to video posts in the feed.
pub const VIDEO_PREVIEW_TRANSFORM: &str = "w-400,h-200,cm-pad_resize,bg-blurred";

/// Number of leading `/`-separated URL segments kept as the immutable prefix
/// (`https:`, `""`, host, tenant id).
const PREFIX_SEGMENTS: usize = 4;

/// Errors from decoding an overlay token back into text.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("invalid percent-encoding: {0}")]
    PercentDecode(#[from] std::string::FromUtf8Error),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("overlay text is not valid UTF-8: {0}")]
    Utf8(std::string::FromUtf8Error),
}

/// Encode caption text as an ImageKit overlay token.
///
/// Empty input yields an empty string, meaning "no overlay".
pub fn encode_overlay_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let token = STANDARD.encode(text.as_bytes());
    urlencoding::encode(&token).into_owned()
}

/// Inverse of [`encode_overlay_text`].
pub fn decode_overlay_text(token: &str) -> Result<String, TransformError> {
    if token.is_empty() {
        return Ok(String::new());
    }
    let base64_token = urlencoding::decode(token)?;
    let bytes = STANDARD.decode(base64_token.as_bytes())?;
    String::from_utf8(bytes).map_err(TransformError::Utf8)
}

/// Text layer anchored near the bottom edge: white text on a
/// semi-transparent black band.
pub fn caption_overlay(caption: &str) -> String {
    format!(
        "l-text,ie-{},ly-N20,lx-20,fs-100,co-white,bg-000000A0,l-end",
        encode_overlay_text(caption)
    )
}

/// Insert a `tr:` segment into an ImageKit URL.
///
/// A non-empty `caption` replaces `params` with a caption overlay. When no
/// transformation remains the URL is returned as-is.
///
/// The URL must look like `https://host/tenant/path...`; the first four
/// `/`-separated segments are kept verbatim and the transformation goes
/// right after them. Shorter URLs produce a degenerate result.
pub fn transformed_url(original_url: &str, params: &str, caption: Option<&str>) -> String {
    let params = match caption {
        Some(caption) if !caption.is_empty() => caption_overlay(caption),
        _ => params.to_string(),
    };

    if params.is_empty() {
        return original_url.to_string();
    }

    let parts: Vec<&str> = original_url.split('/').collect();
    let split = parts.len().min(PREFIX_SEGMENTS);
    let base_url = parts[..split].join("/");
    let file_path = parts[split..].join("/");

    format!("{base_url}/tr:{params}/{file_path}")
}

/// URL to display for a feed post: videos get the preview preset, images
/// get their caption burned in.
pub fn media_url(post: &Post) -> String {
    match post.media_kind() {
        MediaKind::Video => transformed_url(&post.url, VIDEO_PREVIEW_TRANSFORM, None),
        MediaKind::Image => transformed_url(&post.url, "", post.caption.as_deref()),
    }
}
