use std::path::Path;

use anyhow::{Context as _, Result};

use simple_social::http_client::mime_for_path;
use simple_social::{transformed_url, MediaKind};

use super::Context;

pub async fn cmd_upload(ctx: &Context, file: &Path, caption: &str) -> Result<()> {
    if !file.is_file() {
        anyhow::bail!("Not a file: {}", file.display());
    }

    let (client, _session) = ctx.authed_client()?;
    let kind = MediaKind::from_mime(mime_for_path(file));

    println!("📸 Uploading {} ({kind})", file.display());
    let uploaded = client
        .upload(file, caption)
        .await
        .context("Upload failed")?;

    println!("✅ Posted {}", uploaded.post_id);
    println!("   URL: {}", uploaded.url);
    if kind == MediaKind::Image && !caption.is_empty() {
        println!("   Preview: {}", transformed_url(&uploaded.url, "", Some(caption)));
    }
    Ok(())
}
