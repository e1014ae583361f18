use anyhow::{Context as _, Result};

use super::{prompt, Context};

pub async fn cmd_delete(ctx: &Context, post_id: &str, yes: bool) -> Result<()> {
    let (client, _session) = ctx.authed_client()?;

    if !yes {
        let answer = prompt(&format!("Delete post {post_id}? [y/N] "))?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Cancelled");
            return Ok(());
        }
    }

    let result = client
        .delete_post(post_id)
        .await
        .context("Failed to delete post")?;

    if result.success {
        println!("🗑️  {}", result.message);
    } else {
        anyhow::bail!("Server refused to delete post: {}", result.message);
    }
    Ok(())
}
