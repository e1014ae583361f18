use anyhow::{Context as _, Result};

use simple_social::model::display_name;
use simple_social::render_feed;

use super::Context;

pub async fn cmd_feed(ctx: &Context, json: bool) -> Result<()> {
    let (client, session) = ctx.authed_client()?;
    let feed = client.feed().await.context("Failed to load feed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&feed)?);
        return Ok(());
    }

    println!("🏠 Feed for {}\n", display_name(&session.email));
    print!("{}", render_feed(&feed.posts));
    Ok(())
}
