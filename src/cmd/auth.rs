use anyhow::{Context as _, Result};

use simple_social::Session;

use super::{prompt_password, Context};

pub async fn cmd_login(ctx: &Context, email: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt_password("Password: ")?,
    };

    println!("🔐 Logging in to {} as {email}", ctx.config.api_url);

    let mut client = ctx.client()?;
    let token = client
        .login(email, &password)
        .await
        .context("Login failed")?;
    let user = client
        .current_user()
        .await
        .context("Logged in, but could not load the account")?;

    ctx.sessions.save(&Session {
        token,
        email: user.email.clone(),
    })?;

    println!("✅ Hi {}!", user.display_name());
    println!("   Session saved to {}", ctx.sessions.path().display());
    Ok(())
}

pub async fn cmd_register(ctx: &Context, email: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt_password("Choose a password: ")?,
    };

    let client = ctx.client()?;
    let user = client
        .register(email, &password)
        .await
        .context("Registration failed")?;

    println!("✅ Account created for {}", user.email);
    println!("   Log in with: social login --email {}", user.email);
    Ok(())
}

pub fn cmd_logout(ctx: &Context) -> Result<()> {
    if ctx.sessions.clear()? {
        println!("👋 Logged out");
    } else {
        println!("Not logged in");
    }
    Ok(())
}

pub async fn cmd_whoami(ctx: &Context) -> Result<()> {
    let (client, _session) = ctx.authed_client()?;
    let user = client
        .current_user()
        .await
        .context("Could not load the account (session may have expired)")?;

    println!("👤 {}", user.email);
    println!("   Id: {}", user.id);
    println!("   Active: {}", user.is_active);
    println!("   Verified: {}", user.is_verified);
    Ok(())
}
