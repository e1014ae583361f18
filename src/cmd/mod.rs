pub mod auth;
pub mod delete;
pub mod feed;
pub mod transform;
pub mod upload;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context as _, Result};

use simple_social::{ApiClient, Config, Session, SessionStore};

/// Settings shared by every subcommand
pub struct Context {
    pub config: Config,
    pub sessions: SessionStore,
}

impl Context {
    pub fn new(api_url: Option<String>, session_path: Option<PathBuf>) -> Result<Self> {
        let mut config = Config::load()?;
        if let Some(url) = api_url {
            config.api_url = url;
        }
        let sessions = match session_path {
            Some(path) => SessionStore::at(path),
            None => SessionStore::new(),
        };
        Ok(Self { config, sessions })
    }

    /// Client without credentials
    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::with_config(&self.config)
            .with_context(|| format!("cannot use API URL {}", self.config.api_url))
    }

    /// Client carrying the saved session token
    pub fn authed_client(&self) -> Result<(ApiClient, Session)> {
        let session = self
            .sessions
            .load()?
            .context("Not logged in. Run `social login --email <EMAIL>` first.")?;
        let client = self.client()?.with_token(session.token.clone());
        Ok((client, session))
    }
}

/// Read a password from the terminal without echoing it.
pub fn prompt_password(label: &str) -> Result<String> {
    rpassword::prompt_password(label)
        .context("failed to read password (pass --password when not on a terminal)")
}

/// Ask a question on stderr and read one line from stdin.
pub fn prompt(label: &str) -> Result<String> {
    eprint!("{label}");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
