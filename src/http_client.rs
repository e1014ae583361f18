//! REST API client
//!
//! Features:
//! - Base URL resolution for every endpoint
//! - Bearer token injection once logged in
//! - FastAPI `detail` extraction from error bodies
//! - Multipart media uploads with MIME detection
//! - Connection pooling, rustls TLS, compressed responses

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::Config;
use crate::model::{
    DeleteResponse, FeedResponse, RegisterRequest, TokenResponse, UploadResponse, User,
};

/// Errors talking to the API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{status}: {detail}")]
    Status { status: StatusCode, detail: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("not logged in")]
    NotAuthenticated,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ApiError {
    /// HTTP status of a rejected request, if that's what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Client for the Simple Social API
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for `api_url` with default settings
    pub fn new(api_url: &str) -> Result<Self> {
        Self::with_config(&Config {
            api_url: api_url.to_string(),
            ..Config::default()
        })
    }

    /// Create a client from loaded configuration
    pub fn with_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            // Keep connections alive for reuse
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .tcp_nodelay(true)
            // TLS 1.3 via rustls
            .use_rustls_tls()
            // Compression (auto-negotiated via Accept-Encoding)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("simple-social/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url(&config.api_url)?,
            token: None,
        })
    }

    /// Attach a bearer token to all subsequent requests
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Start a request, adding `Authorization: Bearer` when a token is set
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.endpoint(path)?;
        let builder = self.client.request(method, url);
        Ok(match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    fn authed_request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        if self.token.is_none() {
            return Err(ApiError::NotAuthenticated);
        }
        self.request(method, path)
    }

    /// Exchange credentials for a bearer token.
    ///
    /// The token is also kept on this client for later calls.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<String> {
        let request = self
            .request(Method::POST, "/auth/jwt/login")?
            .form(&[("username", email), ("password", password)]);
        let response: TokenResponse = self.send(request).await?;
        info!("Logged in");
        self.token = Some(response.access_token.clone());
        Ok(response.access_token)
    }

    /// Account behind the current token
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User> {
        let request = self.authed_request(Method::GET, "/users/me")?;
        self.send(request).await
    }

    /// Create a new account
    #[instrument(skip(self, password))]
    pub async fn register(&self, email: &str, password: &str) -> Result<User> {
        let request = self
            .request(Method::POST, "/auth/register")?
            .json(&RegisterRequest { email, password });
        let user: User = self.send(request).await?;
        info!(id = %user.id, "Account created");
        Ok(user)
    }

    /// All posts, newest first
    #[instrument(skip(self))]
    pub async fn feed(&self) -> Result<FeedResponse> {
        let request = self.authed_request(Method::GET, "/feed")?;
        let feed: FeedResponse = self.send(request).await?;
        debug!(posts = feed.posts.len(), "Feed loaded");
        Ok(feed)
    }

    /// Upload a media file as a new post
    #[instrument(skip(self, path, caption), fields(path = %path.display()))]
    pub async fn upload(&self, path: &Path, caption: &str) -> Result<UploadResponse> {
        let data = tokio::fs::read(path).await.map_err(|source| ApiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
        let mime = mime_for_path(path);
        debug!(bytes = data.len(), mime, "Uploading");

        let part = Part::bytes(data).file_name(file_name).mime_str(mime)?;
        let form = Form::new()
            .part("file", part)
            .text("caption", caption.to_string());

        let request = self.authed_request(Method::POST, "/upload")?.multipart(form);
        let uploaded: UploadResponse = self.send(request).await?;
        info!(post_id = %uploaded.post_id, "Upload complete");
        Ok(uploaded)
    }

    /// Delete one of the caller's posts
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: &str) -> Result<DeleteResponse> {
        let path = format!("/posts/{}", urlencoding::encode(post_id));
        let request = self.authed_request(Method::DELETE, &path)?;
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        info!(status = %status, url = %response.url(), "Response received");

        let body = response.bytes().await?;
        if !status.is_success() {
            let detail = error_detail(status, &body);
            warn!(status = %status, detail = %detail, "Request rejected");
            return Err(ApiError::Status { status, detail });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Parse the configured API URL, making sure relative joins keep its path.
fn base_url(api_url: &str) -> Result<Url> {
    let mut url = Url::parse(api_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Human-readable reason from an error body.
///
/// FastAPI answers `{"detail": "..."}` or `{"detail": {...}}`; anything else
/// falls back to the status' canonical reason.
pub fn error_detail(status: StatusCode, body: &[u8]) -> String {
    let detail = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned());

    match detail {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Null) | None => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
        Some(other) => other.to_string(),
    }
}

/// MIME type sent with an upload, based on the file extension.
///
/// The server files anything `video/*` as a video post.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "heic" => "image/heic",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        _ => "application/octet-stream",
    }
}
