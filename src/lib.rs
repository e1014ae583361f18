//! `simple-social` - client for the Simple Social media feed API
//!
//! # Features
//!
//! - **API client**: login, registration, feed, uploads and deletion over
//!   the REST API with bearer-token auth
//! - **ImageKit URLs**: caption overlays and resize presets as `tr:` path
//!   segments
//! - **Sessions**: token persisted between CLI runs
//!
//! # Example
//!
//! ```rust,no_run
//! use simple_social::{ApiClient, transformed_url};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut client = ApiClient::new("http://localhost:8000")?;
//!     client.login("ana@example.com", "hunter22").await?;
//!     for post in client.feed().await?.posts {
//!         println!("{}", transformed_url(&post.url, "", post.caption.as_deref()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod feed;
pub mod http_client;
pub mod model;
pub mod session;
pub mod transform;

pub use config::Config;
pub use feed::{render_feed, render_post};
pub use http_client::{ApiClient, ApiError};
pub use model::{FeedResponse, MediaKind, Post, User};
pub use session::{Session, SessionStore};
pub use transform::{
    caption_overlay, decode_overlay_text, encode_overlay_text, media_url, transformed_url,
    TransformError, VIDEO_PREVIEW_TRANSFORM,
};

/// Version of simple-social
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
