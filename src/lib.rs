//! `grumble` - Rumble video plugin backend
//!
//! Scrapes the HTML-only video site into structured metadata and exposes
//! the plugin operations a host application consumes: video/channel
//! search, video detail, channel listings, and the playback handoff
//! protocol for the embedded player.
//!
//! # Features
//!
//! - **Extraction engine**: JSON-LD structured-data fast path with DOM
//!   fallback, tolerant per-item listing scraping
//! - **CORS routing**: every request goes through a configurable proxy
//!   relay, or straight to the site when the host allows it
//! - **Pagination**: offset cursors mapped onto the site's 1-based pages
//!
//! # Example
//!
//! ```rust,no_run
//! use grumble::{ProxyConfig, RumbleProvider, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), grumble::Error> {
//!     let provider = RumbleProvider::new(ProxyConfig::default())?;
//!     let results = provider
//!         .search_videos(&SearchRequest {
//!             query: "rocket launch".into(),
//!             offset: None,
//!         })
//!         .await?;
//!     println!("{} videos", results.items.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod extract;
pub mod http_client;
pub mod models;
pub mod paging;
pub mod player;
pub mod provider;

pub use error::{Error, Result};
pub use http_client::{ProxiedClient, ProxyConfig, DEFAULT_CORS_PROXY};
pub use models::{
    Channel, ChannelVideosRequest, GetVideoRequest, ImageInfo, PageInfo, SearchAllResult,
    SearchChannelResult, SearchRequest, SearchVideoResult, Video,
};
pub use player::{HostChannel, PlaybackState, PlayerMessage, PlayerSession, UiMessage};
pub use provider::{RumbleProvider, RUMBLE_URL};

/// Version of grumble
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
