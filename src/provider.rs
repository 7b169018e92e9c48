//! The five data-fetch operations exposed to the host.
//!
//! Each operation is pure orchestration: build the target URL, fetch it
//! through the proxy-routed client, run the matching extraction, attach
//! pagination. No retries, no caching; any fetch or structural parse
//! failure propagates to the host unchanged.

use tracing::debug;

use crate::error::Result;
use crate::extract::{detail, listing};
use crate::http_client::{ProxiedClient, ProxyConfig};
use crate::models::{
    ChannelVideosRequest, SearchAllResult, SearchChannelResult, SearchRequest, SearchVideoResult,
    Video,
};
use crate::paging;

/// The target site's public origin.
pub const RUMBLE_URL: &str = "https://rumble.com";

/// Query orchestrator over the scraping pipeline.
pub struct RumbleProvider {
    client: ProxiedClient,
    base_url: String,
}

impl RumbleProvider {
    /// Create a provider against the live site.
    ///
    /// # Errors
    ///
    /// Fails only if the HTTP client can't be constructed.
    pub fn new(config: ProxyConfig) -> Result<Self> {
        Self::with_base_url(config, RUMBLE_URL)
    }

    /// Create a provider against a different origin. Test seam.
    ///
    /// # Errors
    ///
    /// Fails only if the HTTP client can't be constructed.
    pub fn with_base_url(config: ProxyConfig, base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: ProxiedClient::new(config)?,
            base_url: base_url.into(),
        })
    }

    /// Search videos, one listing page per call.
    pub async fn search_videos(&self, request: &SearchRequest) -> Result<SearchVideoResult> {
        let offset = request.offset.unwrap_or(0);
        let url = self.video_search_url(&request.query, offset);
        debug!(%url, "searching videos");

        let text = self.client.fetch_text(&url).await?;
        Ok(SearchVideoResult {
            items: listing::video_listings(&text),
            page_info: Some(paging::build_page_info(offset)),
        })
    }

    /// Search channels. The site's channel search is not paged.
    pub async fn search_channels(&self, request: &SearchRequest) -> Result<SearchChannelResult> {
        let url = self.channel_search_url(&request.query);
        debug!(%url, "searching channels");

        let text = self.client.fetch_text(&url).await?;
        Ok(SearchChannelResult {
            items: listing::channel_listings(&text),
        })
    }

    /// Combined search: videos and channels fetched concurrently.
    ///
    /// All-or-nothing: if either sub-fetch fails the combined call fails,
    /// matching the source behavior of letting any rejection propagate.
    pub async fn search_all(&self, request: &SearchRequest) -> Result<SearchAllResult> {
        let (videos, channels) =
            futures::try_join!(self.search_videos(request), self.search_channels(request))?;
        Ok(SearchAllResult { videos, channels })
    }

    /// Fetch one video's detail page and extract its full metadata.
    pub async fn get_video(&self, api_id: &str) -> Result<Video> {
        let url = self.video_url(api_id);
        debug!(%url, "fetching video detail");

        let text = self.client.fetch_text(&url).await?;
        detail::video_detail(&text)
    }

    /// Fetch one page of a channel's video listing.
    pub async fn get_channel_videos(
        &self,
        request: &ChannelVideosRequest,
    ) -> Result<SearchVideoResult> {
        let offset = request.offset.unwrap_or(0);
        let url = self.channel_videos_url(&request.api_id, offset);
        debug!(%url, "fetching channel videos");

        let text = self.client.fetch_text(&url).await?;
        Ok(SearchVideoResult {
            items: listing::video_listings(&text),
            page_info: Some(paging::build_page_info(offset)),
        })
    }

    /// Resolve a public video identifier to the embeddable stream
    /// identifier the player needs. Playback path only.
    pub async fn resolve_video_id(&self, api_id: &str) -> Result<String> {
        let url = self.video_url(api_id);
        debug!(%url, "resolving stream identifier");

        let text = self.client.fetch_text(&url).await?;
        detail::embed_video_id(&text)
    }

    fn video_search_url(&self, query: &str, offset: u64) -> String {
        format!(
            "{}/search/videos?q={}&page={}",
            self.base_url,
            urlencoding::encode(query),
            paging::to_page_param(offset)
        )
    }

    fn channel_search_url(&self, query: &str) -> String {
        format!(
            "{}/search/channel?q={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    fn video_url(&self, api_id: &str) -> String {
        format!("{}/{api_id}", self.base_url)
    }

    fn channel_videos_url(&self, api_id: &str, offset: u64) -> String {
        format!(
            "{}/c/{api_id}?page={}",
            self.base_url,
            paging::to_page_param(offset)
        )
    }
}
