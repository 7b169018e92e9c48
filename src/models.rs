//! Host-facing value objects.
//!
//! Everything here crosses the plugin boundary as JSON, so the wire shape
//! (camelCase keys, absent optionals omitted) is part of the contract.
//! All values are built fresh per request and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A single image reference. Listings carry zero or one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub url: String,
}

/// One video as extracted from a listing entry or a detail page.
///
/// `api_id` is the site-internal identifier recovered from the entry's
/// href (listings) or the embed URL (detail pages); it may be absent when
/// the markup didn't yield one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    /// Total length in whole seconds. Zero when the page didn't say.
    pub duration: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_api_id: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
}

/// One channel as extracted from a channel-search listing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageInfo>,
}

/// Pagination envelope attached to paged listings.
///
/// `next_page` is the site's 1-based page number as a string, derived from
/// the caller's offset cursor (see [`crate::paging`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub results_per_page: u32,
    pub offset: u64,
    pub next_page: String,
}

/// Search request from the host. Offset defaults to 0 and is expected to
/// advance in multiples of the page size.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub offset: Option<u64>,
}

/// Request for a single video by its site identifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetVideoRequest {
    pub api_id: String,
}

/// Request for a channel's video listing page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelVideosRequest {
    pub api_id: String,
    #[serde(default)]
    pub offset: Option<u64>,
}

/// Video search results in site listing order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVideoResult {
    pub items: Vec<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
}

/// Channel search results. The site's channel search is not paged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchChannelResult {
    pub items: Vec<Channel>,
}

/// Combined result of the fan-out search across videos and channels.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAllResult {
    pub videos: SearchVideoResult,
    pub channels: SearchChannelResult,
}
