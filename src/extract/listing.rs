//! Listing-entry extraction for search and channel pages.
//!
//! Listing entries are scraped by structural position: one `<li
//! class="video-listing-entry">` (or `.channel-item`) per result, with
//! class-tagged sub-elements for title, duration, thumbnail and link.
//! Extraction is tolerant per item: any missing sub-element degrades to
//! an absent field, and one malformed entry never aborts the others. A
//! page with zero entries is a legitimate empty result, not an error.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::duration::hms_to_seconds;
use super::styles::StyleRuleIndex;
use super::{last_path_segment, non_empty};
use crate::models::{Channel, ImageInfo, Video};

static VIDEO_ENTRY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".video-listing-entry").unwrap());
static VIDEO_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".video-item--title").unwrap());
static VIDEO_DURATION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".video-item--duration").unwrap());
static VIDEO_IMG: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img.video-item--img").unwrap());
static VIDEO_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.video-item--a").unwrap());
static VIDEO_BY_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.video-item--by-a").unwrap());

static CHANNEL_ENTRY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".channel-item").unwrap());
static CHANNEL_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".channel-item--title").unwrap());
static CHANNEL_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.channel-item--a").unwrap());

/// Extract all video listing entries from a search or channel page.
pub fn video_listings(html: &str) -> Vec<Video> {
    let document = Html::parse_document(html);
    let videos: Vec<Video> = document
        .select(&VIDEO_ENTRY)
        .map(|entry| video_from_entry(&entry))
        .collect();
    debug!(count = videos.len(), "extracted video listings");
    videos
}

fn video_from_entry(entry: &ElementRef) -> Video {
    let title = entry
        .select(&VIDEO_TITLE)
        .next()
        .and_then(|node| non_empty(&node.text().collect::<String>()))
        .unwrap_or_default();

    let duration = entry
        .select(&VIDEO_DURATION)
        .next()
        .and_then(|node| node.value().attr("data-value"))
        .map(hms_to_seconds)
        .unwrap_or(0);

    let images = entry
        .select(&VIDEO_IMG)
        .next()
        .and_then(|img| img.value().attr("src"))
        .and_then(non_empty)
        .map(|url| vec![ImageInfo { url }])
        .unwrap_or_default();

    let api_id = entry
        .select(&VIDEO_LINK)
        .next()
        .and_then(|link| link.value().attr("href"))
        .and_then(video_api_id_from_href);

    let by_link = entry.select(&VIDEO_BY_LINK).next();
    let channel_name = by_link.and_then(|link| non_empty(&link.text().collect::<String>()));
    let channel_api_id = by_link
        .and_then(|link| link.value().attr("href"))
        .and_then(last_path_segment);

    Video {
        title,
        api_id,
        duration,
        channel_name,
        channel_api_id,
        images,
        ..Default::default()
    }
}

/// Recover a clean video identifier from a listing href.
///
/// Hrefs pack the identifier and a title slug into one path segment,
/// joined at a literal `0` (`"/v1a2b30extra"` → `"v1a2b3"`). Observed site
/// encoding, not a documented contract; revalidate against live markup
/// if extraction starts missing identifiers.
fn video_api_id_from_href(href: &str) -> Option<String> {
    let trimmed = href.strip_prefix('/').unwrap_or(href);
    non_empty(trimmed.split('0').next().unwrap_or(""))
}

/// Extract all channel listing entries from a channel-search page.
///
/// Avatars resolve indirectly: the site sets them through a generated
/// stylesheet whose selectors embed the listing position, so the walk
/// carries a [`StyleRuleIndex`] built once per document.
pub fn channel_listings(html: &str) -> Vec<Channel> {
    let document = Html::parse_document(html);
    let styles = StyleRuleIndex::from_document(&document);
    let channels: Vec<Channel> = document
        .select(&CHANNEL_ENTRY)
        .enumerate()
        .map(|(position, entry)| channel_from_entry(&entry, position, &styles))
        .collect();
    debug!(count = channels.len(), "extracted channel listings");
    channels
}

fn channel_from_entry(entry: &ElementRef, position: usize, styles: &StyleRuleIndex) -> Channel {
    let name = entry
        .select(&CHANNEL_TITLE)
        .next()
        .and_then(|node| non_empty(&node.text().collect::<String>()))
        .unwrap_or_default();

    let api_id = entry
        .select(&CHANNEL_LINK)
        .next()
        .and_then(|link| link.value().attr("href"))
        .and_then(last_path_segment);

    let images = styles
        .background_image(&avatar_selector(position))
        .map(|url| vec![ImageInfo { url }])
        .unwrap_or_default();

    Channel {
        name,
        api_id,
        images,
    }
}

/// Positional selector of the generated avatar rule for listing entry `position`.
fn avatar_selector(position: usize) -> String {
    format!("i.user-image--img--id-{position}")
}
