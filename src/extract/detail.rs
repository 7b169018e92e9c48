//! Single-video detail extraction.
//!
//! Detail pages embed an `application/ld+json` structured-data block; the
//! first object declaring `@type: "VideoObject"` carries title, embed URL,
//! ISO-8601 duration, upload date, thumbnail and view count. That block is
//! the fast path and is *required*: a detail page without a parseable
//! `VideoObject` is a structural failure. Channel name and identifier are
//! not in the block and are supplemented from the DOM (a heading node and
//! an anchor's href).

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::duration::iso8601_to_seconds;
use super::{last_path_segment, non_empty};
use crate::error::{Error, Result};
use crate::models::{ImageInfo, Video};

static LD_JSON: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"script[type="application/ld+json"]"#).unwrap());
static CHANNEL_HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".media-heading-name").unwrap());
static CHANNEL_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.media-by--a").unwrap());

/// The `VideoObject` subset of the structured-data vocabulary.
#[derive(Debug, Deserialize)]
struct VideoObject {
    name: Option<String>,
    #[serde(rename = "embedUrl")]
    embed_url: Option<String>,
    duration: Option<String>,
    #[serde(rename = "uploadDate")]
    upload_date: Option<String>,
    url: Option<String>,
    #[serde(rename = "thumbnailUrl")]
    thumbnail_url: Option<String>,
    #[serde(rename = "interactionStatistic")]
    interaction_statistic: Option<InteractionStatistic>,
}

#[derive(Debug, Deserialize)]
struct InteractionStatistic {
    #[serde(rename = "userInteractionCount")]
    user_interaction_count: Option<u64>,
}

/// Extract one [`Video`] from a detail page.
///
/// # Errors
///
/// [`Error::StructuredData`] when the page has no `application/ld+json`
/// script, the block doesn't parse, or no entry declares `VideoObject`.
/// Missing fields inside a valid block degrade to defaults.
pub fn video_detail(html: &str) -> Result<Video> {
    let document = Html::parse_document(html);
    let object = video_object(&document)?;

    let api_id = object.embed_url.as_deref().and_then(embed_id);
    let duration = object
        .duration
        .as_deref()
        .map(iso8601_to_seconds)
        .unwrap_or(0);
    let images = object
        .thumbnail_url
        .as_deref()
        .and_then(non_empty)
        .map(|url| vec![ImageInfo { url }])
        .unwrap_or_default();
    let views = object
        .interaction_statistic
        .and_then(|stat| stat.user_interaction_count);

    // Channel attribution only exists in the DOM.
    let channel_name = document
        .select(&CHANNEL_HEADING)
        .next()
        .and_then(|node| non_empty(&node.text().collect::<String>()));
    let channel_api_id = document
        .select(&CHANNEL_ANCHOR)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .and_then(last_path_segment);

    debug!(api_id = ?api_id, views = ?views, "extracted video detail");

    Ok(Video {
        title: object.name.unwrap_or_default(),
        api_id,
        duration,
        channel_name,
        channel_api_id,
        images,
        upload_date: object.upload_date,
        original_url: object.url,
        views,
    })
}

/// Extract just the embeddable stream identifier, for the playback path.
///
/// # Errors
///
/// [`Error::StructuredData`] when the block or its `embedUrl` is missing.
pub fn embed_video_id(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let object = video_object(&document)?;
    object
        .embed_url
        .as_deref()
        .and_then(embed_id)
        .ok_or_else(|| Error::StructuredData("VideoObject has no embedUrl".into()))
}

/// Locate and decode the first `VideoObject` in the page's structured data.
fn video_object(document: &Html) -> Result<VideoObject> {
    let script = document
        .select(&LD_JSON)
        .next()
        .ok_or_else(|| Error::StructuredData("no ld+json script in page".into()))?;
    let payload: Value = serde_json::from_str(&script.text().collect::<String>())?;

    // JSON-LD is either a single object or an array of them.
    let entries = match payload {
        Value::Array(entries) => entries,
        single => vec![single],
    };
    let object = entries
        .into_iter()
        .find(|entry| entry.get("@type").and_then(Value::as_str) == Some("VideoObject"))
        .ok_or_else(|| Error::StructuredData("no VideoObject entry".into()))?;

    Ok(serde_json::from_value(object)?)
}

/// Short internal identifier from an embed URL: split on `/`, drop the
/// trailing empty segment, take the new last one.
/// `"https://site/embed/abc123/"` → `"abc123"`.
fn embed_id(embed_url: &str) -> Option<String> {
    last_path_segment(embed_url)
}
