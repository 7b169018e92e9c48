//! Integration tests for the extraction pipeline and the playback
//! handshake, run over full-page fixtures shaped like the live site's
//! markup.

use grumble::extract::{detail, listing};
use grumble::paging;
use grumble::{PlaybackState, PlayerMessage, PlayerSession, UiMessage};

const SEARCH_PAGE: &str = r#"
<!DOCTYPE html>
<html><head><title>search</title></head><body>
<main>
  <ol class="listing">
    <li class="video-listing-entry">
      <article class="video-item">
        <a class="video-item--a" href="/v4x5y60-first-video-title.html">
          <img class="video-item--img" src="https://i.example/v4x5y6.jpg" alt="">
          <h3 class="video-item--title">  First video  </h3>
        </a>
        <a class="video-item--by-a" href="/c/NewsDesk"><span>News Desk</span></a>
        <span class="video-item--duration" data-value="12:34"></span>
      </article>
    </li>
    <li class="video-listing-entry">
      <article class="video-item">
        <a class="video-item--a" href="/v7q8r90-second.html">
          <img class="video-item--img" src="https://i.example/v7q8r9.jpg" alt="">
          <h3 class="video-item--title">Second video</h3>
        </a>
        <span class="video-item--duration" data-value="1:00:01"></span>
      </article>
    </li>
  </ol>
</main>
</body></html>
"#;

const CHANNEL_SEARCH_PAGE: &str = r#"
<!DOCTYPE html>
<html><head>
<style>
  body { margin: 0 }
  i.user-image--img--id-0 { background-image: url("https://i.example/avatars/newsdesk.png"); }
  i.user-image--img--id-2 { background-image: url('https://i.example/avatars/third.png'); }
</style>
</head><body>
<ol>
  <li><div class="channel-item">
    <a class="channel-item--a" href="/c/NewsDesk">
      <i class="user-image--img user-image--img--id-0"></i>
      <h3 class="channel-item--title">News Desk</h3>
    </a>
  </div></li>
  <li><div class="channel-item">
    <a class="channel-item--a" href="/user/SoloUploader">
      <i class="user-image--img user-image--img--id-1"></i>
      <h3 class="channel-item--title">Solo Uploader</h3>
    </a>
  </div></li>
  <li><div class="channel-item">
    <a class="channel-item--a" href="/c/ThirdChannel">
      <i class="user-image--img user-image--img--id-2"></i>
      <h3 class="channel-item--title">Third Channel</h3>
    </a>
  </div></li>
</ol>
</body></html>
"#;

const DETAIL_PAGE: &str = r#"
<!DOCTYPE html>
<html><head>
<script type="application/ld+json">
[
  {"@type": "WebPage", "url": "https://rumble.com/v4x5y6-first-video-title.html"},
  {
    "@type": "VideoObject",
    "name": "First video",
    "embedUrl": "https://rumble.com/embed/vstream1/",
    "duration": "PT12M34S",
    "uploadDate": "2023-11-05",
    "url": "https://rumble.com/v4x5y6-first-video-title.html",
    "thumbnailUrl": "https://i.example/v4x5y6.jpg",
    "interactionStatistic": {
      "@type": "InteractionCounter",
      "userInteractionCount": 98765
    }
  }
]
</script>
</head><body>
<div class="media-by">
  <a class="media-by--a" href="/c/NewsDesk/">
    <h4 class="media-heading-name">News Desk</h4>
  </a>
</div>
</body></html>
"#;

#[test]
fn search_page_yields_ordered_videos_with_all_fields() {
    let videos = listing::video_listings(SEARCH_PAGE);
    assert_eq!(videos.len(), 2);

    let first = &videos[0];
    assert_eq!(first.title, "First video");
    assert_eq!(first.api_id.as_deref(), Some("v4x5y6"));
    assert_eq!(first.duration, 754);
    assert_eq!(first.channel_name.as_deref(), Some("News Desk"));
    assert_eq!(first.channel_api_id.as_deref(), Some("NewsDesk"));
    assert_eq!(first.images.len(), 1);
    assert_eq!(first.images[0].url, "https://i.example/v4x5y6.jpg");

    let second = &videos[1];
    assert_eq!(second.api_id.as_deref(), Some("v7q8r9"));
    assert_eq!(second.duration, 3601);
    assert!(second.channel_name.is_none());
}

#[test]
fn channel_search_page_resolves_avatars_positionally() {
    let channels = listing::channel_listings(CHANNEL_SEARCH_PAGE);
    assert_eq!(channels.len(), 3);

    assert_eq!(channels[0].name, "News Desk");
    assert_eq!(channels[0].api_id.as_deref(), Some("NewsDesk"));
    assert_eq!(
        channels[0].images[0].url,
        "https://i.example/avatars/newsdesk.png"
    );

    // No generated rule for position 1: images stay empty, not an error.
    assert_eq!(channels[1].name, "Solo Uploader");
    assert!(channels[1].images.is_empty());

    assert_eq!(
        channels[2].images[0].url,
        "https://i.example/avatars/third.png"
    );
}

#[test]
fn detail_page_merges_structured_data_and_dom() {
    let video = detail::video_detail(DETAIL_PAGE).unwrap();
    assert_eq!(video.title, "First video");
    assert_eq!(video.api_id.as_deref(), Some("vstream1"));
    assert_eq!(video.duration, 754);
    assert_eq!(video.upload_date.as_deref(), Some("2023-11-05"));
    assert_eq!(video.views, Some(98765));
    assert_eq!(video.channel_name.as_deref(), Some("News Desk"));
    assert_eq!(video.channel_api_id.as_deref(), Some("NewsDesk"));
}

#[test]
fn detail_and_listing_agree_on_the_video() {
    // The listing's api_id leads to the detail page; the two extractions
    // describe the same video through different markup.
    let listed = &listing::video_listings(SEARCH_PAGE)[0];
    let detailed = detail::video_detail(DETAIL_PAGE).unwrap();
    assert_eq!(listed.title, detailed.title);
    assert_eq!(listed.duration, detailed.duration);
    assert_eq!(listed.channel_api_id, detailed.channel_api_id);
}

#[test]
fn offsets_advance_through_site_pages() {
    for (offset, page) in [(0, "1"), (20, "2"), (40, "3"), (200, "11")] {
        let info = paging::build_page_info(offset);
        assert_eq!(info.next_page, page);
        assert_eq!(info.offset, offset);
        assert_eq!(info.results_per_page, 20);
    }
}

#[test]
fn playback_handshake_runs_start_to_end() {
    let mut session = PlayerSession::new();

    // 1. Player launches with the public identifier and asks upward.
    let request = session.start("apiId=v4x5y6").unwrap();
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({"type": "geturl", "apiId": "v4x5y6"})
    );

    // 2. Backend resolves it (detail extraction) and answers downward.
    let stream_id = detail::embed_video_id(DETAIL_PAGE).unwrap();
    let answer = PlayerMessage::VideoId {
        video_id: stream_id,
    };

    // 3. Player starts native playback with the resolved identifier.
    let playing = session.on_message(answer).unwrap();
    assert_eq!(playing, "vstream1");
    assert_eq!(session.state(), PlaybackState::Playing);

    // 4. Completion goes back upward.
    assert_eq!(session.on_playback_ended(), Some(UiMessage::EndVideo));
    assert_eq!(session.state(), PlaybackState::Ended);
}
