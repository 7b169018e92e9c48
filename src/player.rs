//! Playback handoff between the plugin backend and the embedded player.
//!
//! A two-actor handshake over an asynchronous message channel. The player
//! document reads the video identifier from its launch parameters and asks
//! the backend for a playable stream identifier (only the backend can
//! reach the network); the backend resolves it through the detail
//! extraction path and answers; the player starts native playback and
//! reports completion, which the backend relays to the host.
//!
//! There are no retries and no timeouts: a lost message leaves the session
//! pending forever. Messages arriving in the wrong state are dropped.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::provider::RumbleProvider;

/// Upward messages, player → backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiMessage {
    /// Ask the backend to resolve `api_id` to a stream identifier.
    #[serde(rename = "geturl")]
    GetUrl {
        #[serde(rename = "apiId")]
        api_id: String,
    },
    /// Native playback finished.
    #[serde(rename = "endvideo")]
    EndVideo,
}

/// Downward messages, backend → player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerMessage {
    /// The resolved stream identifier to hand to the native player.
    #[serde(rename = "videoid")]
    VideoId {
        #[serde(rename = "videoId")]
        video_id: String,
    },
}

/// Player-side session states. `Ended` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    AwaitingRequest,
    AwaitingUrl,
    Playing,
    Ended,
}

/// Player-side half of the handshake.
///
/// The session owns no I/O: it consumes inbound messages and returns the
/// outbound message or playback action the embedding document should
/// perform, so the whole protocol is testable without a player frame.
#[derive(Debug)]
pub struct PlayerSession {
    state: PlaybackState,
}

impl PlayerSession {
    pub fn new() -> Self {
        Self {
            state: PlaybackState::AwaitingRequest,
        }
    }

    /// Begin the session from the document's launch query string
    /// (`"apiId=v1"`). Emits the request the player must post upward, or
    /// `None` when no identifier was passed (the session then never
    /// leaves `AwaitingRequest`).
    pub fn start(&mut self, launch_query: &str) -> Option<UiMessage> {
        let api_id = launch_param(launch_query, "apiId")?;
        self.state = PlaybackState::AwaitingUrl;
        debug!(%api_id, "requesting stream identifier");
        Some(UiMessage::GetUrl { api_id })
    }

    /// Handle a downward message. Returns the stream identifier to start
    /// native playback with, once; repeats and out-of-state messages are
    /// dropped.
    pub fn on_message(&mut self, message: PlayerMessage) -> Option<String> {
        match (self.state, message) {
            (PlaybackState::AwaitingUrl, PlayerMessage::VideoId { video_id }) => {
                self.state = PlaybackState::Playing;
                debug!(%video_id, "starting playback");
                Some(video_id)
            }
            _ => None,
        }
    }

    /// Native playback finished. Returns the completion notice to post
    /// upward; only valid while playing.
    pub fn on_playback_ended(&mut self) -> Option<UiMessage> {
        if self.state != PlaybackState::Playing {
            return None;
        }
        self.state = PlaybackState::Ended;
        Some(UiMessage::EndVideo)
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }
}

impl Default for PlayerSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract one parameter from a launch query string like `"apiId=v1&x=2"`.
fn launch_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key == name && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

/// The host primitives the backend half needs: post a message down to the
/// player document, and stop playback on the player's behalf.
#[async_trait]
pub trait HostChannel: Send + Sync {
    async fn post_ui_message(&self, message: PlayerMessage);
    async fn end_video(&self);
}

/// Backend half of the handshake: dispatch one upward message.
///
/// `GetUrl` resolves the identifier through the provider's detail
/// extraction path and answers with `VideoId`; `EndVideo` is relayed to
/// the host's end-of-video primitive.
///
/// # Errors
///
/// Propagates fetch/extraction failures from the resolution path.
pub async fn handle_ui_message(
    provider: &RumbleProvider,
    host: &dyn HostChannel,
    message: UiMessage,
) -> Result<()> {
    match message {
        UiMessage::GetUrl { api_id } => {
            let video_id = provider.resolve_video_id(&api_id).await?;
            host.post_ui_message(PlayerMessage::VideoId { video_id }).await;
        }
        UiMessage::EndVideo => host.end_video().await,
    }
    Ok(())
}
