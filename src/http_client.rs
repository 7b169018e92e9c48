//! CORS-proxy-routed HTTP client.
//!
//! The target site is scraped from environments that enforce cross-origin
//! restrictions, so every request normally goes through a CORS relay:
//! `proxy_prefix + urlencoded(target)`. Hosts that run with CORS
//! enforcement disabled can opt out and have the client hit the site
//! directly. Requests are single-shot, no retry and no backoff: the site
//! is scraped opportunistically, not relied on for uptime.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{Error, Result};

/// Relay used when the host doesn't supply its own proxy prefix.
pub const DEFAULT_CORS_PROXY: &str = "https://cloudcors.audio-pwa.workers.dev?url=";

/// Proxy routing policy, resolved by the host once at construction time.
///
/// No ambient/global state: the host answers "is CORS disabled?" and
/// "which proxy?" up front and the answers are threaded through here.
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    /// Host environment already allows direct cross-origin requests.
    pub cors_disabled: bool,
    /// Host-supplied proxy prefix; [`DEFAULT_CORS_PROXY`] when `None`.
    pub proxy_prefix: Option<String>,
}

/// HTTP client that routes GETs per the [`ProxyConfig`] policy.
pub struct ProxiedClient {
    client: Client,
    config: ProxyConfig,
}

impl ProxiedClient {
    /// Create a client with the given routing policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS/connection setup fails.
    pub fn new(config: ProxyConfig) -> Result<Self> {
        let client = Client::builder()
            // Compression (auto-negotiated via Accept-Encoding)
            .brotli(true)
            .zstd(true)
            .gzip(true)
            .deflate(true)
            .use_rustls_tls()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client, config })
    }

    /// Resolve the URL actually fetched for a logical target URL.
    fn resolve_url(&self, url: &str) -> String {
        if self.config.cors_disabled {
            return url.to_string();
        }
        let prefix = self
            .config
            .proxy_prefix
            .as_deref()
            .unwrap_or(DEFAULT_CORS_PROXY);
        format!("{prefix}{}", urlencoding::encode(url))
    }

    /// Fetch a URL and return the response body as text.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and non-success HTTP statuses
    /// unchanged; the orchestration layer surfaces them to the host.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let resolved = self.resolve_url(url);
        debug!(target = %url, resolved = %resolved, "fetching");

        let response = self.client.get(&resolved).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        let text = response.text().await?;
        debug!(target = %url, bytes = text.len(), "response received");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(config: ProxyConfig) -> ProxiedClient {
        ProxiedClient::new(config).unwrap()
    }

    #[test]
    fn default_proxy_prefixes_encoded_target() {
        let client = client(ProxyConfig::default());
        let resolved = client.resolve_url("https://rumble.com/search/videos?q=cats");
        assert_eq!(
            resolved,
            format!(
                "{DEFAULT_CORS_PROXY}{}",
                urlencoding::encode("https://rumble.com/search/videos?q=cats")
            )
        );
    }

    #[test]
    fn host_supplied_proxy_wins_over_default() {
        let client = client(ProxyConfig {
            cors_disabled: false,
            proxy_prefix: Some("https://relay.example/?u=".into()),
        });
        let resolved = client.resolve_url("https://rumble.com/v1");
        assert!(resolved.starts_with("https://relay.example/?u="));
        assert!(!resolved.contains("cloudcors"));
    }

    #[test]
    fn cors_disabled_bypasses_proxy_entirely() {
        let client = client(ProxyConfig {
            cors_disabled: true,
            proxy_prefix: Some("https://relay.example/?u=".into()),
        });
        assert_eq!(
            client.resolve_url("https://rumble.com/v1"),
            "https://rumble.com/v1"
        );
    }
}
