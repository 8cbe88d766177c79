//! Avatar downloads over HTTP with the renderer's session cookies.

use todo_shell_core::{AvatarSource, BROWSER_USER_AGENT, ShellError, ShellResult};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client, header::COOKIE};
use tracing::{debug, instrument};

/// [`AvatarSource`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpAvatarSource {
    client: Client,
}

impl HttpAvatarSource {
    /// Client identifying itself as a desktop browser.
    #[track_caller]
    pub fn new() -> ShellResult<Self> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(|e| ShellError::Fetch {
                reason: format!("Failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { client })
    }
}

impl AvatarSource for HttpAvatarSource {
    #[instrument(skip(self, cookies))]
    async fn fetch(&self, url: &str, cookies: &str) -> ShellResult<Vec<u8>> {
        let fetch_error = |e: reqwest::Error| ShellError::Fetch {
            reason: format!("{}: {}", url, e),
            location: ErrorLocation::from(Location::caller()),
        };

        let response = self
            .client
            .get(url)
            .header(COOKIE, cookies)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(fetch_error)?;

        let bytes = response.bytes().await.map_err(fetch_error)?;

        debug!(size = bytes.len(), "Avatar downloaded");
        Ok(bytes.to_vec())
    }
}
