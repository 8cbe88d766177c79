//! Release manifest polling and installer download.
//!
//! The feed is a JSON document describing the latest release:
//!
//! ```json
//! { "version": "1.4.0", "name": "Todo 1.4", "notes": "...", "url": "https://.../Todo-1.4.0.dmg" }
//! ```

use todo_shell_core::{
    BROWSER_USER_AGENT, ReleaseInfo, ShellError, ShellResult, UpdateEvent, is_newer_version,
};

use std::{
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument};

/// Latest release as published by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseManifest {
    /// Release version.
    pub version: String,
    /// Release name; defaults to the version.
    #[serde(default)]
    pub name: Option<String>,
    /// Release notes.
    #[serde(default)]
    pub notes: String,
    /// Installer package URL.
    pub url: String,
}

impl ReleaseManifest {
    /// Release description before download.
    pub fn release(&self) -> ReleaseInfo {
        ReleaseInfo {
            version: self.version.clone(),
            name: self
                .name
                .clone()
                .unwrap_or_else(|| self.version.clone()),
            notes: self.notes.clone(),
            package: None,
        }
    }

    /// Local file name for the downloaded package.
    pub fn package_file_name(&self) -> String {
        self.url
            .split(['?', '#'])
            .next()
            .and_then(|path| path.rsplit('/').next())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("todo-{}.update", self.version))
    }
}

/// Update feed reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpUpdateFeed {
    client: Client,
    feed_url: Option<String>,
    current_version: String,
    download_dir: PathBuf,
}

impl HttpUpdateFeed {
    /// Feed at `feed_url`; without one every check fails.
    #[track_caller]
    pub fn new(
        feed_url: Option<String>,
        current_version: impl Into<String>,
        download_dir: impl Into<PathBuf>,
    ) -> ShellResult<Self> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(|e| update_error(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            feed_url,
            current_version: current_version.into(),
            download_dir: download_dir.into(),
        })
    }

    /// Run one check, reporting each workflow step through `report`.
    ///
    /// Emits `NotAvailable`, or `Available` followed by `Downloaded`, or a
    /// single `Error`.
    #[instrument(skip(self, report), fields(current = %self.current_version))]
    pub async fn check(&self, report: impl Fn(UpdateEvent)) {
        let manifest = match self.fetch_manifest().await {
            Ok(manifest) => manifest,
            Err(e) => {
                report(UpdateEvent::Error(e.to_string()));
                return;
            }
        };

        if !is_newer_version(&manifest.version, &self.current_version) {
            info!(latest = %manifest.version, "No newer release");
            report(UpdateEvent::NotAvailable);
            return;
        }

        info!(latest = %manifest.version, "Newer release available");
        report(UpdateEvent::Available(manifest.release()));

        match self.download(&manifest).await {
            Ok(package) => report(UpdateEvent::Downloaded(ReleaseInfo {
                package: Some(package),
                ..manifest.release()
            })),
            Err(e) => report(UpdateEvent::Error(e.to_string())),
        }
    }

    async fn fetch_manifest(&self) -> ShellResult<ReleaseManifest> {
        let Some(feed_url) = self.feed_url.as_deref() else {
            return Err(update_error("No update feed configured".to_string()));
        };

        self.client
            .get(feed_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| update_error(format!("Failed to query update feed: {}", e)))?
            .json::<ReleaseManifest>()
            .await
            .map_err(|e| update_error(format!("Malformed release manifest: {}", e)))
    }

    async fn download(&self, manifest: &ReleaseManifest) -> ShellResult<PathBuf> {
        let bytes = self
            .client
            .get(&manifest.url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| update_error(format!("Failed to download release: {}", e)))?
            .bytes()
            .await
            .map_err(|e| update_error(format!("Download interrupted: {}", e)))?;

        let path = package_path(&self.download_dir, manifest);
        tokio::fs::write(&path, &bytes).await?;

        info!(path = ?path, size = bytes.len(), "Release downloaded");
        Ok(path)
    }
}

/// Where the package for `manifest` is stored inside `download_dir`.
pub fn package_path(download_dir: &Path, manifest: &ReleaseManifest) -> PathBuf {
    download_dir.join(manifest.package_file_name())
}

#[track_caller]
fn update_error(reason: String) -> ShellError {
    ShellError::Update {
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}
