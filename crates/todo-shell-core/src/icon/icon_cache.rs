//! Avatar icon cache for dynamic menu entries.
//!
//! Resolves a user id to a small decoded avatar. Entries are never evicted:
//! the contact population is small and the cache lives as long as the process.

use crate::{
    AvatarSource, IconBatch, IconImage, MenuEntry, ResolvedSection, ShellError, ShellResult,
};

use std::{collections::HashMap, panic::Location, path::PathBuf, sync::Arc};

use error_location::ErrorLocation;
use futures::future::join_all;
use image::{ImageReader, RgbaImage};
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, instrument, warn};

/// Per-user avatar cache backed by an [`AvatarSource`].
pub struct IconCache<S> {
    source: S,
    scratch_dir: PathBuf,
    placeholder: IconImage,
    entries: Mutex<HashMap<String, Arc<OnceCell<IconImage>>>>,
}

impl<S: AvatarSource> IconCache<S> {
    /// Create a cache that writes downloaded avatars into `scratch_dir`.
    pub fn new(source: S, scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            scratch_dir: scratch_dir.into(),
            placeholder: IconImage::placeholder(),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve the menu icon for `user_id`.
    ///
    /// Never fails: fetch and decode errors are logged and degrade to the
    /// bundled placeholder. Only the first resolution of an id performs I/O.
    #[instrument(skip(self, cookies))]
    pub async fn resolve(
        &self,
        user_id: &str,
        cookies: Option<&str>,
        source_url: Option<&str>,
    ) -> IconImage {
        // Concurrent callers for one id share a single cell and a single fetch.
        let cell = self
            .entries
            .lock()
            .await
            .entry(user_id.to_string())
            .or_default()
            .clone();

        cell.get_or_init(|| self.load(user_id, cookies, source_url))
            .await
            .clone()
    }

    /// Resolve every entry of a menu batch.
    ///
    /// Icons within a section resolve concurrently; the resulting entries
    /// keep the order of the input list regardless of completion order.
    #[instrument(skip_all, fields(sections = batch.sections.len()))]
    pub async fn resolve_batch(&self, batch: IconBatch) -> Vec<ResolvedSection> {
        let cookies = batch.cookies.as_deref();
        let mut resolved = Vec::with_capacity(batch.sections.len());

        for request in batch.sections {
            let icons = join_all(
                request
                    .items
                    .iter()
                    .map(|item| self.resolve(&item.id, cookies, item.avatar.as_deref())),
            )
            .await;

            let entries = request
                .items
                .into_iter()
                .zip(icons)
                .enumerate()
                .map(|(index, (item, icon))| {
                    MenuEntry::new(request.section, index, item.id, item.name, icon)
                })
                .collect();

            resolved.push(ResolvedSection {
                section: request.section,
                entries,
            });
        }

        resolved
    }

    /// The avatar source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Number of cached user ids.
    pub async fn cached_count(&self) -> usize {
        self.entries
            .lock()
            .await
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }

    async fn load(
        &self,
        user_id: &str,
        cookies: Option<&str>,
        source_url: Option<&str>,
    ) -> IconImage {
        match (cookies, source_url) {
            (Some(cookies), Some(url)) if !cookies.is_empty() && !url.is_empty() => {
                match self.fetch_to_scratch(user_id, cookies, url).await {
                    Ok(image) => IconImage::menu_sized(&image),
                    Err(e) => {
                        warn!(user_id, error = %e, "Avatar unavailable, using placeholder");
                        self.placeholder.clone()
                    }
                }
            }
            _ => self.placeholder.clone(),
        }
    }

    async fn fetch_to_scratch(
        &self,
        user_id: &str,
        cookies: &str,
        url: &str,
    ) -> ShellResult<RgbaImage> {
        let bytes = self.source.fetch(url, cookies).await?;

        let path = self
            .scratch_dir
            .join(format!("{}.jpg", scratch_file_stem(user_id)));
        tokio::fs::write(&path, &bytes).await?;

        debug!(user_id, path = ?path, size = bytes.len(), "Avatar written to scratch");

        let image = ImageReader::open(&path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| ShellError::Image {
                reason: format!("Failed to decode avatar for {}: {}", user_id, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(image.into_rgba8())
    }
}

/// File name stem for a user id; ids may contain characters like `@`.
fn scratch_file_stem(user_id: &str) -> String {
    user_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
