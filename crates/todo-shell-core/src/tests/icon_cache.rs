use crate::{
    AvatarSource, IconBatch, IconCache, IconImage, MENU_ICON_SIZE, MenuSection, MenuSource,
    SectionRequest, ShellError, ShellResult,
};

use std::{
    collections::HashMap,
    io::Cursor,
    panic::Location,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use error_location::ErrorLocation;
use image::{ImageFormat, Rgba, RgbaImage};

/// Serves solid-color PNGs keyed by URL, after a per-URL delay.
struct FakeAvatarSource {
    avatars: HashMap<String, ([u8; 4], Duration)>,
    fetches: AtomicUsize,
}

impl FakeAvatarSource {
    fn new(avatars: &[(&str, [u8; 4], u64)]) -> Self {
        Self {
            avatars: avatars
                .iter()
                .map(|(url, color, delay)| {
                    (url.to_string(), (*color, Duration::from_millis(*delay)))
                })
                .collect(),
            fetches: AtomicUsize::new(0),
        }
    }
}

impl AvatarSource for FakeAvatarSource {
    async fn fetch(&self, url: &str, _cookies: &str) -> ShellResult<Vec<u8>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let Some((color, delay)) = self.avatars.get(url).copied() else {
            return Err(ShellError::Fetch {
                reason: format!("404 for {}", url),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        tokio::time::sleep(delay).await;

        let mut bytes = Vec::new();
        RgbaImage::from_pixel(8, 8, Rgba(color))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| ShellError::Image {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        Ok(bytes)
    }
}

fn source(id: &str, name: &str, avatar: Option<&str>) -> MenuSource {
    MenuSource {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar.map(str::to_string),
    }
}

fn first_pixel(icon: &IconImage) -> [u8; 4] {
    let rgba = icon.rgba();
    [rgba[0], rgba[1], rgba[2], rgba[3]]
}

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

/// WHAT: Downloaded avatars are resized to the menu icon square
/// WHY: Native menus expect a fixed icon size
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_cookies_and_url_when_resolving_then_avatar_decoded_and_resized() {
    // Given: A source serving a red avatar
    let dir = tempfile::tempdir().unwrap();
    let cache = IconCache::new(FakeAvatarSource::new(&[("u/1", RED, 0)]), dir.path());

    // When: Resolving with cookies and URL
    let icon = cache.resolve("user@1", Some("sid=1"), Some("u/1")).await;

    // Then: The avatar is 24x24 red and was written to scratch
    assert_eq!(icon.width(), MENU_ICON_SIZE);
    assert_eq!(icon.height(), MENU_ICON_SIZE);
    assert_eq!(first_pixel(&icon), RED);
    assert!(dir.path().join("user_1.jpg").exists());
}

/// WHAT: A cached id is never fetched again
/// WHY: Menu rebuilds must not hit the network for known users
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_cached_id_when_resolving_again_then_no_fetch() {
    // Given: An id resolved once
    let dir = tempfile::tempdir().unwrap();
    let cache = IconCache::new(FakeAvatarSource::new(&[("u/1", GREEN, 0)]), dir.path());
    let first = cache.resolve("1", Some("sid=1"), Some("u/1")).await;

    // When: Resolving the same id, even with a different URL
    let second = cache.resolve("1", Some("sid=1"), Some("u/other")).await;

    // Then: One fetch, same image
    assert_eq!(cache.source_fetches(), 1);
    assert_eq!(first, second);
    assert_eq!(cache.cached_count().await, 1);
}

/// WHAT: Overlapping resolutions of one id share a single fetch
/// WHY: Two batches naming the same user must not download its avatar twice
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_concurrent_resolutions_of_same_id_when_resolving_then_one_fetch() {
    // Given: A slow avatar
    let dir = tempfile::tempdir().unwrap();
    let cache = IconCache::new(FakeAvatarSource::new(&[("u/1", GREEN, 50)]), dir.path());

    // When: Resolving the same id twice at once
    let (first, second) = tokio::join!(
        cache.resolve("1", Some("sid=1"), Some("u/1")),
        cache.resolve("1", Some("sid=1"), Some("u/1")),
    );

    // Then: One fetch, both callers get the avatar
    assert_eq!(cache.source_fetches(), 1);
    assert_eq!(first, second);
    assert_eq!(first_pixel(&first), GREEN);
}

/// WHAT: Duplicate ids within one batch section fetch once
/// WHY: Section items resolve concurrently
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_duplicate_ids_in_batch_when_resolving_then_one_fetch() {
    // Given: A section listing the same user twice
    let dir = tempfile::tempdir().unwrap();
    let cache = IconCache::new(FakeAvatarSource::new(&[("a", RED, 30)]), dir.path());
    let batch = IconBatch {
        cookies: Some("sid=1".to_string()),
        sections: vec![SectionRequest {
            section: MenuSection::Contacts,
            items: vec![source("1", "Alice", Some("a")), source("1", "Alice", Some("a"))],
        }],
    };

    // When: Resolving the batch
    let resolved = cache.resolve_batch(batch).await;

    // Then: Both entries carry the avatar from a single fetch
    assert_eq!(cache.source_fetches(), 1);
    assert_eq!(resolved[0].entries.len(), 2);
    assert_eq!(first_pixel(&resolved[0].entries[1].icon), RED);
}

/// WHAT: Missing credentials resolve to the placeholder without I/O
/// WHY: Avatars need an authenticated session
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_no_cookies_when_resolving_then_placeholder() {
    // Given: A cache
    let dir = tempfile::tempdir().unwrap();
    let cache = IconCache::new(FakeAvatarSource::new(&[("u/1", RED, 0)]), dir.path());

    // When: Resolving without cookies, and with empty cookies
    let without = cache.resolve("1", None, Some("u/1")).await;
    let empty = cache.resolve("2", Some(""), Some("u/1")).await;

    // Then: Both are the placeholder and nothing was fetched
    assert_eq!(without, IconImage::placeholder());
    assert_eq!(empty, IconImage::placeholder());
    assert_eq!(cache.source_fetches(), 0);
}

/// WHAT: Fetch failures degrade to the placeholder
/// WHY: A broken avatar must never break the menu
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_failing_source_when_resolving_then_placeholder() {
    // Given: A source without the requested URL
    let dir = tempfile::tempdir().unwrap();
    let cache = IconCache::new(FakeAvatarSource::new(&[]), dir.path());

    // When: Resolving
    let icon = cache.resolve("1", Some("sid=1"), Some("u/missing")).await;

    // Then: Placeholder
    assert_eq!(icon, IconImage::placeholder());
}

/// WHAT: Batch results keep input order regardless of completion order
/// WHY: Menu entries must appear in the renderer's order
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_slow_first_avatar_when_resolving_batch_then_input_order_kept() {
    // Given: The first avatar is the slowest
    let dir = tempfile::tempdir().unwrap();
    let cache = IconCache::new(
        FakeAvatarSource::new(&[("a", RED, 60), ("b", GREEN, 0), ("c", BLUE, 20)]),
        dir.path(),
    );
    let batch = IconBatch {
        cookies: Some("sid=1".to_string()),
        sections: vec![SectionRequest {
            section: MenuSection::Conversations,
            items: vec![
                source("1", "Alice", Some("a")),
                source("2", "Bob", Some("b")),
                source("3", "Carol", Some("c")),
            ],
        }],
    };

    // When: Resolving the batch
    let resolved = cache.resolve_batch(batch).await;

    // Then: Entries follow input order with their own icons
    assert_eq!(resolved.len(), 1);
    let entries = &resolved[0].entries;
    let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(first_pixel(&entries[0].icon), RED);
    assert_eq!(first_pixel(&entries[1].icon), GREEN);
    assert_eq!(first_pixel(&entries[2].icon), BLUE);
    assert_eq!(entries[0].accelerator.as_deref(), Some("CmdOrCtrl+0"));
}

impl IconCache<FakeAvatarSource> {
    fn source_fetches(&self) -> usize {
        self.source().fetches.load(Ordering::SeqCst)
    }
}
