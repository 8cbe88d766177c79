use crate::ShellResult;

use std::future::Future;

/// User agent sent with avatar requests.
///
/// The chat backend rejects requests that do not look like a browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) AppleWebKit/603.3.8 (KHTML, like Gecko) Version/10.1.2 Safari/603.3.8";

/// Downloads raw avatar bytes from the chat backend.
///
/// Implementations must send `cookies` as the `Cookie` header and
/// identify themselves with [`BROWSER_USER_AGENT`].
pub trait AvatarSource: Send + Sync {
    /// Fetch the binary content at `url`.
    fn fetch(&self, url: &str, cookies: &str) -> impl Future<Output = ShellResult<Vec<u8>>> + Send;
}
