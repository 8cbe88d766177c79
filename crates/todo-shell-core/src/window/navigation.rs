/// Scheme and authority of `url`, e.g. `https://example.com:8080`.
///
/// `file:` URLs have no meaningful authority and map to `file://`.
pub fn origin_of(url: &str) -> Option<&str> {
    let (scheme, rest) = url.split_once("://")?;

    if scheme.eq_ignore_ascii_case("file") {
        return Some(&url[..scheme.len() + 3]);
    }

    let authority_len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&url[..scheme.len() + 3 + authority_len])
}

/// Whether a navigation to `url` stays inside the shell.
///
/// Anything that leaves the renderer's origin is handed to the OS instead.
pub fn is_in_app_navigation(url: &str, renderer_url: &str) -> bool {
    if url.starts_with("about:") || url.starts_with("data:") {
        return true;
    }

    match (origin_of(url), origin_of(renderer_url)) {
        (Some(target), Some(home)) => target.eq_ignore_ascii_case(home),
        _ => false,
    }
}
