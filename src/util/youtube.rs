#[cfg(test)]
#[path = "youtube_test.rs"]
mod youtube_test;

/// Check whether `url` looks like a YouTube video URL.
///
/// Accepted shapes: `http(s)://`, an optional `www.`, one of the two
/// YouTube hosts, then a `/` and a non-empty remainder. This covers watch
/// links, `/embed/` links, and short `youtu.be` links alike.
///
/// The caller is expected to pass already-trimmed input.
pub fn is_valid_youtube_url(url: &str) -> bool {
    let rest = match url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    {
        Some(rest) => rest,
        None => return false,
    };
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    // Host must be followed by a slash and at least one path character,
    // which also rules out lookalike hosts such as `youtube.com.evil.com`.
    for host in ["youtube.com/", "youtu.be/"] {
        if let Some(path) = rest.strip_prefix(host) {
            return !path.is_empty();
        }
    }
    false
}
