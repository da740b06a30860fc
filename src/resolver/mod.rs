//! Video URL resolution.
//!
//! Converts arbitrary third-party video links into player-ready URLs:
//! - Provider pages (YouTube, Vimeo, Dailymotion) are rewritten to the
//!   provider's canonical embed URL
//! - Direct media files (`.mp4`, `.webm`, ...) are returned as-is and
//!   flagged for native playback
//! - Everything else, including strings that do not parse as URLs, is
//!   unrecognized (`None`)
//!
//! Resolution is a pure string transform. It never touches the network and
//! always gives the same answer for the same input.

pub mod provider;

use url::Url;

pub use provider::Provider;

/// File extensions that are played natively instead of embedded
pub const DIRECT_FILE_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "ogv", "mov", "m4v"];

/// How a resolved link should be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedKind {
    /// Provider page rewritten to an embed URL
    Provider { provider: Provider, video_id: String },

    /// Media file played with native controls
    DirectFile,
}

/// A recognized video link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedResult {
    /// URL to load in the player
    pub embed_url: String,

    pub kind: EmbedKind,
}

impl EmbedResult {
    /// Whether this link bypasses the embed frame
    pub fn is_direct_file(&self) -> bool {
        matches!(self.kind, EmbedKind::DirectFile)
    }

    /// The provider, for embedded links
    pub fn provider(&self) -> Option<Provider> {
        match &self.kind {
            EmbedKind::Provider { provider, .. } => Some(*provider),
            EmbedKind::DirectFile => None,
        }
    }

    /// Preview image for provider links
    pub fn thumbnail_url(&self) -> Option<String> {
        match &self.kind {
            EmbedKind::Provider { provider, video_id } => Some(provider.thumbnail_url(video_id)),
            EmbedKind::DirectFile => None,
        }
    }
}

/// Resolve a video link into an embeddable form.
///
/// Returns `None` for malformed input and for hosts that are neither a known
/// provider nor serving a direct media file. A known provider host with no
/// usable id is also `None`; it never falls through to the file check.
pub fn resolve(url: &str) -> Option<EmbedResult> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    if let Some(rule) = provider::rule_for_host(host) {
        let video_id = rule.id_rule.extract(&parsed)?;
        return Some(EmbedResult {
            embed_url: rule.provider.embed_url(&video_id),
            kind: EmbedKind::Provider {
                provider: rule.provider,
                video_id,
            },
        });
    }

    if is_direct_file_url(&parsed) {
        return Some(EmbedResult {
            embed_url: url.to_string(),
            kind: EmbedKind::DirectFile,
        });
    }

    None
}

/// Whether the link points straight at a playable media file
pub fn is_direct_file(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| is_direct_file_url(&parsed))
        .unwrap_or(false)
}

fn is_direct_file_url(url: &Url) -> bool {
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    let path = url.path().to_ascii_lowercase();
    DIRECT_FILE_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(&format!(".{}", ext)))
}

/// Whether the resolver recognizes the link at all
pub fn is_supported(url: &str) -> bool {
    resolve(url).is_some()
}

/// Preview image URL for a video link, if its provider has one
pub fn thumbnail_url(url: &str) -> Option<String> {
    resolve(url).and_then(|result| result.thumbnail_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_watch() {
        let result = resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(result.embed_url, "https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(result.provider(), Some(Provider::YouTube));
        assert!(!result.is_direct_file());
    }

    #[test]
    fn test_host_is_case_insensitive() {
        let result = resolve("https://WWW.YouTube.com/watch?v=AbC").unwrap();
        assert_eq!(result.embed_url, "https://www.youtube.com/embed/AbC");
    }

    #[test]
    fn test_provider_host_without_id_does_not_fall_through() {
        assert_eq!(resolve("https://www.youtube.com/clip.mp4"), None);
    }

    #[test]
    fn test_direct_file() {
        let url = "https://cdn.example.com/media/Clip.MP4?token=abc";
        let result = resolve(url).unwrap();
        assert_eq!(result.embed_url, url);
        assert!(result.is_direct_file());
        assert_eq!(result.provider(), None);
        assert_eq!(result.thumbnail_url(), None);
    }

    #[test]
    fn test_direct_file_requires_http() {
        assert!(!is_direct_file("ftp://cdn.example.com/clip.mp4"));
        assert!(!is_direct_file("file:///tmp/clip.webm"));
        assert!(is_direct_file("http://cdn.example.com/clip.webm"));
    }

    #[test]
    fn test_direct_file_ignores_query_suffix() {
        assert!(!is_direct_file("https://example.com/watch?file=clip.mp4"));
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(resolve("https://example.com/video/123"), None);
        assert_eq!(resolve("not a url"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("youtube.com/watch?v=abc"), None);
        assert!(!is_supported("mailto:someone@example.com"));
    }

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(
            thumbnail_url("https://vimeo.com/12345"),
            Some("https://vumbnail.com/12345.jpg".to_string())
        );
        assert_eq!(thumbnail_url("https://example.com/x"), None);
    }
}
