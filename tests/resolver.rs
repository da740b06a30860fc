//! Resolver Integration Tests
//!
//! Provider rewriting, direct files, and rejection of unusable links.

use knacky::resolver::{is_direct_file, is_supported, resolve, thumbnail_url, EmbedKind, Provider};

fn embed_url(url: &str) -> Option<String> {
    resolve(url).map(|r| r.embed_url)
}

#[test]
fn test_youtube_hosts() {
    for host in ["youtube.com", "www.youtube.com"] {
        for id in ["dQw4w9WgXcQ", "a", "A-b_C"] {
            let url = format!("https://{}/watch?v={}", host, id);
            assert_eq!(
                embed_url(&url),
                Some(format!("https://www.youtube.com/embed/{}", id)),
                "{}",
                url
            );
        }
    }
}

#[test]
fn test_youtube_query_casing_preserved() {
    assert_eq!(
        embed_url("https://youtube.com/watch?v=AbCdEf&t=42s"),
        Some("https://www.youtube.com/embed/AbCdEf".to_string())
    );
    // Parameter name is case-sensitive
    assert_eq!(embed_url("https://youtube.com/watch?V=AbCdEf"), None);
}

#[test]
fn test_youtube_missing_id() {
    assert_eq!(embed_url("https://www.youtube.com/watch"), None);
    assert_eq!(embed_url("https://www.youtube.com/watch?v="), None);
    assert_eq!(embed_url("https://www.youtube.com/"), None);
}

#[test]
fn test_youtu_be() {
    assert_eq!(
        embed_url("https://youtu.be/dQw4w9WgXcQ"),
        Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string())
    );
    assert_eq!(
        embed_url("https://youtu.be/dQw4w9WgXcQ/extra?si=share"),
        Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string())
    );
    assert_eq!(embed_url("https://youtu.be/"), None);
    assert_eq!(embed_url("https://youtu.be"), None);
}

#[test]
fn test_vimeo() {
    assert_eq!(
        embed_url("https://vimeo.com/12345"),
        Some("https://player.vimeo.com/video/12345".to_string())
    );
    assert_eq!(
        embed_url("https://www.vimeo.com/12345/"),
        Some("https://player.vimeo.com/video/12345".to_string())
    );
    assert_eq!(embed_url("https://vimeo.com/"), None);
}

#[test]
fn test_dailymotion() {
    let canonical = Some("https://www.dailymotion.com/embed/video/x7abc".to_string());

    assert_eq!(embed_url("https://www.dailymotion.com/video/x7abc"), canonical);
    assert_eq!(embed_url("https://dailymotion.com/video/x7abc"), canonical);
    assert_eq!(embed_url("https://dai.ly/x7abc"), canonical);

    assert_eq!(embed_url("https://www.dailymotion.com/x7abc"), None);
    assert_eq!(embed_url("https://www.dailymotion.com/video/"), None);
    assert_eq!(embed_url("https://dai.ly/"), None);
}

#[test]
fn test_provider_kind_carries_id() {
    let result = resolve("https://dai.ly/x7abc").unwrap();
    assert_eq!(
        result.kind,
        EmbedKind::Provider {
            provider: Provider::Dailymotion,
            video_id: "x7abc".to_string(),
        }
    );
}

#[test]
fn test_malformed_input_is_unrecognized() {
    for input in ["not a url", "", "   ", "http://", "://youtube.com/watch?v=x", "youtu.be/abc"] {
        assert_eq!(resolve(input), None, "{:?}", input);
        assert!(!is_supported(input));
    }
}

#[test]
fn test_unknown_hosts_are_unrecognized() {
    assert_eq!(resolve("https://example.com/watch?v=abc"), None);
    assert_eq!(resolve("https://m.youtube.com/watch?v=abc"), None);
    assert_eq!(resolve("https://player.vimeo.com/video/12345"), None);
}

#[test]
fn test_direct_files_are_returned_as_is() {
    for url in [
        "https://cdn.example.com/clip.mp4",
        "https://cdn.example.com/clip.webm",
        "http://media.example.org/path/to/movie.MOV",
    ] {
        let result = resolve(url).unwrap();
        assert_eq!(result.embed_url, url);
        assert!(result.is_direct_file());
        assert!(is_direct_file(url));
    }

    assert_eq!(resolve("https://cdn.example.com/page.html"), None);
    assert!(!is_direct_file("https://cdn.example.com/page.html"));
}

#[test]
fn test_resolution_is_deterministic() {
    let inputs = [
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "https://youtu.be/",
        "https://vimeo.com/12345",
        "https://dai.ly/x7abc",
        "https://cdn.example.com/clip.mp4",
        "not a url",
    ];

    for input in inputs {
        assert_eq!(resolve(input), resolve(input), "{}", input);
    }
}

#[test]
fn test_thumbnails() {
    assert_eq!(
        thumbnail_url("https://www.youtube.com/watch?v=abc"),
        Some("https://img.youtube.com/vi/abc/hqdefault.jpg".to_string())
    );
    assert_eq!(
        thumbnail_url("https://dai.ly/x7abc"),
        Some("https://www.dailymotion.com/thumbnail/video/x7abc".to_string())
    );
    assert_eq!(thumbnail_url("https://cdn.example.com/clip.mp4"), None);
    assert_eq!(thumbnail_url("not a url"), None);
}
