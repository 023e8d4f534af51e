use linkshelf::classifier::{classify_with, CategoryRule, Signal};
use linkshelf::{classify, Category};
use proptest::prelude::*;

fn by_url(url: &str) -> Category {
    classify(url, "", "")
}

#[test]
fn music_platforms() {
    for url in [
        "https://open.spotify.com/track/abc123",
        "https://open.spotify.com/playlist/xyz",
        "https://music.apple.com/us/album/1",
        "https://soundcloud.com/artist/song",
        "https://artist.bandcamp.com/album/first",
        "https://www.last.fm/music/Someone",
        "https://tidal.com/browse/track/42",
    ] {
        assert_eq!(by_url(url), Category::Music, "{url}");
    }
}

#[test]
fn social_platforms() {
    for url in [
        "https://twitter.com/someone",
        "https://www.linkedin.com/in/someone",
        "https://www.reddit.com/r/rust",
        "https://t.me/channel",
        "https://www.threads.net/@someone",
        "https://hachyderm.io/@someone",
        "https://someone.tumblr.com/post/1",
    ] {
        assert_eq!(by_url(url), Category::Social, "{url}");
    }
}

#[test]
fn federated_handle_on_unknown_instance_is_not_social() {
    assert_eq!(by_url("https://my.own.server/@someone"), Category::Other);
}

#[test]
fn podcast_platforms() {
    for url in [
        "https://open.spotify.com/episode/1",
        "https://podcasts.apple.com/us/podcast/x/id1",
        "https://overcast.fm/+abc",
        "https://music.amazon.com/podcasts/abc",
        "https://www.deezer.com/show/123",
    ] {
        assert_eq!(by_url(url), Category::Podcast, "{url}");
    }
}

#[test]
fn video_platforms() {
    for url in [
        "https://www.youtube.com/watch?v=1",
        "https://youtu.be/dQw4w9WgXcQ",
        "https://vimeo.com/123",
        "https://www.dailymotion.com/video/x8abc",
        "https://www.bbc.co.uk/iplayer/episode/1",
    ] {
        assert_eq!(by_url(url), Category::Video, "{url}");
    }
}

#[test]
fn music_keyword_in_title_only_counts_in_title() {
    assert_eq!(classify("https://example.com", "New album out", ""), Category::Music);
    assert_eq!(classify("https://example.com", "", "New album out"), Category::Other);
}

#[test]
fn stream_in_description_is_music() {
    assert_eq!(classify("https://example.com", "Tonight", "Stream it live"), Category::Music);
}

#[test]
fn precedence_music_over_video() {
    assert_eq!(
        classify("https://open.spotify.com/track/abc123", "official watch video", ""),
        Category::Music
    );
}

#[test]
fn precedence_social_over_podcast_keyword() {
    assert_eq!(
        classify("https://twitter.com/show", "My podcast", "new podcast episode"),
        Category::Social
    );
}

#[test]
fn precedence_podcast_over_video_keyword() {
    assert_eq!(classify("https://example.com", "Video podcast", ""), Category::Podcast);
}

#[test]
fn classification_is_case_insensitive() {
    assert_eq!(by_url("HTTPS://OPEN.SPOTIFY.COM/TRACK/ABC"), Category::Music);
    assert_eq!(classify("https://example.com", "An ARTICLE", ""), Category::Article);
}

#[test]
fn custom_table_is_honoured_in_order() {
    static TABLE: &[CategoryRule] = &[
        CategoryRule { category: Category::Video, signals: &[Signal::Text("clip")] },
        CategoryRule { category: Category::Music, signals: &[Signal::Text("clip")] },
    ];
    assert_eq!(classify_with(TABLE, "https://e.com", "A clip", ""), Category::Video);
}

proptest! {
    #[test]
    fn classify_is_total_and_deterministic(url in "\\PC{0,64}", title in "\\PC{0,32}", description in "\\PC{0,32}") {
        let first = classify(&url, &title, &description);
        let second = classify(&url, &title, &description);
        prop_assert_eq!(first, second);
        prop_assert!(Category::ALL.contains(&first));
    }
}

#[test]
fn url_patterns_are_plain_substrings() {
    // "netflix.com/" contains the "x.com/" social pattern, and social is checked first.
    assert_eq!(by_url("https://www.netflix.com/watch/1"), Category::Social);
}
