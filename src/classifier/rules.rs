//! Ordered category rules.
//!
//! Each rule pairs a category with the signals that select it. Rules are
//! evaluated top to bottom and the first rule with any matching signal wins,
//! so a Spotify track titled "watch" is music, never video.

use super::Category;

/// Instances recognised for federated `/@handle` profile URLs.
pub const FEDERATED_INSTANCES: &[&str] = &[
    "mastodon.social",
    "mastodon.online",
    "mas.to",
    "fosstodon.org",
    "mstdn.social",
    "hachyderm.io",
];

/// A single piece of evidence for a category.
///
/// All matching is substring matching over lower-cased text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// URL contains the pattern.
    Url(&'static str),
    /// URL contains an `/@` handle segment and one of the listed instances.
    FederatedHandle(&'static [&'static str]),
    /// Title contains the keyword.
    Title(&'static str),
    /// Description contains the keyword.
    Description(&'static str),
    /// Title or description contains the keyword.
    Text(&'static str),
}

/// Lower-cased inputs the signals are matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkText {
    pub url: String,
    pub title: String,
    pub description: String,
}

impl LinkText {
    #[must_use]
    pub fn new(url: &str, title: &str, description: &str) -> Self {
        Self {
            url: url.to_lowercase(),
            title: title.to_lowercase(),
            description: description.to_lowercase(),
        }
    }
}

impl Signal {
    #[must_use]
    pub fn matches(self, text: &LinkText) -> bool {
        match self {
            Self::Url(pattern) => text.url.contains(pattern),
            Self::FederatedHandle(instances) => {
                text.url.contains("/@") && instances.iter().any(|i| text.url.contains(i))
            }
            Self::Title(keyword) => text.title.contains(keyword),
            Self::Description(keyword) => text.description.contains(keyword),
            Self::Text(keyword) => text.title.contains(keyword) || text.description.contains(keyword),
        }
    }
}

/// A category together with the signals that select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: Category,
    pub signals: &'static [Signal],
}

impl CategoryRule {
    #[must_use]
    pub fn matches(&self, text: &LinkText) -> bool {
        self.signals.iter().any(|signal| signal.matches(text))
    }
}

use Signal::{Description, FederatedHandle, Text, Title, Url};

const MUSIC: &[Signal] = &[
    // Spotify
    Url("open.spotify.com/track/"),
    Url("open.spotify.com/album/"),
    Url("open.spotify.com/artist/"),
    Url("open.spotify.com/playlist/"),
    Url("music.apple.com/"),
    Url("music.youtube.com/"),
    // Amazon Music (podcasts live under /podcasts/ and are handled later)
    Url("music.amazon.com/albums/"),
    Url("music.amazon.com/artists/"),
    Url("music.amazon.com/playlists/"),
    // Deezer
    Url("deezer.com/track/"),
    Url("deezer.com/album/"),
    Url("deezer.com/artist/"),
    Url("deezer.com/playlist/"),
    // Tidal
    Url("tidal.com/browse/track/"),
    Url("tidal.com/browse/album/"),
    Url("tidal.com/browse/artist/"),
    Url("tidal.com/browse/playlist/"),
    Url("soundcloud.com/"),
    Url("bandcamp.com/track/"),
    Url("bandcamp.com/album/"),
    Url("pandora.com/artist/"),
    Url("pandora.com/album/"),
    Url("last.fm/music/"),
    Title("song"),
    Title("track"),
    Title("album"),
    Title("music"),
    Description("listen to"),
    Description("stream"),
];

const SOCIAL: &[Signal] = &[
    Url("facebook.com/"),
    Url("fb.com/"),
    Url("instagram.com/"),
    Url("twitter.com/"),
    Url("x.com/"),
    Url("linkedin.com/in/"),
    Url("linkedin.com/company/"),
    Url("linkedin.com/posts/"),
    Url("tiktok.com/"),
    Url("snapchat.com/add/"),
    Url("pinterest.com/"),
    Url("reddit.com/user/"),
    Url("reddit.com/r/"),
    Url("weibo.com/"),
    Url("vk.com/"),
    Url("douyin.com/user/"),
    Url("t.me/"),
    Url("threads.net/@"),
    FederatedHandle(FEDERATED_INSTANCES),
    Url(".tumblr.com/"),
    Url("mixi.jp/show_friend.pl"),
    Title("social"),
    Title("profile"),
    Description("social media"),
    Description("follow me"),
];

const PODCAST: &[Signal] = &[
    Url("open.spotify.com/show/"),
    Url("open.spotify.com/episode/"),
    Url("podcasts.apple.com/"),
    Url("podcasts.google.com/"),
    Url("music.amazon.com/podcasts/"),
    Url("stitcher.com/show/"),
    Url("stitcher.com/podcast/"),
    Url("pca.st/"),
    Url("overcast.fm/"),
    Url("castbox.fm/channel/"),
    Url("iheart.com/podcast/"),
    Url("tunein.com/podcasts/"),
    Url("podbean.com/podcast-detail/"),
    Url("podbean.com/e/"),
    Url("audible.com/pd/"),
    Url("deezer.com/show/"),
    Url("player.fm/series/"),
    Text("podcast"),
];

const VIDEO: &[Signal] = &[
    Url("youtube.com"),
    Url("youtu.be/"),
    Url("vimeo.com/"),
    Url("dailymotion.com/video/"),
    Url("twitch.tv/videos/"),
    Url("twitch.tv/clip/"),
    Url("facebook.com/watch"),
    Url("fb.watch/"),
    Url("instagram.com/p/"),
    Url("instagram.com/reel/"),
    Url("instagram.com/tv/"),
    // Streaming services
    Url("netflix.com/watch/"),
    Url("amazon.com/dp/"),
    Url("primevideo.com/"),
    Url("disneyplus.com/video/"),
    Url("tv.apple.com/"),
    Url("peacocktv.com/watch/"),
    Url("play.max.com/video/"),
    Url("hbomax.com/"),
    Url("bbc.co.uk/iplayer/"),
    Url("itv.com/watch/"),
    Url("channel4.com/programmes/"),
    Url("nowtv.com/watch/"),
    Url("britbox.com/"),
    Url("discoveryplus.com/"),
    Url("paramountplus.com/"),
    Text("video"),
    Text("watch"),
];

const ARTICLE: &[Signal] = &[Text("article"), Url("medium.com"), Url("substack.com")];

/// The category rules in evaluation order. `Other` has no rule; it is what
/// [`super::classify`] returns when nothing here matches.
pub static RULES: &[CategoryRule] = &[
    CategoryRule { category: Category::Music, signals: MUSIC },
    CategoryRule { category: Category::Social, signals: SOCIAL },
    CategoryRule { category: Category::Podcast, signals: PODCAST },
    CategoryRule { category: Category::Video, signals: VIDEO },
    CategoryRule { category: Category::Article, signals: ARTICLE },
];
