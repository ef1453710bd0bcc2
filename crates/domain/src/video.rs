use std::sync::LazyLock;

use derive_more::{AsRef, Display};
use regex::Regex;

static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("valid video URL pattern")
});

const VIDEO_ID_LEN: usize = 11;

/// Identifier of a YouTube video as accepted by the playback widget.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, Hash)]
pub struct VideoID(String);

impl VideoID {
    /// Extracts the video id from a share (`youtu.be/…`), embed (`/embed/…`, `/v/…`) or watch
    /// (`watch?v=…`, `&v=…`) link.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let captures = VIDEO_URL.captures(url.trim())?;
        let id = captures.get(2)?.as_str();
        (id.chars().count() == VIDEO_ID_LEN).then(|| Self(id.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }

    #[must_use]
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.0)
    }
}
