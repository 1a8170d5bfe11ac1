use crate::PlayerAction;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Episode {
    title: String,
    /// Credited participants, free text.
    members: String,
    thumbnail: String,
    /// In seconds.
    duration: u64,
    /// Audio file.
    url: String,
}

impl Episode {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = title;
        self
    }

    pub fn members(&self) -> &str {
        &self.members
    }

    pub fn with_members(mut self, members: String) -> Self {
        self.members = members;
        self
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    pub fn with_thumbnail(mut self, thumbnail: String) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn with_url(mut self, url: String) -> Self {
        self.url = url;
        self
    }

    /// Replaces the queue with just this episode.
    pub fn play(self) -> PlayerAction {
        PlayerAction::Play(self)
    }
}
