use serde::{Serialize, Serializer};
use state::Episode;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// An episode, formatted for its detail page.
pub struct EpisodeDetail {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub members: String,
    /// Already localized, e.g. "8 jan 21".
    pub published_at: String,
    pub duration: u64,
    pub duration_as_string: String,
    pub description: String,
    pub url: String,
}

impl EpisodeDetail {
    /// What the player needs to queue this episode.
    pub fn to_episode(&self) -> Episode {
        Episode::default()
            .with_title(self.title.clone())
            .with_members(self.members.clone())
            .with_thumbnail(self.thumbnail.clone())
            .with_duration(self.duration)
            .with_url(self.url.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// What the page generator hands to the hosting platform.
pub struct StaticProps {
    pub episode: EpisodeDetail,

    /// The page should be regenerated after this long, serialized as seconds.
    #[serde(serialize_with = "as_secs")]
    pub revalidate: Duration,
}

fn as_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> EpisodeDetail {
        EpisodeDetail {
            id: String::from("como-virar-lider-desenvolvendo"),
            title: String::from("Como virar líder desenvolvendo"),
            thumbnail: String::from("https://storage.example.com/lider.jpg"),
            members: String::from("Diego e Richard"),
            published_at: String::from("8 jan 21"),
            duration: 3340,
            duration_as_string: String::from("00:55:40"),
            description: String::from("Lideranças técnicas."),
            url: String::from("https://storage.example.com/lider.m4a"),
        }
    }

    #[test]
    fn becomes_a_playable_episode() {
        let episode = detail().to_episode();

        assert_eq!(episode.title(), "Como virar líder desenvolvendo");
        assert_eq!(episode.members(), "Diego e Richard");
        assert_eq!(episode.thumbnail(), "https://storage.example.com/lider.jpg");
        assert_eq!(episode.duration(), 3340);
        assert_eq!(episode.url(), "https://storage.example.com/lider.m4a");
    }

    #[test]
    fn props_serialize_like_page_props() {
        let props = StaticProps {
            episode: detail(),
            revalidate: Duration::from_secs(60 * 60 * 24),
        };
        let json = serde_json::to_value(&props).unwrap();

        assert_eq!(json["revalidate"], 86400);
        assert_eq!(json["episode"]["publishedAt"], "8 jan 21");
        assert_eq!(json["episode"]["durationAsString"], "00:55:40");
    }
}
