use crate::format::{duration_to_time_string, format_published_at};
use crate::{EpisodeDetail, FetchError};
use chrono::Locale;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use surf::StatusCode;
use url::Url;

#[derive(Debug, Deserialize)]
pub struct ApiFile {
    #[serde(default)]
    pub url: String,

    /// Seconds. Some servers send a number, some a numeric string.
    #[serde(deserialize_with = "seconds")]
    pub duration: u64,
}

#[derive(Debug, Deserialize)]
pub struct ApiEpisode {
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub thumbnail: String,

    #[serde(default)]
    pub members: String,

    /// ISO-8601.
    pub published_at: String,

    #[serde(default)]
    pub description: String,

    pub file: ApiFile,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Seconds {
    Number(f64),
    Text(String),
}

fn seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let seconds = match Seconds::deserialize(deserializer)? {
        Seconds::Number(seconds) => seconds,
        Seconds::Text(text) => text.trim().parse::<f64>().map_err(D::Error::custom)?,
    };

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(D::Error::custom(format!("invalid duration {}", seconds)));
    }

    Ok(seconds as u64)
}

impl ApiEpisode {
    pub async fn fetch(url: &Url, slug: &str) -> Result<ApiEpisode, FetchError> {
        let mut res = surf::get(url.as_str())
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        match res.status() {
            StatusCode::NotFound => return Err(FetchError::NotFound(slug.to_owned())),
            status if !status.is_success() => return Err(FetchError::Status(status as u16)),
            _ => {}
        }

        let body = res
            .body_string()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        Ok(serde_json::from_str(&body)?)
    }

    pub fn to_episode_detail(&self, locale: Locale) -> Result<EpisodeDetail, FetchError> {
        Ok(EpisodeDetail {
            id: self.id.clone(),
            title: self.title.clone(),
            thumbnail: self.thumbnail.clone(),
            members: self.members.clone(),
            published_at: format_published_at(&self.published_at, locale)?,
            duration: self.file.duration,
            duration_as_string: duration_to_time_string(self.file.duration),
            description: self.description.clone(),
            url: self.file.url.clone(),
        })
    }
}
