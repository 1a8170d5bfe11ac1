mod api_episode;
mod config;
mod episode_detail;
mod fetch_error;
pub mod format;
mod page;

pub use api_episode::{ApiEpisode, ApiFile};
pub use config::LoaderConfig;
pub use episode_detail::{EpisodeDetail, StaticProps};
pub use fetch_error::FetchError;
pub use page::EpisodePage;

use chrono::Locale;
use std::sync::Arc;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone)]
/// Fetches episode metadata from the podcast API.
pub struct Loader {
    config: Arc<LoaderConfig>,
    base_url: Url,
    locale: Locale,
}

impl Loader {
    pub fn new(config: LoaderConfig) -> Result<Loader, FetchError> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::Config(format!(
                "{} cannot be a base url",
                config.base_url
            )));
        }

        let locale = Locale::try_from(config.locale.as_str())
            .map_err(|_| FetchError::Config(format!("unknown locale {}", config.locale)))?;

        Ok(Loader {
            config: Arc::new(config),
            base_url,
            locale,
        })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// `{base_url}/episodes/{slug}`, with the slug escaped as a single path segment.
    ///
    /// Dot segments and the empty slug cannot be expressed as a segment; see `is_routable`.
    pub fn episode_url(&self, slug: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("episodes").push(slug);
        }

        url
    }

    /// Whether `slug` survives as its own segment in `episode_url`.
    pub fn is_routable(slug: &str) -> bool {
        !matches!(slug, "" | "." | "..")
    }

    pub async fn fetch_episode(&self, slug: &str) -> Result<EpisodeDetail, FetchError> {
        // These would address the episode list instead of an episode.
        if !Loader::is_routable(slug) {
            return Err(FetchError::NotFound(slug.to_owned()));
        }

        let url = self.episode_url(slug);
        debug!(%url, "fetch episode");

        let now = std::time::Instant::now();
        let episode = ApiEpisode::fetch(&url, slug).await?;
        debug!(elapsed = ?now.elapsed(), "fetched episode");

        episode.to_episode_detail(self.locale)
    }

    /// Everything the episode page needs, plus how long it stays fresh.
    pub async fn static_props(&self, slug: &str) -> Result<StaticProps, FetchError> {
        Ok(StaticProps {
            episode: self.fetch_episode(slug).await?,
            revalidate: self.config.revalidate(),
        })
    }
}
