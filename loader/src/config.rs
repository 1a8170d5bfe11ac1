use crate::FetchError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Where `/episodes/{slug}` lives.
    pub base_url: String,

    /// Used for month names in publish dates.
    pub locale: String,

    /// How long a generated page is good for.
    pub revalidate_secs: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            base_url: String::from("http://localhost:3333"),
            locale: String::from("pt_BR"),
            revalidate_secs: 60 * 60 * 24,
        }
    }
}

impl LoaderConfig {
    pub fn from_yaml(text: &str) -> Result<LoaderConfig, FetchError> {
        serde_yaml::from_str(text).map_err(|err| FetchError::Config(err.to_string()))
    }

    pub fn load(path: &Path) -> Result<LoaderConfig, FetchError> {
        let text = std::fs::read_to_string(path)
            .map_err(|err| FetchError::Config(format!("{}: {}", path.display(), err)))?;

        LoaderConfig::from_yaml(&text)
    }

    pub fn revalidate(&self) -> Duration {
        Duration::from_secs(self.revalidate_secs)
    }
}
