use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;

mod env;
mod search;

pub use search::SearchMode;

const ENV_DATA_ROOT: &str = "CATALOGUE_DATA_ROOT";
const ENV_FETCH_TIMEOUT_MS: &str = "CATALOGUE_FETCH_TIMEOUT_MS";

const DEFAULT_DATA_ROOT: &str = "data";
const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueConfig {
    pub data_root: PathBuf,
    pub fetch_timeout: Duration,
    pub search_mode: SearchMode,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from(DEFAULT_DATA_ROOT),
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
            search_mode: SearchMode::Scored,
        }
    }
}

impl CatalogueConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            data_root: env::read_non_empty_env(ENV_DATA_ROOT)
                .map_or_else(|| PathBuf::from(DEFAULT_DATA_ROOT), PathBuf::from),
            fetch_timeout: Duration::from_millis(env::read_env_u64(
                ENV_FETCH_TIMEOUT_MS,
                DEFAULT_FETCH_TIMEOUT_MS,
                1,
            )),
            search_mode: SearchMode::parse(
                std::env::var(search::ENV_SEARCH_MODE).ok().as_deref(),
            )?,
        })
    }

    #[must_use]
    pub fn with_data_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.data_root = root.into();
        self
    }
}
