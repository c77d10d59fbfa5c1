use crate::dataset::data_loader::DatasetLoader;
use crate::dataset::error::DatasetError;
use crate::dataset::source::DataSource;
use polars::prelude::LazyFrame;
use std::collections::{hash_map::Entry, HashMap};
use std::path::Path;
use tokio::sync::Mutex;

pub struct FrameFetcher {
    loader: DatasetLoader,
    lazyframe_cache: Mutex<HashMap<DataSource, LazyFrame>>,
}

impl FrameFetcher {
    pub fn new(cache_dir: &Path) -> Self {
        Self {
            loader: DatasetLoader::new(cache_dir),
            lazyframe_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Gets the readings LazyFrame for a source, using the in-memory cache if
    /// possible. A source is loaded at most once per session.
    pub async fn get_cache_lazyframe(
        &self,
        source: &DataSource,
    ) -> Result<LazyFrame, DatasetError> {
        // Fast path: already cached.
        {
            let cache = self.lazyframe_cache.lock().await;
            if let Some(cached_frame) = cache.get(source) {
                return Ok(cached_frame.clone());
            }
            // Not in cache, release the lock before loading.
        }

        // Slow path: load outside the lock, the fetch can take a while.
        let loaded_frame = self.loader.get_frame(source).await?;

        let mut cache = self.lazyframe_cache.lock().await;
        match cache.entry(source.clone()) {
            Entry::Occupied(entry) => {
                // Someone else finished loading while we were; use theirs.
                Ok(entry.get().clone())
            }
            Entry::Vacant(entry) => {
                entry.insert(loaded_frame.clone());
                Ok(loaded_frame)
            }
        }
    }
}
