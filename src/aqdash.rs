//! This module provides the main entry point for loading the air quality
//! dataset. It hands out lazy readings frames backed by a per-source cache,
//! so the one expensive fetch happens at most once per session.

use crate::config::DashboardConfig;
use crate::dataset::frame_fetcher::FrameFetcher;
use crate::dataset::source::DataSource;
use crate::error::AirQualityError;
use crate::types::readings_frame::ReadingsLazyFrame;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use bon::bon;
use std::path::PathBuf;

/// The client for loading air quality readings.
///
/// The client owns the dataset caches: downloaded sources are kept as parquet
/// files on disk and as `LazyFrame`s in memory, keyed by [`DataSource`].
/// Within a session a source is fetched at most once and never refreshed;
/// every interaction afterwards reworks the same frame.
///
/// Create an instance using [`AirQuality::new()`] for default behavior (the
/// system cache directory) or [`AirQuality::with_cache_folder()`] for a
/// custom cache location.
///
/// # Examples
///
/// ```no_run
/// # use aqdash::{AirQuality, AirQualityError};
/// # async fn run() -> Result<(), AirQualityError> {
/// let client = AirQuality::new().await?;
/// let readings = client.readings().call().await?;
/// # Ok(())
/// # }
/// ```
pub struct AirQuality {
    fetcher: FrameFetcher,
}

#[bon]
impl AirQuality {
    /// Creates a client with a specific cache directory.
    ///
    /// # Arguments
    ///
    /// * `cache_folder` - The directory to keep parquet cache files in. It is
    ///   created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AirQualityError::CacheDirCreation`] if the directory cannot
    /// be created, or exists but is not a directory.
    pub async fn with_cache_folder(cache_folder: PathBuf) -> Result<Self, AirQualityError> {
        ensure_cache_dir_exists(&cache_folder)
            .await
            .map_err(|e| AirQualityError::CacheDirCreation(cache_folder.clone(), e))?;
        Ok(Self {
            fetcher: FrameFetcher::new(&cache_folder),
        })
    }

    /// Creates a client using the default cache directory.
    ///
    /// The default is resolved with the `dirs` crate, typically
    /// `~/.cache/aqdash_cache` on Linux.
    ///
    /// # Errors
    ///
    /// Returns [`AirQualityError::CacheDirResolution`] if the system cache
    /// directory cannot be determined, or
    /// [`AirQualityError::CacheDirCreation`] if it cannot be created.
    pub async fn new() -> Result<Self, AirQualityError> {
        let cache_folder = get_cache_dir().map_err(AirQualityError::CacheDirResolution)?;
        Self::with_cache_folder(cache_folder).await
    }

    /// Creates a client from a [`DashboardConfig`], honoring its cache folder
    /// override.
    pub async fn from_config(config: &DashboardConfig) -> Result<Self, AirQualityError> {
        match &config.cache_folder {
            Some(folder) => Self::with_cache_folder(folder.clone()).await,
            None => Self::new().await,
        }
    }

    /// Loads the readings for a data source.
    ///
    /// The first call for a source downloads (or reads) the CSV, coerces the
    /// `datetime` column, rounds the float columns to two decimals and caches
    /// the result; subsequent calls are served from memory. The returned
    /// [`ReadingsLazyFrame`] is lazy, so chaining filters onto it costs
    /// nothing until collection.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.source(DataSource)`: Optional. Where to load the CSV from.
    ///   Defaults to the published dataset URL ([`crate::DEFAULT_DATA_URL`]).
    ///
    /// # Errors
    ///
    /// Returns [`AirQualityError::Dataset`] variants for network failures,
    /// unreadable files, missing required columns, or an unparseable
    /// `datetime` column. A datetime that fails to parse is fatal to the
    /// load; there are no partial results.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use aqdash::{AirQuality, AirQualityError, DataSource};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), AirQualityError> {
    /// let client = AirQuality::new().await?;
    ///
    /// // The published dataset
    /// let readings = client.readings().call().await?;
    ///
    /// // A local copy
    /// let local = client
    ///     .readings()
    ///     .source(DataSource::path("./all_data.csv"))
    ///     .call()
    ///     .await?;
    ///
    /// let df = local.frame.collect()?;
    /// println!("{}", df.head(Some(5)));
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn readings(
        &self,
        source: Option<DataSource>,
    ) -> Result<ReadingsLazyFrame, AirQualityError> {
        let source = source.unwrap_or_default();
        let frame = self
            .fetcher
            .get_cache_lazyframe(&source)
            .await
            .map_err(AirQualityError::from)?;
        Ok(ReadingsLazyFrame::new(frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{CategoryLevelMode, DashboardFrames, FilterSelection};

    const SAMPLE_CSV: &str = "\
datetime,station,category,PM2_5,PM10,NO2,SO2
2013-03-01 00:00:00,Aotizhongxin,Baik,10.0,20.0,30.0,4.0
2013-03-01 00:00:00,Aotizhongxin,Baik,20.0,40.0,50.0,6.0
2013-03-02 00:00:00,Changping,Sedang,8.0,16.0,15.0,2.0
";

    #[tokio::test]
    async fn end_to_end_from_local_csv() -> Result<(), AirQualityError> {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("all_data.csv");
        std::fs::write(&csv_path, SAMPLE_CSV).unwrap();

        let client = AirQuality::with_cache_folder(dir.path().join("cache")).await?;
        let readings = client
            .readings()
            .source(DataSource::path(&csv_path))
            .call()
            .await?;

        let span = readings.date_span()?.expect("non-empty dataset");
        assert_eq!(span.0.date().to_string(), "2013-03-01");
        assert_eq!(span.1.date().to_string(), "2013-03-02");
        assert_eq!(
            readings.station_labels()?,
            vec!["Aotizhongxin", "Changping"]
        );

        let frames = DashboardFrames::build(
            &readings,
            &FilterSelection::default(),
            CategoryLevelMode::Passthrough,
        )?;
        assert_eq!(frames.combined.height(), 2);
        assert_eq!(
            frames.combined.column("PM2_5")?.f64()?.get(0),
            Some(15.0)
        );
        assert_eq!(frames.category_levels.height(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn second_load_is_served_from_memory() -> Result<(), AirQualityError> {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("all_data.csv");
        std::fs::write(&csv_path, SAMPLE_CSV).unwrap();

        let client = AirQuality::with_cache_folder(dir.path().join("cache")).await?;
        let source = DataSource::path(&csv_path);
        let first = client.readings().source(source.clone()).call().await?;

        // Deleting the CSV must not break later loads of the same source.
        std::fs::remove_file(&csv_path).unwrap();
        let second = client.readings().source(source).call().await?;

        let first_df = first.frame.collect()?;
        let second_df = second.frame.collect()?;
        assert!(second_df.equals(&first_df));
        Ok(())
    }
}
