use crate::dataset::error::DatasetError;
use crate::dataset::source::DataSource;
use crate::types::readings_frame::{CATEGORY_COLUMN, DATETIME_COLUMN, STATION_COLUMN};
use futures_util::TryStreamExt;
use log::{info, warn};
use polars::frame::DataFrame;
use polars::prelude::*;
use reqwest::Client;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::io::AsyncReadExt;
use tokio::{fs, task};
use tokio_util::io::StreamReader;

/// Columns every readings dataset must carry. Anything else in the CSV is
/// kept as-is.
const REQUIRED_COLUMNS: [&str; 7] = [
    DATETIME_COLUMN,
    STATION_COLUMN,
    CATEGORY_COLUMN,
    "PM2_5",
    "PM10",
    "NO2",
    "SO2",
];

pub struct DatasetLoader {
    cache_dir: PathBuf,
    download_client: Client,
}

impl DatasetLoader {
    pub fn new(cache_dir: &Path) -> DatasetLoader {
        let download_client = Client::new();
        DatasetLoader {
            cache_dir: cache_dir.to_path_buf(),
            download_client,
        }
    }

    /// Loads the readings table for a source. Handles caching and
    /// downloading. Returns a LazyFrame over the parquet cache file.
    ///
    /// On a cache miss the CSV is fetched and prepared: the `datetime` column
    /// is strictly parsed from text into millisecond timestamps, and every
    /// float column is rounded to two decimals (`f64::round` semantics, ties
    /// away from zero). Nothing else is validated; out-of-range
    /// concentrations pass through. The cache is never refreshed within a
    /// session.
    pub async fn get_frame(&self, source: &DataSource) -> Result<LazyFrame, DatasetError> {
        let cache_filename = format!("readings-{}.parquet", source.cache_stem());
        let parquet_path = self.cache_dir.join(&cache_filename);

        if fs::metadata(&parquet_path).await.is_ok() {
            info!("Cache hit for {} at {:?}", source, parquet_path);
        } else {
            warn!("Cache miss for {}. Downloading and processing.", source);

            let raw_bytes = self.fetch(source).await?;
            let df = Self::parse_readings(raw_bytes, source.to_string()).await?;

            fs::create_dir_all(&self.cache_dir)
                .await
                .map_err(|e| DatasetError::CacheDirCreation(self.cache_dir.clone(), e))?;

            Self::cache_dataframe(df, &parquet_path).await?;
            info!("Cached readings for {} to {:?}", source, parquet_path);
        }

        LazyFrame::scan_parquet(&parquet_path, Default::default())
            .map_err(|e| DatasetError::ParquetScan(parquet_path.clone(), e))
    }

    /// Fetches the raw CSV bytes for a source.
    async fn fetch(&self, source: &DataSource) -> Result<Vec<u8>, DatasetError> {
        match source {
            DataSource::Path(path) => fs::read(path).await.map_err(|e| DatasetError::FileRead {
                path: path.clone(),
                source: e,
            }),
            DataSource::Url(url) => {
                info!("Downloading dataset from {}", url);

                let response = self
                    .download_client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| DatasetError::NetworkRequest(url.clone(), e))?;

                let response = match response.error_for_status() {
                    Ok(resp) => resp,
                    Err(e) => {
                        warn!("HTTP error for {}: {:?}", url, e);
                        return Err(if let Some(status) = e.status() {
                            DatasetError::HttpStatus {
                                url: url.clone(),
                                status,
                                source: e,
                            }
                        } else {
                            DatasetError::NetworkRequest(url.clone(), e)
                        });
                    }
                };

                let stream = response
                    .bytes_stream()
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e));
                let mut reader = StreamReader::new(stream);
                let mut bytes = Vec::new();
                reader
                    .read_to_end(&mut bytes)
                    .await
                    .map_err(DatasetError::DownloadIo)?;
                info!("Downloaded {} bytes from {}", bytes.len(), url);
                Ok(bytes)
            }
        }
    }

    /// Parses raw CSV bytes into the readings DataFrame using a blocking
    /// task: read the CSV through a temp file, check the required columns,
    /// coerce `datetime`, round the float columns.
    async fn parse_readings(bytes: Vec<u8>, source_id: String) -> Result<DataFrame, DatasetError> {
        task::spawn_blocking(move || {
            let mut temp_file = NamedTempFile::new().map_err(|e| DatasetError::CsvReadIo {
                source_id: source_id.clone(),
                source: e,
            })?;
            temp_file
                .write_all(&bytes)
                .map_err(|e| DatasetError::CsvReadIo {
                    source_id: source_id.clone(),
                    source: e,
                })?;
            temp_file.flush().map_err(|e| DatasetError::CsvReadIo {
                source_id: source_id.clone(),
                source: e,
            })?;

            let df = CsvReadOptions::default()
                .with_has_header(true)
                .try_into_reader_with_file_path(Some(temp_file.path().to_path_buf()))
                .map_err(|e| DatasetError::CsvReadPolars {
                    source_id: source_id.clone(),
                    source: e,
                })?
                .finish()
                .map_err(|e| DatasetError::CsvReadPolars {
                    source_id: source_id.clone(),
                    source: e,
                })?;

            {
                let names = df.get_column_names_str();
                for column in REQUIRED_COLUMNS {
                    if !names.contains(&column) {
                        return Err(DatasetError::MissingColumn {
                            source_id: source_id.clone(),
                            column: column.to_string(),
                        });
                    }
                }
            }

            let parsed = df
                .lazy()
                .with_columns([col(DATETIME_COLUMN).str().to_datetime(
                    Some(TimeUnit::Milliseconds),
                    None,
                    StrptimeOptions::default(),
                    lit("raise"),
                )])
                .collect()
                .map_err(|e| DatasetError::DatetimeParse {
                    source_id: source_id.clone(),
                    source: e,
                })?;

            let rounded = parsed
                .lazy()
                .with_columns([dtype_col(&DataType::Float64).round(2)])
                .collect()
                .map_err(DatasetError::DataFrameProcessing)?;

            Ok(rounded)
        })
        .await?
    }

    /// Writes a DataFrame to a parquet file using spawn_blocking.
    /// ParquetWriter needs `&mut df`.
    async fn cache_dataframe(mut df: DataFrame, path: &Path) -> Result<(), DatasetError> {
        let path_buf = path.to_path_buf();
        task::spawn_blocking(move || {
            let file = std::fs::File::create(&path_buf)
                .map_err(|e| DatasetError::ParquetWriteIo(path_buf.clone(), e))?;
            ParquetWriter::new(file)
                .with_compression(ParquetCompression::Snappy)
                .finish(&mut df)
                .map_err(|e| DatasetError::ParquetWritePolars(path_buf, e))?;
            Ok::<(), DatasetError>(())
        })
        .await??;
        Ok(())
    }
}
