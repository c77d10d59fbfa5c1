use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to create cache directory '{}'", .0.display())]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Data download failed")]
    DownloadIo(#[from] std::io::Error),

    #[error("Failed to read dataset file '{}'", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Errors during CSV reading (inside blocking task)
    #[error("I/O error processing CSV data from '{source_id}'")]
    CsvReadIo {
        source_id: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Parsing error processing CSV data from '{source_id}'")]
    CsvReadPolars {
        source_id: String,
        #[source]
        source: PolarsError,
    },

    #[error("Required column '{column}' not found in dataset from '{source_id}'")]
    MissingColumn { source_id: String, column: String },

    #[error("Could not coerce the datetime column of dataset from '{source_id}'")]
    DatetimeParse {
        source_id: String,
        #[source]
        source: PolarsError,
    },

    // Errors during parquet writing (inside blocking task)
    #[error("I/O error writing parquet cache file '{}'", .0.display())]
    ParquetWriteIo(PathBuf, #[source] std::io::Error),
    #[error("Encoding error writing parquet cache file '{}'", .0.display())]
    ParquetWritePolars(PathBuf, #[source] PolarsError),

    #[error("Failed to scan parquet cache file '{}'", .0.display())]
    ParquetScan(PathBuf, #[source] PolarsError),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
