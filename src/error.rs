use crate::dataset::error::DatasetError;
use crate::pipeline::PipelineError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirQualityError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Failed to create cache directory '{}'", .0.display())]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to determine cache directory")]
    CacheDirResolution(#[source] std::io::Error),

    #[error("Failed to read config file '{}'", .0.display())]
    ConfigRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file '{}'", .0.display())]
    ConfigParse(PathBuf, #[source] serde_json::Error),

    #[error("Failed processing DataFrame: {0}")]
    Polars(#[from] PolarsError),
}
