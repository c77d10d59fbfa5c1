use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid pollutant column '{0}', expected one of: PM2_5, PM10, NO2, SO2")]
    InvalidColumn(String),
}
