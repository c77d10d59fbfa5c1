mod aqdash;
mod config;
mod dataset;
mod error;
mod filtering;
mod pipeline;
mod types;
mod utils;

pub use aqdash::*;
pub use error::AirQualityError;

pub use config::DashboardConfig;
pub use dataset::error::DatasetError;
pub use dataset::source::{DataSource, DEFAULT_DATA_URL};
pub use filtering::ReadingsFrameFilterExt;

pub use pipeline::{
    category_levels, combine_daily, daily_averages, daily_averages_column, CategoryLevelMode,
    DashboardFrames, FilterSelection, PipelineError,
};

pub use types::chart::{BarChartSpec, TimeSeriesSpec};
pub use types::pollutant::Pollutant;
pub use types::readings_frame::{
    ReadingsLazyFrame, CATEGORY_COLUMN, DATETIME_COLUMN, STATION_COLUMN,
};
pub use types::selection::{
    CategorySelection, StationSelection, ALL_CATEGORIES_LABEL, ALL_STATIONS_LABEL,
    CATEGORY_SEVERITY_ORDER,
};
