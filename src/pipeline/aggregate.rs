//! Per-pollutant averaging of the readings table.

use crate::pipeline::error::PipelineError;
use crate::types::pollutant::Pollutant;
use crate::types::readings_frame::{DATETIME_COLUMN, STATION_COLUMN};
use polars::prelude::{col, LazyFrame, SortMultipleOptions};

/// Averages one pollutant per (datetime, station) pair.
///
/// Missing readings are ignored by the mean; a group whose readings are all
/// missing averages to a missing value, never to zero. The result carries one
/// row per key, sorted by (datetime, station) ascending so downstream joins
/// are deterministic.
///
/// # Examples
///
/// ```
/// use aqdash::{daily_averages, Pollutant};
/// use chrono::NaiveDate;
/// use polars::{df, prelude::*};
///
/// let midnight = NaiveDate::from_ymd_opt(2013, 1, 1)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
/// let readings = df!(
///     "datetime" => &[midnight, midnight],
///     "station" => &["Aotizhongxin", "Aotizhongxin"],
///     "PM2_5" => &[10.0, 20.0],
/// )?;
///
/// let averaged = daily_averages(readings.lazy(), Pollutant::Pm2_5).collect()?;
/// assert_eq!(averaged.height(), 1);
/// assert_eq!(averaged.column("PM2_5")?.f64()?.get(0), Some(15.0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn daily_averages(readings: LazyFrame, pollutant: Pollutant) -> LazyFrame {
    readings
        .group_by([col(DATETIME_COLUMN), col(STATION_COLUMN)])
        .agg([col(pollutant.column_name()).mean()])
        .sort(
            [DATETIME_COLUMN, STATION_COLUMN],
            SortMultipleOptions::default(),
        )
}

/// Like [`daily_averages`], addressed by column name.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidColumn`] when `column` is not one of the
/// four pollutant columns. That is a programming error in the caller, not a
/// data condition.
pub fn daily_averages_column(
    readings: LazyFrame,
    column: &str,
) -> Result<LazyFrame, PipelineError> {
    let pollutant: Pollutant = column.parse()?;
    Ok(daily_averages(readings, pollutant))
}
