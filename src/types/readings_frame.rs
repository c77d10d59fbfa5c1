//! Contains the `ReadingsLazyFrame` structure for lazy operations on the
//! hourly air quality readings table.

use crate::error::AirQualityError;
use crate::filtering::ReadingsFrameFilterExt;
use crate::types::selection::{CategorySelection, StationSelection};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::{col, Expr, LazyFrame, SortOptions, TimeUnit};

/// Name of the timestamp column in the readings table.
pub const DATETIME_COLUMN: &str = "datetime";
/// Name of the monitoring station column in the readings table.
pub const STATION_COLUMN: &str = "station";
/// Name of the air quality category column in the readings table.
pub const CATEGORY_COLUMN: &str = "category";

/// A wrapper around a Polars `LazyFrame` holding hourly air quality readings.
///
/// The frame always carries the columns `datetime` (millisecond timestamps),
/// `station`, `category` and the four pollutant columns. Instances are
/// obtained via [`crate::AirQuality::readings`].
///
/// Every method returns a *new* frame; the receiver is never mutated. Work is
/// lazy until `.frame.collect()` (or one of the widget helpers, which collect
/// internally).
///
/// # Errors
///
/// Operations that trigger computation on the underlying `LazyFrame` (such as
/// calling `.collect()`) can return a [`polars::prelude::PolarsError`].
#[derive(Clone)]
pub struct ReadingsLazyFrame {
    /// The underlying Polars LazyFrame containing the readings.
    pub frame: LazyFrame,
}

impl ReadingsLazyFrame {
    /// Wraps a `LazyFrame` assumed to carry the readings schema.
    ///
    /// Typically called internally by the [`crate::AirQuality`] client.
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Filters the readings with an arbitrary Polars predicate expression.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aqdash::AirQuality;
    /// use polars::prelude::{col, lit};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AirQuality::new().await?;
    /// let readings = client.readings().call().await?;
    ///
    /// // Hours with a PM2.5 reading above 150
    /// let heavy = readings.filter(col("PM2_5").gt(lit(150.0f64)));
    /// let df = heavy.frame.collect()?;
    /// println!("{df}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter(&self, predicate: Expr) -> ReadingsLazyFrame {
        ReadingsLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps readings whose date component lies in `[start, end]`, both ends
    /// inclusive.
    pub fn date_range(&self, start: NaiveDate, end: NaiveDate) -> ReadingsLazyFrame {
        ReadingsLazyFrame::new(self.frame.clone().filter_date_range(start, end))
    }

    /// Narrows the readings to the given station selection.
    pub fn stations(&self, selection: &StationSelection) -> ReadingsLazyFrame {
        ReadingsLazyFrame::new(self.frame.clone().filter_stations(selection))
    }

    /// Narrows the readings to the given category selection.
    pub fn category(&self, selection: &CategorySelection) -> ReadingsLazyFrame {
        ReadingsLazyFrame::new(self.frame.clone().filter_category(selection))
    }

    /// Returns the earliest and latest timestamp in the readings, for seeding
    /// the date range picker. `Ok(None)` when the frame is empty.
    pub fn date_span(&self) -> Result<Option<(NaiveDateTime, NaiveDateTime)>, AirQualityError> {
        let df = self
            .frame
            .clone()
            .select([
                col(DATETIME_COLUMN).min().alias("start"),
                col(DATETIME_COLUMN).max().alias("end"),
            ])
            .collect()?;

        let start = df.column("start")?.datetime()?;
        let end = df.column("end")?.datetime()?;
        let time_unit = start.time_unit();
        match (start.get(0), end.get(0)) {
            (Some(start), Some(end)) => Ok(timestamp_to_naive(start, time_unit)
                .zip(timestamp_to_naive(end, time_unit))),
            _ => Ok(None),
        }
    }

    /// The distinct station identifiers, sorted, for the multiselect options.
    pub fn station_labels(&self) -> Result<Vec<String>, AirQualityError> {
        self.distinct_labels(STATION_COLUMN)
    }

    /// The distinct category labels, sorted, for the selectbox options.
    pub fn category_labels(&self) -> Result<Vec<String>, AirQualityError> {
        self.distinct_labels(CATEGORY_COLUMN)
    }

    fn distinct_labels(&self, column: &str) -> Result<Vec<String>, AirQualityError> {
        let df = self
            .frame
            .clone()
            .select([col(column).unique().sort(SortOptions::default())])
            .collect()?;
        Ok(df
            .column(column)?
            .str()?
            .into_iter()
            .flatten()
            .map(String::from)
            .collect())
    }
}

fn timestamp_to_naive(timestamp: i64, time_unit: TimeUnit) -> Option<NaiveDateTime> {
    match time_unit {
        TimeUnit::Milliseconds => {
            DateTime::from_timestamp_millis(timestamp).map(|dt| dt.naive_utc())
        }
        TimeUnit::Microseconds => {
            DateTime::from_timestamp_micros(timestamp).map(|dt| dt.naive_utc())
        }
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(timestamp).naive_utc()),
    }
}
