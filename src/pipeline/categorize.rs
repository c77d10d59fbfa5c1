//! Produces the table behind the bar chart grid.

use crate::types::pollutant::Pollutant;
use crate::types::readings_frame::{CATEGORY_COLUMN, STATION_COLUMN};
use polars::prelude::{col, cols, LazyFrame, SortMultipleOptions};

/// How [`category_levels`] shapes its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryLevelMode {
    /// Return the narrowed readings unchanged, one row per reading. The bar
    /// charts then average bar heights themselves. This is what the dashboard
    /// ships with today.
    // TODO: switch the dashboard default to Grouped once the bar charts are
    // confirmed to expect pre-aggregated bars.
    #[default]
    Passthrough,
    /// Aggregate to one row per (station, category) carrying the mean of the
    /// four pollutant columns.
    Grouped,
}

/// Computes the category level table for the bar chart grid.
///
/// With [`CategoryLevelMode::Passthrough`] the input frame is returned as-is.
/// With [`CategoryLevelMode::Grouped`] the readings are grouped by (station,
/// category) and the four pollutant columns are averaged, sorted by (station,
/// category) ascending.
pub fn category_levels(readings: LazyFrame, mode: CategoryLevelMode) -> LazyFrame {
    match mode {
        CategoryLevelMode::Passthrough => readings,
        CategoryLevelMode::Grouped => readings
            .group_by([col(STATION_COLUMN), col(CATEGORY_COLUMN)])
            .agg([cols(Pollutant::column_names()).mean()])
            .sort(
                [STATION_COLUMN, CATEGORY_COLUMN],
                SortMultipleOptions::default(),
            ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::readings_frame::DATETIME_COLUMN;
    use chrono::{NaiveDate, NaiveDateTime};
    use polars::{df, prelude::*};

    fn ndt(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2013, 3, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn sample() -> LazyFrame {
        df!(
            DATETIME_COLUMN => &[ndt(1), ndt(2), ndt(3), ndt(4)],
            STATION_COLUMN => &["StationA", "StationA", "StationA", "StationB"],
            CATEGORY_COLUMN => &["Baik", "Baik", "Sedang", "Baik"],
            "PM2_5" => &[10.0, 20.0, 40.0, 8.0],
            "PM10" => &[12.0, 24.0, 48.0, 9.0],
            "NO2" => &[1.0, 3.0, 5.0, 7.0],
            "SO2" => &[2.0, 4.0, 6.0, 8.0],
        )
        .unwrap()
        .lazy()
    }

    #[test]
    fn passthrough_returns_input_unchanged() {
        let input = sample().collect().unwrap();
        let output = category_levels(sample(), CategoryLevelMode::Passthrough)
            .collect()
            .unwrap();
        assert!(output.equals(&input));
    }

    #[test]
    fn grouped_averages_per_station_and_category() {
        let output = category_levels(sample(), CategoryLevelMode::Grouped)
            .collect()
            .unwrap();

        let expected = df!(
            STATION_COLUMN => &["StationA", "StationA", "StationB"],
            CATEGORY_COLUMN => &["Baik", "Sedang", "Baik"],
            "PM2_5" => &[15.0, 40.0, 8.0],
            "PM10" => &[18.0, 48.0, 9.0],
            "NO2" => &[2.0, 5.0, 7.0],
            "SO2" => &[3.0, 6.0, 8.0],
        )
        .unwrap();
        assert!(
            output.equals(&expected),
            "expected {expected:?}, got {output:?}"
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let empty = sample().filter(col("PM2_5").gt(lit(1000.0f64)));
        let output = category_levels(empty, CategoryLevelMode::Grouped)
            .collect()
            .unwrap();
        assert_eq!(output.height(), 0);
    }
}
