//! Assembles both chart grids from one set of sidebar selections.

use crate::error::AirQualityError;
use crate::filtering::ReadingsFrameFilterExt;
use crate::pipeline::categorize::{category_levels, CategoryLevelMode};
use crate::pipeline::combine::combine_daily;
use crate::types::chart::{BarChartSpec, TimeSeriesSpec};
use crate::types::pollutant::Pollutant;
use crate::types::readings_frame::{
    ReadingsLazyFrame, CATEGORY_COLUMN, DATETIME_COLUMN, STATION_COLUMN,
};
use crate::types::selection::{CategorySelection, StationSelection};
use chrono::NaiveDate;
use polars::prelude::DataFrame;

/// One interaction's worth of sidebar state.
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    /// Inclusive date bounds from the range picker; `None` keeps every date.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// The station multiselect state.
    pub stations: StationSelection,
    /// The category selectbox state.
    pub category: CategorySelection,
}

/// The two collected tables a render pass draws from.
///
/// The two tables are derived from *different* views of the readings. The
/// date range bounds only the combined table; the station and category
/// selections narrow only the category level table, starting again from the
/// unbounded readings. Widening one control therefore never changes the other
/// grid.
///
/// An empty filter combination produces empty tables, not errors; a renderer
/// must tolerate charts with zero series or bars.
///
/// # Examples
///
/// ```no_run
/// # use aqdash::{AirQuality, CategoryLevelMode, DashboardFrames, FilterSelection};
/// # use aqdash::{CategorySelection, StationSelection};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AirQuality::new().await?;
/// let readings = client.readings().call().await?;
///
/// let selection = FilterSelection {
///     date_range: None,
///     stations: StationSelection::from_labels(["Aotizhongxin"]),
///     category: CategorySelection::All,
/// };
/// let frames = DashboardFrames::build(&readings, &selection, CategoryLevelMode::default())?;
///
/// for spec in frames.time_series_charts() {
///     println!("{}: {} rows", spec.title, spec.data.height());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DashboardFrames {
    /// Per-(datetime, station) averages of all four pollutants.
    pub combined: DataFrame,
    /// The category level table (see [`CategoryLevelMode`]).
    pub category_levels: DataFrame,
}

impl DashboardFrames {
    /// Runs the whole pipeline for one interaction and collects both tables.
    pub fn build(
        readings: &ReadingsLazyFrame,
        selection: &FilterSelection,
        mode: CategoryLevelMode,
    ) -> Result<Self, AirQualityError> {
        let dated = match selection.date_range {
            Some((start, end)) => readings.frame.clone().filter_date_range(start, end),
            None => readings.frame.clone(),
        };
        let combined = combine_daily(dated).collect()?;

        // Station and category narrowing starts from the unbounded readings,
        // not the date-bounded view; the two grids see different tables.
        let narrowed = readings
            .frame
            .clone()
            .filter_stations(&selection.stations)
            .filter_category(&selection.category);
        let category_levels = category_levels(narrowed, mode).collect()?;

        Ok(Self {
            combined,
            category_levels,
        })
    }

    /// One line chart spec per pollutant, in [`Pollutant::ALL`] order.
    pub fn time_series_charts(&self) -> Vec<TimeSeriesSpec> {
        Pollutant::ALL
            .iter()
            .map(|pollutant| TimeSeriesSpec {
                title: format!("{} Levels Over Time", pollutant.column_name()),
                data: self.combined.clone(),
                x: DATETIME_COLUMN,
                y: pollutant.column_name(),
                series: STATION_COLUMN,
            })
            .collect()
    }

    /// One bar chart spec per pollutant, in [`Pollutant::ALL`] order.
    pub fn category_charts(&self) -> Vec<BarChartSpec> {
        Pollutant::ALL
            .iter()
            .map(|pollutant| BarChartSpec {
                title: format!(
                    "Average {} Levels by Station and Category",
                    pollutant.column_name()
                ),
                data: self.category_levels.clone(),
                x: STATION_COLUMN,
                y: pollutant.column_name(),
                group: CATEGORY_COLUMN,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use polars::{df, prelude::*};

    fn ndt(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2013, 3, day)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2013, 3, day).unwrap()
    }

    fn readings() -> ReadingsLazyFrame {
        let df = df!(
            DATETIME_COLUMN => &[ndt(1), ndt(1), ndt(2), ndt(2)],
            STATION_COLUMN => &["StationA", "StationB", "StationA", "StationB"],
            CATEGORY_COLUMN => &["Baik", "Sedang", "Baik", "Bahaya"],
            "PM2_5" => &[10.0, 20.0, 30.0, 40.0],
            "PM10" => &[11.0, 21.0, 31.0, 41.0],
            "NO2" => &[1.0, 2.0, 3.0, 4.0],
            "SO2" => &[5.0, 6.0, 7.0, 8.0],
        )
        .unwrap();
        ReadingsLazyFrame::new(df.lazy())
    }

    fn stations_in(df: &DataFrame) -> Vec<String> {
        df.column(STATION_COLUMN)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .map(String::from)
            .collect()
    }

    #[test]
    fn station_filter_narrows_only_the_category_table() {
        let selection = FilterSelection {
            date_range: None,
            stations: StationSelection::Only(vec!["StationA".to_string()]),
            category: CategorySelection::All,
        };
        let frames =
            DashboardFrames::build(&readings(), &selection, CategoryLevelMode::Passthrough)
                .unwrap();

        assert!(stations_in(&frames.combined).contains(&"StationB".to_string()));
        assert!(stations_in(&frames.category_levels)
            .iter()
            .all(|station| station == "StationA"));
    }

    #[test]
    fn date_filter_narrows_only_the_combined_table() {
        let selection = FilterSelection {
            date_range: Some((date(1), date(1))),
            stations: StationSelection::All,
            category: CategorySelection::All,
        };
        let frames =
            DashboardFrames::build(&readings(), &selection, CategoryLevelMode::Passthrough)
                .unwrap();

        assert_eq!(frames.combined.height(), 2);
        assert_eq!(frames.category_levels.height(), 4);
    }

    #[test]
    fn empty_filter_combination_produces_empty_tables() {
        let selection = FilterSelection {
            date_range: None,
            stations: StationSelection::Only(vec![]),
            category: CategorySelection::All,
        };
        let frames =
            DashboardFrames::build(&readings(), &selection, CategoryLevelMode::Grouped).unwrap();

        assert_eq!(frames.category_levels.height(), 0);
        assert_eq!(frames.combined.height(), 4);
    }

    #[test]
    fn one_spec_per_pollutant_in_chart_order() {
        let frames = DashboardFrames::build(
            &readings(),
            &FilterSelection::default(),
            CategoryLevelMode::Passthrough,
        )
        .unwrap();

        let lines = frames.time_series_charts();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].title, "PM2_5 Levels Over Time");
        assert_eq!(lines[0].x, DATETIME_COLUMN);
        assert_eq!(lines[0].series, STATION_COLUMN);
        assert_eq!(lines[3].y, "SO2");

        let bars = frames.category_charts();
        assert_eq!(bars.len(), 4);
        assert_eq!(bars[1].title, "Average PM10 Levels by Station and Category");
        assert_eq!(bars[1].x, STATION_COLUMN);
        assert_eq!(bars[1].group, CATEGORY_COLUMN);
    }
}
