//! Chart specifications handed to the rendering surface.
//!
//! The library never draws anything itself. [`crate::DashboardFrames`]
//! produces these specs, which pair a collected `DataFrame` with the column
//! roles a backend needs to draw the chart. The bundled demo renders them
//! with plotlars; any other backend can consume them the same way.

use polars::prelude::DataFrame;

/// One line chart of a pollutant over time, one series per station.
#[derive(Debug, Clone)]
pub struct TimeSeriesSpec {
    /// Chart heading, e.g. "PM2_5 Levels Over Time".
    pub title: String,
    /// The combined per-(datetime, station) averages.
    pub data: DataFrame,
    /// Column providing the x axis (timestamps).
    pub x: &'static str,
    /// Column providing the y axis (one pollutant's averages).
    pub y: &'static str,
    /// Column splitting the data into one line per value.
    pub series: &'static str,
}

/// One bar chart of a pollutant's levels by station, grouped by category.
#[derive(Debug, Clone)]
pub struct BarChartSpec {
    /// Chart heading, e.g. "Average PM2_5 Levels by Station and Category".
    pub title: String,
    /// The category level table.
    pub data: DataFrame,
    /// Column providing the bar labels (stations).
    pub x: &'static str,
    /// Column providing the bar heights (one pollutant).
    pub y: &'static str,
    /// Column grouping and coloring the bars (categories).
    pub group: &'static str,
}
