//! demos/dashboard.rs
//!
//! This demo loads the published air quality dataset, runs the dashboard
//! pipeline over the full date span and renders both chart grids with the
//! `plotlars` crate.
//!
//! To run this demo:
//! cargo run --example dashboard --features examples

use std::error::Error;

use aqdash::{AirQuality, CategoryLevelMode, DashboardFrames, FilterSelection};
use plotlars::{BarPlot, Legend, Plot, Text, TimeSeriesPlot};
use polars::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    println!("Fetching the air quality dataset...");

    // 1. Create a client and load the readings
    let client = AirQuality::new().await?;
    let readings = client.readings().call().await?;

    // 2. Run the pipeline over the full span with nothing narrowed
    let selection = FilterSelection {
        date_range: readings
            .date_span()?
            .map(|(start, end)| (start.date(), end.date())),
        ..FilterSelection::default()
    };
    let frames = DashboardFrames::build(&readings, &selection, CategoryLevelMode::Passthrough)?;

    // 3. One time series chart per station, all four pollutants as series
    println!("Generating pollutant time series...");
    for station in readings.station_labels()? {
        let mask = frames
            .combined
            .column("station")?
            .str()?
            .equal(station.as_str());
        let station_df = frames.combined.filter(&mask)?;

        let title = format!("Pollutant Levels Over Time ({station})");
        TimeSeriesPlot::builder()
            .data(&station_df)
            .x("datetime")
            .y("PM2_5")
            .additional_series(vec!["PM10", "NO2", "SO2"])
            .plot_title(Text::from(title.as_str()).size(18))
            .x_title("Date")
            .y_title("Pollutant Level")
            .legend(&Legend::new().x(0.05).y(0.9))
            .build()
            .plot();
    }

    // 4. One bar chart per pollutant, grouped by category
    println!("Generating category level bar charts...");
    for spec in frames.category_charts() {
        BarPlot::builder()
            .data(&spec.data)
            .labels(spec.x)
            .values(spec.y)
            .group(spec.group)
            .plot_title(Text::from(spec.title.as_str()).size(18))
            .x_title("Station")
            .y_title("Average Level")
            .legend(&Legend::new().x(0.05).y(0.9))
            .build()
            .plot();
    }

    println!("Plots shown in browser.");
    Ok(())
}
