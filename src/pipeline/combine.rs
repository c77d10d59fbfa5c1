//! Builds the wide per-(datetime, station) table behind the time series grid.

use crate::pipeline::aggregate::daily_averages;
use crate::types::pollutant::Pollutant;
use crate::types::readings_frame::{DATETIME_COLUMN, STATION_COLUMN};
use polars::prelude::{col, cols, JoinArgs, JoinType, LazyFrame, SortMultipleOptions};

/// Combines the four per-pollutant averages into one wide table keyed by
/// (datetime, station).
///
/// Each pollutant is averaged separately with [`daily_averages`], then the
/// four results are inner-joined pairwise on the shared key in
/// [`Pollutant::ALL`] order. A key must appear in all four averages to appear
/// in the result. After joining, the table is grouped by the key and averaged
/// once more, so any duplicate key a join introduces collapses back to a
/// single row; when the keys are already unique this recomputation changes
/// nothing.
///
/// The result is sorted by (datetime, station) ascending and is a pure
/// function of its input: re-evaluating it over the same readings yields the
/// same table.
pub fn combine_daily(readings: LazyFrame) -> LazyFrame {
    let key = [col(DATETIME_COLUMN), col(STATION_COLUMN)];

    let mut combined = daily_averages(readings.clone(), Pollutant::ALL[0]);
    for pollutant in &Pollutant::ALL[1..] {
        combined = combined.join(
            daily_averages(readings.clone(), *pollutant),
            key.clone(),
            key.clone(),
            JoinArgs::new(JoinType::Inner),
        );
    }

    combined
        .group_by([col(DATETIME_COLUMN), col(STATION_COLUMN)])
        .agg([cols(Pollutant::column_names()).mean()])
        .sort(
            [DATETIME_COLUMN, STATION_COLUMN],
            SortMultipleOptions::default(),
        )
}
