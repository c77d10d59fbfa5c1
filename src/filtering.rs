use crate::types::readings_frame::{CATEGORY_COLUMN, DATETIME_COLUMN, STATION_COLUMN};
use crate::types::selection::{CategorySelection, StationSelection};
use chrono::NaiveDate;
use polars::prelude::{col, lit, LazyFrame, NamedFrom, Series};

pub trait ReadingsFrameFilterExt {
    /// Filters a readings LazyFrame by a date range (inclusive).
    ///
    /// The comparison is against the date component of the `datetime` column,
    /// so a reading at any hour of `end` is kept.
    ///
    /// # Arguments
    /// * `start`: The first date to keep (inclusive).
    /// * `end`: The last date to keep (inclusive).
    ///
    /// # Returns
    /// A new `LazyFrame` with the filter applied. Potential errors occur
    /// during execution (e.g. `collect`).
    fn filter_date_range(self, start: NaiveDate, end: NaiveDate) -> LazyFrame;

    /// Narrows a readings LazyFrame to a station selection.
    ///
    /// [`StationSelection::All`] passes the frame through unchanged. An empty
    /// `Only` list matches nothing and yields an empty frame.
    fn filter_stations(self, selection: &StationSelection) -> LazyFrame;

    /// Narrows a readings LazyFrame to a category selection.
    ///
    /// [`CategorySelection::All`] passes the frame through unchanged.
    fn filter_category(self, selection: &CategorySelection) -> LazyFrame;
}

impl ReadingsFrameFilterExt for LazyFrame {
    fn filter_date_range(self, start: NaiveDate, end: NaiveDate) -> LazyFrame {
        self.filter(
            col(DATETIME_COLUMN)
                .dt()
                .date()
                .gt_eq(lit(start))
                .and(col(DATETIME_COLUMN).dt().date().lt_eq(lit(end))),
        )
    }

    fn filter_stations(self, selection: &StationSelection) -> LazyFrame {
        match selection {
            StationSelection::All => self,
            StationSelection::Only(names) => {
                let members = Series::new(STATION_COLUMN.into(), names.as_slice());
                self.filter(col(STATION_COLUMN).is_in(lit(members)))
            }
        }
    }

    fn filter_category(self, selection: &CategorySelection) -> LazyFrame {
        match selection {
            CategorySelection::All => self,
            CategorySelection::Only(label) => {
                self.filter(col(CATEGORY_COLUMN).eq(lit(label.clone())))
            }
        }
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use polars::{df, prelude::*};

    fn ndt(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2013, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2013, 3, day).unwrap()
    }

    fn sample() -> LazyFrame {
        df!(
            DATETIME_COLUMN => &[ndt(1, 0), ndt(1, 23), ndt(2, 0), ndt(3, 12)],
            STATION_COLUMN => &["Changping", "Aotizhongxin", "Changping", "Dingling"],
            CATEGORY_COLUMN => &["Baik", "Sedang", "Baik", "Bahaya"],
            "PM2_5" => &[10.0, 20.0, 30.0, 40.0],
        )
        .unwrap()
        .lazy()
    }

    #[test]
    fn full_span_date_range_is_identity() {
        let all = sample().collect().unwrap();
        let filtered = sample()
            .filter_date_range(date(1), date(3))
            .collect()
            .unwrap();
        assert!(filtered.equals(&all));
    }

    #[test]
    fn end_date_is_inclusive_for_late_hours() {
        // The 23:00 reading on day 1 must survive a range ending on day 1.
        let filtered = sample()
            .filter_date_range(date(1), date(1))
            .collect()
            .unwrap();
        assert_eq!(filtered.height(), 2);
    }

    #[test]
    fn all_stations_selection_is_identity() {
        let all = sample().collect().unwrap();
        let filtered = sample()
            .filter_stations(&StationSelection::All)
            .collect()
            .unwrap();
        assert!(filtered.equals(&all));
    }

    #[test]
    fn station_selection_keeps_only_members() {
        let filtered = sample()
            .filter_stations(&StationSelection::Only(vec!["Dingling".to_string()]))
            .collect()
            .unwrap();
        assert_eq!(filtered.height(), 1);
        assert_eq!(
            filtered.column(STATION_COLUMN).unwrap().str().unwrap().get(0),
            Some("Dingling")
        );
    }

    #[test]
    fn empty_station_selection_matches_nothing() {
        let filtered = sample()
            .filter_stations(&StationSelection::Only(vec![]))
            .collect()
            .unwrap();
        assert_eq!(filtered.height(), 0);
    }

    #[test]
    fn category_selection_keeps_only_equal_rows() {
        let filtered = sample()
            .filter_category(&CategorySelection::Only("Baik".to_string()))
            .collect()
            .unwrap();
        assert_eq!(filtered.height(), 2);
        let categories = filtered.column(CATEGORY_COLUMN).unwrap();
        assert!(categories
            .str()
            .unwrap()
            .into_iter()
            .all(|label| label == Some("Baik")));
    }

    #[test]
    fn all_categories_selection_is_identity() {
        let all = sample().collect().unwrap();
        let filtered = sample()
            .filter_category(&CategorySelection::All)
            .collect()
            .unwrap();
        assert!(filtered.equals(&all));
    }
}
