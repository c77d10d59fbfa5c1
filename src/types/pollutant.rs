//! Defines the closed set of pollutant measures carried by the dataset.

use crate::pipeline::PipelineError;
use std::fmt;
use std::str::FromStr;

/// One of the four pollutant concentration measures in the dataset.
///
/// The dashboard renders one chart per pollutant, in the order of
/// [`Pollutant::ALL`]. That order is also the join order used when the four
/// per-pollutant averages are combined into one wide table.
///
/// # Examples
///
/// ```
/// use aqdash::Pollutant;
///
/// assert_eq!(Pollutant::Pm2_5.column_name(), "PM2_5");
/// assert_eq!(Pollutant::ALL.len(), 4);
/// assert_eq!("NO2".parse::<Pollutant>().unwrap(), Pollutant::No2);
/// assert!("temperature".parse::<Pollutant>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    /// Fine particulate matter (diameter below 2.5 micrometers).
    Pm2_5,
    /// Coarse particulate matter (diameter below 10 micrometers).
    Pm10,
    /// Nitrogen dioxide.
    No2,
    /// Sulfur dioxide.
    So2,
}

impl Pollutant {
    /// All pollutants, in chart and join order.
    pub const ALL: [Pollutant; 4] = [
        Pollutant::Pm2_5,
        Pollutant::Pm10,
        Pollutant::No2,
        Pollutant::So2,
    ];

    /// The dataset column holding this pollutant's readings.
    pub fn column_name(self) -> &'static str {
        match self {
            Pollutant::Pm2_5 => "PM2_5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
        }
    }

    /// The four pollutant column names, in [`Pollutant::ALL`] order.
    pub fn column_names() -> [&'static str; 4] {
        Self::ALL.map(Pollutant::column_name)
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

impl FromStr for Pollutant {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|pollutant| pollutant.column_name() == s)
            .copied()
            .ok_or_else(|| PipelineError::InvalidColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_follow_chart_order() {
        assert_eq!(Pollutant::column_names(), ["PM2_5", "PM10", "NO2", "SO2"]);
    }

    #[test]
    fn parses_known_columns() {
        for pollutant in Pollutant::ALL {
            assert_eq!(
                pollutant.column_name().parse::<Pollutant>().unwrap(),
                pollutant
            );
        }
    }

    #[test]
    fn rejects_unknown_columns() {
        let err = "CO".parse::<Pollutant>().unwrap_err();
        assert!(matches!(err, PipelineError::InvalidColumn(ref name) if name == "CO"));
    }
}
