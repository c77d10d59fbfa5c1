//! Sidebar selection types: which stations and which category the bar chart
//! grid should be narrowed to.
//!
//! The dashboard UI presents a station multiselect and a category selectbox,
//! each carrying an "all" entry alongside the values found in the data. The
//! sentinel labels are mapped onto the `All` variants here so the rest of the
//! crate never compares raw widget strings.

/// The multiselect entry meaning "do not narrow by station".
pub const ALL_STATIONS_LABEL: &str = "All Station";

/// The selectbox entry meaning "do not narrow by category".
pub const ALL_CATEGORIES_LABEL: &str = "All Category";

/// The air quality categories from most to least severe, as the bar charts
/// order their legends.
pub const CATEGORY_SEVERITY_ORDER: [&str; 4] = ["Bahaya", "Tidak Sehat", "Sedang", "Baik"];

/// A station narrowing choice.
///
/// `Only(vec![])` is a valid selection and matches nothing: a multiselect the
/// user has emptied out yields an empty table, not the full one.
///
/// # Examples
///
/// ```
/// use aqdash::{StationSelection, ALL_STATIONS_LABEL};
///
/// let all = StationSelection::from_labels([ALL_STATIONS_LABEL, "Changping"]);
/// assert_eq!(all, StationSelection::All);
///
/// let some = StationSelection::from_labels(["Changping"]);
/// assert_eq!(some, StationSelection::Only(vec!["Changping".to_string()]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationSelection {
    /// Keep every station.
    All,
    /// Keep only the named stations.
    Only(Vec<String>),
}

impl StationSelection {
    /// Builds a selection from raw multiselect labels, resolving the
    /// [`ALL_STATIONS_LABEL`] sentinel.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.iter().any(|label| label == ALL_STATIONS_LABEL) {
            StationSelection::All
        } else {
            StationSelection::Only(labels)
        }
    }
}

impl Default for StationSelection {
    fn default() -> Self {
        StationSelection::All
    }
}

/// A category narrowing choice, from the single-select category widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    /// Keep every category.
    All,
    /// Keep only rows with this category label.
    Only(String),
}

impl CategorySelection {
    /// Builds a selection from the raw selectbox label, resolving the
    /// [`ALL_CATEGORIES_LABEL`] sentinel.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == ALL_CATEGORIES_LABEL {
            CategorySelection::All
        } else {
            CategorySelection::Only(label)
        }
    }
}

impl Default for CategorySelection {
    fn default() -> Self {
        CategorySelection::All
    }
}
