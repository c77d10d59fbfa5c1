use std::fmt;
use std::path::PathBuf;

/// Where the published dataset lives.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/Sulbae/Air-Quality-Analysis/main/dashboard/all_data.csv";

/// Where to load the readings CSV from.
///
/// The default is the published dataset URL. Each distinct source gets its own
/// parquet cache file and its own in-memory frame cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// Fetch the CSV over HTTP.
    Url(String),
    /// Read the CSV from the local filesystem.
    Path(PathBuf),
}

impl DataSource {
    pub fn url(url: impl Into<String>) -> Self {
        DataSource::Url(url.into())
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        DataSource::Path(path.into())
    }

    /// A deterministic, filesystem-safe stem naming this source's parquet
    /// cache file.
    pub(crate) fn cache_stem(&self) -> String {
        let raw = match self {
            DataSource::Url(url) => url.clone(),
            DataSource::Path(path) => path.to_string_lossy().into_owned(),
        };
        let mut stem: String = raw
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        stem.truncate(96);
        stem
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url(DEFAULT_DATA_URL.to_string())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
