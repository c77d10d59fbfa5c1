mod aggregate;
mod categorize;
mod combine;
mod dashboard;
mod error;

pub use aggregate::{daily_averages, daily_averages_column};
pub use categorize::{category_levels, CategoryLevelMode};
pub use combine::combine_daily;
pub use dashboard::{DashboardFrames, FilterSelection};
pub use error::PipelineError;
