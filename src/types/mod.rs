pub mod chart;
pub mod pollutant;
pub mod readings_frame;
pub mod selection;
