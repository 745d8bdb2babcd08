pub mod log;
pub mod report;

pub use log::LogManager;
pub use report::{format_path, format_waypoint};
