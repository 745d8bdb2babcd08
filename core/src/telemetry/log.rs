use crate::path::Waypoint;
use crate::telemetry::report::format_path;
use log::info;

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn record_path(&self, waypoints: &[Waypoint]) {
        for line in format_path(waypoints) {
            info!("{}", line);
        }
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
