pub mod planner;
pub mod waypoint;

pub use planner::{gate_center, gate_waypoints, plan_path, plan_path_from_rows, PathSummary};
pub use waypoint::Waypoint;
