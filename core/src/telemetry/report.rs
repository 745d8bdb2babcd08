use crate::path::Waypoint;

/// One console line of the path report.
pub fn format_waypoint(index: usize, waypoint: &Waypoint) -> String {
    format!(
        "{:02} | x: {:.3} y: {:.3} z: {:.3} yaw: {:.3}",
        index, waypoint.x, waypoint.y, waypoint.z, waypoint.yaw
    )
}

pub fn format_path(waypoints: &[Waypoint]) -> Vec<String> {
    waypoints
        .iter()
        .enumerate()
        .map(|(index, waypoint)| format_waypoint(index, waypoint))
        .collect()
}
