use serde::{Deserialize, Serialize};

/// One point on the planned path, in the launch frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Heading to hold at this point, radians.
    pub yaw: f64,
}

impl Waypoint {
    /// Terminator appended after the real path when it is written out.
    pub const RETURN_TO_LAUNCH: Waypoint = Waypoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        yaw: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64, yaw: f64) -> Self {
        Self { x, y, z, yaw }
    }

    pub fn approx_eq(&self, other: &Waypoint, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
            && (self.yaw - other.yaw).abs() <= epsilon
    }
}
