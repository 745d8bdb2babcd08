use crate::gate::{GateOrientation, GateRecord, GateRow};
use crate::path::waypoint::Waypoint;
use crate::prelude::{LayoutConfig, PlanResult};
use std::f64::consts::PI;

/// Center waypoint of a gate: shifted origin plus the lateral offset along global y.
pub fn gate_center(gate: &GateRecord, config: &LayoutConfig) -> Waypoint {
    let (x, y) = config.shifted(gate.x, gate.y);
    let yaw = gate.rotation * PI / 180.0;
    Waypoint::new(x, y + gate.offset_y, gate.z, yaw)
}

/// Approach, center and exit waypoints for one gate, in flight order.
///
/// Approach and exit are only emitted for a nonzero standoff distance, so the
/// result always holds between one and three points.
pub fn gate_waypoints(gate: &GateRecord, config: &LayoutConfig) -> Vec<Waypoint> {
    let center = gate_center(gate, config);
    let fix = GateOrientation::from_degrees(gate.rotation).corrections(config.gate_width);
    let (sin, cos) = center.yaw.sin_cos();

    let mut waypoints = Vec::with_capacity(3);
    if gate.waypoint_before != 0.0 {
        let before = gate.waypoint_before;
        waypoints.push(Waypoint::new(
            -cos * before + center.x,
            fix.sign_flip * sin * before + center.y + fix.lateral_fix,
            center.z,
            center.yaw,
        ));
    }
    waypoints.push(center);
    if gate.waypoint_after != 0.0 {
        let after = gate.waypoint_after;
        waypoints.push(Waypoint::new(
            cos * after + center.x,
            -fix.sign_flip * sin * after + center.y + fix.lateral_fix,
            center.z,
            center.yaw,
        ));
    }
    waypoints
}

/// Plans the full path through `gates` in course order.
pub fn plan_path(gates: &[GateRecord], config: &LayoutConfig) -> Vec<Waypoint> {
    gates
        .iter()
        .flat_map(|gate| gate_waypoints(gate, config))
        .collect()
}

pub fn plan_path_from_rows(rows: &[GateRow], config: &LayoutConfig) -> PlanResult<Vec<Waypoint>> {
    let gates = GateRecord::parse_all(rows)?;
    Ok(plan_path(&gates, config))
}

/// Waypoint counts for a course, split by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathSummary {
    pub gates: usize,
    pub approach: usize,
    pub center: usize,
    pub exit: usize,
}

impl PathSummary {
    pub fn of(gates: &[GateRecord]) -> Self {
        gates.iter().fold(Self::default(), |mut summary, gate| {
            summary.gates += 1;
            summary.center += 1;
            if gate.waypoint_before != 0.0 {
                summary.approach += 1;
            }
            if gate.waypoint_after != 0.0 {
                summary.exit += 1;
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.approach + self.center + self.exit
    }
}
