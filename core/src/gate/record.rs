use crate::prelude::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};

/// Raw gate row as it appears in the course table.
///
/// Values stay textual so that a malformed cell can be reported with the
/// gate index and column name it came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateRow {
    pub x: String,
    pub y: String,
    pub z: String,
    pub rotation: String,
    pub offset_y: String,
    pub waypoint_before: String,
    pub waypoint_after: String,
}

/// One physical gate to fly through, in the authored frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateRecord {
    pub x: f64,
    pub y: f64,
    /// Altitude of the gate center.
    pub z: f64,
    /// Facing angle in degrees.
    pub rotation: f64,
    /// Lateral shift of the gate center, applied along global y.
    pub offset_y: f64,
    /// Standoff before the gate; zero disables the approach waypoint.
    pub waypoint_before: f64,
    /// Standoff after the gate; zero disables the exit waypoint.
    pub waypoint_after: f64,
}

impl GateRecord {
    pub fn new(x: f64, y: f64, z: f64, rotation: f64) -> Self {
        Self {
            x,
            y,
            z,
            rotation,
            offset_y: 0.0,
            waypoint_before: 0.0,
            waypoint_after: 0.0,
        }
    }

    pub fn with_offset(mut self, offset_y: f64) -> Self {
        self.offset_y = offset_y;
        self
    }

    pub fn with_standoff(mut self, before: f64, after: f64) -> Self {
        self.waypoint_before = before;
        self.waypoint_after = after;
        self
    }

    /// Parses a raw row; `index` is the gate's 0-based position in the course.
    pub fn parse(index: usize, row: &GateRow) -> PlanResult<Self> {
        Ok(Self {
            x: parse_field(index, "x", &row.x)?,
            y: parse_field(index, "y", &row.y)?,
            z: parse_field(index, "z", &row.z)?,
            rotation: parse_field(index, "rotation", &row.rotation)?,
            offset_y: parse_field(index, "offset_y", &row.offset_y)?,
            waypoint_before: parse_field(index, "waypoint_before", &row.waypoint_before)?,
            waypoint_after: parse_field(index, "waypoint_after", &row.waypoint_after)?,
        })
    }

    pub fn parse_all(rows: &[GateRow]) -> PlanResult<Vec<Self>> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| Self::parse(index, row))
            .collect()
    }
}

fn parse_field(gate_index: usize, field: &'static str, value: &str) -> PlanResult<f64> {
    value.trim().parse::<f64>().map_err(|_| PlanError::Parse {
        gate_index,
        field,
        value: value.to_string(),
    })
}
