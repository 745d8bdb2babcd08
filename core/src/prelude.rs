use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Geometry of a gate course shared by the planner and the scene builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Translation from the authored gate frame (centered on the first gate)
    /// to the vehicle's launch frame, meters.
    pub origin_shift_x: f64,
    pub origin_shift_y: f64,
    pub gate_width: f64,
    pub gate_thickness: f64,
}

impl LayoutConfig {
    pub const DEFAULT_ORIGIN_SHIFT: (f64, f64) = (7.1, 0.0);
    pub const DEFAULT_GATE_WIDTH: f64 = 1.3;
    pub const DEFAULT_GATE_THICKNESS: f64 = 0.2;

    pub fn shifted(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.origin_shift_x, y + self.origin_shift_y)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin_shift_x: Self::DEFAULT_ORIGIN_SHIFT.0,
            origin_shift_y: Self::DEFAULT_ORIGIN_SHIFT.1,
            gate_width: Self::DEFAULT_GATE_WIDTH,
            gate_thickness: Self::DEFAULT_GATE_THICKNESS,
        }
    }
}

/// Common error type for loading, planning and writing a course.
#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("gate {gate_index}: field `{field}` is not a real number: {value:?}")]
    Parse {
        gate_index: usize,
        field: &'static str,
        value: String,
    },
    #[error("input file not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("render failure: {0}")]
    Render(String),
}

pub type PlanResult<T> = Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_reference_course() {
        let config = LayoutConfig::default();
        assert_eq!(config.shifted(0.0, 0.0), (7.1, 0.0));
        assert_eq!(config.gate_width, 1.3);
        assert_eq!(config.gate_thickness, 0.2);
    }

    #[test]
    fn parse_error_names_gate_and_field() {
        let err = PlanError::Parse {
            gate_index: 3,
            field: "offset_y",
            value: "abc".into(),
        };
        let message = err.to_string();
        assert!(message.contains("gate 3"));
        assert!(message.contains("offset_y"));
    }
}
