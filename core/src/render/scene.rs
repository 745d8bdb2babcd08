use crate::gate::{GateOrientation, GateRecord};
use crate::math::{Bounds, GeometryHelper};
use crate::path::Waypoint;
use crate::prelude::LayoutConfig;

const MARKER_RADIUS: f64 = 0.2;
const LABEL_DROP: f64 = 2.0;
const HEADING_LENGTH: f64 = 0.5;
const SCENE_MARGIN: f64 = 1.0;
const HEAD_SPREAD_DEG: f64 = 25.0;

/// Straight arrow between two world points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

impl Arrow {
    pub fn from_delta(start: (f64, f64), delta: (f64, f64)) -> Self {
        Self {
            start,
            end: (start.0 + delta.0, start.1 + delta.1),
        }
    }

    pub fn length(&self) -> f64 {
        (self.end.0 - self.start.0).hypot(self.end.1 - self.start.1)
    }

    /// Barb endpoints of the arrow head, `None` for a zero-length arrow.
    /// The head is capped at a third of the shaft.
    pub fn head(&self, size: f64) -> Option<((f64, f64), (f64, f64))> {
        let length = self.length();
        if length <= f64::EPSILON {
            return None;
        }
        let size = size.min(length / 3.0);
        let back = (
            self.end.0 - (self.end.0 - self.start.0) / length * size,
            self.end.1 - (self.end.1 - self.start.1) / length * size,
        );
        Some((
            GeometryHelper::rotate_about(back, self.end, HEAD_SPREAD_DEG),
            GeometryHelper::rotate_about(back, self.end, -HEAD_SPREAD_DEG),
        ))
    }
}

/// Gate drawn as a `thickness x length` rectangle rotated about its anchor corner.
#[derive(Debug, Clone, PartialEq)]
pub struct GateShape {
    pub label: String,
    pub origin: (f64, f64),
    pub anchor: (f64, f64),
    pub thickness: f64,
    pub length: f64,
    pub angle_deg: f64,
    pub marker_radius: f64,
    pub label_position: (f64, f64),
}

impl GateShape {
    /// Rectangle corners, counter-clockwise starting at the anchor.
    pub fn corners(&self) -> [(f64, f64); 4] {
        let (x, y) = self.anchor;
        [
            (x, y),
            (x + self.thickness, y),
            (x + self.thickness, y + self.length),
            (x, y + self.length),
        ]
        .map(|corner| GeometryHelper::rotate_about(corner, self.anchor, self.angle_deg))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Planned from the gate course in this run.
    Computed,
    /// Loaded from an existing path file.
    Loaded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathLayer {
    pub kind: PathKind,
    /// Arrow from each waypoint to the next one.
    pub segments: Vec<Arrow>,
    /// Heading arrow at every waypoint.
    pub headings: Vec<Arrow>,
}

impl PathLayer {
    pub fn new(kind: PathKind, waypoints: &[Waypoint]) -> Self {
        let segments = waypoints
            .windows(2)
            .map(|pair| Arrow {
                start: (pair[0].x, pair[0].y),
                end: (pair[1].x, pair[1].y),
            })
            .collect();
        let headings = waypoints
            .iter()
            .map(|wp| {
                Arrow::from_delta(
                    (wp.x, wp.y),
                    GeometryHelper::heading_vector(wp.yaw, HEADING_LENGTH),
                )
            })
            .collect();
        Self {
            kind,
            segments,
            headings,
        }
    }
}

/// Unit x-axis arrow at the launch origin.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisMarker {
    pub arrow: Arrow,
    pub label: String,
    pub label_position: (f64, f64),
}

impl Default for AxisMarker {
    fn default() -> Self {
        Self {
            arrow: Arrow::from_delta((0.0, 0.0), (1.0, 0.0)),
            label: "x".into(),
            label_position: (1.1, -0.2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub gates: Vec<GateShape>,
    pub paths: Vec<PathLayer>,
    pub axis: AxisMarker,
}

impl Scene {
    /// World-space box holding every drawable, with a fixed margin.
    pub fn bounds(&self) -> Bounds {
        let gate_points = self.gates.iter().flat_map(|gate| {
            let mut points = gate.corners().to_vec();
            points.push(gate.origin);
            points.push(gate.label_position);
            points
        });
        let path_points = self.paths.iter().flat_map(|layer| {
            layer
                .segments
                .iter()
                .chain(layer.headings.iter())
                .flat_map(|arrow| [arrow.start, arrow.end])
        });
        let axis_points = [self.axis.arrow.start, self.axis.arrow.end];

        Bounds::around(gate_points.chain(path_points).chain(axis_points))
            .unwrap_or(Bounds {
                min_x: 0.0,
                max_x: 1.0,
                min_y: 0.0,
                max_y: 1.0,
            })
            .padded(SCENE_MARGIN)
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty() && self.paths.is_empty()
    }
}

/// Builds a [`Scene`] from gate records and waypoint sequences.
pub struct SceneBuilder {
    config: LayoutConfig,
    scene: Scene,
}

impl SceneBuilder {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            scene: Scene::default(),
        }
    }

    pub fn with_gates(mut self, gates: &[GateRecord]) -> Self {
        let offset = self.scene.gates.len();
        let shapes = gates
            .iter()
            .enumerate()
            .map(|(index, gate)| gate_shape(offset + index, gate, &self.config))
            .collect::<Vec<_>>();
        self.scene.gates.extend(shapes);
        self
    }

    pub fn with_path(mut self, kind: PathKind, waypoints: &[Waypoint]) -> Self {
        self.scene.paths.push(PathLayer::new(kind, waypoints));
        self
    }

    pub fn build(self) -> Scene {
        self.scene
    }
}

fn gate_shape(index: usize, gate: &GateRecord, config: &LayoutConfig) -> GateShape {
    let origin = config.shifted(gate.x, gate.y);
    let anchor = GateOrientation::from_degrees(gate.rotation).rect_anchor(
        origin,
        gate.offset_y,
        config.gate_width,
        config.gate_thickness,
    );
    GateShape {
        label: (index + 1).to_string(),
        origin,
        anchor,
        thickness: config.gate_thickness,
        length: config.gate_width,
        angle_deg: gate.rotation,
        marker_radius: MARKER_RADIUS,
        label_position: (origin.0, origin.1 - LABEL_DROP),
    }
}
