//! Headless scene description of a course and the capability trait drawing
//! backends implement.

pub mod scene;

pub use scene::{Arrow, AxisMarker, GateShape, PathKind, PathLayer, Scene, SceneBuilder};

use crate::prelude::PlanResult;

/// Optional visualization capability supplied by the caller.
pub trait SceneRenderer {
    fn render(&mut self, scene: &Scene) -> PlanResult<()>;
}
