//! Gate-to-waypoint path planning for racing-gate courses.
//!
//! The planner is a pure transform from gate records to waypoints; table
//! adapters, console reporting and the render scene sit beside it and are
//! never required by it.

pub mod gate;
pub mod io;
pub mod math;
pub mod path;
pub mod prelude;
pub mod render;
pub mod telemetry;

pub use gate::{GateRecord, GateRow};
pub use path::{plan_path, plan_path_from_rows, Waypoint};
pub use prelude::{LayoutConfig, PlanError, PlanResult};
