pub mod orientation;
pub mod record;

pub use orientation::{GateOrientation, OrientationFix};
pub use record::{GateRecord, GateRow};
