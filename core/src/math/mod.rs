pub mod geometry;

pub use geometry::{Bounds, GeometryHelper};
