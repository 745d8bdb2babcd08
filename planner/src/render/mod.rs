pub mod bridge;
pub mod svg;
