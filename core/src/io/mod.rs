//! Tabular adapters for gate courses and waypoint paths.

pub mod gates;
pub mod path;

pub use gates::{read_gates, read_gates_from};
pub use path::{read_path, read_path_from, write_path, write_path_to};

use crate::prelude::{PlanError, PlanResult};
use std::path::Path;

fn table_reader(path: &Path) -> PlanResult<csv::Reader<std::fs::File>> {
    if !path.exists() {
        return Err(PlanError::MissingFile(path.to_path_buf()));
    }
    reader_builder()
        .from_path(path)
        .map_err(|source| PlanError::Read {
            path: path.to_path_buf(),
            source,
        })
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(b',')
        .trim(csv::Trim::All)
        .flexible(true);
    builder
}
