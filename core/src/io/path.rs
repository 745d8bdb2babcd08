use crate::io::{reader_builder, table_reader};
use crate::path::Waypoint;
use crate::prelude::{PlanError, PlanResult};
use log::info;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Loads an existing `x,y,z,yaw` path, e.g. a discretized spline.
pub fn read_path<P: AsRef<Path>>(path: P) -> PlanResult<Vec<Waypoint>> {
    let path_ref = path.as_ref();
    info!("Opening path file: {}", path_ref.display());
    let mut reader = table_reader(path_ref)?;
    collect_waypoints(&mut reader, path_ref)
}

pub fn read_path_from<R: Read>(source: R) -> PlanResult<Vec<Waypoint>> {
    let mut reader = reader_builder().from_reader(source);
    collect_waypoints(&mut reader, Path::new("<stream>"))
}

fn collect_waypoints<R: Read>(
    reader: &mut csv::Reader<R>,
    path: &Path,
) -> PlanResult<Vec<Waypoint>> {
    reader
        .deserialize::<Waypoint>()
        .map(|row| {
            row.map_err(|source| PlanError::Read {
                path: PathBuf::from(path),
                source,
            })
        })
        .collect()
}

/// Writes `waypoints` followed by the return-to-launch terminator row.
pub fn write_path<P: AsRef<Path>>(path: P, waypoints: &[Waypoint]) -> PlanResult<()> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|err| PlanError::Write {
        path: path_ref.to_path_buf(),
        source: err.into(),
    })?;
    write_rows(file, waypoints, path_ref)
}

pub fn write_path_to<W: Write>(sink: W, waypoints: &[Waypoint]) -> PlanResult<()> {
    write_rows(sink, waypoints, Path::new("<stream>"))
}

fn write_rows<W: Write>(sink: W, waypoints: &[Waypoint], path: &Path) -> PlanResult<()> {
    let to_write_error = |source: csv::Error| PlanError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_writer(sink);
    for waypoint in waypoints
        .iter()
        .chain(std::iter::once(&Waypoint::RETURN_TO_LAUNCH))
    {
        writer.serialize(waypoint).map_err(to_write_error)?;
    }
    writer.flush().map_err(|err| to_write_error(err.into()))
}
