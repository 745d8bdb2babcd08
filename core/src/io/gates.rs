use crate::gate::GateRow;
use crate::io::{reader_builder, table_reader};
use crate::prelude::{PlanError, PlanResult};
use log::info;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Loads the raw gate rows of a course file in file order.
pub fn read_gates<P: AsRef<Path>>(path: P) -> PlanResult<Vec<GateRow>> {
    let path_ref = path.as_ref();
    info!("Opening gates file: {}", path_ref.display());
    let mut reader = table_reader(path_ref)?;
    collect_rows(&mut reader, path_ref)
}

pub fn read_gates_from<R: Read>(source: R) -> PlanResult<Vec<GateRow>> {
    let mut reader = reader_builder().from_reader(source);
    collect_rows(&mut reader, Path::new("<stream>"))
}

fn collect_rows<R: Read>(reader: &mut csv::Reader<R>, path: &Path) -> PlanResult<Vec<GateRow>> {
    reader
        .deserialize::<GateRow>()
        .map(|row| {
            row.map_err(|source| PlanError::Read {
                path: PathBuf::from(path),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateRecord;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_rows_with_padding_and_extra_columns() {
        let table = "name, x, y, z, rotation, offset_y, waypoint_before, waypoint_after\n\
                     start, 0, 0, 1.0, 0, 0, 1, 1\n\
                     hairpin, 4.5, -2, 1.5, -90, 0.3, 0, 2\n";
        let rows = read_gates_from(table.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].rotation, "-90");
        let gate = GateRecord::parse(1, &rows[1]).unwrap();
        assert_eq!(gate.x, 4.5);
        assert_eq!(gate.waypoint_after, 2.0);
    }

    #[test]
    fn header_only_table_is_empty_course() {
        let table = "x,y,z,rotation,offset_y,waypoint_before,waypoint_after\n";
        assert!(read_gates_from(table.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn missing_column_is_a_read_error() {
        let table = "x,y,z,rotation,offset_y,waypoint_before\n0,0,1,0,0,1\n";
        let err = read_gates_from(table.as_bytes()).unwrap_err();
        assert!(matches!(err, PlanError::Read { .. }));
    }

    #[test]
    fn trailing_separator_on_row_is_ignored() {
        let table = "x,y,z,rotation,offset_y,waypoint_before,waypoint_after\n0,0,1,0,0,1,1,\n";
        let rows = read_gates_from(table.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].waypoint_after, "1");
    }

    #[test]
    fn short_row_is_a_read_error() {
        let table = "x,y,z,rotation,offset_y,waypoint_before,waypoint_after\n0,0,1,0,0,1\n";
        let err = read_gates_from(table.as_bytes()).unwrap_err();
        assert!(matches!(err, PlanError::Read { .. }));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_gates("does/not/exist/gates.csv").unwrap_err();
        assert!(matches!(err, PlanError::MissingFile(_)));
    }

    #[test]
    fn reads_course_from_disk() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"x,y,z,rotation,offset_y,waypoint_before,waypoint_after\n0,0,1,-135,0,1,1\n")
            .unwrap();
        let path = temp.into_temp_path();
        let rows = read_gates(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rotation, "-135");
    }
}
