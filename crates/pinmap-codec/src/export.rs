//! Per-type coordinate export.
//!
//! Downstream tools consume world positions, not lattice indices, so this
//! is the one place transformed coordinates are persisted: every value is
//! `coordinate_of(site)` under the arrangement's current view.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use pinmap_lattice::coordinate_of;
use pinmap_store::MarkedSet;

use crate::error::ExportError;
use crate::types::ArrangementRecord;
use crate::{FILE_EXT, MARKED_EXT};

/// Fixed 4-fractional-digit coordinate line format.
macro_rules! coord_line {
    ($writer:expr, $point:expr) => {
        writeln!($writer, "{:.4},{:.4}", $point.x, $point.y)
    };
}

/// The coordinate directory associated with an arrangement path: a
/// sibling directory named after the file's stem.
///
/// `None` if the path has no stem (nothing to name the directory after).
pub fn export_dir(path: &Path) -> Option<PathBuf> {
    let stem = path.file_stem()?;
    Some(path.parent().unwrap_or_else(|| Path::new("")).join(stem))
}

/// Export world coordinates for every placement, one file per occupied
/// type, plus a marked-coordinate file when any site is marked.
///
/// The directory is recreated fresh on every export. Type files are named
/// `<stem>.<ext><type>` (e.g. `core.pin2`), the marked file
/// `<stem>.mrkd`; every line is `x,y` with exactly 4 fractional digits.
/// Marked sites are exported whether or not they are occupied.
///
/// Reports success or failure as a whole: the first I/O error aborts the
/// export.
pub fn export_coordinates(
    path: &Path,
    record: &ArrangementRecord,
    marks: &MarkedSet,
) -> Result<(), ExportError> {
    let invalid = || ExportError::InvalidPath {
        path: path.to_path_buf(),
    };
    let dir = export_dir(path).ok_or_else(invalid)?;
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(invalid)?;

    let _ = fs::remove_dir_all(&dir);
    fs::create_dir(&dir)?;

    for pin_type in record.store.types() {
        let file = File::create(dir.join(format!("{stem}.{FILE_EXT}{pin_type}")))?;
        let mut writer = BufWriter::new(file);
        for &site in record.store.bucket(pin_type) {
            coord_line!(writer, coordinate_of(site, &record.params, &record.view))?;
        }
        writer.flush()?;
    }

    if !marks.is_empty() {
        let file = File::create(dir.join(format!("{stem}.{MARKED_EXT}")))?;
        let mut writer = BufWriter::new(file);
        for site in marks.iter() {
            coord_line!(writer, coordinate_of(site, &record.params, &record.view))?;
        }
        writer.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinmap_core::{LatticeParams, PinIndex, PinType, Point, ViewTransform};
    use pinmap_store::PlacementStore;

    fn t(n: u32) -> PinType {
        PinType::new(n).unwrap()
    }

    fn temp_workspace(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pinmap-export-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample_record() -> ArrangementRecord {
        let mut store = PlacementStore::new();
        store.add(PinIndex::new(0, 0), t(1));
        store.add(PinIndex::new(0, 1), t(1));
        store.add(PinIndex::new(1, 0), t(3));
        ArrangementRecord {
            params: LatticeParams::new(1.0, 2.0, 0.0, 8.0).unwrap(),
            view: ViewTransform::IDENTITY,
            store,
        }
    }

    #[test]
    fn export_dir_is_the_stem_named_sibling() {
        assert_eq!(
            export_dir(Path::new("/data/core.pin")),
            Some(PathBuf::from("/data/core"))
        );
        assert_eq!(export_dir(Path::new("core.pin")), Some(PathBuf::from("core")));
    }

    #[test]
    fn one_file_per_occupied_type() {
        let dir = temp_workspace("types");
        let path = dir.join("core.pin");
        export_coordinates(&path, &sample_record(), &MarkedSet::new()).unwrap();

        let out = dir.join("core");
        assert!(out.join("core.pin1").exists());
        assert!(out.join("core.pin3").exists());
        assert!(!out.join("core.pin2").exists(), "unoccupied type exported");
        assert!(!out.join("core.mrkd").exists(), "no marks, no marked file");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn coordinates_use_four_fractional_digits() {
        let dir = temp_workspace("format");
        let path = dir.join("core.pin");
        export_coordinates(&path, &sample_record(), &MarkedSet::new()).unwrap();

        let text = fs::read_to_string(dir.join("core").join("core.pin1")).unwrap();
        // (0,0) and (0,1) at step 2, identity view.
        assert_eq!(text, "0.0000,0.0000\n0.0000,2.0000\n");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_bakes_in_the_current_view() {
        let dir = temp_workspace("view");
        let path = dir.join("core.pin");
        let mut record = sample_record();
        record.view = ViewTransform::new(Point::new(1.0, 0.0), 90.0);
        export_coordinates(&path, &record, &MarkedSet::new()).unwrap();

        let text = fs::read_to_string(dir.join("core").join("core.pin1")).unwrap();
        // Origin site: local (0,0) + center (1,0), rotated 90° -> (0,1).
        assert_eq!(text.lines().next().unwrap(), "0.0000,1.0000");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn marked_file_covers_dangling_marks() {
        let dir = temp_workspace("marks");
        let path = dir.join("core.pin");
        let mut marks = MarkedSet::new();
        marks.mark(PinIndex::new(0, 1)); // occupied
        marks.mark(PinIndex::new(4, 4)); // unoccupied: exported anyway
        export_coordinates(&path, &sample_record(), &marks).unwrap();

        let text = fs::read_to_string(dir.join("core").join("core.mrkd")).unwrap();
        assert_eq!(text.lines().count(), 2);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn re_export_is_fresh() {
        let dir = temp_workspace("fresh");
        let path = dir.join("core.pin");
        let mut record = sample_record();
        export_coordinates(&path, &record, &MarkedSet::new()).unwrap();
        assert!(dir.join("core").join("core.pin3").exists());

        // Retype the lone type-3 pin and export again: the old per-type
        // file must be gone, not lingering from the previous run.
        record.store.add(PinIndex::new(1, 0), t(1));
        export_coordinates(&path, &record, &MarkedSet::new()).unwrap();
        assert!(!dir.join("core").join("core.pin3").exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn pathological_path_is_rejected() {
        let record = sample_record();
        assert!(matches!(
            export_coordinates(Path::new("/"), &record, &MarkedSet::new()),
            Err(ExportError::InvalidPath { .. })
        ));
    }
}
