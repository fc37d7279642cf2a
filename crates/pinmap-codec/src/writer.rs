//! Arrangement file serialization.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::CodecError;
use crate::export::export_dir;
use crate::types::ArrangementRecord;

/// Serialize an arrangement to any writer.
///
/// The header always carries all seven fields — newly written files never
/// rely on the old-format defaulting rule. Placement lines follow grouped
/// by type in store order, one `i,j,type` line per pin.
pub fn write_arrangement<W: Write>(
    mut writer: W,
    record: &ArrangementRecord,
) -> Result<(), CodecError> {
    let params = &record.params;
    let center = record.view.center();
    writeln!(
        writer,
        "{},{},{},{},{},{},{}",
        params.pin_radius(),
        params.step(),
        params.inner_radius(),
        params.outer_radius(),
        center.x,
        center.y,
        record.view.rotation_deg(),
    )?;
    for pin_type in record.store.types() {
        for site in record.store.bucket(pin_type) {
            writeln!(writer, "{},{},{}", site.i, site.j, pin_type)?;
        }
    }
    Ok(())
}

/// Write an arrangement file at `path`.
///
/// Any coordinate directory previously exported for this filename is
/// deleted first, so a stale export can never drift from the arrangement
/// just saved. Its absence is not an error.
pub fn save_path(path: &Path, record: &ArrangementRecord) -> Result<(), CodecError> {
    if let Some(dir) = export_dir(path) {
        let _ = fs::remove_dir_all(dir);
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_arrangement(&mut writer, record)?;
    writer.flush()?;
    Ok(())
}
