//! Arrangement file parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use pinmap_core::{LatticeParams, PinIndex, PinType, Point, ViewTransform};
use pinmap_store::PlacementStore;

use crate::error::CodecError;
use crate::types::ArrangementRecord;

/// Parse an arrangement from any buffered reader.
///
/// Line 1 is the mandatory parameter header (4 or 7 comma-separated
/// numeric fields; the trailing center/rotation triple defaults to the
/// identity view when absent — old files predate it). Every further
/// non-blank line is a placement `i,j,type` with `type >= 1`; a
/// duplicated site keeps its last line, matching in-memory `add`
/// semantics. Any malformed field, bad field count, or parameter set
/// failing validation rejects the whole file — no partial arrangement
/// is ever returned.
pub fn read_arrangement<R: BufRead>(reader: R) -> Result<ArrangementRecord, CodecError> {
    let mut lines = reader.lines().enumerate();
    let header = match lines.next() {
        Some((_, line)) => line?,
        None => return Err(CodecError::MissingParameterLine),
    };
    let (params, view) = parse_header(header.trim())?;

    let mut store = PlacementStore::new();
    for (n, line) in lines {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (index, pin_type) = parse_placement(line, n + 1)?;
        store.add(index, pin_type);
    }
    Ok(ArrangementRecord {
        params,
        view,
        store,
    })
}

/// Open and parse an arrangement file.
pub fn open_path(path: &Path) -> Result<ArrangementRecord, CodecError> {
    let file = File::open(path)?;
    read_arrangement(BufReader::new(file))
}

fn parse_header(line: &str) -> Result<(LatticeParams, ViewTransform), CodecError> {
    let fields: Vec<f64> = line
        .split(',')
        .map(|field| parse_number(field, 1))
        .collect::<Result<_, _>>()?;
    if fields.len() != 4 && fields.len() != 7 {
        return Err(CodecError::MalformedLine {
            line: 1,
            detail: format!("expected 4 or 7 header fields, got {}", fields.len()),
        });
    }
    let params = LatticeParams::new(fields[0], fields[1], fields[2], fields[3])?;
    let view = if fields.len() == 7 {
        ViewTransform::new(Point::new(fields[4], fields[5]), fields[6])
    } else {
        ViewTransform::IDENTITY
    };
    Ok((params, view))
}

fn parse_placement(line: &str, n: usize) -> Result<(PinIndex, PinType), CodecError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(CodecError::MalformedLine {
            line: n,
            detail: format!("expected 3 placement fields, got {}", fields.len()),
        });
    }
    let i = parse_int(fields[0], n)?;
    let j = parse_int(fields[1], n)?;
    let raw: u32 = fields[2]
        .trim()
        .parse()
        .map_err(|_| CodecError::MalformedLine {
            line: n,
            detail: format!("invalid pin type {:?}", fields[2].trim()),
        })?;
    let pin_type = PinType::new(raw).ok_or(CodecError::MalformedLine {
        line: n,
        detail: "pin type must be at least 1".into(),
    })?;
    Ok((PinIndex::new(i, j), pin_type))
}

fn parse_number(field: &str, n: usize) -> Result<f64, CodecError> {
    field.trim().parse().map_err(|_| CodecError::MalformedLine {
        line: n,
        detail: format!("invalid number {:?}", field.trim()),
    })
}

fn parse_int(field: &str, n: usize) -> Result<i32, CodecError> {
    field.trim().parse().map_err(|_| CodecError::MalformedLine {
        line: n,
        detail: format!("invalid index {:?}", field.trim()),
    })
}
