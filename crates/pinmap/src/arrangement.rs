//! The arrangement: the unit the external shell manipulates.

use std::path::Path;

use pinmap_codec::{ArrangementRecord, CodecError, ExportError};
use pinmap_core::{ConfigError, LatticeParams, PinIndex, PinType, Point, ViewTransform};
use pinmap_lattice::{generate, GenerateError};
use pinmap_store::{MarkedSet, PlacementStore};

/// A pin layout: validated parameters, the view transform, the per-type
/// placement store, and the marked subset.
///
/// All geometry is lazy: rotating or shifting the arrangement only
/// touches the [`ViewTransform`]; stored indices never change, which is
/// why rendering and hit-testing must always go through
/// [`coordinate_of`](Arrangement::coordinate_of) /
/// [`index_of`](Arrangement::index_of).
///
/// Every operation is synchronous and completes before returning; the
/// shell is expected to serialize access (single UI event loop). No
/// arrangement aliases another's state — [`reflect`](Arrangement::reflect)
/// returns an independent copy.
///
/// # Examples
///
/// ```
/// use pinmap::{Arrangement, LatticeParams, PinType};
///
/// let params = LatticeParams::new(1.0, 3.0, 0.0, 5.0).unwrap();
/// let mut arrangement = Arrangement::generate(params).unwrap();
/// assert!(arrangement.pin_count() > 0);
///
/// // Retype the pin under the cursor.
/// let site = arrangement.index_of(0.1, -0.2);
/// arrangement.add(site, PinType::new(2).unwrap());
/// assert_eq!(arrangement.pin_at(site), PinType::new(2));
///
/// // View changes are lazy and exactly undoable.
/// arrangement.rotate(30.0);
/// arrangement.translate(1.0, 0.0);
/// arrangement.reset();
/// assert!(arrangement.view().is_identity());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Arrangement {
    params: LatticeParams,
    view: ViewTransform,
    store: PlacementStore,
    marks: MarkedSet,
}

impl Arrangement {
    /// Create a new arrangement by filling the annulus with type-1 pins.
    pub fn generate(params: LatticeParams) -> Result<Self, GenerateError> {
        let store = generate(&params)?;
        Ok(Self {
            params,
            view: ViewTransform::IDENTITY,
            store,
            marks: MarkedSet::new(),
        })
    }

    /// Open an arrangement file.
    ///
    /// Marks are session state and start empty — the file does not carry
    /// them.
    pub fn open_path(path: &Path) -> Result<Self, CodecError> {
        let record = pinmap_codec::open_path(path)?;
        Ok(Self {
            params: record.params,
            view: record.view,
            store: record.store,
            marks: MarkedSet::new(),
        })
    }

    /// Save the arrangement file at `path`, purging any stale coordinate
    /// export for that filename.
    pub fn save_path(&self, path: &Path) -> Result<(), CodecError> {
        pinmap_codec::save_path(path, &self.record())
    }

    /// Export per-type world coordinates (plus the marked file, if any
    /// site is marked) into the directory named after `path`'s stem.
    pub fn export_coordinates(&self, path: &Path) -> Result<(), ExportError> {
        pinmap_codec::export_coordinates(path, &self.record(), &self.marks)
    }

    fn record(&self) -> ArrangementRecord {
        ArrangementRecord {
            params: self.params,
            view: self.view,
            store: self.store.clone(),
        }
    }

    // ── Placement surface ───────────────────────────────────────

    /// Place (or retype) a pin at `index`.
    pub fn add(&mut self, index: PinIndex, pin_type: PinType) {
        self.store.add(index, pin_type);
    }

    /// Remove the pin at `index`, if any, returning its former type.
    ///
    /// The site's mark, if present, is left in place (see
    /// [`MarkedSet`] on dangling marks).
    pub fn remove(&mut self, index: PinIndex) -> Option<PinType> {
        self.store.remove(index)
    }

    /// The type at `index`, or `None` for an empty site.
    pub fn pin_at(&self, index: PinIndex) -> Option<PinType> {
        self.store.type_at(index)
    }

    /// Number of pins of `pin_type`.
    pub fn count_of(&self, pin_type: PinType) -> usize {
        self.store.count_of(pin_type)
    }

    /// Total number of placed pins.
    pub fn pin_count(&self) -> usize {
        self.store.len()
    }

    /// Highest occupied type number, or `None` if nothing is placed.
    pub fn max_type(&self) -> Option<PinType> {
        self.store.max_type()
    }

    /// All placements as `(site, type)` pairs.
    pub fn placements(&self) -> impl Iterator<Item = (PinIndex, PinType)> + '_ {
        self.store.placements()
    }

    // ── Marking surface ─────────────────────────────────────────

    /// Mark a site for separate export.
    pub fn mark(&mut self, index: PinIndex) {
        self.marks.mark(index);
    }

    /// Remove a site's mark.
    pub fn unmark(&mut self, index: PinIndex) {
        self.marks.unmark(index);
    }

    /// Flip a site's mark; returns the new state.
    pub fn toggle_mark(&mut self, index: PinIndex) -> bool {
        self.marks.toggle(index)
    }

    /// Whether a site is marked.
    pub fn is_marked(&self, index: PinIndex) -> bool {
        self.marks.contains(index)
    }

    /// The marked set.
    pub fn marked(&self) -> &MarkedSet {
        &self.marks
    }

    // ── View surface ────────────────────────────────────────────

    /// Rotate the view by `delta_deg`, additively. Stored indices are
    /// untouched; only subsequent coordinate reads change.
    pub fn rotate(&mut self, delta_deg: f64) {
        self.view.rotate(delta_deg);
    }

    /// Shift the view center by `(dx, dy)`, additively.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.view.translate(dx, dy);
    }

    /// Restore the identity view. Placements and marks are untouched.
    pub fn reset(&mut self) {
        self.view.reset();
    }

    // ── Geometry ────────────────────────────────────────────────

    /// World position of lattice site `index` under the current view.
    pub fn coordinate_of(&self, index: PinIndex) -> Point {
        pinmap_lattice::coordinate_of(index, &self.params, &self.view)
    }

    /// Nearest lattice site to the world position `(x, y)`.
    pub fn index_of(&self, x: f64, y: f64) -> PinIndex {
        pinmap_lattice::index_of(Point::new(x, y), &self.params, &self.view)
    }

    // ── Derived operations ──────────────────────────────────────

    /// Replace the lattice step in place.
    ///
    /// Fails with [`ConfigError::StepOverlapsPins`] if `new_step` is
    /// below one pin diameter, leaving the arrangement untouched. On
    /// success, existing indices are reinterpreted under the new step —
    /// their world coordinates change on the next read; placements are
    /// not regenerated.
    pub fn rebuild(&mut self, new_step: f64) -> Result<(), ConfigError> {
        self.params = self.params.with_step(new_step)?;
        Ok(())
    }

    /// A new arrangement holding the union of this layout and its mirror
    /// image across the vertical axis.
    ///
    /// For every placement `((i, j), t)` the copy gains `((-i, j), t)`;
    /// pins on the axis (`i == 0`) simply re-assert themselves. The
    /// original is not modified. Whether mirroring should union or
    /// replace is an open product question; this reproduces the
    /// long-standing union behavior.
    pub fn reflect(&self) -> Arrangement {
        let mut mirrored = self.clone();
        for (site, pin_type) in self.store.placements() {
            mirrored.store.add(site.mirrored(), pin_type);
        }
        mirrored
    }

    // ── Read access ─────────────────────────────────────────────

    /// The lattice parameters.
    pub fn params(&self) -> &LatticeParams {
        &self.params
    }

    /// The current view transform.
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }
}
