//! Lattice site addresses and pin categories.

use std::fmt;
use std::num::NonZeroU32;

/// A discrete lattice site in offset triangular coordinates.
///
/// `i` is the column, `j` the row. Odd columns are vertically shifted by
/// half a row when mapped to world space, interleaving the rows into
/// equilateral-triangle packing; that shift lives entirely in the
/// coordinate transform — the index itself is just an integer pair.
///
/// There is no bound on the range beyond practical generation limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinIndex {
    /// Column.
    pub i: i32,
    /// Row.
    pub j: i32,
}

impl PinIndex {
    /// Construct an index from column and row.
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// The site mirrored across the vertical axis: `(-i, j)`.
    pub const fn mirrored(self) -> Self {
        Self {
            i: -self.i,
            j: self.j,
        }
    }

    /// Column parity normalized to `{0, 1}`.
    ///
    /// `rem_euclid`, not `%`: negative columns must yield the same parity
    /// class as their positive counterparts or the row-shift formula
    /// breaks on the left half-plane.
    pub const fn parity(self) -> i32 {
        self.i.rem_euclid(2)
    }
}

impl fmt::Display for PinIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

impl From<(i32, i32)> for PinIndex {
    fn from((i, j): (i32, i32)) -> Self {
        Self { i, j }
    }
}

/// A pin category, numbered from 1.
///
/// The on-disk format and the original tooling reserve `0` as the
/// "erase / no type selected" sentinel; that sentinel is deliberately
/// unrepresentable here — APIs model it as `Option<PinType>` instead, so
/// a zero-type placement can never be stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinType(NonZeroU32);

impl PinType {
    /// The default category assigned by the generator.
    pub const ONE: PinType = PinType(NonZeroU32::MIN);

    /// Construct from a raw type number; `None` for the zero sentinel.
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// The raw type number (always ≥ 1).
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for PinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroU32> for PinType {
    fn from(n: NonZeroU32) -> Self {
        Self(n)
    }
}
