pub mod scale;

pub use scale::{convert, ScaleBase, UnitError};

/// Metric prefixes in ascending order of magnitude. The empty string is the
/// "no prefix" member. `P` is recognized at the head of an input unit but
/// converted values are always renormalized into the `""`..=`"T"` range.
pub const PREFIXES: [&str; 6] = ["", "K", "M", "G", "T", "P"];

/// Index of the largest prefix a converted value may be expressed in.
pub(crate) const MAX_TARGET: usize = 4; // "T"

/// Base units a prefix may be attached to.
pub(crate) const BASE_UNITS: [&str; 2] = ["", "B"];
