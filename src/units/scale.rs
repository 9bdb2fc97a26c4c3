use thiserror::Error;

use crate::units::{BASE_UNITS, MAX_TARGET, PREFIXES};

/// Scaling family of a unit prefix: `K` counts in thousands, `Ki` in 1024s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleBase {
    Decimal,
    Binary,
}

impl ScaleBase {
    fn factor(self) -> f64 {
        match self {
            Self::Decimal => 1000.0,
            Self::Binary => 1024.0,
        }
    }

    /// Marker carried between the prefix letter and the base unit.
    fn infix(self) -> &'static str {
        match self {
            Self::Decimal => "",
            Self::Binary => "i",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("unknown measure unit '{0}'")]
    UnknownUnit(String),
    #[error("unknown metric prefix '{0}'")]
    UnknownPrefix(String),
}

struct ParsedUnit<'a> {
    prefix: usize,
    base: Option<ScaleBase>,
    unit: &'a str,
}

/// Split a unit string into prefix index, scaling family and base unit.
/// The `i` marker only counts as part of the prefix after a prefix letter,
/// so `"MiB"` is `Mi` + `B` while `"B"` is just a base unit.
fn parse_unit(unit: &str) -> Result<ParsedUnit<'_>, UnitError> {
    let mut prefix = 0;
    let mut base = None;
    let mut rest = unit;

    if let Some(pos) = PREFIXES[1..].iter().position(|p| unit.starts_with(p)) {
        prefix = pos + 1;
        rest = &unit[1..];
        base = Some(ScaleBase::Decimal);
        if let Some(after) = rest.strip_prefix('i') {
            base = Some(ScaleBase::Binary);
            rest = after;
        }
    }

    if !BASE_UNITS.contains(&rest) {
        return Err(UnitError::UnknownUnit(rest.to_string()));
    }

    Ok(ParsedUnit { prefix, base, unit: rest })
}

/// Resolve a target prefix into an index plus a scaling-family hint. An
/// empty target means auto-normalization: aim for the top of the range and
/// let the early-stop rule pick the resting point.
fn parse_prefix(prefix: &str) -> Result<(usize, Option<ScaleBase>), UnitError> {
    if prefix.is_empty() {
        return Ok((MAX_TARGET, None));
    }

    let pos = PREFIXES[1..=MAX_TARGET]
        .iter()
        .position(|p| prefix.starts_with(p))
        .ok_or_else(|| UnitError::UnknownPrefix(prefix.to_string()))?;

    let base = match &prefix[1..] {
        "" => ScaleBase::Decimal,
        "i" => ScaleBase::Binary,
        _ => return Err(UnitError::UnknownPrefix(prefix.to_string())),
    };

    Ok((pos + 1, Some(base)))
}

/// Re-express `value` with its unit scaled to the requested metric prefix,
/// keeping the base unit suffix.
///
/// Scaling down a prefix multiplies exactly; scaling up divides and rounds
/// to the nearest integer, and stops early while the value is still below
/// ten times the scaling factor rather than reduce into a small or
/// fractional result. An empty `prefix` normalizes upward as far as the
/// early-stop rule allows. The output prefix therefore does not always
/// equal the requested one.
///
/// The scaling family comes from the unit's own prefix (`"MB"` decimal,
/// `"MiB"` binary), falling back to the target's when the unit carries
/// none.
///
/// ```
/// use logsift::units::convert;
///
/// assert_eq!(convert(10_000_000.0, "MB", "").unwrap(), (10.0, "TB".into()));
/// assert_eq!(convert(10_000_000.0, "MB", "G").unwrap(), (10_000.0, "GB".into()));
/// ```
pub fn convert(value: f64, unit: &str, prefix: &str) -> Result<(f64, String), UnitError> {
    let parsed = parse_unit(unit)?;
    let (target, base_hint) = parse_prefix(prefix)?;
    let base = parsed.base.or(base_hint).unwrap_or(ScaleBase::Decimal);
    let factor = base.factor();

    let mut value = value;
    let mut current = parsed.prefix;

    while current != target {
        if current > target {
            value *= factor;
            current -= 1;
        } else {
            if value < 10.0 * factor {
                break;
            }
            value = (value / factor).round();
            current += 1;
        }
    }

    let scaled_unit = if current == 0 {
        parsed.unit.to_string()
    } else {
        format!("{}{}{}", PREFIXES[current], base.infix(), parsed.unit)
    };

    Ok((value, scaled_unit))
}
