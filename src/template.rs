use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

static VAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{(\w+)\}").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
#[error("substitution map has a circularity!")]
pub struct CircularSubstitution;

/// Expand `${NAME}` references in `template` from the substitution map,
/// re-scanning until the string stops changing so values may reference
/// other variables. Unknown variables are left untouched.
///
/// A map that never reaches a fixed point within `map.len() + 1` passes is
/// circular and is reported as an error.
pub fn safe_expand(
    template: &str,
    substitutions: &HashMap<String, String>,
) -> Result<String, CircularSubstitution> {
    let mut current = template.to_string();

    for _ in 0..=substitutions.len() {
        let expanded = VAR_PATTERN
            .replace_all(&current, |caps: &Captures<'_>| {
                match substitutions.get(&caps[1]) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned();

        if expanded == current {
            return Ok(current);
        }
        current = expanded;
    }

    Err(CircularSubstitution)
}
