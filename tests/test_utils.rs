//! End-to-end tests for the utility layer public API:
//! unit-prefix scaling, chunked gzip, result formatting, template
//! expansion and path handling.

use std::collections::HashMap;
use std::io::{Cursor, Read};

use anyhow::Result;

use logsift::compress::chunked_gzip;
use logsift::report::{format_results, html_escape, ResultCounts, DEFAULT_LIMIT, DEFAULT_SEP};
use logsift::template::safe_expand;
use logsift::units::{convert, UnitError};

const KIB: f64 = 1024.0;

/// The full conversion table a report layer relies on when printing
/// byte counts.
#[test]
fn value_unit_conversions() -> Result<()> {
    // No explicit target: normalize upward as far as readability allows.
    assert_eq!(convert(1000.0, "", "")?, (1000.0, String::new()));
    assert_eq!(convert(1000.0, "TB", "")?, (1000.0, "TB".to_string()));
    assert_eq!(convert(10.0, "PB", "")?, (10_000.0, "TB".to_string()));
    assert_eq!(convert(1e4, "GB", "")?, (10.0, "TB".to_string()));
    assert_eq!(convert(1e4, "MB", "")?, (10.0, "GB".to_string()));
    assert_eq!(convert(1e7, "MB", "")?, (10.0, "TB".to_string()));
    assert_eq!(convert(1e10, "MB", "")?, (10_000.0, "TB".to_string()));

    // Explicit targets stop the climb where requested.
    assert_eq!(convert(1e7, "MB", "G")?, (10_000.0, "GB".to_string()));

    // Binary prefixes scale by 1024 and keep their `i` marker; the family
    // follows the input unit, not the target.
    assert_eq!(convert(KIB.powi(3), "MiB", "G")?, (KIB.powi(2), "GiB".to_string()));
    assert_eq!(convert(KIB.powi(3), "PiB", "G")?, (KIB.powi(5), "GiB".to_string()));
    assert_eq!(convert(KIB.powi(3), "PiB", "Mi")?, (KIB.powi(6), "MiB".to_string()));
    assert_eq!(convert(1000f64.powi(3), "PB", "Gi")?, (1000f64.powi(5), "GB".to_string()));

    // Bare byte counts take the family from the target.
    assert_eq!(convert(1000f64.powi(6), "B", "G")?, (1000f64.powi(3), "GB".to_string()));
    assert_eq!(convert(KIB.powi(6), "B", "Gi")?, (KIB.powi(3), "GiB".to_string()));

    Ok(())
}

#[test]
fn value_unit_errors() {
    let err = convert(KIB.powi(3), "MiX", "").unwrap_err();
    assert_eq!(err, UnitError::UnknownUnit("X".to_string()));
    assert_eq!(err.to_string(), "unknown measure unit 'X'");

    let err = convert(KIB.powi(3), "MiB", "X").unwrap_err();
    assert_eq!(err, UnitError::UnknownPrefix("X".to_string()));
    assert_eq!(err.to_string(), "unknown metric prefix 'X'");
}

#[test]
fn gzip_round_trip_through_the_chunked_writer() -> Result<()> {
    let mut input = Cursor::new(b"Sample content".to_vec());
    let mut output = Vec::new();

    let read = chunked_gzip(&mut input, &mut output, "sample.txt.gz", Some(14))?;
    assert_eq!(read, 14);
    assert_ne!(output, b"Sample content");

    let mut decoded = String::new();
    flate2::read::GzDecoder::new(output.as_slice()).read_to_string(&mut decoded)?;
    assert_eq!(decoded, "Sample content");
    Ok(())
}

#[test]
fn formatted_results_for_a_report_section() {
    let results: ResultCounts = HashMap::from([
        (vec!["raptor".into(), "192.168.0.1".into()], 2),
        (vec!["rex".into(), "192.168.0.4".into()], 1),
        (vec!["dino".into(), "192.168.0.2".into()], 3),
    ]);

    assert_eq!(
        format_results(&results, DEFAULT_LIMIT, DEFAULT_SEP, None),
        vec![
            "dino::192.168.0.2(3)",
            "raptor::192.168.0.1(2)",
            "rex::192.168.0.4(1)",
        ]
    );

    let fmt = |s: &str| format!("<font color=\"darkred\">{}</font>", s);
    assert_eq!(
        format_results(&results, 2, DEFAULT_SEP, Some(&fmt)),
        vec![
            "dino::<font color=\"darkred\">192.168.0.2</font>(3)",
            "raptor::<font color=\"darkred\">192.168.0.1</font>(2)",
            "<font color=\"darkred\">[1 more skipped]</font>",
        ]
    );
}

#[test]
fn html_escaping_for_report_values() {
    assert_eq!(html_escape("ab<&;cd>"), "ab&lt;&amp;;cd&gt;");
}

#[test]
fn template_expansion_for_pattern_rules() -> Result<()> {
    let map = HashMap::from([
        ("ALPHA".to_string(), "${BETA}".to_string()),
        ("BETA".to_string(), "bar".to_string()),
    ]);
    assert_eq!(safe_expand("(|${ALPHA})", &map)?, "(|bar)");

    let circular = HashMap::from([
        ("ALPHA".to_string(), "${BETA}".to_string()),
        ("BETA".to_string(), "${ALPHA}".to_string()),
    ]);
    let err = safe_expand("(|${ALPHA})", &circular).unwrap_err();
    assert_eq!(err.to_string(), "substitution map has a circularity!");
    Ok(())
}

#[test]
fn version_metadata_is_exposed() {
    assert!(!logsift::VERSION.is_empty());
    assert!(!logsift::DESCRIPTION.is_empty());
}
