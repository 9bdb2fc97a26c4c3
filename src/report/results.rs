use std::collections::HashMap;

/// Occurrence counts keyed by the parts of a matched result
/// (e.g. `["dino", "192.168.0.2"] -> 3`).
pub type ResultCounts = HashMap<Vec<String>, u64>;

fn sorted_entries(results: &ResultCounts) -> Vec<(&Vec<String>, u64)> {
    let mut entries: Vec<_> = results.iter().map(|(key, count)| (key, *count)).collect();
    // Descending by count; key order breaks ties so output is stable.
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

/// Render a result map as a list of `key(count)` strings, most frequent
/// first, the parts of each key joined by `sep`.
///
/// Once `limit` lines exist, the rest of the tail is dropped as soon as a
/// count of 1 or less is reached, and a closing `[N more skipped]` line is
/// appended. Entries with higher counts are always kept, even past the
/// limit. `fmt` is applied to the odd-indexed parts of each key and to the
/// skipped line; report renderers use it to wrap values in markup.
pub fn format_results(
    results: &ResultCounts,
    limit: usize,
    sep: &str,
    fmt: Option<&dyn Fn(&str) -> String>,
) -> Vec<String> {
    let entries = sorted_entries(results);

    let mut lines = Vec::new();
    let mut truncated = false;

    for (key, count) in &entries {
        if lines.len() >= limit && *count <= 1 {
            truncated = true;
            break;
        }
        let joined = match fmt {
            Some(fmt) => key
                .iter()
                .enumerate()
                .map(|(i, part)| if i % 2 == 1 { fmt(part) } else { part.clone() })
                .collect::<Vec<_>>()
                .join(sep),
            None => key.join(sep),
        };
        lines.push(format!("{}({})", joined, count));
    }

    if truncated {
        let skipped = format!("[{} more skipped]", entries.len() - lines.len());
        lines.push(match fmt {
            Some(fmt) => fmt(&skipped),
            None => skipped,
        });
    }

    lines
}

/// Single-line rendering of a result map for plain-text reports:
/// `(part, part)(count)` entries, most frequent first, comma separated.
pub fn results_to_string(results: &ResultCounts) -> String {
    sorted_entries(results)
        .iter()
        .map(|(key, count)| format!("({})({})", key.join(", "), count))
        .collect::<Vec<_>>()
        .join(", ")
}
