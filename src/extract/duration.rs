//! Duration string conversion.
//!
//! The site reports lengths in two formats depending on the page: listing
//! entries carry an "H:MM:SS"-style display string in a data attribute,
//! detail pages carry an ISO-8601 duration inside the JSON-LD block. Both
//! convert to whole seconds, and both treat garbage as zero: a bad
//! duration must never fail an extraction.

/// Convert a colon-separated display string to seconds.
///
/// Fields are read right to left, each weighted by an increasing power of
/// 60: `"45"` → 45, `"3:45"` → 225, `"1:02:03"` → 3723. Tolerates 1–3
/// fields (and keeps weighting beyond that); an empty or unparsable field
/// contributes 0.
pub fn hms_to_seconds(display: &str) -> u64 {
    let mut seconds = 0u64;
    let mut weight = 1u64;
    for field in display.split(':').rev() {
        let value = field.trim().parse::<u64>().unwrap_or(0);
        seconds = seconds.saturating_add(weight.saturating_mul(value));
        weight = weight.saturating_mul(60);
    }
    seconds
}

/// Convert an ISO-8601 duration (`PnDTnHnMnS`) to whole seconds.
///
/// Covers the subset the site emits: days, hours, minutes, seconds, with
/// fractional seconds truncated. Weeks/months/years are not produced by
/// video metadata and are ignored. Malformed input yields 0.
pub fn iso8601_to_seconds(duration: &str) -> u64 {
    let rest = match duration.trim().strip_prefix('P') {
        Some(rest) => rest,
        None => return 0,
    };

    let mut total = 0u64;
    let mut in_time = false;
    let mut number = String::new();

    for ch in rest.chars() {
        match ch {
            'T' | 't' => {
                in_time = true;
                number.clear();
            }
            '0'..='9' | '.' => number.push(ch),
            unit => {
                let value = number.parse::<f64>().unwrap_or(0.0);
                number.clear();
                let factor = match (unit.to_ascii_uppercase(), in_time) {
                    ('D', false) => 86_400.0,
                    ('H', true) => 3_600.0,
                    ('M', true) => 60.0,
                    ('S', true) => 1.0,
                    _ => 0.0,
                };
                total += (value * factor) as u64;
            }
        }
    }
    total
}
