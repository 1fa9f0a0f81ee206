/// Parse a declared track length into whole seconds.
///
/// Accepts `s`, `m:s` and `h:m:s`; the last part may carry a fraction
/// (`3:25.500`), which is dropped. Each part is read as its leading digits.
/// Anything unparsable collapses to `0`, meaning "unknown".
pub fn parse_length(raw: &str) -> u64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }

    let mut total: u64 = 0;
    for part in raw.split(':') {
        let Some(value) = leading_digits(part) else {
            return 0;
        };
        total = total.saturating_mul(60).saturating_add(value);
    }
    total
}

fn leading_digits(s: &str) -> Option<u64> {
    let s = s.trim_start();
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// The raw length as shown to the user: everything before the fraction.
pub fn trim_fraction(raw: &str) -> &str {
    raw.split_once('.').map(|(whole, _)| whole).unwrap_or(raw)
}
