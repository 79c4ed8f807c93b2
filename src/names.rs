//! Player-name canonicalization. Every cross-source comparison and every
//! derived asset filename goes through one of the two keys produced here.

/// Annotation markers that ride along with names in the source files.
/// `(c)` and `(wk)` must go as whole units or their letters would survive
/// the character filter as stray tokens.
const MARKERS: &[&str] = &["✈️", "(c)", "(wk)", "**"];

fn scrub(name: &str) -> String {
    let mut text = name.to_lowercase();
    for marker in MARKERS {
        text = text.replace(marker, "");
    }
    text.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ' || *c == '_')
        .collect()
}

/// Filename-safe key: lowercase, markers stripped, `[a-z0-9_]` only,
/// whitespace collapsed to single underscores.
pub fn filename_key(name: &str) -> String {
    scrub(name).split_whitespace().collect::<Vec<_>>().join("_")
}

/// Comparison key: same scrub, whitespace collapsed to single spaces.
pub fn compare_key(name: &str) -> String {
    scrub(name).split_whitespace().collect::<Vec<_>>().join(" ")
}
