//! Filename → display label transform.

/// Turn a filename-style identifier (`my_report-file`) into a label a human
/// would write (`My Report File`).
///
/// `-` is treated as `_`, the string is split on `_` and every word is
/// capitalized. Empty segments are kept, so `a__b` becomes `"A  B"`.
pub fn humanize(name: &str) -> String {
    name.replace('-', "_")
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
