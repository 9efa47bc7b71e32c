//! Small text helpers shared by the composer and hashtag selector.

/// Title-case `input`: lowercase everything, split on whitespace and
/// underscores, uppercase the first character of each token, and rejoin
/// with single spaces. Empty tokens are dropped.
///
/// A first character whose uppercase form is several characters (`ß`, `ﬁ`)
/// is left as is, so applying this twice gives the same result as once.
pub fn title_case(input: &str) -> String {
    input
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut upper = first.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => std::iter::once(single).chain(chars).collect(),
                _ => word.to_string(),
            }
        }
        None => String::new(),
    }
}

/// Remove every whitespace character and lowercase the rest.
///
/// Used to turn a trend keyword such as `AI Boom` into a tag body (`aiboom`).
pub fn compact_lowercase(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Trim `value` and map an empty result to `None`.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
