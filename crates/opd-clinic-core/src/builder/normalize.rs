//! Text normalization helpers.
//!
//! Applied identically everywhere: names and addresses get [`title_case`],
//! clinical free text gets [`capitalize_first`], medicine names are rendered
//! in full uppercase by the table renderer. Empty strings pass through
//! unchanged; absence is decided by the caller.

/// Title-case each whitespace-delimited word: first character uppercased,
/// remainder lowercased. Collapses runs of whitespace and trims the ends.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Uppercase the first character only, leaving the rest unchanged.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
