//! Case normalization.

/// First character upper-cased, everything else lower-cased:
/// "build WORKFLOWS" → "Build workflows".
pub fn sentence_case(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
