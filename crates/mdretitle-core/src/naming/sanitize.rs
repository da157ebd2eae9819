//! Title-to-filename character cleanup.

/// Linux NAME_MAX: maximum bytes in a single path component.
pub const NAME_MAX: usize = 255;

/// Characters rejected by at least one common filesystem.
const DISALLOWED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Cleans a raw title for use as a filename stem.
///
/// - Removes `< > : " / \ | ? *` and control characters (they are dropped, not replaced)
/// - Turns every `-` into a space
/// - Collapses whitespace runs to one space and trims both ends
pub fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !DISALLOWED.contains(c) && !(c.is_control() && !c.is_whitespace()))
        .map(|c| if c == '-' { ' ' } else { c })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns true if `s` contains a character `sanitize_title` would remove.
pub(crate) fn has_disallowed(s: &str) -> bool {
    s.chars().any(|c| DISALLOWED.contains(&c) || c.is_control())
}

/// Longest prefix of `name` that fits in `max` bytes without splitting a character.
pub(crate) fn truncate_bytes(name: &str, max: usize) -> &str {
    if name.len() <= max {
        return name;
    }
    let mut take = max;
    while take > 0 && !name.is_char_boundary(take) {
        take -= 1;
    }
    &name[..take]
}
