/// Convert a card name to a filesystem-safe slug.
///
/// Lower-cases the name, collapses every run of characters outside
/// `[a-z0-9]` into a single `_`, and trims `_` from both ends.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_sep = false;
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.push(ch);
        } else {
            pending_sep = true;
        }
    }
    slug
}
