//! Slug derivation for URL-safe identifiers
//!
//! Slugs are derived from display names: lowercase, ASCII alphanumerics
//! kept, every other run of characters collapsed into a single hyphen.
//! Uniqueness suffixing (`-1`, `-2`, ...) is handled by the services,
//! which can ask the repository whether a candidate collides.

/// Derive a URL-safe slug from a display name.
///
/// `"Graph Theory"` and `"graph theory!"` both produce `"graph-theory"`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_sep = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    slug
}

/// Build the `n`-th disambiguated candidate for a base slug.
///
/// `candidate("graph-theory", 0)` is the base itself; subsequent calls
/// append a numeric suffix starting from 1.
pub fn candidate(base: &str, n: u32) -> String {
    if n == 0 {
        base.to_string()
    } else {
        format!("{base}-{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slug() {
        assert_eq!(slugify("Graph Theory"), "graph-theory");
        assert_eq!(slugify("graph theory!"), "graph-theory");
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(slugify("Dynamic   Programming -- Intro"), "dynamic-programming-intro");
    }

    #[test]
    fn test_strips_leading_and_trailing_noise() {
        assert_eq!(slugify("  Arrays  "), "arrays");
        assert_eq!(slugify("!!Arrays!!"), "arrays");
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(slugify("Trées & Graphs"), "tr-es-graphs");
    }

    #[test]
    fn test_candidate_suffixes() {
        assert_eq!(candidate("graph-theory", 0), "graph-theory");
        assert_eq!(candidate("graph-theory", 1), "graph-theory-1");
        assert_eq!(candidate("graph-theory", 2), "graph-theory-2");
    }
}
