//! Whitespace-separated class token lists.
//!
//! Matching for queries ignores ASCII case, like the DOM index the rest of the
//! engine keeps. Removal matches the token exactly and keeps every other token
//! in its original order.

/// Iterate the tokens of a `class` attribute.
pub fn tokens(class_attr: &str) -> impl Iterator<Item = &str> {
    class_attr.split_ascii_whitespace()
}

/// Whether `class_attr` carries `token` (ASCII case-insensitive).
pub fn contains(class_attr: &str, token: &str) -> bool {
    tokens(class_attr).any(|candidate| candidate.eq_ignore_ascii_case(token))
}

/// Remove every exact occurrence of `token`.
///
/// Returns `None` when the token is not present so callers can leave the
/// attribute untouched.
pub fn remove(class_attr: &str, token: &str) -> Option<String> {
    if !tokens(class_attr).any(|candidate| candidate == token) {
        return None;
    }
    let kept: Vec<&str> = tokens(class_attr)
        .filter(|candidate| *candidate != token)
        .collect();
    Some(kept.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_is_exact_and_preserves_other_tokens() {
        assert_eq!(
            remove("tour-bar-wrap hidden", "hidden").as_deref(),
            Some("tour-bar-wrap")
        );
        assert_eq!(
            remove("hidden-xs tour-bar-wrap hidden wide", "hidden").as_deref(),
            Some("hidden-xs tour-bar-wrap wide")
        );
        assert_eq!(remove("tour-bar-wrap hidden-xs", "hidden"), None);
    }

    #[test]
    fn remove_drops_duplicates() {
        assert_eq!(remove("hidden a hidden", "hidden").as_deref(), Some("a"));
    }

    #[test]
    fn contains_ignores_case_and_spacing() {
        assert!(contains("  Step-Circle\tcurrent ", "step-circle"));
        assert!(!contains("step-circles", "step-circle"));
    }
}
