//! Cache key normalization
//!
//! A phrase's identity in the memo tables is its normalized form: lower-cased
//! and stripped of surrounding whitespace. Nothing else is touched — internal
//! whitespace, punctuation, and Unicode forms pass through as-is. That is a
//! documented limitation of the key scheme, not something to silently fix:
//! no broader tokenization contract exists at this layer.

/// Canonicalize a raw phrase into a cache key.
///
/// Deterministic, pure, and total; the empty string is a valid key.
pub fn normalize(phrase: &str) -> String {
    phrase.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_whitespace_collapse_to_same_key() {
        assert_eq!(normalize("Dusty Rose"), "dusty rose");
        assert_eq!(normalize("  dusty rose  "), "dusty rose");
        assert_eq!(normalize("\tDUSTY ROSE\n"), "dusty rose");
    }

    #[test]
    fn test_internal_whitespace_is_preserved() {
        assert_eq!(normalize("dusty   rose"), "dusty   rose");
    }

    #[test]
    fn test_punctuation_is_preserved() {
        assert_eq!(normalize("Rose, Dusty!"), "rose, dusty!");
    }

    #[test]
    fn test_empty_and_blank_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
