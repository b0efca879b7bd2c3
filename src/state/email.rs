use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Format-only email check: one `@`, no whitespace, and a dot with
/// something on both sides of it after the `@`.
pub fn is_valid_email_shape(input: &str) -> bool {
    EMAIL_SHAPE.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert!(is_valid_email_shape("a@b.co"));
        assert!(is_valid_email_shape("first.last@mail.example.org"));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(!is_valid_email_shape("a@b"));
        assert!(!is_valid_email_shape("@b.co"));
        assert!(!is_valid_email_shape("a@.co"));
        assert!(!is_valid_email_shape("a b@c.co"));
        assert!(!is_valid_email_shape("a@b."));
        assert!(!is_valid_email_shape("a@@b.co"));
        assert!(!is_valid_email_shape("a@b@c.co"));
        assert!(!is_valid_email_shape(""));
    }

    #[test]
    fn test_surrounding_whitespace_is_rejected() {
        assert!(!is_valid_email_shape(" a@b.co"));
        assert!(!is_valid_email_shape("a@b.co\n"));
    }
}
