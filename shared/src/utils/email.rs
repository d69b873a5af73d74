//! Email address utilities

/// Normalize an email address used as a lookup key
///
/// Surrounding whitespace is trimmed and the address is lowercased, so
/// `" Driver@Fleet.COM "` and `"driver@fleet.com"` share one record.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Mask an email address for logging (e.g., `d*****@fleet.com`)
///
/// Keeps the first character of the local part and the full domain.
/// Input without an `@` is masked entirely.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let mut chars = local.chars();
            let first = chars.next().unwrap_or('*');
            format!("{}{}@{}", first, "*".repeat(chars.count()), domain)
        }
        Some((_, domain)) => format!("@{}", domain),
        None => "*".repeat(email.chars().count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("driver@fleet.com"), "d*****@fleet.com");
        assert_eq!(mask_email("a@b.com"), "a@b.com");
        assert_eq!(mask_email("@b.com"), "@b.com");
        assert_eq!(mask_email("nodomain"), "********");
        assert_eq!(mask_email(""), "");
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email(" Driver@Fleet.COM "), "driver@fleet.com");
        assert_eq!(normalize_email("a@b.com"), "a@b.com");
    }
}
