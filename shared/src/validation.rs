//! Validation utilities for the Duka retail management platform
//!
//! Client-side validation mirrors (but does not replace) the checks the
//! admin API enforces server-side.

/// Maximum length of an auto-derived business slug
pub const MAX_SLUG_LEN: usize = 50;

/// Maximum upload size for business logos (5 MB)
pub const MAX_LOGO_BYTES: u64 = 5 * 1024 * 1024;

// ============================================================================
// Account Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

/// Validate that a password and its confirmation match
pub fn validate_password_confirmation(
    password: &str,
    confirmation: &str,
) -> Result<(), &'static str> {
    if password != confirmation {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Validate Tanzanian phone number format
/// Accepts: 0712345678, 0712-345-678, +255712345678
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    // Local mobile: 10 digits starting with 0 (e.g., 0712345678)
    if digits.len() == 10 && digits.starts_with('0') {
        return Ok(());
    }
    // International format without leading 0: 9 digits
    if digits.len() == 9 && !digits.starts_with('0') {
        return Ok(());
    }
    // International format with country code: 12 digits starting with 255
    if digits.len() == 12 && digits.starts_with("255") {
        return Ok(());
    }

    Err("Invalid phone number format")
}

// ============================================================================
// Business Slug
// ============================================================================

/// Derive a URL-safe slug from a business name
///
/// Lowercases the name, replaces runs of whitespace with a hyphen, strips
/// everything outside `[a-z0-9-]` and truncates to [`MAX_SLUG_LEN`].
pub fn derive_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_space = false;

    for c in name.trim().to_lowercase().chars() {
        if c.is_whitespace() {
            if !last_was_space {
                slug.push('-');
                last_was_space = true;
            }
            continue;
        }
        last_was_space = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }

    slug.truncate(MAX_SLUG_LEN);
    slug
}

/// Validate a business slug
pub fn validate_slug(slug: &str) -> Result<(), &'static str> {
    if slug.is_empty() {
        return Err("Slug is required");
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err("Slug must be at most 50 characters");
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("Slug may only contain lowercase letters, digits and hyphens");
    }
    Ok(())
}

// ============================================================================
// Inventory Validations
// ============================================================================

/// Validate a positive piece quantity
pub fn validate_quantity(quantity: i64) -> Result<(), &'static str> {
    if quantity <= 0 {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate a requested transfer/removal quantity against known stock
pub fn validate_against_stock(requested: i64, available: i64) -> Result<(), &'static str> {
    validate_quantity(requested)?;
    if requested > available {
        return Err("Quantity exceeds available stock");
    }
    Ok(())
}

/// Clamp a quantity input to the inclusive range `[0, available]`
///
/// UI-side convenience only; submission re-validates against stock because
/// the available quantity may have changed since it was loaded.
pub fn clamp_quantity(requested: i64, available: i64) -> i64 {
    requested.clamp(0, available.max(0))
}

// ============================================================================
// Upload Validations
// ============================================================================

/// Validate a business logo upload before it is sent
pub fn validate_logo_upload(content_type: &str, size_bytes: u64) -> Result<(), &'static str> {
    if !content_type.starts_with("image/") {
        return Err("Logo must be an image file");
    }
    if size_bytes > MAX_LOGO_BYTES {
        return Err("Logo must be 5MB or smaller");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_slug_strips_punctuation() {
        assert_eq!(derive_slug("Koppela Mini Mart!"), "koppela-mini-mart");
    }

    #[test]
    fn test_derive_slug_collapses_whitespace() {
        assert_eq!(derive_slug("  Duka   la  Mama  "), "duka-la-mama");
    }

    #[test]
    fn test_derive_slug_truncates() {
        let name = "a".repeat(80);
        assert_eq!(derive_slug(&name).len(), MAX_SLUG_LEN);
    }

    #[test]
    fn test_validate_against_stock() {
        assert!(validate_against_stock(5, 5).is_ok());
        assert!(validate_against_stock(6, 5).is_err());
        assert!(validate_against_stock(0, 5).is_err());
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(-3, 10), 0);
        assert_eq!(clamp_quantity(7, 10), 7);
        assert_eq!(clamp_quantity(12, 10), 10);
        assert_eq!(clamp_quantity(4, -1), 0);
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("0712345678").is_ok());
        assert!(validate_phone("+255712345678").is_ok());
        assert!(validate_phone("0712-345-678").is_ok());
        assert!(validate_phone("12345").is_err());
    }

    proptest::proptest! {
        #[test]
        fn prop_clamp_within_bounds(requested in -1_000i64..1_000, available in -10i64..1_000) {
            let clamped = clamp_quantity(requested, available);
            proptest::prop_assert!(clamped >= 0);
            proptest::prop_assert!(clamped <= available.max(0));
        }

        #[test]
        fn prop_derived_slug_charset(name in "\\PC{0,80}") {
            let slug = derive_slug(&name);
            proptest::prop_assert!(slug.len() <= MAX_SLUG_LEN);
            proptest::prop_assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }
}
