//! Common validation rules shared across request payloads.

use validator::ValidationError;

/// Validates the product listing sort field.
///
/// Only the whitelisted fields may reach the ORDER BY clause.
pub fn validate_sort_field(sort_by: &str) -> Result<(), ValidationError> {
    match sort_by {
        "createdAt" | "updatedAt" | "name" | "price" => Ok(()),
        _ => {
            let mut error = ValidationError::new("sort_field_unknown");
            error.message = Some("sortBy must be one of createdAt, updatedAt, name, price".into());
            Err(error)
        }
    }
}

/// Validates the sort direction.
pub fn validate_sort_order(sort_order: &str) -> Result<(), ValidationError> {
    if sort_order.eq_ignore_ascii_case("ASC") || sort_order.eq_ignore_ascii_case("DESC") {
        Ok(())
    } else {
        let mut error = ValidationError::new("sort_order_invalid");
        error.message = Some("sortOrder must be ASC or DESC".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_accepts_whitelisted_values() {
        for field in ["createdAt", "updatedAt", "name", "price"] {
            assert!(validate_sort_field(field).is_ok());
        }
    }

    #[test]
    fn sort_field_rejects_unknown_values() {
        assert!(validate_sort_field("password_hash").is_err());
        assert!(validate_sort_field("").is_err());
    }

    #[test]
    fn sort_order_accepts_both_directions_case_insensitively() {
        assert!(validate_sort_order("ASC").is_ok());
        assert!(validate_sort_order("desc").is_ok());
        assert!(validate_sort_order("sideways").is_err());
    }
}
