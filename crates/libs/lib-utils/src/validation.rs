//! # Validation Utilities
//!
//! Input validation helpers shared by the HTTP handlers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format (basic check).
pub fn validate_email(email: &str) -> Result<(), String> {
    let valid = email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.'))
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err("Invalid email format".to_string())
    }
}

/// Validate minimum length.
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Result<(), String> {
    if value.chars().count() < min {
        Err(format!("{} must be at least {} characters", field_name, min))
    } else {
        Ok(())
    }
}

/// Validate a latitude in decimal degrees.
pub fn validate_latitude(latitude: f64) -> Result<(), String> {
    if latitude.is_finite() && latitude.abs() <= 90.0 {
        Ok(())
    } else {
        Err("latitude must be between -90 and 90".to_string())
    }
}

/// Validate a longitude in decimal degrees.
pub fn validate_longitude(longitude: f64) -> Result<(), String> {
    if longitude.is_finite() && longitude.abs() <= 180.0 {
        Ok(())
    } else {
        Err("longitude must be between -180 and 180".to_string())
    }
}

/// Validate a 1-indexed page number.
pub fn validate_page(page: u32) -> Result<(), String> {
    if page >= 1 {
        Ok(())
    } else {
        Err("page must be at least 1".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(validate_email("johndoe@example.com").is_ok());
        assert!(validate_email("johndoe.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("johndoe@localhost").is_err());
    }

    #[test]
    fn test_coordinates() {
        assert!(validate_latitude(-27.1382984).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(90.1).is_err());
        assert!(validate_latitude(f64::NAN).is_err());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.5).is_err());
    }

    #[test]
    fn test_min_length_counts_chars() {
        assert!(validate_min_length("ñandú1", 6, "password").is_ok());
        assert_eq!(
            validate_min_length("12345", 6, "password"),
            Err("password must be at least 6 characters".to_string())
        );
    }

    #[test]
    fn test_page() {
        assert!(validate_page(1).is_ok());
        assert!(validate_page(0).is_err());
    }
}
