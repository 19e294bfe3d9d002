use crate::error::ApiError;

/// Whether a required string field carries something other than whitespace.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validate that every listed field is present.
///
/// # Examples
/// ```
/// use fcs_api::validation::require_fields;
///
/// assert!(require_fields(&["alice"], "username required").is_ok());
/// assert!(require_fields(&["  "], "username required").is_err());
/// ```
pub fn require_fields(values: &[&str], message: &str) -> Result<(), ApiError> {
    if values.iter().all(|value| is_present(value)) {
        Ok(())
    } else {
        Err(ApiError::Validation(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_fields() {
        assert!(require_fields(&["a", "b"], "msg").is_ok());
        assert!(require_fields(&[], "msg").is_ok());

        // Blank or whitespace-only
        assert!(require_fields(&["a", ""], "msg").is_err());
        assert!(require_fields(&["\t\n "], "msg").is_err());

        match require_fields(&[""], "name and userId required") {
            Err(ApiError::Validation(msg)) => assert_eq!(msg, "name and userId required"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
