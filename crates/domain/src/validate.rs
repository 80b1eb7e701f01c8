//! Field validators applied before user data reaches storage.
//!
//! Validators are pure and stateless: they check one constraint each and
//! hand the value back unchanged when it passes, so they compose per field.

/// A value was rejected by a validator or a required field was absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The value has fewer characters than the configured minimum.
    #[error("{field} must be at least {limit} characters, got {actual}")]
    TooShort {
        field: &'static str,
        limit: usize,
        actual: usize,
    },

    /// The value has more characters than the configured maximum.
    #[error("{field} must be at most {limit} characters, got {actual}")]
    TooLong {
        field: &'static str,
        limit: usize,
        actual: usize,
    },

    /// A required field was not supplied.
    #[error("{field} is required")]
    MissingField { field: &'static str },
}

/// Enforces a minimum length, counted in characters.
///
/// Combine with [`MaxLength`] to enforce an expected length range. A limit
/// of zero accepts the empty string.
#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    limit: usize,
}

impl MinLength {
    /// Build a validator with the given lower bound.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Check `value` against the bound, returning it unchanged when valid.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooShort`] when `value` has fewer than
    /// `limit` characters.
    pub fn validate<'a>(
        &self,
        field: &'static str,
        value: &'a str,
    ) -> Result<&'a str, ValidationError> {
        let actual = value.chars().count();
        if actual < self.limit {
            return Err(ValidationError::TooShort {
                field,
                limit: self.limit,
                actual,
            });
        }
        Ok(value)
    }
}

/// Enforces a maximum length, counted in characters.
///
/// Combine with [`MinLength`] to enforce an expected length range.
#[derive(Debug, Clone, Copy)]
pub struct MaxLength {
    limit: usize,
}

impl MaxLength {
    /// Build a validator with the given upper bound.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Check `value` against the bound, returning it unchanged when valid.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLong`] when `value` has more than
    /// `limit` characters.
    pub fn validate<'a>(
        &self,
        field: &'static str,
        value: &'a str,
    ) -> Result<&'a str, ValidationError> {
        let actual = value.chars().count();
        if actual > self.limit {
            return Err(ValidationError::TooLong {
                field,
                limit: self.limit,
                actual,
            });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_value_unchanged_when_within_bounds() {
        let value = MinLength::new(3).validate("name", "abc").unwrap();
        assert_eq!(value, "abc");
        let value = MaxLength::new(3).validate("name", "abc").unwrap();
        assert_eq!(value, "abc");
    }

    #[test]
    fn should_reject_value_shorter_than_minimum() {
        let result = MinLength::new(3).validate("name", "ab");
        assert_eq!(
            result,
            Err(ValidationError::TooShort {
                field: "name",
                limit: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn should_reject_value_longer_than_maximum() {
        let result = MaxLength::new(3).validate("name", "abcd");
        assert_eq!(
            result,
            Err(ValidationError::TooLong {
                field: "name",
                limit: 3,
                actual: 4,
            })
        );
    }

    #[test]
    fn should_accept_empty_string_when_minimum_is_zero() {
        // Empty is a boundary, not an error; only a field's own semantics
        // may forbid it.
        assert!(MinLength::new(0).validate("note", "").is_ok());
    }

    #[test]
    fn should_count_characters_not_bytes() {
        // Four characters, more than four bytes.
        assert!(MaxLength::new(4).validate("name", "étoé").is_ok());
        assert!(MinLength::new(5).validate("name", "étoé").is_err());
    }

    #[test]
    fn should_name_the_field_in_the_message() {
        let err = MinLength::new(3).validate("name", "a").unwrap_err();
        assert_eq!(err.to_string(), "name must be at least 3 characters, got 1");
    }
}
