//! Light — a named on/off device exposed through the API.

use serde::{Deserialize, Serialize};

use crate::error::LightsError;
use crate::id::LightId;
use crate::time::Timestamp;
use crate::validate::{MaxLength, MinLength, ValidationError};

/// Minimum accepted length for a light name, in characters.
pub const MIN_NAME_LENGTH: usize = 3;
/// Maximum accepted length for a light name, in characters.
pub const MAX_NAME_LENGTH: usize = 32;

const NAME_MIN: MinLength = MinLength::new(MIN_NAME_LENGTH);
const NAME_MAX: MaxLength = MaxLength::new(MAX_NAME_LENGTH);

/// A stored light, including the identity assigned by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Light {
    pub id: LightId,
    pub name: String,
    pub is_powered_on: bool,
    pub created_at: Timestamp,
}

/// Field values for a light that has not been persisted yet.
///
/// The storage layer assigns the id on insert; until then the draft has
/// no identity.
#[derive(Debug, Clone)]
pub struct NewLight {
    pub name: String,
    pub is_powered_on: bool,
    pub created_at: Timestamp,
}

impl NewLight {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`LightsError::InvalidInput`] when `name` violates the
    /// configured length bounds.
    pub fn validate(&self) -> Result<(), LightsError> {
        validate_name(&self.name)?;
        Ok(())
    }
}

/// Validate a light name against the configured length bounds, returning
/// it unchanged when valid.
///
/// # Errors
///
/// Returns [`ValidationError::TooShort`] or [`ValidationError::TooLong`].
pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    NAME_MIN.validate("name", name)?;
    NAME_MAX.validate("name", name)
}
