//! Error types.
//!
//! All failures happen at construction time. Once a `Horse`, `Hippodrome`
//! or `Race` exists, advancing it and picking a winner cannot fail.

use thiserror::Error;

/// A rejected horse or race-collection construction.
///
/// The `Display` strings are part of the public contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The horse name was absent.
    #[error("Name cannot be null.")]
    NullName,

    /// The horse name was empty or whitespace only.
    #[error("Name cannot be blank.")]
    BlankName,

    /// The speed was below zero (or not a number).
    #[error("Speed cannot be negative.")]
    NegativeSpeed { speed: f64 },

    /// The initial distance was below zero (or not a number).
    #[error("Distance cannot be negative.")]
    NegativeDistance { distance: f64 },

    /// The horse collection was absent.
    #[error("Horses cannot be null.")]
    NullCollection,

    /// The horse collection had no elements.
    #[error("Horses cannot be empty.")]
    EmptyCollection,
}

/// A rejected race configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A horse or the field failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The configuration could not be parsed.
    #[error("Race configuration parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The finish rule can never end a race.
    #[error("Invalid finish rule: {0}")]
    InvalidFinish(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::NullName.to_string(), "Name cannot be null.");
        assert_eq!(ValidationError::BlankName.to_string(), "Name cannot be blank.");
        assert_eq!(
            ValidationError::NegativeSpeed { speed: -1.0 }.to_string(),
            "Speed cannot be negative."
        );
        assert_eq!(
            ValidationError::NegativeDistance { distance: -1.0 }.to_string(),
            "Distance cannot be negative."
        );
        assert_eq!(ValidationError::NullCollection.to_string(), "Horses cannot be null.");
        assert_eq!(ValidationError::EmptyCollection.to_string(), "Horses cannot be empty.");
    }

    #[test]
    fn test_config_error_is_transparent_over_validation() {
        let err = ConfigError::from(ValidationError::EmptyCollection);
        assert_eq!(err.to_string(), "Horses cannot be empty.");
    }
}
