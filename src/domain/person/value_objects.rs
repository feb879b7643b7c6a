use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A person's relationship with office dogs
///
/// This is a closed set: the desk arrangement rules are defined only for
/// these three values, so anything else is rejected at the boundary
/// (JSON decoding, database decoding, string parsing) instead of being
/// folded into a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "dog_status", rename_all = "lowercase")]
pub enum DogDisposition {
    /// Owns a dog and brings it in
    Have,
    /// Wants distance from dogs
    Avoid,
    /// Fine with dogs, owns none
    Like,
}

/// Error returned when parsing an unrecognized dog status tag
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized dog status: {0}")]
pub struct ParseDogDispositionError(pub String);

impl FromStr for DogDisposition {
    type Err = ParseDogDispositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HAVE" => Ok(DogDisposition::Have),
            "AVOID" => Ok(DogDisposition::Avoid),
            "LIKE" => Ok(DogDisposition::Like),
            other => Err(ParseDogDispositionError(other.to_string())),
        }
    }
}

impl fmt::Display for DogDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DogDisposition::Have => write!(f, "HAVE"),
            DogDisposition::Avoid => write!(f, "AVOID"),
            DogDisposition::Like => write!(f, "LIKE"),
        }
    }
}
