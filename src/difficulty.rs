use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scales operand magnitude; always within `MIN..=MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DifficultyLevel(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("difficulty must be between 1 and 10, got {0}")]
pub struct DifficultyError(pub u8);

impl DifficultyLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(level: u8) -> Result<Self, DifficultyError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(DifficultyError(level))
        }
    }

    /// Saturate into range instead of failing
    pub fn clamped(level: u8) -> Self {
        Self(level.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Largest operand for the plain arithmetic and percent forms
    pub fn max_operand(&self) -> u32 {
        u32::from(self.0) * 10
    }

    pub fn increment(&self) -> Self {
        Self::clamped(self.0.saturating_add(1))
    }

    pub fn decrement(&self) -> Self {
        Self::clamped(self.0.saturating_sub(1))
    }
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for DifficultyLevel {
    type Error = DifficultyError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<DifficultyLevel> for u8 {
    fn from(level: DifficultyLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
