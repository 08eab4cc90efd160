//! Error types shared by the generators, driver and scenario loader

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("gravity cycle must contain at least one constant")]
    EmptyGravityCycle,
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl SimError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
