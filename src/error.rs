//! Error types for IxForge

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IxforgeError {
    #[error("Buffer too small: needed {needed} bytes, got {available}")]
    Length {
        needed: usize,
        available: usize,
    },

    #[error("Format error: {0}")]
    Format(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),
}

impl From<bs58::decode::Error> for IxforgeError {
    fn from(err: bs58::decode::Error) -> Self {
        IxforgeError::InvalidPublicKey(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IxforgeError>;
