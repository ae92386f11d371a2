//! JOSE layer error types

use thiserror::Error;

pub type JoseResult<T> = Result<T, JoseError>;

#[derive(Error, Debug)]
pub enum JoseError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Unsupported key: {0}")]
    UnsupportedKey(String),

    #[error("Algorithm {requested} does not match key type {key}")]
    AlgorithmMismatch { requested: String, key: String },

    #[error("Key has no private component")]
    MissingPrivateKey,

    #[error("Cryptographic operation failed: {0}")]
    CryptoError(String),

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
