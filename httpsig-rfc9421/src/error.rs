//! RFC 9421 error types

use thiserror::Error;

pub type Rfc9421Result<T> = Result<T, Rfc9421Error>;

#[derive(Error, Debug)]
pub enum Rfc9421Error {
    #[error("Invalid signature parameters: {0}")]
    InvalidParameters(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Signing error: {0}")]
    JoseError(#[from] httpsig_jose::JoseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
