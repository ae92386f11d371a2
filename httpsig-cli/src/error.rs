//! CLI error types

use httpsig_jose::JoseError;
use httpsig_rfc9421::Rfc9421Error;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Key error: {0}")]
    Key(#[from] JoseError),

    #[error(transparent)]
    Rfc9421(#[from] Rfc9421Error),

    #[error("Signature verification failed")]
    VerificationFailed,
}
