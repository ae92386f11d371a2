//! JOSE key layer for HTTP message signatures
//!
//! This crate provides the lowest layer (L1) of the httpsig workspace:
//! parsing JSON Web Keys, choosing a signature algorithm from the key
//! material alone, and signing or verifying arbitrary bytes without any
//! JWS encoding (the "raw input" mode RFC 9421 requires).

pub mod detect;
pub mod error;
pub mod jwk;
pub mod raw;
pub mod traits;
pub mod transport;
pub mod types;

pub use detect::detect_algorithm;
pub use error::{JoseError, JoseResult};
pub use jwk::Jwk;
pub use raw::{JwkSigner, JwkVerifier};
pub use traits::{RawSign, RawVerify};
pub use types::*;
