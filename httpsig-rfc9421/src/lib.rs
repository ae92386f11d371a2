//! RFC 9421 HTTP Message Signatures implementation
//!
//! This crate provides the message signing layer (L2): it turns caller
//! supplied component lines and signature parameters into the canonical
//! signature base and signs or verifies that base with a JSON Web Key.

pub mod base;
pub mod error;
pub mod metadata;
pub mod signer;
pub mod types;
pub mod verifier;

pub use base::build_signature_base;
pub use error::{Rfc9421Error, Rfc9421Result};
pub use metadata::build_metadata;
pub use signer::{sign_raw, HttpSignatureSigner, SignatureOutput};
pub use types::*;
pub use verifier::{verify_raw, HttpSignatureVerifier, VerificationResult};

/// Label used for `Signature-Input` / `Signature` dictionary members when
/// the caller does not pick one
pub const DEFAULT_SIGNATURE_LABEL: &str = "sig1";
