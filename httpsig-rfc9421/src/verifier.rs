//! Message verification pipeline
//!
//! Verification is boolean: a signature that cannot be decoded, a key that
//! cannot be used and a signature that does not match all come back as
//! `false`. Freshness of `created`/`expires` is not checked here; callers
//! that need a staleness or replay policy apply it to the parameters
//! themselves.

use httpsig_jose::{transport, JoseAlgorithm, Jwk, JwkVerifier, RawVerify};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    base::build_signature_base,
    error::Rfc9421Result,
    metadata::build_metadata,
    types::{ComponentLine, SignatureBase, SignatureMetadata, SignatureParameters},
};

/// Result of signature verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether the signature is valid
    pub valid: bool,
    /// Algorithm the key selected
    pub algorithm: JoseAlgorithm,
    /// The re-derived `@signature-params` value
    pub metadata: SignatureMetadata,
    /// The re-derived signature base
    pub base: SignatureBase,
}

/// Re-derives the signature base for a message and checks a signature
#[derive(Debug)]
pub struct HttpSignatureVerifier<V> {
    verifier: V,
}

impl HttpSignatureVerifier<JwkVerifier> {
    /// Verifier for a public (or private) JWK; the algorithm comes from the key
    pub fn from_jwk(jwk: &Jwk) -> Rfc9421Result<Self> {
        Ok(Self::new(JwkVerifier::from_jwk(jwk)?))
    }
}

impl<V: RawVerify> HttpSignatureVerifier<V> {
    pub fn new(verifier: V) -> Self {
        Self { verifier }
    }

    pub fn algorithm(&self) -> JoseAlgorithm {
        self.verifier.algorithm()
    }

    /// Verify `signature` (`:<base64>:` or bare base64) over the message
    pub fn verify(
        &self,
        lines: &[ComponentLine],
        params: &SignatureParameters,
        signature: &str,
    ) -> VerificationResult {
        let metadata = build_metadata(lines, params);
        let base = build_signature_base(lines, &metadata);
        debug!("Signature base re-derived ({} bytes)", base.as_bytes().len());

        let valid = self.verify_base(&base, signature);
        info!("Verification with {}: {}", self.algorithm(), valid);

        VerificationResult { valid, algorithm: self.algorithm(), metadata, base }
    }

    /// Verify `signature` over an already assembled signature base
    pub fn verify_base(&self, base: &SignatureBase, signature: &str) -> bool {
        match transport::decode(signature) {
            Ok(bytes) => self.verifier.verify(base.as_bytes(), &bytes),
            Err(e) => {
                warn!("Signature could not be decoded: {}", e);
                false
            }
        }
    }
}

/// Verify a transported signature over a prebuilt base with a JWK.
///
/// A key that cannot be turned into a verifier yields `false`.
pub fn verify_raw(base: &SignatureBase, signature: &str, jwk: &Jwk) -> bool {
    match HttpSignatureVerifier::from_jwk(jwk) {
        Ok(verifier) => verifier.verify_base(base, signature),
        Err(e) => {
            warn!("Key unusable for verification: {}", e);
            false
        }
    }
}
