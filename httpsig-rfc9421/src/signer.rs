//! Message signing pipeline

use httpsig_jose::{transport, JoseAlgorithm, Jwk, JwkSigner, RawSign};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    base::build_signature_base,
    error::{Rfc9421Error, Rfc9421Result},
    metadata::build_metadata,
    types::{is_structured_field_key, ComponentLine, SignatureBase, SignatureMetadata, SignatureParameters},
};

/// Result of signature creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureOutput {
    /// Raw signature bytes
    pub signature: Vec<u8>,
    /// Algorithm the key selected
    pub algorithm: JoseAlgorithm,
    /// The `@signature-params` value that was signed
    pub metadata: SignatureMetadata,
    /// The complete signature base that was signed
    pub base: SignatureBase,
}

impl SignatureOutput {
    /// Signature as undelimited base64
    pub fn signature_b64(&self) -> String {
        transport::encode(&self.signature)
    }

    /// Signature as a structured-field byte sequence, `:<base64>:`
    pub fn signature_byte_sequence(&self) -> String {
        transport::to_byte_sequence(&self.signature)
    }

    /// `Signature-Input` dictionary member: `<label>=<metadata>`
    pub fn signature_input_header(&self, label: &str) -> Rfc9421Result<String> {
        check_label(label)?;
        Ok(format!("{}={}", label, self.metadata))
    }

    /// `Signature` dictionary member: `<label>=:<base64>:`
    pub fn signature_header(&self, label: &str) -> Rfc9421Result<String> {
        check_label(label)?;
        Ok(format!("{}={}", label, self.signature_byte_sequence()))
    }
}

fn check_label(label: &str) -> Rfc9421Result<()> {
    if is_structured_field_key(label) {
        Ok(())
    } else {
        Err(Rfc9421Error::InvalidParameters(format!("\"{}\" is not a valid signature label", label)))
    }
}

/// Builds the signature base for a message and signs it
#[derive(Debug)]
pub struct HttpSignatureSigner<S> {
    signer: S,
}

impl HttpSignatureSigner<JwkSigner> {
    /// Signer for a private JWK; the algorithm comes from the key
    pub fn from_jwk(jwk: &Jwk) -> Rfc9421Result<Self> {
        Ok(Self::new(JwkSigner::from_jwk(jwk)?))
    }
}

impl<S: RawSign> HttpSignatureSigner<S> {
    pub fn new(signer: S) -> Self {
        Self { signer }
    }

    pub fn algorithm(&self) -> JoseAlgorithm {
        self.signer.algorithm()
    }

    /// Sign a message described by its component lines
    pub fn sign(
        &self,
        lines: &[ComponentLine],
        params: &SignatureParameters,
    ) -> Rfc9421Result<SignatureOutput> {
        let metadata = build_metadata(lines, params);
        let base = build_signature_base(lines, &metadata);
        debug!("Signature base generated ({} bytes, {} components)", base.as_bytes().len(), lines.len());

        let signature = self.sign_base(&base)?;
        info!("Signed message with {}", self.algorithm());

        Ok(SignatureOutput { signature, algorithm: self.algorithm(), metadata, base })
    }

    /// Sign an already assembled signature base
    pub fn sign_base(&self, base: &SignatureBase) -> Rfc9421Result<Vec<u8>> {
        Ok(self.signer.sign(base.as_bytes())?.into_bytes())
    }
}

/// Sign a prebuilt signature base with a private JWK
pub fn sign_raw(base: &SignatureBase, jwk: &Jwk) -> Rfc9421Result<Vec<u8>> {
    HttpSignatureSigner::from_jwk(jwk)?.sign_base(base)
}
