//! Raw-input signing and verification backed by *ring*
//!
//! Unlike JWS compact signing, the bytes handed to [`JwkSigner::sign`] are
//! signed as-is: no base64url step and no protected header.

use std::fmt;

use ring::{
    rand::SystemRandom,
    rsa::{KeyPairComponents, PublicKeyComponents},
    signature::{
        self, EcdsaKeyPair, EcdsaSigningAlgorithm, Ed25519KeyPair, RsaEncoding, RsaKeyPair,
        RsaParameters, UnparsedPublicKey, VerificationAlgorithm,
    },
};
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::{
    detect::detect_algorithm,
    error::{JoseError, JoseResult},
    jwk::Jwk,
    traits::{RawSign, RawVerify},
    types::{JoseAlgorithm, Signature},
};

/// ECDSA parameters for a JOSE algorithm: signing suite, verification
/// suite and coordinate length. Signatures use the fixed `r || s` layout
/// JOSE mandates rather than DER.
fn ecdsa_suite(
    algorithm: JoseAlgorithm,
) -> Option<(&'static EcdsaSigningAlgorithm, &'static signature::EcdsaVerificationAlgorithm, usize)> {
    match algorithm {
        JoseAlgorithm::ES256 => {
            Some((&signature::ECDSA_P256_SHA256_FIXED_SIGNING, &signature::ECDSA_P256_SHA256_FIXED, 32))
        }
        JoseAlgorithm::ES384 => {
            Some((&signature::ECDSA_P384_SHA384_FIXED_SIGNING, &signature::ECDSA_P384_SHA384_FIXED, 48))
        }
        _ => None,
    }
}

fn rsa_suite(algorithm: JoseAlgorithm) -> Option<(&'static dyn RsaEncoding, &'static RsaParameters)> {
    let suite: (&'static dyn RsaEncoding, &'static RsaParameters) = match algorithm {
        JoseAlgorithm::RS256 => (&signature::RSA_PKCS1_SHA256, &signature::RSA_PKCS1_2048_8192_SHA256),
        JoseAlgorithm::RS384 => (&signature::RSA_PKCS1_SHA384, &signature::RSA_PKCS1_2048_8192_SHA384),
        JoseAlgorithm::RS512 => (&signature::RSA_PKCS1_SHA512, &signature::RSA_PKCS1_2048_8192_SHA512),
        JoseAlgorithm::PS256 => (&signature::RSA_PSS_SHA256, &signature::RSA_PSS_2048_8192_SHA256),
        JoseAlgorithm::PS384 => (&signature::RSA_PSS_SHA384, &signature::RSA_PSS_2048_8192_SHA384),
        JoseAlgorithm::PS512 => (&signature::RSA_PSS_SHA512, &signature::RSA_PSS_2048_8192_SHA512),
        _ => return None,
    };
    Some(suite)
}

/// SEC1 uncompressed point `0x04 || x || y` from the JWK coordinates.
///
/// Coordinates shorter than the field size are left-padded; longer ones
/// are rejected.
fn uncompressed_point(jwk: &Jwk, coordinate_len: usize) -> JoseResult<Vec<u8>> {
    let mut point = Vec::with_capacity(1 + 2 * coordinate_len);
    point.push(0x04);
    for name in ["x", "y"] {
        let coordinate = jwk.member_bytes(name)?;
        if coordinate.len() > coordinate_len {
            return Err(JoseError::InvalidKey(format!(
                "\"{}\" is {} bytes, expected {}",
                name,
                coordinate.len(),
                coordinate_len
            )));
        }
        point.resize(point.len() + coordinate_len - coordinate.len(), 0);
        point.extend_from_slice(&coordinate);
    }
    Ok(point)
}

fn rejected(e: ring::error::KeyRejected) -> JoseError {
    JoseError::InvalidKey(format!("key rejected by primitive: {}", e))
}

enum SigningKeyPair {
    Ecdsa(EcdsaKeyPair),
    Ed25519(Ed25519KeyPair),
    Rsa(RsaKeyPair, &'static dyn RsaEncoding),
}

/// Signer bound to a private JWK
pub struct JwkSigner {
    algorithm: JoseAlgorithm,
    key_pair: SigningKeyPair,
    rng: SystemRandom,
}

impl JwkSigner {
    /// Build a signer, choosing the algorithm from the key itself
    pub fn from_jwk(jwk: &Jwk) -> JoseResult<Self> {
        if !jwk.is_private() {
            return Err(JoseError::MissingPrivateKey);
        }

        let algorithm = detect_algorithm(jwk)?;
        let rng = SystemRandom::new();

        let key_pair = if let Some((signing, _, coordinate_len)) = ecdsa_suite(algorithm) {
            let d = jwk.member_bytes("d")?;
            let public_key = uncompressed_point(jwk, coordinate_len)?;
            let key_pair =
                EcdsaKeyPair::from_private_key_and_public_key(signing, &d, &public_key, &rng)
                    .map_err(rejected)?;
            SigningKeyPair::Ecdsa(key_pair)
        } else if let Some((encoding, _)) = rsa_suite(algorithm) {
            let n = jwk.member_bytes("n")?;
            let e = jwk.member_bytes("e")?;
            let d = jwk.member_bytes("d")?;
            let p = jwk.member_bytes("p")?;
            let q = jwk.member_bytes("q")?;
            let dp = jwk.member_bytes("dp")?;
            let dq = jwk.member_bytes("dq")?;
            let qi = jwk.member_bytes("qi")?;
            let components = KeyPairComponents {
                public_key: PublicKeyComponents { n: &n[..], e: &e[..] },
                d: &d[..],
                p: &p[..],
                q: &q[..],
                dP: &dp[..],
                dQ: &dq[..],
                qInv: &qi[..],
            };
            let key_pair = RsaKeyPair::from_components(&components).map_err(rejected)?;
            SigningKeyPair::Rsa(key_pair, encoding)
        } else {
            let seed = jwk.member_bytes("d")?;
            let public_key = jwk.member_bytes("x")?;
            let key_pair =
                Ed25519KeyPair::from_seed_and_public_key(&seed, &public_key).map_err(rejected)?;
            SigningKeyPair::Ed25519(key_pair)
        };

        info!("Loaded {} signing key", algorithm);
        Ok(Self { algorithm, key_pair, rng })
    }
}

impl RawSign for JwkSigner {
    fn algorithm(&self) -> JoseAlgorithm {
        self.algorithm
    }

    fn sign(&self, data: &[u8]) -> JoseResult<Signature> {
        debug!("Signing {} bytes with {}", data.len(), self.algorithm);

        let signature_data = match &self.key_pair {
            SigningKeyPair::Ecdsa(key_pair) => key_pair
                .sign(&self.rng, data)
                .map_err(|e| JoseError::CryptoError(e.to_string()))?
                .as_ref()
                .to_vec(),
            SigningKeyPair::Ed25519(key_pair) => key_pair.sign(data).as_ref().to_vec(),
            SigningKeyPair::Rsa(key_pair, encoding) => {
                let mut buffer = Zeroizing::new(vec![0u8; key_pair.public().modulus_len()]);
                key_pair
                    .sign(*encoding, &self.rng, data, &mut buffer)
                    .map_err(|e| JoseError::CryptoError(e.to_string()))?;
                buffer.to_vec()
            }
        };

        debug!("Produced {}-byte signature", signature_data.len());
        Ok(Signature { algorithm: self.algorithm, data: signature_data })
    }
}

impl fmt::Debug for JwkSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwkSigner").field("algorithm", &self.algorithm).finish_non_exhaustive()
    }
}

enum VerifyingKey {
    Unparsed(UnparsedPublicKey<Vec<u8>>),
    Rsa(PublicKeyComponents<Vec<u8>>, &'static RsaParameters),
}

/// Verifier bound to the public half of a JWK
pub struct JwkVerifier {
    algorithm: JoseAlgorithm,
    key: VerifyingKey,
}

impl JwkVerifier {
    /// Build a verifier; private members, if present, are ignored
    pub fn from_jwk(jwk: &Jwk) -> JoseResult<Self> {
        let algorithm = detect_algorithm(jwk)?;

        let key = if let Some((_, verification, coordinate_len)) = ecdsa_suite(algorithm) {
            let point = uncompressed_point(jwk, coordinate_len)?;
            VerifyingKey::Unparsed(UnparsedPublicKey::new(
                verification as &'static dyn VerificationAlgorithm,
                point,
            ))
        } else if let Some((_, params)) = rsa_suite(algorithm) {
            let n = jwk.member_bytes("n")?.to_vec();
            let e = jwk.member_bytes("e")?.to_vec();
            VerifyingKey::Rsa(PublicKeyComponents { n, e }, params)
        } else {
            let public_key = jwk.member_bytes("x")?.to_vec();
            VerifyingKey::Unparsed(UnparsedPublicKey::new(&signature::ED25519, public_key))
        };

        Ok(Self { algorithm, key })
    }
}

impl RawVerify for JwkVerifier {
    fn algorithm(&self) -> JoseAlgorithm {
        self.algorithm
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        let outcome = match &self.key {
            VerifyingKey::Unparsed(public_key) => public_key.verify(data, signature),
            VerifyingKey::Rsa(components, params) => components.verify(params, data, signature),
        };
        debug!(
            "{} verification over {} bytes: {}",
            self.algorithm,
            data.len(),
            if outcome.is_ok() { "valid" } else { "rejected" }
        );
        outcome.is_ok()
    }
}

impl fmt::Debug for JwkVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwkVerifier").field("algorithm", &self.algorithm).finish_non_exhaustive()
    }
}
