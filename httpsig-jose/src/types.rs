//! Algorithm and key family types

use std::fmt;

use serde::{Deserialize, Serialize};

/// JOSE signature algorithms that can be driven in raw-input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoseAlgorithm {
    /// ECDSA using P-256 and SHA-256
    ES256,
    /// ECDSA using P-384 and SHA-384
    ES384,
    /// EdDSA over Ed25519
    EdDSA,
    /// RSASSA-PKCS1-v1_5 using SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 using SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 using SHA-512
    RS512,
    /// RSASSA-PSS using SHA-256
    PS256,
    /// RSASSA-PSS using SHA-384
    PS384,
    /// RSASSA-PSS using SHA-512
    PS512,
}

impl JoseAlgorithm {
    /// The `alg` name as registered for JWS
    pub fn name(&self) -> &'static str {
        match self {
            Self::ES256 => "ES256",
            Self::ES384 => "ES384",
            Self::EdDSA => "EdDSA",
            Self::RS256 => "RS256",
            Self::RS384 => "RS384",
            Self::RS512 => "RS512",
            Self::PS256 => "PS256",
            Self::PS384 => "PS384",
            Self::PS512 => "PS512",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ES256" => Some(Self::ES256),
            "ES384" => Some(Self::ES384),
            "EdDSA" => Some(Self::EdDSA),
            "RS256" => Some(Self::RS256),
            "RS384" => Some(Self::RS384),
            "RS512" => Some(Self::RS512),
            "PS256" => Some(Self::PS256),
            "PS384" => Some(Self::PS384),
            "PS512" => Some(Self::PS512),
            _ => None,
        }
    }

    /// The HTTP Message Signature Algorithms registry name, if one exists.
    ///
    /// RFC 9421 registers only a subset of the JOSE algorithms; for the rest
    /// the `alg` signature parameter has to be left out.
    pub fn http_signature_identifier(&self) -> Option<&'static str> {
        match self {
            Self::ES256 => Some("ecdsa-p256-sha256"),
            Self::ES384 => Some("ecdsa-p384-sha384"),
            Self::EdDSA => Some("ed25519"),
            Self::RS256 => Some("rsa-v1_5-sha256"),
            Self::PS512 => Some("rsa-pss-sha512"),
            Self::RS384 | Self::RS512 | Self::PS256 | Self::PS384 => None,
        }
    }

    pub fn is_rsa(&self) -> bool {
        matches!(
            self,
            Self::RS256 | Self::RS384 | Self::RS512 | Self::PS256 | Self::PS384 | Self::PS512
        )
    }
}

impl fmt::Display for JoseAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key family as declared by a JWK's `kty` and `crv` members
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyFamily {
    /// `kty: "EC"` with its curve name
    Ec(String),
    /// `kty: "OKP"` with its subtype name
    Okp(String),
    /// `kty: "RSA"`
    Rsa,
    /// `kty: "oct"` (shared secret)
    Oct,
}

impl fmt::Display for KeyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ec(crv) => write!(f, "EC/{}", crv),
            Self::Okp(crv) => write!(f, "OKP/{}", crv),
            Self::Rsa => f.write_str("RSA"),
            Self::Oct => f.write_str("oct"),
        }
    }
}

/// Raw signature bytes together with the algorithm that produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Algorithm used
    pub algorithm: JoseAlgorithm,

    /// Signature bytes
    pub data: Vec<u8>,
}

impl Signature {
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
