//! JSON Web Key (RFC 7517) representation

use std::{fmt, path::Path};

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use zeroize::Zeroizing;

use crate::{
    error::{JoseError, JoseResult},
    types::KeyFamily,
};

/// base64url as used by JWK members; tolerates stray padding on input
const JWK_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const PRIVATE_MEMBERS: [&str; 7] = ["d", "p", "q", "dp", "dq", "qi", "k"];

/// A JSON Web Key
///
/// Only the members needed to pick and drive a signature algorithm are
/// modelled; everything else round-trips through `other`. `Debug` output
/// never includes private members.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,

    #[serde(default, rename = "use", skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qi: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<String>,

    /// Members this type does not interpret
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Jwk {
    pub fn from_json(json: &str) -> JoseResult<Self> {
        let jwk: Jwk = serde_json::from_str(json)?;
        if jwk.kty.is_empty() {
            return Err(JoseError::InvalidKey("empty \"kty\" member".to_string()));
        }
        Ok(jwk)
    }

    /// Read and parse a JWK from a file
    pub fn from_file(path: impl AsRef<Path>) -> JoseResult<Self> {
        let path = path.as_ref();
        debug!("Reading JWK from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Key family derived from `kty` and `crv`
    pub fn key_family(&self) -> JoseResult<KeyFamily> {
        match self.kty.as_str() {
            "EC" => Ok(KeyFamily::Ec(self.required_curve()?)),
            "OKP" => Ok(KeyFamily::Okp(self.required_curve()?)),
            "RSA" => Ok(KeyFamily::Rsa),
            "oct" => Ok(KeyFamily::Oct),
            other => Err(JoseError::InvalidKey(format!("unknown key type \"{}\"", other))),
        }
    }

    pub fn is_private(&self) -> bool {
        match self.kty.as_str() {
            "oct" => self.k.is_some(),
            _ => self.d.is_some(),
        }
    }

    /// Copy of this key with every private member removed
    pub fn to_public(&self) -> Self {
        let mut public = self.clone();
        public.d = None;
        public.p = None;
        public.q = None;
        public.dp = None;
        public.dq = None;
        public.qi = None;
        public.k = None;
        for name in PRIVATE_MEMBERS {
            public.other.remove(name);
        }
        public
    }

    /// Decode a base64url member into bytes.
    ///
    /// The result is zeroized on drop since it may hold private material.
    pub fn member_bytes(&self, name: &str) -> JoseResult<Zeroizing<Vec<u8>>> {
        let encoded = self
            .member(name)
            .ok_or_else(|| JoseError::InvalidKey(format!("missing \"{}\" member", name)))?;
        JWK_BASE64
            .decode(encoded)
            .map(Zeroizing::new)
            .map_err(|e| JoseError::InvalidKey(format!("member \"{}\" is not base64url: {}", name, e)))
    }

    fn member(&self, name: &str) -> Option<&str> {
        let value = match name {
            "x" => &self.x,
            "y" => &self.y,
            "d" => &self.d,
            "n" => &self.n,
            "e" => &self.e,
            "p" => &self.p,
            "q" => &self.q,
            "dp" => &self.dp,
            "dq" => &self.dq,
            "qi" => &self.qi,
            "k" => &self.k,
            _ => return None,
        };
        value.as_deref()
    }

    fn required_curve(&self) -> JoseResult<String> {
        self.crv
            .clone()
            .ok_or_else(|| JoseError::InvalidKey(format!("{} key without \"crv\" member", self.kty)))
    }
}

impl fmt::Debug for Jwk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Jwk")
            .field("kty", &self.kty)
            .field("crv", &self.crv)
            .field("alg", &self.alg)
            .field("kid", &self.kid)
            .field("use", &self.key_use)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("n", &self.n)
            .field("e", &self.e)
            .field("private", &self.is_private())
            .field("other", &self.other.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ED25519_PRIVATE: &str = r#"{
        "kty": "OKP",
        "crv": "Ed25519",
        "d": "nWGxne_9WmC6hEr0kuwsxERJxWl7MmkZcDusAxyuf2A",
        "x": "11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo",
        "kid": "ed-1",
        "ext": true
    }"#;

    #[test]
    fn test_parse_and_family() {
        let jwk = Jwk::from_json(ED25519_PRIVATE).unwrap();
        assert_eq!(jwk.key_family().unwrap(), KeyFamily::Okp("Ed25519".to_string()));
        assert!(jwk.is_private());
        assert_eq!(jwk.kid.as_deref(), Some("ed-1"));
        assert_eq!(jwk.other.get("ext"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_to_public_strips_private_members() {
        let jwk = Jwk::from_json(ED25519_PRIVATE).unwrap();
        let public = jwk.to_public();
        assert!(!public.is_private());
        assert_eq!(public.x, jwk.x);
        let json = serde_json::to_string(&public).unwrap();
        assert!(!json.contains("\"d\""));
    }

    #[test]
    fn test_member_bytes_tolerates_padding() {
        let mut jwk = Jwk::from_json(ED25519_PRIVATE).unwrap();
        let unpadded = jwk.member_bytes("x").unwrap();
        assert_eq!(unpadded.len(), 32);

        jwk.x = Some(format!("{}=", jwk.x.as_deref().unwrap()));
        assert_eq!(*jwk.member_bytes("x").unwrap(), *unpadded);
    }

    #[test]
    fn test_missing_member_names_it() {
        let jwk = Jwk::from_json(r#"{"kty":"RSA","n":"AQAB"}"#).unwrap();
        let err = jwk.member_bytes("e").unwrap_err();
        assert!(err.to_string().contains("\"e\""));
    }

    #[test]
    fn test_rejects_unknown_kty_and_missing_curve() {
        let jwk = Jwk::from_json(r#"{"kty":"XYZ"}"#).unwrap();
        assert!(matches!(jwk.key_family(), Err(JoseError::InvalidKey(_))));

        let jwk = Jwk::from_json(r#"{"kty":"EC","x":"AA","y":"AA"}"#).unwrap();
        assert!(matches!(jwk.key_family(), Err(JoseError::InvalidKey(_))));
    }

    #[test]
    fn test_rejects_non_object_json() {
        assert!(matches!(Jwk::from_json("[1,2]"), Err(JoseError::Json(_))));
        assert!(matches!(Jwk::from_json(r#"{"kty":""}"#), Err(JoseError::InvalidKey(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.jwk");
        std::fs::write(&path, ED25519_PRIVATE).unwrap();
        let jwk = Jwk::from_file(&path).unwrap();
        assert_eq!(jwk.crv.as_deref(), Some("Ed25519"));

        let missing = dir.path().join("missing.jwk");
        assert!(matches!(Jwk::from_file(missing), Err(JoseError::Io(_))));
    }
}
