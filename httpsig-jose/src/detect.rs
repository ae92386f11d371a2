//! Algorithm selection from key material

use tracing::debug;

use crate::{
    error::{JoseError, JoseResult},
    jwk::Jwk,
    types::{JoseAlgorithm, KeyFamily},
};

/// Default algorithm for a key family, or an error when the family has no
/// asymmetric primitive available.
///
/// Shared-secret keys are refused outright so a MAC is never chosen
/// implicitly.
pub fn algorithm_for_family(family: &KeyFamily) -> JoseResult<JoseAlgorithm> {
    match family {
        KeyFamily::Ec(crv) => match crv.as_str() {
            "P-256" => Ok(JoseAlgorithm::ES256),
            "P-384" => Ok(JoseAlgorithm::ES384),
            other => Err(JoseError::UnsupportedKey(format!("EC curve {}", other))),
        },
        KeyFamily::Okp(crv) => match crv.as_str() {
            "Ed25519" => Ok(JoseAlgorithm::EdDSA),
            other => Err(JoseError::UnsupportedKey(format!("OKP curve {}", other))),
        },
        KeyFamily::Rsa => Ok(JoseAlgorithm::RS256),
        KeyFamily::Oct => Err(JoseError::UnsupportedKey(
            "symmetric (oct) keys cannot produce asymmetric signatures".to_string(),
        )),
    }
}

/// Pick the signing/verification algorithm for a JWK.
///
/// The key's own `alg` member may narrow the choice within its family
/// (e.g. PS256 for an RSA key) but never switch families.
pub fn detect_algorithm(jwk: &Jwk) -> JoseResult<JoseAlgorithm> {
    let family = jwk.key_family()?;
    let default = algorithm_for_family(&family)?;

    let algorithm = match jwk.alg.as_deref() {
        None => default,
        Some(name) => {
            let requested = JoseAlgorithm::from_name(name).ok_or_else(|| {
                JoseError::AlgorithmMismatch { requested: name.to_string(), key: family.to_string() }
            })?;
            let compatible = if family == KeyFamily::Rsa {
                requested.is_rsa()
            } else {
                requested == default
            };
            if !compatible {
                return Err(JoseError::AlgorithmMismatch {
                    requested: name.to_string(),
                    key: family.to_string(),
                });
            }
            requested
        }
    };

    debug!("Selected {} for {} key", algorithm, family);
    Ok(algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwk(json: &str) -> Jwk {
        Jwk::from_json(json).unwrap()
    }

    #[test]
    fn test_detects_from_family_and_curve() {
        assert_eq!(
            detect_algorithm(&jwk(r#"{"kty":"EC","crv":"P-256"}"#)).unwrap(),
            JoseAlgorithm::ES256
        );
        assert_eq!(
            detect_algorithm(&jwk(r#"{"kty":"EC","crv":"P-384"}"#)).unwrap(),
            JoseAlgorithm::ES384
        );
        assert_eq!(
            detect_algorithm(&jwk(r#"{"kty":"OKP","crv":"Ed25519"}"#)).unwrap(),
            JoseAlgorithm::EdDSA
        );
        assert_eq!(detect_algorithm(&jwk(r#"{"kty":"RSA"}"#)).unwrap(), JoseAlgorithm::RS256);
    }

    #[test]
    fn test_alg_member_selects_within_rsa_family() {
        assert_eq!(
            detect_algorithm(&jwk(r#"{"kty":"RSA","alg":"PS384"}"#)).unwrap(),
            JoseAlgorithm::PS384
        );
    }

    #[test]
    fn test_conflicting_alg_member_is_rejected() {
        let err = detect_algorithm(&jwk(r#"{"kty":"EC","crv":"P-256","alg":"ES384"}"#)).unwrap_err();
        assert!(matches!(err, JoseError::AlgorithmMismatch { .. }));

        let err = detect_algorithm(&jwk(r#"{"kty":"RSA","alg":"ES256"}"#)).unwrap_err();
        assert!(matches!(err, JoseError::AlgorithmMismatch { .. }));

        let err = detect_algorithm(&jwk(r#"{"kty":"OKP","crv":"Ed25519","alg":"HS256"}"#))
            .unwrap_err();
        assert!(matches!(err, JoseError::AlgorithmMismatch { .. }));
    }

    #[test]
    fn test_never_picks_mac_or_unsupported_curves() {
        for json in [
            r#"{"kty":"oct","k":"c2VjcmV0"}"#,
            r#"{"kty":"EC","crv":"P-521"}"#,
            r#"{"kty":"OKP","crv":"Ed448"}"#,
            r#"{"kty":"OKP","crv":"X25519"}"#,
        ] {
            assert!(
                matches!(detect_algorithm(&jwk(json)), Err(JoseError::UnsupportedKey(_))),
                "{json}"
            );
        }
    }

    #[test]
    fn test_insufficient_key_information() {
        assert!(matches!(
            detect_algorithm(&jwk(r#"{"kty":"EC"}"#)),
            Err(JoseError::InvalidKey(_))
        ));
    }
}
