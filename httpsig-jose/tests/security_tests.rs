//! Security-focused tests for JWK handling and raw signing

mod helpers;

use helpers::{load, TestKeys};
use httpsig_jose::{JoseError, Jwk, JwkSigner, JwkVerifier, RawSign, RawVerify};

fn private_members(jwk: &Jwk) -> Vec<String> {
    [&jwk.d, &jwk.p, &jwk.q, &jwk.dp, &jwk.dq, &jwk.qi, &jwk.k]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
}

#[test]
fn test_no_key_material_in_debug_output() {
    for json in [TestKeys::ED25519_PRIVATE, TestKeys::P256_PRIVATE, TestKeys::RSA_PRIVATE, TestKeys::HMAC]
    {
        let jwk = load(json);
        let secrets = private_members(&jwk);
        assert!(!secrets.is_empty());

        let mut rendered = vec![format!("{:?}", jwk)];
        if let Ok(signer) = JwkSigner::from_jwk(&jwk) {
            rendered.push(format!("{:?}", signer));
        }

        for output in &rendered {
            for secret in &secrets {
                assert!(!output.contains(secret.as_str()), "{} leaked into {}", secret, output);
            }
        }
    }
}

#[test]
fn test_no_key_material_in_error_messages() {
    // Valid base64url, but not a point on P-256
    let mut jwk = load(TestKeys::P256_PRIVATE);
    jwk.x = Some("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA".to_string());
    let secret = jwk.d.clone().unwrap();

    let err = JwkSigner::from_jwk(&jwk).unwrap_err();
    assert!(matches!(err, JoseError::InvalidKey(_)));
    assert!(!format!("{}", err).contains(&secret));
    assert!(!format!("{:?}", err).contains(&secret));

    let mut jwk = load(TestKeys::ED25519_PRIVATE);
    jwk.d = Some("not*base64url".to_string());
    let err = JwkSigner::from_jwk(&jwk).unwrap_err();
    assert!(!format!("{}", err).contains("not*base64url"));
}

#[test]
fn test_public_copy_cannot_sign() {
    for json in [TestKeys::ED25519_PRIVATE, TestKeys::P384_PRIVATE, TestKeys::RSA_PRIVATE] {
        let public = load(json).to_public();
        assert!(private_members(&public).is_empty());
        assert!(!public.is_private());
        assert!(matches!(JwkSigner::from_jwk(&public), Err(JoseError::MissingPrivateKey)));
    }
}

#[test]
fn test_alg_member_cannot_cross_families() {
    let mut jwk = load(TestKeys::P256_PRIVATE);
    for alg in ["RS256", "EdDSA", "ES384", "HS256", "none"] {
        jwk.alg = Some(alg.to_string());
        assert!(JwkSigner::from_jwk(&jwk).is_err(), "{alg}");
        assert!(JwkVerifier::from_jwk(&jwk).is_err(), "{alg}");
    }
}

#[test]
fn test_input_validation() {
    let signer = JwkSigner::from_jwk(&load(TestKeys::ED25519_PRIVATE)).unwrap();
    let verifier = JwkVerifier::from_jwk(&load(TestKeys::ED25519_PUBLIC)).unwrap();

    // Empty input is a legitimate message
    let signature = signer.sign(b"").unwrap();
    assert!(verifier.verify(b"", signature.as_bytes()));

    // Malformed signatures are rejected, never panic
    assert!(!verifier.verify(b"", &[]));
    assert!(!verifier.verify(b"", &[0u8; 63]));
    assert!(!verifier.verify(b"", &vec![0u8; 4096]));

    let mut truncated = signature.into_bytes();
    truncated.pop();
    assert!(!verifier.verify(b"", &truncated));
}
