//! Test helpers for RFC 9421 integration tests

#![allow(dead_code)]

use httpsig_jose::Jwk;
use httpsig_rfc9421::{ComponentLine, SignatureParameters};

pub const ED25519_PRIVATE: &str = include_str!("../../../testdata/keys/ed25519.private.json");
pub const ED25519_PUBLIC: &str = include_str!("../../../testdata/keys/ed25519.public.json");
pub const P256_PRIVATE: &str = include_str!("../../../testdata/keys/p256.private.json");
pub const P256_PUBLIC: &str = include_str!("../../../testdata/keys/p256.public.json");
pub const P384_PRIVATE: &str = include_str!("../../../testdata/keys/p384.private.json");
pub const P384_PUBLIC: &str = include_str!("../../../testdata/keys/p384.public.json");
pub const RSA_PRIVATE: &str = include_str!("../../../testdata/keys/rsa2048.private.json");
pub const RSA_PUBLIC: &str = include_str!("../../../testdata/keys/rsa2048.public.json");

/// Ed25519 signature over the example request base
pub const EXAMPLE_ED25519_SIGNATURE: &str =
    "9RMCoU9xqWgzVSIexr8qGicVHgy6inf0khn12XZf/hRxJ6RvAKn8BATAd5mx265OvMV45UthB6l6D5oK2p4EDg==";

/// ES256 signature over the example request base, produced by an independent implementation
pub const EXAMPLE_ES256_SIGNATURE: &str =
    "19hhvFi1G1uOh1orQCjPUhjqK/oLxcs8xB78lodGe9g1/oYmUMzuV+4oYgpyiXjotTh97WnSAn3CEHNwdhWpmA==";

pub fn jwk(json: &str) -> Jwk {
    Jwk::from_json(json).expect("fixture key should parse")
}

/// (private, public) fixture pairs for every supported key family
pub fn key_pairs() -> Vec<(Jwk, Jwk)> {
    [
        (ED25519_PRIVATE, ED25519_PUBLIC),
        (P256_PRIVATE, P256_PUBLIC),
        (P384_PRIVATE, P384_PUBLIC),
        (RSA_PRIVATE, RSA_PUBLIC),
    ]
    .into_iter()
    .map(|(private, public)| (jwk(private), jwk(public)))
    .collect()
}

/// `GET https://example.com/x`
pub fn example_lines() -> Vec<ComponentLine> {
    vec![
        ComponentLine::from("\"@method\": GET"),
        ComponentLine::from("\"@target-uri\": https://example.com/x"),
    ]
}

pub fn example_params() -> SignatureParameters {
    SignatureParameters::builder()
        .created(1728051074)
        .keyid("K1")
        .tag("demo")
        .build()
        .expect("example parameters are valid")
}

/// A POST with several header components, in deliberately non-alphabetic order
pub fn post_lines() -> Vec<ComponentLine> {
    vec![
        ComponentLine::from("\"@method\": POST"),
        ComponentLine::from("\"@authority\": example.com"),
        ComponentLine::from("\"@path\": /foo"),
        ComponentLine::from("\"content-type\": application/json"),
        ComponentLine::from("\"content-digest\": sha-512=:WZDPaVn/7XgHaAy8pmojAkGWoRx2UFChF41A2svX+TaPm+AbwAgBWnrIiYllu7BNNyealdVLvRwEmTHWXvJwew==:"),
        ComponentLine::from("\"content-length\": 18"),
    ]
}
