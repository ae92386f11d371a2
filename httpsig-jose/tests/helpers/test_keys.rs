//! Fixture keys and known-answer data

use httpsig_jose::JoseAlgorithm;

/// Fixture JWKs, one private/public pair per supported family
pub struct TestKeys;

impl TestKeys {
    pub const ED25519_PRIVATE: &'static str =
        include_str!("../../../testdata/keys/ed25519.private.json");
    pub const ED25519_PUBLIC: &'static str =
        include_str!("../../../testdata/keys/ed25519.public.json");
    pub const P256_PRIVATE: &'static str = include_str!("../../../testdata/keys/p256.private.json");
    pub const P256_PUBLIC: &'static str = include_str!("../../../testdata/keys/p256.public.json");
    pub const P384_PRIVATE: &'static str = include_str!("../../../testdata/keys/p384.private.json");
    pub const P384_PUBLIC: &'static str = include_str!("../../../testdata/keys/p384.public.json");
    pub const RSA_PRIVATE: &'static str =
        include_str!("../../../testdata/keys/rsa2048.private.json");
    pub const RSA_PUBLIC: &'static str = include_str!("../../../testdata/keys/rsa2048.public.json");
    pub const RSA_PSS_PRIVATE: &'static str =
        include_str!("../../../testdata/keys/rsa2048-pss.private.json");
    pub const HMAC: &'static str = include_str!("../../../testdata/keys/hmac.json");

    /// (private, public, expected algorithm) for every supported family
    pub fn pairs() -> Vec<(&'static str, &'static str, JoseAlgorithm)> {
        vec![
            (Self::ED25519_PRIVATE, Self::ED25519_PUBLIC, JoseAlgorithm::EdDSA),
            (Self::P256_PRIVATE, Self::P256_PUBLIC, JoseAlgorithm::ES256),
            (Self::P384_PRIVATE, Self::P384_PUBLIC, JoseAlgorithm::ES384),
            (Self::RSA_PRIVATE, Self::RSA_PUBLIC, JoseAlgorithm::RS256),
        ]
    }

    /// Expected raw signature length per algorithm
    pub fn signature_len(algorithm: JoseAlgorithm) -> usize {
        match algorithm {
            JoseAlgorithm::EdDSA => 64,
            JoseAlgorithm::ES256 => 64,
            JoseAlgorithm::ES384 => 96,
            _ => 256,
        }
    }
}

/// Signature base of the two-component example request
pub const EXAMPLE_BASE: &str = "\"@method\": GET\n\
\"@target-uri\": https://example.com/x\n\
\"@signature-params\": (\"@method\" \"@target-uri\");created=1728051074;keyid=\"K1\";tag=\"demo\"";

/// Ed25519 signature of `EXAMPLE_BASE` (deterministic)
pub const EXAMPLE_ED25519_SIGNATURE: &str =
    "9RMCoU9xqWgzVSIexr8qGicVHgy6inf0khn12XZf/hRxJ6RvAKn8BATAd5mx265OvMV45UthB6l6D5oK2p4EDg==";

/// ES256 signature of `EXAMPLE_BASE` produced by an independent implementation
pub const EXAMPLE_ES256_SIGNATURE: &str =
    "19hhvFi1G1uOh1orQCjPUhjqK/oLxcs8xB78lodGe9g1/oYmUMzuV+4oYgpyiXjotTh97WnSAn3CEHNwdhWpmA==";

/// RS256 signature of `EXAMPLE_BASE` (deterministic)
pub const EXAMPLE_RS256_SIGNATURE: &str = "ZelSRo9yI5tMZdY4aCCSC3t5rs2OsbRKbe7GyP4ZELgyokXn5EaJwEHxMhPvWF/a0i5th4stecSsszOlUdikNDZP9NqXJtAmnnboDIA0FEIHi/98I3oOuGChA3Ds7Ic9yOecTJDcz5HmpzrDNoWbJSlBh5+6Czh7sQ9+9HCWGyKXsRxZAj7qcRPfX6V2FlEGB7AZJwyX1Ly9pjo/3SqRws0HyaTPJn/pgcRWaE7GrGLz0BM4gP8lr2JV2JS4K4RN7Pj/Yjki0jYL19VTJzbzt9QWvHzfo9WE76f3QIo4waYFgqQ+3H1xpphbVPkvgekwsNQd6MVMxJb/aQriI4e2iw==";
