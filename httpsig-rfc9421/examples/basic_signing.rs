//! RFC 9421 HTTP message signing example
//!
//! Signs a GET request with the Ed25519 test key and verifies it with the
//! public half, printing the headers a client would attach.

use httpsig_jose::Jwk;
use httpsig_rfc9421::{
    ComponentLine, CreatedSpec, ExpiresSpec, HttpSignatureSigner, HttpSignatureVerifier,
    ParameterInputs, DEFAULT_SIGNATURE_LABEL,
};

const PRIVATE_KEY: &str = include_str!("../../testdata/keys/ed25519.private.json");
const PUBLIC_KEY: &str = include_str!("../../testdata/keys/ed25519.public.json");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("RFC 9421 HTTP Message Signing Example");
    println!("=====================================");

    let lines = vec![
        ComponentLine::from("\"@method\": GET"),
        ComponentLine::from("\"@authority\": api.example.com"),
        ComponentLine::from("\"@path\": /data/123"),
        ComponentLine::from("\"accept\": application/json"),
    ];

    let params = ParameterInputs {
        created: Some(CreatedSpec::Now),
        expires: Some(ExpiresSpec::After(300)),
        keyid: Some("ed25519-rfc8037".to_string()),
        tag: Some("example".to_string()),
        ..Default::default()
    }
    .resolve()?;

    let signer = HttpSignatureSigner::from_jwk(&Jwk::from_json(PRIVATE_KEY)?)?;
    let output = signer.sign(&lines, &params)?;

    println!("\nSignature base:\n{}", output.base);
    println!("\nSignature-Input: {}", output.signature_input_header(DEFAULT_SIGNATURE_LABEL)?);
    println!("Signature: {}", output.signature_header(DEFAULT_SIGNATURE_LABEL)?);

    let verifier = HttpSignatureVerifier::from_jwk(&Jwk::from_json(PUBLIC_KEY)?)?;
    let result = verifier.verify(&lines, &params, &output.signature_byte_sequence());
    println!("\nVerified with {}: {}", result.algorithm, result.valid);

    Ok(())
}
