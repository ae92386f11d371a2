//! `@signature-params` serialization

use std::fmt::Write;

use crate::types::{ComponentLine, SignatureMetadata, SignatureParameters};

/// Serialize the covered component identifiers and the signature
/// parameters into the structured-field inner list RFC 9421 signs.
///
/// Identifiers keep the order of `lines`; parameters follow the fixed
/// order of [`SignatureParameters::entries`]. Absent parameters are
/// omitted. Never fails.
pub fn build_metadata(lines: &[ComponentLine], params: &SignatureParameters) -> SignatureMetadata {
    let identifiers: Vec<&str> = lines.iter().map(ComponentLine::identifier).collect();

    let mut metadata = format!("({})", identifiers.join(" "));
    for (name, value) in params.entries() {
        // Writing to a String cannot fail.
        let _ = write!(metadata, ";{}={}", name, value);
    }

    SignatureMetadata(metadata)
}
