//! Signature base assembly (RFC 9421 §2.5)

use crate::types::{ComponentLine, SignatureBase, SignatureMetadata};

/// Join the component lines and the `@signature-params` line.
///
/// Every component line is followed by `\n`; the final
/// `"@signature-params"` line is not.
pub fn build_signature_base(lines: &[ComponentLine], metadata: &SignatureMetadata) -> SignatureBase {
    let capacity = lines.iter().map(|line| line.as_str().len() + 1).sum::<usize>()
        + "\"@signature-params\": ".len()
        + metadata.as_str().len();

    let mut base = String::with_capacity(capacity);
    for line in lines {
        base.push_str(line.as_str());
        base.push('\n');
    }
    base.push_str("\"@signature-params\": ");
    base.push_str(metadata.as_str());

    SignatureBase(base)
}
