//! Raw signing trait definitions

use crate::{error::JoseResult, types::{JoseAlgorithm, Signature}};

/// Signs arbitrary bytes exactly as given.
///
/// Implementations must not encode the input or prepend any header: the
/// bytes passed to `sign` are the bytes the algorithm is applied to.
pub trait RawSign {
    /// Algorithm this signer was bound to at construction
    fn algorithm(&self) -> JoseAlgorithm;

    /// Sign the input
    fn sign(&self, data: &[u8]) -> JoseResult<Signature>;
}

/// Verifies a signature over arbitrary bytes.
///
/// Verification has no error channel: anything that stops the check from
/// succeeding is reported as `false`.
pub trait RawVerify {
    /// Algorithm this verifier was bound to at construction
    fn algorithm(&self) -> JoseAlgorithm;

    /// Check `signature` against `data`
    fn verify(&self, data: &[u8], signature: &[u8]) -> bool;
}

impl<T: RawSign + ?Sized> RawSign for &T {
    fn algorithm(&self) -> JoseAlgorithm {
        (**self).algorithm()
    }

    fn sign(&self, data: &[u8]) -> JoseResult<Signature> {
        (**self).sign(data)
    }
}

impl<T: RawVerify + ?Sized> RawVerify for &T {
    fn algorithm(&self) -> JoseAlgorithm {
        (**self).algorithm()
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        (**self).verify(data, signature)
    }
}
