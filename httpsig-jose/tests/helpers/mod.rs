//! Test helpers shared by the JOSE integration tests

#![allow(dead_code)]

pub mod test_keys;

use httpsig_jose::Jwk;

pub use test_keys::TestKeys;

pub fn load(json: &str) -> Jwk {
    Jwk::from_json(json).expect("fixture key should parse")
}
