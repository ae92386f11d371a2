//! Verify command implementation.

use httpsig_jose::Jwk;
use httpsig_rfc9421::{build_metadata, build_signature_base, verify_raw};
use tracing::info;

use crate::{
    error::{CliError, CliResult},
    options::VerifyConfig,
    output::{self, OutputSelection, Rendered},
};

pub fn run(config: VerifyConfig, selection: OutputSelection) -> CliResult<()> {
    let jwk = Jwk::from_file(&config.message.key_path)?;
    let params = config.message.inputs.resolve()?;

    let metadata = build_metadata(&config.message.lines, &params);
    let base = build_signature_base(&config.message.lines, &metadata);
    let valid = verify_raw(&base, &config.signature, &jwk);
    info!("Verification result: {}", valid);

    output::print(
        &selection.or_result(),
        &Rendered { signature: None, headers: None, metadata: &metadata, base: &base, result: Some(valid) },
    );

    if config.strict && !valid {
        return Err(CliError::VerificationFailed);
    }
    Ok(())
}
