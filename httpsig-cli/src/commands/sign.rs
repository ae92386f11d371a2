//! Sign command implementation.

use httpsig_jose::Jwk;
use httpsig_rfc9421::HttpSignatureSigner;
use tracing::{debug, info};

use crate::{
    error::CliResult,
    options::SignConfig,
    output::{self, OutputSelection, Rendered},
};

pub fn run(config: SignConfig, selection: OutputSelection) -> CliResult<()> {
    let mut inputs = config.message.inputs;

    let jwk = Jwk::from_file(&config.message.key_path)?;
    let signer = HttpSignatureSigner::from_jwk(&jwk)?;

    if config.alg_from_key && inputs.alg.is_none() {
        inputs.alg = signer.algorithm().http_signature_identifier().map(str::to_string);
        debug!("alg parameter from key: {:?}", inputs.alg);
    }

    let params = inputs.resolve()?;
    let signed = signer.sign(&config.message.lines, &params)?;
    info!("Signed {} components with {}", config.message.lines.len(), signed.algorithm);

    let headers = (
        signed.signature_input_header(&config.label)?,
        signed.signature_header(&config.label)?,
    );

    output::print(
        &selection.or_signature(),
        &Rendered {
            signature: Some(signed.signature_b64()),
            headers: Some(headers),
            metadata: &signed.metadata,
            base: &signed.base,
            result: None,
        },
    );
    Ok(())
}
