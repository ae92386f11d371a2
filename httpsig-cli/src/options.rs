//! Option collection and validation.
//!
//! Everything here runs before any key material is read, so a bad flag is
//! reported without touching the key file.

use std::path::PathBuf;

use clap::Args;
use httpsig_rfc9421::{
    is_structured_field_key, ComponentLine, CreatedSpec, ExpiresSpec, ParamValue, ParameterInputs,
    DEFAULT_SIGNATURE_LABEL,
};
use serde::Serialize;

use crate::error::{CliError, CliResult};

/// Options shared by `sign` and `verify` that describe the message
#[derive(Args, Debug, Clone, Default)]
pub struct MessageArgs {
    /// Path to a JSON Web Key file
    #[arg(short, long, value_name = "FILE")]
    pub key: Option<PathBuf>,

    /// Covered component line, e.g. '"@method": GET' (repeatable, order preserved)
    #[arg(short = 'c', long = "component", value_name = "LINE")]
    pub components: Vec<String>,

    /// `alg` signature parameter
    #[arg(long)]
    pub alg: Option<String>,

    /// `created` signature parameter: epoch seconds or "now"
    #[arg(long, value_name = "now|SECONDS")]
    pub created: Option<String>,

    /// `expires` signature parameter: epoch seconds, or +SECONDS after created
    #[arg(long, value_name = "SECONDS|+SECONDS", allow_hyphen_values = true)]
    pub expires: Option<String>,

    /// `keyid` signature parameter
    #[arg(long)]
    pub keyid: Option<String>,

    /// `nonce` signature parameter
    #[arg(long)]
    pub nonce: Option<String>,

    /// `tag` signature parameter
    #[arg(long)]
    pub tag: Option<String>,

    /// Extra signature parameter appended after the standard ones (repeatable)
    #[arg(long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,
}

/// Validated message description
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageConfig {
    pub key_path: PathBuf,
    pub lines: Vec<ComponentLine>,
    pub inputs: ParameterInputs,
}

impl MessageConfig {
    pub fn from_args(args: MessageArgs) -> CliResult<Self> {
        let key_path = args
            .key
            .ok_or_else(|| CliError::Config("a key file is required (--key)".to_string()))?;

        let created = args.created.as_deref().map(str::parse::<CreatedSpec>).transpose()?;
        let expires = args.expires.as_deref().map(str::parse::<ExpiresSpec>).transpose()?;

        let extensions = args
            .params
            .iter()
            .map(|raw| parse_extension(raw))
            .collect::<CliResult<Vec<_>>>()?;

        Ok(Self {
            key_path,
            lines: args.components.into_iter().map(ComponentLine::from).collect(),
            inputs: ParameterInputs {
                alg: args.alg,
                created,
                expires,
                keyid: args.keyid,
                nonce: args.nonce,
                tag: args.tag,
                extensions,
            },
        })
    }
}

fn parse_extension(raw: &str) -> CliResult<(String, ParamValue)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::Config(format!("--param expects NAME=VALUE, got \"{}\"", raw)))?;
    Ok((name.to_string(), ParamValue::infer(value)))
}

/// Configuration for `httpsig sign`
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignConfig {
    pub message: MessageConfig,
    pub label: String,
    pub alg_from_key: bool,
}

impl SignConfig {
    pub fn new(message: MessageArgs, label: Option<String>, alg_from_key: bool) -> CliResult<Self> {
        let label = label.unwrap_or_else(|| DEFAULT_SIGNATURE_LABEL.to_string());
        if !is_structured_field_key(&label) {
            return Err(CliError::Config(format!("\"{}\" is not a valid signature label", label)));
        }
        Ok(Self { message: MessageConfig::from_args(message)?, label, alg_from_key })
    }
}

/// Configuration for `httpsig verify`
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifyConfig {
    pub message: MessageConfig,
    pub signature: String,
    pub strict: bool,
}

impl VerifyConfig {
    pub fn new(message: MessageArgs, signature: Option<String>, strict: bool) -> CliResult<Self> {
        let message = MessageConfig::from_args(message)?;
        let signature = signature
            .ok_or_else(|| CliError::Config("a signature is required (--signature-value)".to_string()))?;
        Ok(Self { message, signature, strict })
    }
}
