//! RFC 9421 types and data structures

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Rfc9421Error, Rfc9421Result};

/// Signature parameter names with a fixed position in the metadata
pub const FIXED_PARAMETERS: [&str; 6] = ["alg", "created", "expires", "keyid", "nonce", "tag"];

/// Whether `name` is a structured-field key (RFC 8941 §3.1.2)
pub fn is_structured_field_key(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_lowercase() || first == b'*' => {}
        _ => return false,
    }
    bytes.all(|b| {
        b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'_' | b'-' | b'.' | b'*')
    })
}

/// One covered component exactly as it appears in the signature base,
/// e.g. `"@method": GET` or `"content-type";sf: application/json`.
///
/// The line is opaque: its syntax is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentLine(String);

impl ComponentLine {
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Component identifier: everything before the first colon
    pub fn identifier(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(identifier, _)| identifier)
    }
}

impl From<&str> for ComponentLine {
    fn from(line: &str) -> Self {
        Self::new(line)
    }
}

impl From<String> for ComponentLine {
    fn from(line: String) -> Self {
        Self(line)
    }
}

impl fmt::Display for ComponentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A signature parameter value: a bare integer or a quoted string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(i64),
    String(String),
}

impl ParamValue {
    /// Integer when `raw` parses as one, string otherwise
    pub fn infer(raw: &str) -> Self {
        raw.parse::<i64>().map_or_else(|_| Self::String(raw.to_string()), Self::Integer)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::String(value) => {
                f.write_str("\"")?;
                for c in value.chars() {
                    if c == '"' || c == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{}", c)?;
                }
                f.write_str("\"")
            }
        }
    }
}

/// Resolved signature parameters.
///
/// Serialization order is fixed (`alg`, `created`, `expires`, `keyid`,
/// `nonce`, `tag`, then extensions in insertion order) and does not
/// depend on how the value was built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureParameters {
    pub alg: Option<String>,
    pub created: Option<i64>,
    pub expires: Option<i64>,
    pub keyid: Option<String>,
    pub nonce: Option<String>,
    pub tag: Option<String>,
    #[serde(default)]
    extensions: Vec<(String, ParamValue)>,
}

impl SignatureParameters {
    pub fn builder() -> SignatureParametersBuilder {
        SignatureParametersBuilder::default()
    }

    /// Extension parameters in insertion order
    pub fn extensions(&self) -> &[(String, ParamValue)] {
        &self.extensions
    }

    /// Append an extension parameter after the fixed ones.
    ///
    /// The name must be a structured-field key, must not shadow a fixed
    /// parameter and must not repeat an earlier extension.
    pub fn add_extension(&mut self, name: &str, value: ParamValue) -> Rfc9421Result<()> {
        if !is_structured_field_key(name) {
            return Err(Rfc9421Error::InvalidParameters(format!(
                "\"{}\" is not a valid parameter name",
                name
            )));
        }
        if FIXED_PARAMETERS.contains(&name) {
            return Err(Rfc9421Error::InvalidParameters(format!(
                "\"{}\" has a dedicated field and cannot be an extension",
                name
            )));
        }
        if self.extensions.iter().any(|(existing, _)| existing == name) {
            return Err(Rfc9421Error::InvalidParameters(format!(
                "duplicate parameter \"{}\"",
                name
            )));
        }
        self.extensions.push((name.to_string(), value));
        Ok(())
    }

    /// Every present parameter, in serialization order
    pub fn entries(&self) -> Vec<(&str, ParamValue)> {
        let mut entries = Vec::new();
        if let Some(alg) = &self.alg {
            entries.push(("alg", ParamValue::String(alg.clone())));
        }
        if let Some(created) = self.created {
            entries.push(("created", ParamValue::Integer(created)));
        }
        if let Some(expires) = self.expires {
            entries.push(("expires", ParamValue::Integer(expires)));
        }
        if let Some(keyid) = &self.keyid {
            entries.push(("keyid", ParamValue::String(keyid.clone())));
        }
        if let Some(nonce) = &self.nonce {
            entries.push(("nonce", ParamValue::String(nonce.clone())));
        }
        if let Some(tag) = &self.tag {
            entries.push(("tag", ParamValue::String(tag.clone())));
        }
        for (name, value) in &self.extensions {
            entries.push((name.as_str(), value.clone()));
        }
        entries
    }
}

/// Fluent builder for [`SignatureParameters`]
#[derive(Debug, Clone, Default)]
pub struct SignatureParametersBuilder {
    params: SignatureParameters,
    extensions: Vec<(String, ParamValue)>,
}

impl SignatureParametersBuilder {
    pub fn alg(mut self, alg: impl Into<String>) -> Self {
        self.params.alg = Some(alg.into());
        self
    }

    pub fn created(mut self, timestamp: i64) -> Self {
        self.params.created = Some(timestamp);
        self
    }

    pub fn expires(mut self, timestamp: i64) -> Self {
        self.params.expires = Some(timestamp);
        self
    }

    pub fn keyid(mut self, keyid: impl Into<String>) -> Self {
        self.params.keyid = Some(keyid.into());
        self
    }

    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.params.nonce = Some(nonce.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.params.tag = Some(tag.into());
        self
    }

    pub fn extension(mut self, name: impl Into<String>, value: ParamValue) -> Self {
        self.extensions.push((name.into(), value));
        self
    }

    pub fn build(self) -> Rfc9421Result<SignatureParameters> {
        let mut params = self.params;
        for (name, value) in self.extensions {
            params.add_extension(&name, value)?;
        }
        Ok(params)
    }
}

/// `created` as given by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatedSpec {
    /// Current time when the parameters are resolved
    Now,
    /// Absolute epoch seconds
    At(i64),
}

impl FromStr for CreatedSpec {
    type Err = Rfc9421Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "now" {
            return Ok(Self::Now);
        }
        s.parse::<i64>().map(Self::At).map_err(|_| {
            Rfc9421Error::ConfigError(format!("created must be \"now\" or an integer, got \"{}\"", s))
        })
    }
}

/// `expires` as given by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiresSpec {
    /// Absolute epoch seconds
    At(i64),
    /// Seconds after `created`, or after the current time if `created` is unset
    After(i64),
}

impl FromStr for ExpiresSpec {
    type Err = Rfc9421Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            Rfc9421Error::ConfigError(format!(
                "expires must be an integer or \"+\" followed by seconds, got \"{}\"",
                s
            ))
        };
        match s.strip_prefix('+') {
            Some(offset) => {
                if offset.is_empty() || !offset.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                offset.parse::<i64>().map(Self::After).map_err(|_| invalid())
            }
            None => s.parse::<i64>().map(Self::At).map_err(|_| invalid()),
        }
    }
}

/// Signature parameters as collected from the caller, before time resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInputs {
    pub alg: Option<String>,
    pub created: Option<CreatedSpec>,
    pub expires: Option<ExpiresSpec>,
    pub keyid: Option<String>,
    pub nonce: Option<String>,
    pub tag: Option<String>,
    pub extensions: Vec<(String, ParamValue)>,
}

impl ParameterInputs {
    /// Resolve against the system clock
    pub fn resolve(&self) -> Rfc9421Result<SignatureParameters> {
        self.resolve_at(Utc::now().timestamp())
    }

    /// Resolve `now` and `+N` against the supplied clock value
    pub fn resolve_at(&self, now: i64) -> Rfc9421Result<SignatureParameters> {
        let created = self.created.map(|spec| match spec {
            CreatedSpec::Now => now,
            CreatedSpec::At(timestamp) => timestamp,
        });

        let expires = match self.expires {
            None => None,
            Some(ExpiresSpec::At(timestamp)) => Some(timestamp),
            Some(ExpiresSpec::After(offset)) => {
                let anchor = created.unwrap_or(now);
                Some(anchor.checked_add(offset).ok_or_else(|| {
                    Rfc9421Error::ConfigError(format!("expires offset {} overflows", offset))
                })?)
            }
        };

        debug!("Resolved created={:?} expires={:?} at now={}", created, expires, now);

        let mut params = SignatureParameters {
            alg: self.alg.clone(),
            created,
            expires,
            keyid: self.keyid.clone(),
            nonce: self.nonce.clone(),
            tag: self.tag.clone(),
            extensions: Vec::new(),
        };
        for (name, value) in &self.extensions {
            params.add_extension(name, value.clone())?;
        }
        Ok(params)
    }
}

/// Serialized `@signature-params` value: `("id1" "id2");name=value...`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureMetadata(pub(crate) String);

impl SignatureMetadata {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SignatureMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The exact bytes that get signed or verified
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureBase(pub(crate) String);

impl SignatureBase {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SignatureBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
