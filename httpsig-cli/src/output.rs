//! Output selection and formatting.

use httpsig_rfc9421::{SignatureBase, SignatureMetadata};
use serde::Serialize;

/// Which outputs a command prints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutputSelection {
    pub signature: bool,
    pub headers: bool,
    pub metadata: bool,
    pub base: bool,
    pub result: bool,
}

impl OutputSelection {
    fn is_empty(&self) -> bool {
        !(self.signature || self.headers || self.metadata || self.base || self.result)
    }

    /// Signing prints the signature when nothing was asked for
    pub fn or_signature(mut self) -> Self {
        if self.is_empty() {
            self.signature = true;
        }
        self
    }

    /// Verification prints the result when nothing was asked for
    pub fn or_result(mut self) -> Self {
        if self.is_empty() {
            self.result = true;
        }
        self
    }
}

/// Values a command produced, ready for printing
#[derive(Debug)]
pub struct Rendered<'a> {
    pub signature: Option<String>,
    pub headers: Option<(String, String)>,
    pub metadata: &'a SignatureMetadata,
    pub base: &'a SignatureBase,
    pub result: Option<bool>,
}

/// Formats the selected outputs, one block each, in a fixed order
pub fn render(selection: &OutputSelection, values: &Rendered<'_>) -> Vec<String> {
    let mut blocks = Vec::new();

    if selection.signature {
        if let Some(signature) = &values.signature {
            blocks.push(signature.clone());
        }
    }
    if selection.headers {
        if let Some((input, signature)) = &values.headers {
            blocks.push(format!("Signature-Input: {}\nSignature: {}", input, signature));
        }
    }
    if selection.metadata {
        blocks.push(values.metadata.to_string());
    }
    if selection.base {
        blocks.push(values.base.to_string());
    }
    if selection.result {
        if let Some(result) = values.result {
            blocks.push(result.to_string());
        }
    }

    blocks
}

/// Prints rendered blocks to stdout
pub fn print(selection: &OutputSelection, values: &Rendered<'_>) {
    for block in render(selection, values) {
        println!("{}", block);
    }
}
