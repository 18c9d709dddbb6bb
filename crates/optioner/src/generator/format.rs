//! Canonical formatting of synthesized source text.

use super::ast::{FormatDiagnostic, GeneratedUnit};

/// Parses and pretty-prints `raw`. Text that does not parse as a Rust file is
/// returned unchanged together with the parser's message.
#[must_use]
pub fn canonicalize(raw: String) -> GeneratedUnit {
  match syn::parse_file(&raw) {
    Ok(file) => GeneratedUnit::formatted(prettyplease::unparse(&file)),
    Err(err) => GeneratedUnit::unformatted(
      raw,
      FormatDiagnostic {
        message: err.to_string(),
      },
    ),
  }
}
