//! Data passed between the generator stages.

mod documentation;
mod source;

use std::fmt::{Display, Formatter};

pub use documentation::Documentation;
pub use source::{SourceFile, SourceUnit};
use syn::{Ident, Type};

/// A named struct field as declared, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldRecord {
  /// Field identifier without any `r#` prefix.
  pub declared_name: String,
  /// Canonical spelling of the field type. Never interpreted, only reproduced.
  pub type_spelling: String,
  /// Value of the field's `opt` annotation, if it has one.
  pub raw_annotation: Option<String>,
}

impl FieldRecord {
  pub fn new(declared_name: impl Into<String>, type_spelling: impl Into<String>) -> Self {
    Self {
      declared_name: declared_name.into(),
      type_spelling: type_spelling.into(),
      raw_annotation: None,
    }
  }

  #[must_use]
  pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
    self.raw_annotation = Some(annotation.into());
    self
  }

  /// The annotation value, absent treated as empty.
  #[must_use]
  pub fn annotation(&self) -> &str {
    self.raw_annotation.as_deref().unwrap_or_default()
  }
}

/// Whether a field gets a setter, and under which name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldPolicyDecision {
  Include { external_name: String },
  Exclude,
}

impl FieldPolicyDecision {
  #[must_use]
  pub const fn is_included(&self) -> bool {
    matches!(self, Self::Include { .. })
  }

  #[must_use]
  pub fn external_name(&self) -> Option<&str> {
    match self {
      Self::Include { external_name } => Some(external_name),
      Self::Exclude => None,
    }
  }
}

/// Tokens for one setter function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setter {
  pub ident: Ident,
  pub ty: Type,
}

/// A field record with its policy decision and validated tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionField {
  record: FieldRecord,
  decision: FieldPolicyDecision,
  member: Ident,
  setter: Option<Setter>,
}

impl OptionField {
  pub(crate) const fn new(
    record: FieldRecord,
    decision: FieldPolicyDecision,
    member: Ident,
    setter: Option<Setter>,
  ) -> Self {
    Self {
      record,
      decision,
      member,
      setter,
    }
  }

  #[must_use]
  pub const fn record(&self) -> &FieldRecord {
    &self.record
  }

  #[must_use]
  pub const fn decision(&self) -> &FieldPolicyDecision {
    &self.decision
  }

  /// The field as it is accessed on the target, raw when it is a keyword.
  #[must_use]
  pub const fn member(&self) -> &Ident {
    &self.member
  }

  #[must_use]
  pub const fn setter(&self) -> Option<&Setter> {
    self.setter.as_ref()
  }
}

/// The complete generation plan for one target type.
///
/// Only [`crate::generator::plan::plan`] builds one, so every spec upholds:
/// the option type differs from the target type, every name is a valid
/// identifier, every included type spelling parses, and setter names are
/// unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
  target_type: Ident,
  option_type: Ident,
  fields: Vec<OptionField>,
}

impl OptionSpec {
  pub(crate) const fn new(target_type: Ident, option_type: Ident, fields: Vec<OptionField>) -> Self {
    Self {
      target_type,
      option_type,
      fields,
    }
  }

  #[must_use]
  pub const fn target_type(&self) -> &Ident {
    &self.target_type
  }

  #[must_use]
  pub const fn option_type(&self) -> &Ident {
    &self.option_type
  }

  #[must_use]
  pub fn target_type_name(&self) -> String {
    self.target_type.to_string()
  }

  #[must_use]
  pub fn option_type_name(&self) -> String {
    self.option_type.to_string()
  }

  #[must_use]
  pub fn fields(&self) -> &[OptionField] {
    &self.fields
  }

  /// Included fields paired with their setter tokens, in declaration order.
  pub fn setters(&self) -> impl Iterator<Item = (&OptionField, &Setter)> {
    self
      .fields
      .iter()
      .filter_map(|field| field.setter().map(|setter| (field, setter)))
  }

  #[must_use]
  pub fn excluded_count(&self) -> usize {
    self.fields.iter().filter(|field| !field.decision.is_included()).count()
  }
}

/// Why the canonicalizer left the generated text as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatDiagnostic {
  pub message: String,
}

impl Display for FormatDiagnostic {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "invalid Rust generated: {}", self.message)
  }
}

/// Source text of a generated options module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
  pub text: String,
  /// Set when formatting failed and `text` is the raw synthesizer output.
  pub diagnostic: Option<FormatDiagnostic>,
}

impl GeneratedUnit {
  #[must_use]
  pub const fn formatted(text: String) -> Self {
    Self { text, diagnostic: None }
  }

  #[must_use]
  pub const fn unformatted(text: String, diagnostic: FormatDiagnostic) -> Self {
    Self {
      text,
      diagnostic: Some(diagnostic),
    }
  }

  #[must_use]
  pub const fn is_formatted(&self) -> bool {
    self.diagnostic.is_none()
  }
}
