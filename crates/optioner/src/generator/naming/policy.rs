//! Inclusion and naming of setters from `opt` annotations.
//!
//! The policy only sees the annotation string, never the attribute it came
//! from:
//!
//! - `-` excludes the field;
//! - any other non-empty value is used verbatim as the setter name;
//! - an empty or missing value falls back to [`SetterNaming::default_name`].

use super::SetterNaming;
use crate::generator::ast::{FieldPolicyDecision, FieldRecord};

/// Annotation value that excludes a field.
pub const EXCLUDE_MARKER: &str = "-";

#[must_use]
pub fn decide(record: &FieldRecord, naming: SetterNaming) -> FieldPolicyDecision {
  match record.annotation() {
    EXCLUDE_MARKER => FieldPolicyDecision::Exclude,
    "" => FieldPolicyDecision::Include {
      external_name: naming.default_name(&record.declared_name),
    },
    explicit => FieldPolicyDecision::Include {
      external_name: explicit.to_string(),
    },
  }
}
