pub mod ast;
pub mod codegen;
pub mod error;
pub mod extractor;
pub mod format;
pub mod naming;
pub mod orchestrator;
pub mod plan;

#[cfg(test)]
mod tests;

pub use ast::{FieldPolicyDecision, FieldRecord, GeneratedUnit, OptionField, OptionSpec, SourceFile, SourceUnit};
pub use codegen::Visibility;
pub use error::{GenerateError, NameCollision};
pub use naming::SetterNaming;

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct GeneratorConfig {
  /// Name of the struct to generate options for.
  #[builder(into)]
  pub type_name: String,
  /// Name of the generated option type; `opt<type_name>` when unset.
  #[builder(into)]
  pub option_type_name: Option<String>,
  #[builder(default)]
  pub visibility: Visibility,
  #[builder(default)]
  pub naming: SetterNaming,
}

impl GeneratorConfig {
  #[must_use]
  pub fn resolved_option_type_name(&self) -> String {
    self
      .option_type_name
      .clone()
      .unwrap_or_else(|| format!("opt{}", self.type_name))
  }

  /// Rejects an option type named after the target before any source is read.
  pub fn validate(&self) -> Result<(), GenerateError> {
    let option_type_name = self.resolved_option_type_name();
    if option_type_name == self.type_name {
      return Err(NameCollision::OptionTypeMatchesTarget { name: option_type_name }.into());
    }
    Ok(())
  }
}

/// Generates the canonical options module for `type_name` declared in `source`.
/// An empty `option_type_name` selects the default, `opt<type_name>`.
///
/// This is the whole pipeline for a single in-memory source file with the
/// default visibility and naming policy; see [`orchestrator::Orchestrator`] for
/// multi-file units, headers and statistics.
pub fn generate(source: &str, type_name: &str, option_type_name: &str) -> Result<GeneratedUnit, GenerateError> {
  let config = GeneratorConfig::builder()
    .type_name(type_name)
    .maybe_option_type_name((!option_type_name.is_empty()).then_some(option_type_name))
    .build();
  let unit = SourceUnit::from_source("<source>", source);
  orchestrator::Orchestrator::new(config)
    .generate(&unit)
    .map(|output| output.unit)
}
