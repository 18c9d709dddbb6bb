//! Orchestration of the options generation pipeline.
//!
//! `Orchestrator` runs extraction, planning, synthesis and canonicalization
//! for one target type over a [`SourceUnit`]. It performs no I/O; loading the
//! unit and writing the result are left to the caller.
//!
//! ## Usage
//!
//! ```
//! use optioner::generator::{GeneratorConfig, SourceUnit, orchestrator::Orchestrator};
//!
//! # fn example() -> Result<(), optioner::GenerateError> {
//! let unit = SourceUnit::from_source("src/lib.rs", "pub struct Example { pub n: i32 }");
//! let config = GeneratorConfig::builder().type_name("Example").build();
//!
//! let output = Orchestrator::new(config).generate_with_header(&unit)?;
//! assert_eq!(output.stats.options_generated, 1);
//! assert!(output.unit.text.contains("pub fn N(value: i32) -> optExample"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::path::PathBuf;

use super::{
  GeneratorConfig,
  ast::{GeneratedUnit, OptionSpec, SourceUnit},
  codegen,
  error::GenerateError,
  extractor::{self, Extraction},
  format, plan,
};

const GENERATOR_NAME: &str = "optioner";

/// Runs the generation pipeline for one configured target type.
#[derive(Debug, Clone)]
pub struct Orchestrator {
  config: GeneratorConfig,
}

/// A validated plan and where its target type was declared.
#[derive(Debug, Clone)]
pub struct PlannedUnit {
  pub spec: OptionSpec,
  /// File holding the target declaration.
  pub source_file: PathBuf,
  /// Files parsed while searching, in search order.
  pub parsed_files: Vec<PathBuf>,
}

/// Statistics about one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationStats {
  /// Number of setters generated
  pub options_generated: usize,
  /// Number of fields excluded with `opt = "-"`
  pub fields_excluded: usize,
  /// File holding the target declaration
  pub source_file: PathBuf,
  /// Files parsed while searching for the target (for verbose logging)
  pub parsed_files: Vec<PathBuf>,
  /// Non-fatal warnings, such as output that could not be formatted
  pub warnings: Vec<String>,
}

/// The generated module together with the plan it was built from.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  pub unit: GeneratedUnit,
  pub spec: OptionSpec,
  pub stats: GenerationStats,
}

impl Orchestrator {
  #[must_use]
  pub const fn new(config: GeneratorConfig) -> Self {
    Self { config }
  }

  #[must_use]
  pub const fn config(&self) -> &GeneratorConfig {
    &self.config
  }

  /// Locates the target type in `unit` and validates its option plan.
  ///
  /// Every fatal error, including name collisions, is reported here.
  pub fn plan(&self, unit: &SourceUnit) -> Result<PlannedUnit, GenerateError> {
    self.config.validate()?;

    let Extraction {
      records,
      source_file,
      parsed_files,
    } = extractor::extract_from_unit(unit, &self.config.type_name)?;

    let spec = plan::plan(
      &self.config.type_name,
      &self.config.resolved_option_type_name(),
      records,
      self.config.naming,
    )?;

    Ok(PlannedUnit {
      spec,
      source_file,
      parsed_files,
    })
  }

  /// Generates the formatted options module, without a file header.
  ///
  /// Output that fails to format is still returned, as raw text with a
  /// diagnostic that is also listed in the warnings.
  pub fn generate(&self, unit: &SourceUnit) -> Result<GeneratedOutput, GenerateError> {
    let PlannedUnit {
      spec,
      source_file,
      parsed_files,
    } = self.plan(unit)?;

    let raw = codegen::synthesize(&spec, self.config.visibility);
    let generated = format::canonicalize(raw);

    let warnings = generated
      .diagnostic
      .iter()
      .map(ToString::to_string)
      .collect::<Vec<_>>();

    let stats = GenerationStats {
      options_generated: spec.setters().count(),
      fields_excluded: spec.excluded_count(),
      source_file,
      parsed_files,
      warnings,
    };

    Ok(GeneratedOutput {
      unit: generated,
      spec,
      stats,
    })
  }

  /// Same as [`Orchestrator::generate`], with a "do not edit" header naming
  /// the file the target was found in.
  pub fn generate_with_header(&self, unit: &SourceUnit) -> Result<GeneratedOutput, GenerateError> {
    let mut output = self.generate(unit)?;
    let header = file_header(&output.stats.source_file.display().to_string(), &output.spec);
    output.unit.text = format!("{header}\n{}", output.unit.text);
    Ok(output)
  }
}

fn file_header(source: &str, spec: &OptionSpec) -> String {
  let target = spec.target_type();
  format!(
    r"// Code generated by {GENERATOR_NAME} from {source}; DO NOT EDIT.
//
// Declare this file as a child module of the module that defines `{target}`.
"
  )
}
