use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use optioner::{
  generator::{
    GeneratorConfig, OptionSpec, Visibility,
    orchestrator::{GenerationStats, Orchestrator},
  },
  utils::{SourceLoader, default_output_path, write_output},
};

use crate::ui::{Colors, GenerateCommand};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub generator: GeneratorConfig,
  pub input: PathBuf,
  pub output: Option<PathBuf>,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      type_name,
      option_type,
      input,
      output,
      visibility,
      naming,
      verbose,
      quiet,
    } = command;

    let Some(visibility) = Visibility::parse(&visibility) else {
      anyhow::bail!("Invalid visibility '{visibility}': expected public, crate or file");
    };

    let generator = GeneratorConfig::builder()
      .type_name(type_name)
      .maybe_option_type_name(option_type)
      .visibility(visibility)
      .naming(naming.into())
      .build();

    Ok(Self {
      generator,
      input,
      output,
      verbose,
      quiet,
    })
  }

  /// The explicit output path, or `<type>_generated.rs` where a child module
  /// of the file declaring the target lives.
  pub fn output_path(&self, source_file: &Path) -> PathBuf {
    self
      .output
      .clone()
      .unwrap_or_else(|| default_output_path(source_file, &self.generator.type_name))
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn detail(&self, message: &str) {
    if self.config.verbose && !self.config.quiet {
      println!("            {}", message.with(self.colors.info()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading Rust sources from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(
      &format!("Generating options for `{}`...", self.config.generator.type_name)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_parsed_files(&self, stats: &GenerationStats) {
    for path in &stats.parsed_files {
      self.detail(&format!("parsed {}", path.display()));
    }
  }

  fn log_fields(&self, spec: &OptionSpec) {
    for field in spec.fields() {
      let record = field.record();
      match field.setter() {
        Some(setter) => self.detail(&format!(
          "generating option `{}` for field `{}` of type `{}`",
          setter.ident, record.declared_name, record.type_spelling
        )),
        None => self.detail(&format!("skipping field `{}`", record.declared_name)),
      }
    }
  }

  fn print_statistics(&self, stats: &GenerationStats, spec: &OptionSpec) {
    if self.config.quiet {
      return;
    }

    self.stat("Option type:", spec.option_type_name());
    self.stat("Options generated:", stats.options_generated.to_string());
    if stats.fields_excluded > 0 {
      self.stat("Fields excluded:", stats.fields_excluded.to_string());
    }
    self.stat("Declared in:", stats.source_file.display().to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }
  }

  // Warnings reach stderr even with --quiet; an unformatted output file is
  // worth knowing about.
  fn print_warnings(&self, stats: &GenerationStats) {
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        warning.as_str().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self, path: &Path) {
    self.info(
      &format!("Writing to: {}", path.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated options module".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<PathBuf> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let unit = SourceLoader::load(&config.input).await?;

  logger.log_generating();
  let orchestrator = Orchestrator::new(config.generator.clone());
  let output = orchestrator.generate_with_header(&unit)?;

  logger.log_parsed_files(&output.stats);
  logger.log_fields(&output.spec);
  logger.print_statistics(&output.stats, &output.spec);
  logger.print_warnings(&output.stats);

  let path = config.output_path(&output.stats.source_file);
  logger.log_writing(&path);
  write_output(&path, &output.unit.text).await?;

  logger.log_success();
  Ok(path)
}
