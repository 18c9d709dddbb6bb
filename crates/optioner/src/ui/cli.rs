use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use optioner::generator::SetterNaming;

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "optioner")]
#[command(author, version, about = "Functional options generator for Rust structs")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List the fields of a struct and the setters they would get
  List(ListCommand),
  /// Generate the options module for a struct
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Name of the struct to generate options for
  #[arg(short = 't', long = "type", value_name = "TYPE")]
  pub type_name: String,

  /// Name of the generated option type [default: opt<TYPE>]
  #[arg(short = 'm', long, value_name = "NAME")]
  pub option_type: Option<String>,

  /// Rust source file, or directory whose `.rs` files are searched
  #[arg(short, long, value_name = "PATH", default_value = "src")]
  pub input: PathBuf,

  /// Path where the generated module will be written [default: <type>_generated.rs beside the declaring module]
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// Visibility level for generated items (public, crate or file)
  #[arg(long, value_name = "VISIBILITY", default_value = "public")]
  pub visibility: String,

  /// How setters are named for fields without an explicit name
  #[arg(long, value_enum, default_value = "capitalize")]
  pub naming: NamingMode,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ListCommand {
  /// Name of the struct to inspect
  #[arg(short = 't', long = "type", value_name = "TYPE")]
  pub type_name: String,

  /// Rust source file, or directory whose `.rs` files are searched
  #[arg(short, long, value_name = "PATH", default_value = "src")]
  pub input: PathBuf,

  /// How setters are named for fields without an explicit name
  #[arg(long, value_enum, default_value = "capitalize")]
  pub naming: NamingMode,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamingMode {
  /// `ff` becomes `Ff`
  Capitalize,
  /// `ff` stays `ff`
  Declared,
}

impl From<NamingMode> for SetterNaming {
  fn from(mode: NamingMode) -> Self {
    match mode {
      NamingMode::Capitalize => Self::Capitalize,
      NamingMode::Declared => Self::Declared,
    }
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_is_well_formed() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_generate_defaults() {
    let cli = Cli::try_parse_from(["optioner", "generate", "-t", "Example"]).unwrap();
    let Commands::Generate(command) = cli.command else {
      panic!("expected the generate command");
    };
    assert_eq!(command.type_name, "Example");
    assert_eq!(command.option_type, None);
    assert_eq!(command.input, PathBuf::from("src"));
    assert_eq!(command.output, None);
    assert_eq!(command.visibility, "public");
    assert_eq!(command.naming, NamingMode::Capitalize);
  }

  #[test]
  fn test_generate_flags() {
    let cli = Cli::try_parse_from([
      "optioner",
      "--color",
      "never",
      "generate",
      "--type",
      "Example",
      "-m",
      "ExampleOption",
      "-i",
      "src/lib.rs",
      "-o",
      "src/options.rs",
      "--naming",
      "declared",
      "-q",
    ])
    .unwrap();
    let Commands::Generate(command) = cli.command else {
      panic!("expected the generate command");
    };
    assert_eq!(command.option_type.as_deref(), Some("ExampleOption"));
    assert_eq!(command.output, Some(PathBuf::from("src/options.rs")));
    assert_eq!(SetterNaming::from(command.naming), SetterNaming::Declared);
    assert!(command.quiet);
  }

  #[test]
  fn test_type_is_required() {
    let err = Cli::try_parse_from(["optioner", "generate"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
  }
}
