use std::path::{Path, PathBuf};

use crate::generator::GenerateError;

const GENERATED_SUFFIX: &str = "_generated.rs";

/// Files whose child modules live next to them rather than in a directory
/// named after them.
const MODULE_ROOTS: [&str; 3] = ["lib.rs", "main.rs", "mod.rs"];

/// `Example` becomes `example_generated.rs`.
#[must_use]
pub fn default_output_name(type_name: &str) -> String {
  format!("{}{GENERATED_SUFFIX}", type_name.to_lowercase())
}

/// Where the generated module goes when it is declared as a child of the
/// module in `source_file`: `src/lib.rs` gives `src/`, `src/config.rs` gives
/// `src/config/`.
#[must_use]
pub fn default_output_path(source_file: &Path, type_name: &str) -> PathBuf {
  let parent = source_file.parent().unwrap_or_else(|| Path::new(""));
  let is_module_root = source_file
    .file_name()
    .and_then(|name| name.to_str())
    .is_some_and(|name| MODULE_ROOTS.contains(&name));

  let dir = match source_file.file_stem() {
    Some(stem) if !is_module_root => parent.join(stem),
    _ => parent.to_path_buf(),
  };
  dir.join(default_output_name(type_name))
}

/// Writes `text` to `path`, creating missing parent directories.
pub async fn write_output(path: &Path, text: &str) -> Result<(), GenerateError> {
  let write_error = |source| GenerateError::WriteOutput {
    path: path.to_path_buf(),
    source,
  };

  if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
    tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
  }
  tokio::fs::write(path, text).await.map_err(write_error)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_output_name() {
    assert_eq!(default_output_name("Example"), "example_generated.rs");
    assert_eq!(default_output_name("HTTPConfig"), "httpconfig_generated.rs");
  }

  #[test]
  fn test_default_output_path_follows_declaring_module() {
    let cases = [
      ("src/lib.rs", "src/example_generated.rs"),
      ("src/main.rs", "src/example_generated.rs"),
      ("src/net/mod.rs", "src/net/example_generated.rs"),
      ("src/config.rs", "src/config/example_generated.rs"),
      ("config.rs", "config/example_generated.rs"),
    ];
    for (source_file, expected) in cases {
      assert_eq!(
        default_output_path(Path::new(source_file), "Example"),
        PathBuf::from(expected),
        "{source_file}"
      );
    }
  }

  #[tokio::test]
  async fn test_write_output_creates_parents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("example_generated.rs");

    write_output(&path, "pub fn N() {}\n").await.unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "pub fn N() {}\n");
  }

  #[tokio::test]
  async fn test_write_output_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "").unwrap();

    let err = write_output(&blocker.join("out.rs"), "").await.unwrap_err();
    assert!(matches!(err, GenerateError::WriteOutput { .. }));
  }
}
