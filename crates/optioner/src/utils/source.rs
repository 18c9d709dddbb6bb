use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

use crate::generator::{GenerateError, SourceFile, SourceUnit};

const RUST_EXTENSION: &str = "rs";

/// Loads the Rust files searched for a target declaration.
pub struct SourceLoader;

impl SourceLoader {
  /// A file path loads that file alone. A directory loads every `.rs` file
  /// directly inside it, in path order; subdirectories are not searched.
  pub async fn load(path: &Path) -> Result<SourceUnit, GenerateError> {
    let metadata = tokio::fs::metadata(path).await.map_err(|source| read_error(path, source))?;

    if !metadata.is_dir() {
      let text = read_file(path).await?;
      return Ok(SourceUnit::from_source(path, text));
    }

    let mut files = Vec::new();
    for file_path in Self::rust_files(path).await? {
      let text = read_file(&file_path).await?;
      files.push(SourceFile { path: file_path, text });
    }

    if files.is_empty() {
      return Err(GenerateError::EmptySourceUnit {
        path: path.to_path_buf(),
      });
    }

    Ok(SourceUnit::new(files))
  }

  async fn rust_files(dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let mut entries = tokio::fs::read_dir(dir).await.map_err(|source| read_error(dir, source))?;
    let mut paths = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(|source| read_error(dir, source))? {
      let path = entry.path();
      let file_type = entry.file_type().await.map_err(|source| read_error(&path, source))?;
      if file_type.is_file() && path.extension().and_then(OsStr::to_str) == Some(RUST_EXTENSION) {
        paths.push(path);
      }
    }

    paths.sort();
    Ok(paths)
  }
}

async fn read_file(path: &Path) -> Result<String, GenerateError> {
  tokio::fs::read_to_string(path)
    .await
    .map_err(|source| read_error(path, source))
}

fn read_error(path: &Path, source: std::io::Error) -> GenerateError {
  GenerateError::ReadSource {
    path: path.to_path_buf(),
    source,
  }
}
