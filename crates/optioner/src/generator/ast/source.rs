use std::path::PathBuf;

/// One Rust source file of a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
  pub path: PathBuf,
  pub text: String,
}

/// The files searched for the target declaration, in search order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
  files: Vec<SourceFile>,
}

impl SourceUnit {
  #[must_use]
  pub fn new(mut files: Vec<SourceFile>) -> Self {
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Self { files }
  }

  /// A unit made of a single in-memory file.
  #[must_use]
  pub fn from_source(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
    Self {
      files: vec![SourceFile {
        path: path.into(),
        text: text.into(),
      }],
    }
  }

  #[must_use]
  pub fn files(&self) -> &[SourceFile] {
    &self.files
  }
}
