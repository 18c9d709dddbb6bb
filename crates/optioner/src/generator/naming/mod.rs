pub mod identifiers;
pub mod policy;

#[cfg(test)]
mod tests;

/// How a field without an explicit setter name is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetterNaming {
  /// Upper-case the first character of the declared name (`ff` becomes `Ff`).
  #[default]
  Capitalize,
  /// Use the declared name unchanged.
  Declared,
}

impl SetterNaming {
  #[must_use]
  pub fn default_name(self, declared_name: &str) -> String {
    match self {
      Self::Capitalize => identifiers::capitalize_first(declared_name),
      Self::Declared => declared_name.to_string(),
    }
  }
}
