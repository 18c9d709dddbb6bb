use std::path::PathBuf;

use strum::Display;

/// Kinds of type declarations that can shadow the requested struct name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ItemKind {
  #[strum(to_string = "an enum")]
  Enum,
  #[strum(to_string = "a union")]
  Union,
  #[strum(to_string = "a type alias")]
  TypeAlias,
  #[strum(to_string = "a trait")]
  Trait,
}

/// What a rejected identifier was meant to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IdentRole {
  #[strum(to_string = "target type")]
  TargetType,
  #[strum(to_string = "option type")]
  OptionType,
  #[strum(to_string = "field")]
  Field,
  #[strum(to_string = "setter")]
  Setter,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameCollision {
  #[error("option type `{name}` must be named differently from the type it configures")]
  OptionTypeMatchesTarget { name: String },
  #[error("fields `{first}` and `{second}` both resolve to setter `{name}`")]
  DuplicateSetter { name: String, first: String, second: String },
  #[error("setter `{name}` would shadow the constant `{name}` used in the type of field `{field}`")]
  SetterShadowsConstant { name: String, field: String },
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
  #[error("type `{type_name}` not found")]
  TypeNotFound { type_name: String },

  #[error("type `{type_name}` is {kind}, not a struct")]
  NotAStruct { type_name: String, kind: ItemKind },

  #[error("type `{type_name}` has generic parameters, which are not supported")]
  UnsupportedGenerics { type_name: String },

  #[error("field {index} of `{type_name}` has no name; only structs with named fields are supported")]
  UnsupportedField { type_name: String, index: usize },

  #[error("invalid `opt` annotation on field `{field}` of `{type_name}`: {message}")]
  InvalidAnnotation {
    type_name: String,
    field: String,
    message: String,
  },

  #[error(transparent)]
  NameCollision(#[from] NameCollision),

  #[error("`{name}` is not a valid {role} identifier")]
  InvalidIdentifier { name: String, role: IdentRole },

  #[error("type of field `{field}` cannot be parsed: `{spelling}`")]
  InvalidTypeSpelling { field: String, spelling: String },

  #[error("failed to parse {origin}: {source}")]
  Parse { origin: String, source: syn::Error },

  #[error("failed to read {}: {source}", .path.display())]
  ReadSource { path: PathBuf, source: std::io::Error },

  #[error("no Rust source files found in {}", .path.display())]
  EmptySourceUnit { path: PathBuf },

  #[error("failed to write {}: {source}", .path.display())]
  WriteOutput { path: PathBuf, source: std::io::Error },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn not_a_struct_names_the_item_kind() {
    let err = GenerateError::NotAStruct {
      type_name: "Mode".to_string(),
      kind: ItemKind::Enum,
    };
    assert_eq!(err.to_string(), "type `Mode` is an enum, not a struct");
  }

  #[test]
  fn name_collision_is_transparent() {
    let err: GenerateError = NameCollision::DuplicateSetter {
      name: "Func".to_string(),
      first: "ff".to_string(),
      second: "func".to_string(),
    }
    .into();
    assert_eq!(err.to_string(), "fields `ff` and `func` both resolve to setter `Func`");
  }

  #[test]
  fn invalid_identifier_names_the_role() {
    let err = GenerateError::InvalidIdentifier {
      name: "my-func".to_string(),
      role: IdentRole::Setter,
    };
    assert_eq!(err.to_string(), "`my-func` is not a valid setter identifier");
  }

  #[test]
  fn shadowed_constant_names_the_field() {
    let err: GenerateError = NameCollision::SetterShadowsConstant {
      name: "N".to_string(),
      field: "buf".to_string(),
    }
    .into();
    assert_eq!(
      err.to_string(),
      "setter `N` would shadow the constant `N` used in the type of field `buf`"
    );
  }
}
