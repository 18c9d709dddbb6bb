//! Locates a struct declaration and records its fields.

mod annotation;

use std::path::PathBuf;

use quote::ToTokens;
use syn::{Field, Fields, Item, ItemStruct, Type, ext::IdentExt};

use super::{
  ast::{FieldRecord, SourceFile, SourceUnit},
  error::{GenerateError, ItemKind},
};

/// Field records of the target struct and where they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
  pub records: Vec<FieldRecord>,
  /// File holding the declaration.
  pub source_file: PathBuf,
  /// Files parsed before the search stopped, in search order.
  pub parsed_files: Vec<PathBuf>,
}

/// Extracts the fields of `type_name` from a single source file.
pub fn extract_fields(source: &str, type_name: &str) -> Result<Vec<FieldRecord>, GenerateError> {
  let file = parse_source("<source>", source)?;
  find_struct_fields(&file, type_name)?.ok_or_else(|| GenerateError::TypeNotFound {
    type_name: type_name.to_string(),
  })
}

/// Searches the files of `unit` in order; the first declaration named
/// `type_name` wins and later files are not parsed.
pub fn extract_from_unit(unit: &SourceUnit, type_name: &str) -> Result<Extraction, GenerateError> {
  let mut parsed_files = Vec::new();

  for source_file in unit.files() {
    let SourceFile { path, text } = source_file;
    let file = parse_source(&path.display().to_string(), text)?;
    parsed_files.push(path.clone());

    if let Some(records) = find_struct_fields(&file, type_name)? {
      return Ok(Extraction {
        records,
        source_file: path.clone(),
        parsed_files,
      });
    }
  }

  Err(GenerateError::TypeNotFound {
    type_name: type_name.to_string(),
  })
}

fn parse_source(origin: &str, text: &str) -> Result<syn::File, GenerateError> {
  syn::parse_file(text).map_err(|source| GenerateError::Parse {
    origin: origin.to_string(),
    source,
  })
}

/// `Ok(None)` when no type declaration in `file` is named `type_name`.
fn find_struct_fields(file: &syn::File, type_name: &str) -> Result<Option<Vec<FieldRecord>>, GenerateError> {
  for item in &file.items {
    let (ident, kind) = match item {
      Item::Struct(item_struct) => {
        if item_struct.ident == type_name {
          return struct_fields(item_struct).map(Some);
        }
        continue;
      }
      Item::Enum(item) => (&item.ident, ItemKind::Enum),
      Item::Union(item) => (&item.ident, ItemKind::Union),
      Item::Type(item) => (&item.ident, ItemKind::TypeAlias),
      Item::Trait(item) => (&item.ident, ItemKind::Trait),
      _ => continue,
    };

    if ident == type_name {
      return Err(GenerateError::NotAStruct {
        type_name: type_name.to_string(),
        kind,
      });
    }
  }

  Ok(None)
}

fn struct_fields(item: &ItemStruct) -> Result<Vec<FieldRecord>, GenerateError> {
  let type_name = item.ident.to_string();

  if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
    return Err(GenerateError::UnsupportedGenerics { type_name });
  }

  match &item.fields {
    Fields::Named(named) => named.named.iter().map(|field| field_record(&type_name, field)).collect(),
    Fields::Unnamed(unnamed) if !unnamed.unnamed.is_empty() => {
      Err(GenerateError::UnsupportedField { type_name, index: 0 })
    }
    Fields::Unnamed(_) | Fields::Unit => Ok(Vec::new()),
  }
}

fn field_record(type_name: &str, field: &Field) -> Result<FieldRecord, GenerateError> {
  let Some(ident) = &field.ident else {
    return Err(GenerateError::UnsupportedField {
      type_name: type_name.to_string(),
      index: 0,
    });
  };
  let declared_name = ident.unraw().to_string();

  let raw_annotation =
    annotation::field_annotation(&field.attrs).map_err(|err| GenerateError::InvalidAnnotation {
      type_name: type_name.to_string(),
      field: declared_name.clone(),
      message: err.to_string(),
    })?;

  Ok(FieldRecord {
    type_spelling: type_spelling(&field.ty),
    declared_name,
    raw_annotation,
  })
}

/// Renders a type the way the formatter would print it in a signature, on
/// one line.
pub(crate) fn type_spelling(ty: &Type) -> String {
  let file: syn::File = syn::parse_quote! { type __Spelling = #ty; };
  let rendered = prettyplease::unparse(&file);

  rendered
    .trim()
    .strip_prefix("type __Spelling = ")
    .and_then(|rest| rest.strip_suffix(';'))
    .map_or_else(|| ty.to_token_stream().to_string(), join_wrapped_lines)
}

/// Undoes the formatter's line wrapping: no space after an opening bracket,
/// and no trailing comma or space before a closing one.
fn join_wrapped_lines(wrapped: &str) -> String {
  let mut joined = String::with_capacity(wrapped.len());

  for line in wrapped.lines().map(str::trim).filter(|line| !line.is_empty()) {
    if line.starts_with([')', ']', '>', '}']) {
      if joined.ends_with(',') {
        joined.pop();
      }
    } else if !joined.is_empty() && !joined.ends_with(['(', '[', '<', '{']) {
      joined.push(' ');
    }
    joined.push_str(line);
  }

  joined
}
