//! Applies the option policy to extracted fields and validates the result.
//!
//! Every fatal naming problem is reported here, before any code is
//! synthesized.
//!
//! Setters are free functions in a child module, so setter types are rewritten
//! to name the target instead of `Self`. A setter must also not take the name
//! of a constant that an included field's type refers to (`[u8; N]` or
//! `Buf<{ N }>`), since the setter would shadow it inside the generated module.
//! A bare const generic argument such as `Buf<N>` is not detected.

use indexmap::{IndexMap, IndexSet};
use syn::{
  ExprPath, Ident, Path, Type,
  visit::{self, Visit},
  visit_mut::{self, VisitMut},
};

use super::{
  ast::{FieldRecord, OptionField, OptionSpec, Setter},
  error::{GenerateError, IdentRole, NameCollision},
  naming::{
    SetterNaming,
    identifiers::{member_ident, parse_ident},
    policy,
  },
};

pub fn plan(
  target_type_name: &str,
  option_type_name: &str,
  records: Vec<FieldRecord>,
  naming: SetterNaming,
) -> Result<OptionSpec, GenerateError> {
  if option_type_name == target_type_name {
    return Err(
      NameCollision::OptionTypeMatchesTarget {
        name: option_type_name.to_string(),
      }
      .into(),
    );
  }

  let target_type = require_ident(target_type_name, IdentRole::TargetType)?;
  let option_type = require_ident(option_type_name, IdentRole::OptionType)?;

  // external name -> declared name of the field that claimed it
  let mut claimed: IndexMap<String, String> = IndexMap::new();
  let mut fields = Vec::with_capacity(records.len());

  for (index, record) in records.into_iter().enumerate() {
    if record.declared_name.is_empty() {
      return Err(GenerateError::UnsupportedField {
        type_name: target_type_name.to_string(),
        index,
      });
    }

    let member = member_ident(&record.declared_name).ok_or_else(|| GenerateError::InvalidIdentifier {
      name: record.declared_name.clone(),
      role: IdentRole::Field,
    })?;

    let decision = policy::decide(&record, naming);
    let setter = match decision.external_name() {
      Some(external_name) => {
        if let Some(first) = claimed.get(external_name) {
          return Err(
            NameCollision::DuplicateSetter {
              name: external_name.to_string(),
              first: first.clone(),
              second: record.declared_name,
            }
            .into(),
          );
        }
        claimed.insert(external_name.to_string(), record.declared_name.clone());

        let mut ty: Type = syn::parse_str(&record.type_spelling).map_err(|_| GenerateError::InvalidTypeSpelling {
          field: record.declared_name.clone(),
          spelling: record.type_spelling.clone(),
        })?;
        ReplaceSelf(&target_type).visit_type_mut(&mut ty);

        Some(Setter {
          ident: require_ident(external_name, IdentRole::Setter)?,
          ty,
        })
      }
      None => None,
    };

    fields.push(OptionField::new(record, decision, member, setter));
  }

  for field in &fields {
    let Some(setter) = field.setter() else { continue };
    if let Some(name) = value_paths(&setter.ty).into_iter().find(|name| claimed.contains_key(name)) {
      return Err(
        NameCollision::SetterShadowsConstant {
          name,
          field: field.record().declared_name.clone(),
        }
        .into(),
      );
    }
  }

  Ok(OptionSpec::new(target_type, option_type, fields))
}

/// Rewrites `Self` to the target type.
struct ReplaceSelf<'a>(&'a Ident);

impl VisitMut for ReplaceSelf<'_> {
  fn visit_path_mut(&mut self, path: &mut Path) {
    if let Some(first) = path.segments.first_mut()
      && first.ident == "Self"
    {
      first.ident = self.0.clone();
    }
    visit_mut::visit_path_mut(self, path);
  }
}

/// Single identifiers used as values inside a type, such as array lengths.
#[derive(Default)]
struct ValuePaths(IndexSet<String>);

impl<'ast> Visit<'ast> for ValuePaths {
  fn visit_expr_path(&mut self, expr: &'ast ExprPath) {
    if expr.qself.is_none()
      && let Some(ident) = expr.path.get_ident()
    {
      self.0.insert(ident.to_string());
    }
    visit::visit_expr_path(self, expr);
  }
}

fn value_paths(ty: &Type) -> IndexSet<String> {
  let mut paths = ValuePaths::default();
  paths.visit_type(ty);
  paths.0
}

fn require_ident(name: &str, role: IdentRole) -> Result<Ident, GenerateError> {
  parse_ident(name).ok_or_else(|| GenerateError::InvalidIdentifier {
    name: name.to_string(),
    role,
  })
}
