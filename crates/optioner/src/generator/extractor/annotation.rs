//! Reads the `opt` annotation of a struct field.
//!
//! | Attribute                         | Annotation |
//! |-----------------------------------|------------|
//! | `#[opt = "Name"]`                 | `Name`     |
//! | `#[opt(rename = "Name")]`         | `Name`     |
//! | `#[opt(skip)]`                    | `-`        |
//! | `#[cfg_attr(<pred>, opt ...)]`    | as above   |
//!
//! `cfg_attr` is unwrapped whatever its predicate, so an annotated struct can
//! stay compilable with `#[cfg_attr(optioner, opt = "-")]`.

use syn::{Attribute, Expr, ExprLit, Lit, LitStr, Meta, Token, punctuated::Punctuated};

use crate::generator::naming::policy::EXCLUDE_MARKER;

const OPT: &str = "opt";
const CFG_ATTR: &str = "cfg_attr";

/// Returns the annotation string of a field, `None` when it has no `opt` attribute.
pub(crate) fn field_annotation(attrs: &[Attribute]) -> syn::Result<Option<String>> {
  let mut metas = Vec::new();
  for attr in attrs {
    collect_opt_metas(&attr.meta, &mut metas);
  }

  match metas.as_slice() {
    [] => Ok(None),
    [meta] => annotation_value(meta).map(Some),
    [_, duplicate, ..] => Err(syn::Error::new_spanned(duplicate, "duplicate `opt` annotation")),
  }
}

fn collect_opt_metas(meta: &Meta, out: &mut Vec<Meta>) {
  if meta.path().is_ident(OPT) {
    out.push(meta.clone());
    return;
  }

  if !meta.path().is_ident(CFG_ATTR) {
    return;
  }
  let Meta::List(list) = meta else {
    return;
  };
  // Malformed `cfg_attr` is the compiler's to report.
  let Ok(nested) = list.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated) else {
    return;
  };
  for inner in nested.iter().skip(1) {
    collect_opt_metas(inner, out);
  }
}

fn annotation_value(meta: &Meta) -> syn::Result<String> {
  match meta {
    Meta::NameValue(name_value) => match &name_value.value {
      Expr::Lit(ExprLit { lit: Lit::Str(value), .. }) => Ok(value.value()),
      other => Err(syn::Error::new_spanned(
        other,
        "expected a string literal, as in `#[opt = \"Name\"]`",
      )),
    },
    Meta::List(list) => {
      let mut value = None;
      list.parse_nested_meta(|nested| {
        if value.is_some() {
          return Err(nested.error("expected a single `skip` or `rename` entry"));
        }
        if nested.path.is_ident("skip") {
          value = Some(EXCLUDE_MARKER.to_string());
          Ok(())
        } else if nested.path.is_ident("rename") {
          let name: LitStr = nested.value()?.parse()?;
          value = Some(name.value());
          Ok(())
        } else {
          Err(nested.error("unknown `opt` key, expected `skip` or `rename`"))
        }
      })?;
      value.ok_or_else(|| syn::Error::new_spanned(list, "empty `opt(...)` annotation"))
    }
    Meta::Path(path) => Err(syn::Error::new_spanned(
      path,
      "expected `#[opt = \"...\"]`, `#[opt(skip)]` or `#[opt(rename = \"...\")]`",
    )),
  }
}

#[cfg(test)]
mod tests {
  use syn::{Field, parse_quote};

  use super::*;

  fn annotation(field: &Field) -> syn::Result<Option<String>> {
    field_annotation(&field.attrs)
  }

  #[test]
  fn no_opt_attribute_yields_none() {
    let field: Field = parse_quote! {
      #[serde(rename = "float_slice")]
      pub f_slice: Vec<f64>
    };
    assert_eq!(annotation(&field).unwrap(), None);
  }

  #[test]
  fn name_value_form() {
    let excluded: Field = parse_quote! { #[opt = "-"] name: String };
    assert_eq!(annotation(&excluded).unwrap(), Some("-".to_string()));

    let renamed: Field = parse_quote! { #[opt = "Func"] ff: fn(i32) -> i32 };
    assert_eq!(annotation(&renamed).unwrap(), Some("Func".to_string()));

    let empty: Field = parse_quote! { #[opt = ""] n: i32 };
    assert_eq!(annotation(&empty).unwrap(), Some(String::new()));
  }

  #[test]
  fn list_form() {
    let skipped: Field = parse_quote! { #[opt(skip)] name: String };
    assert_eq!(annotation(&skipped).unwrap(), Some("-".to_string()));

    let renamed: Field = parse_quote! { #[opt(rename = "Func")] ff: fn(i32) -> i32 };
    assert_eq!(annotation(&renamed).unwrap(), Some("Func".to_string()));
  }

  #[test]
  fn cfg_attr_is_unwrapped() {
    let field: Field = parse_quote! {
      #[cfg_attr(optioner, opt = "-")]
      name: String
    };
    assert_eq!(annotation(&field).unwrap(), Some("-".to_string()));

    let nested: Field = parse_quote! {
      #[cfg_attr(all(unix, feature = "x"), derive(Debug), cfg_attr(optioner, opt(rename = "Func")))]
      ff: fn(i32) -> i32
    };
    assert_eq!(annotation(&nested).unwrap(), Some("Func".to_string()));
  }

  #[test]
  fn cfg_attr_without_opt_is_ignored() {
    let field: Field = parse_quote! {
      #[cfg_attr(test, allow(dead_code))]
      n: i32
    };
    assert_eq!(annotation(&field).unwrap(), None);
  }

  #[test]
  fn malformed_annotations_are_rejected() {
    let fields: [Field; 5] = [
      parse_quote! { #[opt] n: i32 },
      parse_quote! { #[opt = 5] n: i32 },
      parse_quote! { #[opt(flatten)] n: i32 },
      parse_quote! { #[opt()] n: i32 },
      parse_quote! { #[opt(skip, rename = "N")] n: i32 },
    ];
    for field in &fields {
      assert!(annotation(field).is_err(), "expected an error for {}", quote::quote!(#field));
    }
  }

  #[test]
  fn duplicate_annotations_are_rejected() {
    let field: Field = parse_quote! {
      #[opt = "A"]
      #[cfg_attr(optioner, opt = "B")]
      n: i32
    };
    let err = annotation(&field).unwrap_err();
    assert!(err.to_string().contains("duplicate"));
  }
}
