//! Turns an [`OptionSpec`] into the tokens of an options module.
//!
//! The module is meant to be declared as a child of the module that declares
//! the target type (`mod example_generated;`), so it starts with `use
//! super::*;` and setters can reach private fields. Every path to a std item
//! is absolute so that a setter named after a prelude item (`Box`, `Some`)
//! cannot change what the generated code refers to.

use proc_macro2::TokenStream;
use quote::quote;

use super::ast::OptionSpec;

mod dispatch;
mod option_type;
mod setters;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
  #[default]
  Public,
  Crate,
  /// Only the module declaring the target type sees the generated items.
  File,
}

impl Visibility {
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "public" => Some(Visibility::Public),
      "crate" => Some(Visibility::Crate),
      "file" => Some(Visibility::File),
      _ => None,
    }
  }

  pub(crate) fn to_tokens(self) -> TokenStream {
    match self {
      Visibility::Public => quote! { pub },
      Visibility::Crate => quote! { pub(crate) },
      Visibility::File => quote! { pub(super) },
    }
  }
}

pub struct CodeGenerator<'a> {
  spec: &'a OptionSpec,
  visibility: Visibility,
}

impl<'a> CodeGenerator<'a> {
  #[must_use]
  pub const fn new(spec: &'a OptionSpec, visibility: Visibility) -> Self {
    Self { spec, visibility }
  }

  /// Prelude, option type, dispatch method, then one setter per included
  /// field in declaration order.
  #[must_use]
  pub fn generate(&self) -> TokenStream {
    let option_type = option_type::generate_option_type(self.spec, self.visibility);
    let dispatch = dispatch::generate_dispatch(self.spec, self.visibility);
    let setters = setters::generate_setters(self.spec, self.visibility);

    quote! {
      #![allow(non_camel_case_types, non_snake_case)]

      use super::*;

      #option_type

      #dispatch

      #(#setters)*
    }
  }
}

/// Raw, unformatted source text of the options module for `spec`.
#[must_use]
pub fn synthesize(spec: &OptionSpec, visibility: Visibility) -> String {
  CodeGenerator::new(spec, visibility).generate().to_string()
}
