use proc_macro2::TokenStream;
use quote::quote;

use super::Visibility;
use crate::generator::ast::{Documentation, OptionSpec};

pub(crate) fn generate_setters(spec: &OptionSpec, visibility: Visibility) -> Vec<TokenStream> {
  let vis = visibility.to_tokens();
  let option_type = spec.option_type();
  let target = spec.target_type();

  spec
    .setters()
    .map(|(field, setter)| {
      let name = &setter.ident;
      let ty = &setter.ty;
      let member = field.member();
      let docs = Documentation::from_lines([format!("`{name}` sets a value for instances of type [`{target}`].")]);

      // `self::` so a local binding cannot shadow the setter in its own inverse.
      quote! {
        #docs
        #vis fn #name(value: #ty) -> #option_type {
          #option_type::new(move |target: &mut #target| {
            self::#name(::std::mem::replace(&mut target.#member, value))
          })
        }
      }
    })
    .collect()
}
