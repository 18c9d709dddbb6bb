use proc_macro2::TokenStream;
use quote::quote;

use super::Visibility;
use crate::generator::ast::{Documentation, OptionSpec};

pub(crate) fn generate_dispatch(spec: &OptionSpec, visibility: Visibility) -> TokenStream {
  let vis = visibility.to_tokens();
  let option_type = spec.option_type();
  let target = spec.target_type();

  let docs = Documentation::from_lines([
    "Applies the options in order and returns an option that restores the".to_string(),
    "value replaced by the last one. With no options the result is a no-op.".to_string(),
  ]);

  quote! {
    impl #target {
      #docs
      #vis fn option(&mut self, options: impl ::std::iter::IntoIterator<Item = #option_type>) -> #option_type {
        let mut previous = #option_type::noop();
        for opt in options {
          previous = opt.apply(self);
        }
        previous
      }
    }
  }
}
