use proc_macro2::TokenStream;
use quote::quote;

use super::Visibility;
use crate::generator::ast::{Documentation, OptionSpec};

/// The option type: a boxed one-shot function that configures the target and
/// returns the option undoing its own change.
pub(crate) fn generate_option_type(spec: &OptionSpec, visibility: Visibility) -> TokenStream {
  let vis = visibility.to_tokens();
  let option_type = spec.option_type();
  let target = spec.target_type();
  let debug_name = spec.option_type_name();

  let docs = Documentation::from_lines([
    format!("An option configures an instance of type [`{target}`]."),
    String::new(),
    format!("Options are applied with [`{target}::option`]. Applying an option"),
    "returns another option that restores the value it replaced.".to_string(),
  ]);

  quote! {
    #docs
    #vis struct #option_type {
      apply: ::std::boxed::Box<dyn ::std::ops::FnOnce(&mut #target) -> #option_type>,
    }

    impl #option_type {
      /// Wraps `apply`, which must return the option that undoes it.
      #vis fn new(apply: impl ::std::ops::FnOnce(&mut #target) -> #option_type + 'static) -> Self {
        Self {
          apply: ::std::boxed::Box::new(apply),
        }
      }

      /// An option that changes nothing and undoes to itself.
      #vis fn noop() -> Self {
        Self::new(|_| Self::noop())
      }

      /// Applies the option to `target`, returning the option that undoes it.
      #vis fn apply(self, target: &mut #target) -> Self {
        (self.apply)(target)
      }
    }

    impl ::std::default::Default for #option_type {
      fn default() -> Self {
        Self::noop()
      }
    }

    impl ::std::fmt::Debug for #option_type {
      fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.debug_struct(#debug_name).finish_non_exhaustive()
      }
    }
  }
}
