use crate::generator::{GeneratedUnit, GenerateError, generate};

pub(super) const EXAMPLE_SOURCE: &str = r#"
use std::collections::HashMap;

pub struct Example {
  pub n: i32,
  #[cfg_attr(optioner, opt = "FSlice")]
  pub f_slice: Vec<f64>,
  pub map: HashMap<String, i32>,
  #[cfg_attr(optioner, opt = "-")]
  pub name: String,
  #[cfg_attr(optioner, opt = "Func")]
  ff: fn(i32) -> i32,
}
"#;

pub(super) fn generate_example(option_type_name: &str) -> Result<GeneratedUnit, GenerateError> {
  generate(EXAMPLE_SOURCE, "Example", option_type_name)
}

/// Names of the free functions in a generated unit, in order.
pub(super) fn function_names(unit: &GeneratedUnit) -> Vec<String> {
  let file = syn::parse_file(&unit.text).expect("generated unit should parse");
  file
    .items
    .iter()
    .filter_map(|item| match item {
      syn::Item::Fn(function) => Some(function.sig.ident.to_string()),
      _ => None,
    })
    .collect()
}
