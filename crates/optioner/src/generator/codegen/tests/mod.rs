mod setter_tests;

use crate::generator::{
  ast::{FieldRecord, OptionSpec},
  codegen::{Visibility, synthesize},
  format::canonicalize,
  naming::SetterNaming,
  plan::plan,
};

fn example_spec() -> OptionSpec {
  let records = vec![
    FieldRecord::new("n", "i32"),
    FieldRecord::new("map", "HashMap<String, i32>"),
    FieldRecord::new("name", "String").with_annotation("-"),
  ];
  plan("Example", "optExample", records, SetterNaming::Capitalize).unwrap()
}

fn format_spec(spec: &OptionSpec, visibility: Visibility) -> String {
  let unit = canonicalize(synthesize(spec, visibility));
  assert!(unit.is_formatted(), "{:?}", unit.diagnostic);
  unit.text
}

#[test]
fn test_prelude_comes_first() {
  let code = format_spec(&example_spec(), Visibility::Public);
  assert!(code.starts_with("#![allow(non_camel_case_types, non_snake_case)]\n"));
  assert!(code.contains("use super::*;"));
}

#[test]
fn test_synthesis_is_deterministic() {
  let spec = example_spec();
  assert_eq!(synthesize(&spec, Visibility::Public), synthesize(&spec, Visibility::Public));
  assert_eq!(
    format_spec(&spec, Visibility::Public),
    format_spec(&example_spec(), Visibility::Public)
  );
}

#[test]
fn test_raw_output_parses() {
  for visibility in [Visibility::Public, Visibility::Crate, Visibility::File] {
    let raw = synthesize(&example_spec(), visibility);
    assert!(syn::parse_file(&raw).is_ok(), "{visibility:?}:\n{raw}");
  }
}

#[test]
fn test_visibility_parse() {
  assert_eq!(Visibility::parse("public"), Some(Visibility::Public));
  assert_eq!(Visibility::parse("crate"), Some(Visibility::Crate));
  assert_eq!(Visibility::parse("file"), Some(Visibility::File));
  assert_eq!(Visibility::parse("private"), None);
}

#[test]
fn test_struct_without_fields_gets_option_type_and_dispatch() {
  let spec = plan("Marker", "optMarker", vec![], SetterNaming::Capitalize).unwrap();
  let code = format_spec(&spec, Visibility::Public);
  assert!(code.contains("pub struct optMarker"));
  assert!(code.contains("impl Marker {"));
  assert!(!code.contains("std::mem::replace"));
}
