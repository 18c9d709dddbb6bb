use super::{example_spec, format_spec};
use crate::generator::{
  ast::FieldRecord,
  codegen::{Visibility, synthesize},
  naming::SetterNaming,
  plan::plan,
};

#[test]
fn test_setters_for_included_fields_only() {
  let code = format_spec(&example_spec(), Visibility::Public);
  assert!(code.contains("pub fn N(value: i32) -> optExample {"));
  assert!(code.contains("pub fn Map(value: HashMap<String, i32>) -> optExample {"));
  assert!(!code.contains("fn Name("));
  assert!(!code.contains("target.name"));
}

#[test]
fn test_setters_follow_declaration_order() {
  let code = format_spec(&example_spec(), Visibility::Public);
  let n = code.find("fn N(").unwrap();
  let map = code.find("fn Map(").unwrap();
  assert!(n < map);
}

#[test]
fn test_setter_returns_its_own_inverse() {
  let code = format_spec(&example_spec(), Visibility::Public);
  assert!(code.contains("optExample::new(move |target: &mut Example| {"));
  assert!(code.contains("self::N(::std::mem::replace(&mut target.n, value))"));
  assert!(code.contains("self::Map(::std::mem::replace(&mut target.map, value))"));
}

#[test]
fn test_setter_doc_comment() {
  let code = format_spec(&example_spec(), Visibility::Public);
  assert!(code.contains("/// `N` sets a value for instances of type [`Example`]."));
  assert!(code.contains("/// `Map` sets a value for instances of type [`Example`]."));
}

#[test]
fn test_explicit_names_and_keyword_fields() {
  let records = vec![
    FieldRecord::new("ff", "fn(i32) -> i32").with_annotation("Func"),
    FieldRecord::new("type", "Option<&'static str>"),
  ];
  let spec = plan("Example", "ExampleOption", records, SetterNaming::Capitalize).unwrap();
  let code = format_spec(&spec, Visibility::Public);
  assert!(code.contains("pub fn Func(value: fn(i32) -> i32) -> ExampleOption {"));
  assert!(code.contains("self::Func(::std::mem::replace(&mut target.ff, value))"));
  assert!(code.contains("pub fn Type(value: Option<&'static str>) -> ExampleOption {"));
  assert!(code.contains("&mut target.r#type"));
}

#[test]
fn test_excluded_fields_never_produce_setters() {
  let records = || {
    vec![
      FieldRecord::new("n", "i32").with_annotation("-"),
      FieldRecord::new("secret", "String").with_annotation("-"),
    ]
  };
  for naming in [SetterNaming::Capitalize, SetterNaming::Declared] {
    let spec = plan("Example", "optExample", records(), naming).unwrap();
    let raw = synthesize(&spec, Visibility::Public);
    assert!(!raw.contains("mem :: replace"), "{naming:?}: {raw}");
  }
}

#[test]
fn test_declared_naming_keeps_field_names() {
  let records = vec![FieldRecord::new("ff", "u8")];
  let spec = plan("Example", "optExample", records, SetterNaming::Declared).unwrap();
  let code = format_spec(&spec, Visibility::Public);
  assert!(code.contains("pub fn ff(value: u8) -> optExample {"));
}

#[test]
fn test_recursive_field_types_name_the_target() {
  let records = vec![
    FieldRecord::new("value", "i32"),
    FieldRecord::new("next", "Option<Box<Self>>"),
  ];
  let spec = plan("Node", "optNode", records, SetterNaming::Capitalize).unwrap();
  let code = format_spec(&spec, Visibility::Public);
  assert!(code.contains("pub fn Next(value: Option<Box<Node>>) -> optNode {"));
  assert!(!code.contains("Box<Self>"));
}
