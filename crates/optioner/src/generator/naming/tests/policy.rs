use crate::generator::{
  ast::{FieldPolicyDecision, FieldRecord},
  naming::{
    SetterNaming,
    policy::{EXCLUDE_MARKER, decide},
  },
};

fn include(name: &str) -> FieldPolicyDecision {
  FieldPolicyDecision::Include {
    external_name: name.to_string(),
  }
}

#[test]
fn missing_annotation_capitalizes_declared_name() {
  let record = FieldRecord::new("ff", "fn(i32) -> i32");
  assert_eq!(decide(&record, SetterNaming::Capitalize), include("Ff"));
}

#[test]
fn empty_annotation_is_treated_as_missing() {
  let record = FieldRecord::new("n", "i32").with_annotation("");
  assert_eq!(decide(&record, SetterNaming::Capitalize), include("N"));
  assert_eq!(decide(&record, SetterNaming::Declared), include("n"));
}

#[test]
fn explicit_name_is_used_verbatim() {
  let record = FieldRecord::new("ff", "fn(i32) -> i32").with_annotation("Func");
  for naming in [SetterNaming::Capitalize, SetterNaming::Declared] {
    assert_eq!(decide(&record, naming), include("Func"));
  }

  let lowercase = FieldRecord::new("ff", "fn(i32) -> i32").with_annotation("func");
  assert_eq!(decide(&lowercase, SetterNaming::Capitalize), include("func"));
}

#[test]
fn exclusion_marker_excludes_under_any_naming() {
  let record = FieldRecord::new("name", "String").with_annotation(EXCLUDE_MARKER);
  for naming in [SetterNaming::Capitalize, SetterNaming::Declared] {
    let decision = decide(&record, naming);
    assert_eq!(decision, FieldPolicyDecision::Exclude);
    assert!(!decision.is_included());
    assert_eq!(decision.external_name(), None);
  }
}

#[test]
fn included_names_are_never_empty() {
  let records = [
    FieldRecord::new("a", "u8"),
    FieldRecord::new("b", "u8").with_annotation(""),
    FieldRecord::new("c", "u8").with_annotation("C2"),
  ];
  for record in &records {
    let decision = decide(record, SetterNaming::Capitalize);
    assert!(decision.external_name().is_some_and(|name| !name.is_empty()));
  }
}
