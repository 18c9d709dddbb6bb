use syn::Ident;

/// Upper-cases the first character and keeps the rest as written.
pub(crate) fn capitalize_first(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_uppercase().chain(chars).collect(),
  }
}

/// Parses `name` as a plain or `r#`-prefixed identifier. Keywords, `_` and
/// anything that is not a single identifier token are rejected.
pub(crate) fn parse_ident(name: &str) -> Option<Ident> {
  syn::parse_str::<Ident>(name).ok()
}

/// The identifier used to access a field named `name` on the target. Fields
/// named after keywords come back raw (`type` becomes `r#type`).
pub(crate) fn member_ident(name: &str) -> Option<Ident> {
  parse_ident(name).or_else(|| parse_ident(&format!("r#{name}")))
}
