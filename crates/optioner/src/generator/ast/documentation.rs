use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// Doc comment lines attached to a generated item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
  lines: Vec<String>,
}

impl Documentation {
  #[must_use]
  pub fn from_lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self {
      lines: lines.into_iter().map(Into::into).collect(),
    }
  }
}

impl ToTokens for Documentation {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    // `/// text` desugars to `#[doc = " text"]`; keep that shape so the
    // formatter prints ordinary doc comments.
    for line in &self.lines {
      let text = if line.is_empty() { String::new() } else { format!(" {line}") };
      quote! { #[doc = #text] }.to_tokens(tokens);
    }
  }
}
