//! A struct configured through generated options.
//!
//! `example_generated.rs` is written by
//!
//! ```text
//! optioner generate -t Example -m ExampleOption -i crates/optioner-example/src/lib.rs
//! ```
//!
//! and must be regenerated whenever `Example` changes.

use std::collections::HashMap;

mod example_generated;

pub use example_generated::*;

/// A struct with one field of each kind the generator handles.
///
/// The `opt` annotations sit behind `cfg_attr(optioner, ...)`: the generator
/// reads them, the compiler never sees them.
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

impl Example {
  /// Starts from `n = 10`, an empty slice with room for 100 values, an empty
  /// map and the identity function, then applies `options`.
  pub fn new(name: impl Into<String>, options: impl IntoIterator<Item = ExampleOption>) -> Self {
    let mut example = Self {
      n: 10,
      f_slice: Vec::with_capacity(100),
      map: HashMap::new(),
      name: name.into(),
      ff: |x| x,
    };
    example.option(options);
    example
  }

  #[must_use]
  pub fn call(&self, x: i32) -> i32 {
    (self.ff)(x)
  }
}
