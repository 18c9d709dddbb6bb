// Code generated by optioner from crates/optioner-example/src/lib.rs; DO NOT EDIT.
//
// Declare this file as a child module of the module that defines `Example`.

#![allow(non_camel_case_types, non_snake_case)]

use super::*;

/// An option configures an instance of type [`Example`].
///
/// Options are applied with [`Example::option`]. Applying an option
/// returns another option that restores the value it replaced.
pub struct ExampleOption {
    apply: ::std::boxed::Box<dyn ::std::ops::FnOnce(&mut Example) -> ExampleOption>,
}

impl ExampleOption {
    /// Wraps `apply`, which must return the option that undoes it.
    pub fn new(
        apply: impl ::std::ops::FnOnce(&mut Example) -> ExampleOption + 'static,
    ) -> Self {
        Self {
            apply: ::std::boxed::Box::new(apply),
        }
    }

    /// An option that changes nothing and undoes to itself.
    pub fn noop() -> Self {
        Self::new(|_| Self::noop())
    }

    /// Applies the option to `target`, returning the option that undoes it.
    pub fn apply(self, target: &mut Example) -> Self {
        (self.apply)(target)
    }
}

impl ::std::default::Default for ExampleOption {
    fn default() -> Self {
        Self::noop()
    }
}

impl ::std::fmt::Debug for ExampleOption {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.debug_struct("ExampleOption").finish_non_exhaustive()
    }
}

impl Example {
    /// Applies the options in order and returns an option that restores the
    /// value replaced by the last one. With no options the result is a no-op.
    pub fn option(
        &mut self,
        options: impl ::std::iter::IntoIterator<Item = ExampleOption>,
    ) -> ExampleOption {
        let mut previous = ExampleOption::noop();
        for opt in options {
            previous = opt.apply(self);
        }
        previous
    }
}

/// `N` sets a value for instances of type [`Example`].
pub fn N(value: i32) -> ExampleOption {
    ExampleOption::new(move |target: &mut Example| {
        self::N(::std::mem::replace(&mut target.n, value))
    })
}

/// `FSlice` sets a value for instances of type [`Example`].
pub fn FSlice(value: Vec<f64>) -> ExampleOption {
    ExampleOption::new(move |target: &mut Example| {
        self::FSlice(::std::mem::replace(&mut target.f_slice, value))
    })
}

/// `Map` sets a value for instances of type [`Example`].
pub fn Map(value: HashMap<String, i32>) -> ExampleOption {
    ExampleOption::new(move |target: &mut Example| {
        self::Map(::std::mem::replace(&mut target.map, value))
    })
}

/// `Func` sets a value for instances of type [`Example`].
pub fn Func(value: fn(i32) -> i32) -> ExampleOption {
    ExampleOption::new(move |target: &mut Example| {
        self::Func(::std::mem::replace(&mut target.ff, value))
    })
}
