//! Core traits for the unisolve solvers.
//!
//! This crate defines the shared abstractions that every solver builds on:
//!
//! - [`Function`] — a scalar-to-scalar callable, such as a derivative `g'`,
//!   a second derivative `g''`, a score `l'`, or a Fisher information `I`
//! - [`Fallible`] — adapts a closure returning `Result` into a [`Function`]
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{Fallible, Function};
pub use observer::Observer;
