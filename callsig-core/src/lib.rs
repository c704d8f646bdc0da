#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub, clippy::std_instead_of_core)]
#![doc = include_str!("../README.md")]

#[cfg(all(not(feature = "std"), not(feature = "embedded")))]
compile_error!("Either 'std' or 'embedded' feature must be enabled.");

extern crate alloc;

#[macro_use]
mod log;
#[macro_use]
mod arity;

mod error;
pub use error::{Error, Result};
pub mod args;
pub use args::{Arg, Arguments, Decay, DecayArgs};
pub mod signature;
pub use signature::{Method, Signature};
pub mod callable;
pub use callable::{signature_of, to_fn_pointer, to_invocable, Callable};
mod info;
pub use info::SignatureInfo;
#[doc(hidden)]
pub mod probe;

// Re-export the Decay derive macro so it's available alongside the trait.
pub use callsig_macros::Decay;

#[cfg(test)]
mod test_utils;
