#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub)]
#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;

mod decay;
mod utils;

/// Derives `Decay` for structs, enums and unions.
///
/// A derived type decays to itself: only references are stripped when an argument list decays,
/// and a user type is never a reference. Deriving it is what lets the type appear in the decayed
/// argument list of a signature.
///
/// Generic parameters are carried over to the implementation unchanged, without adding bounds.
///
/// # Examples
///
/// ```rust
/// use callsig::{signature::DecayedArgs, Decay};
///
/// #[derive(Decay)]
/// struct Request {
///     id: u64,
/// }
///
/// #[derive(Decay)]
/// enum Priority {
///     Low,
///     High,
/// }
///
/// type Handler<'a> = fn(&'a Request, &'a mut Priority) -> bool;
///
/// let args: DecayedArgs<Handler<'static>> = (Request { id: 7 }, Priority::High);
/// assert_eq!(args.0.id, 7);
/// ```
///
/// ## Generic Types
///
/// ```rust
/// use callsig::{Decay, DecayArgs};
///
/// #[derive(Decay)]
/// struct Page<'a, T> {
///     items: &'a [T],
/// }
///
/// let items = [1, 2, 3];
/// let decayed: <(&Page<'_, i32>,) as DecayArgs>::Decayed = (Page { items: &items },);
/// assert_eq!(decayed.0.items.len(), 3);
/// ```
///
/// # Attributes
///
/// - `#[callsig(crate = "path")]`: the path to the `callsig` crate, `::callsig` by default.
#[proc_macro_derive(Decay, attributes(callsig))]
pub fn derive_decay(input: TokenStream) -> TokenStream {
    decay::derive_decay(input)
}
