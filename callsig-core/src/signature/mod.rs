//! Signature resolution.
//!
//! This module provides the [`Signature`] trait and its implementations for every type that
//! spells out a callable's shape, reducing each of them to one canonical description: the
//! argument list and the return type.
//!
//! # Organization
//!
//! The implementations are organized by shape:
//! - `pointers`: function pointers (`fn`, `unsafe fn`, `extern "C" fn`, ...)
//! - `closures`: function trait objects (`dyn Fn`, `dyn FnMut`, `dyn FnOnce`)
//! - `methods`: method shapes wrapped in [`Method`], with the receiver discarded
//! - `wrappers`: references and smart pointers to any of the above
//!
//! Closures, functions and other values whose type can't be named are resolved from the value
//! instead, through [`Callable`](crate::Callable).

use core::any::type_name;

use crate::{Arg, Arguments, DecayArgs, SignatureInfo};

/// The signature of a callable type.
///
/// Implemented for every recognized callable shape. All the shapes of one signature agree on
/// the associated items: `fn(u8) -> bool`, `unsafe extern "C" fn(u8) -> bool`,
/// `dyn FnMut(u8) -> bool`, `Box<dyn Fn(u8) -> bool>`, `&fn(u8) -> bool` and
/// `Method<fn(&Receiver, u8) -> bool>` all resolve to the arguments `(u8,)` and the output
/// `bool`.
///
/// A type that isn't recognized has no implementation. Asking for its signature fails to
/// compile; use [`is_callable!`](crate::is_callable) to test for one without failing:
///
/// ```compile_fail
/// use callsig_core::Signature;
///
/// let _ = <u32 as Signature>::ARITY;
/// ```
///
/// # Lifetimes
///
/// A function pointer written with elided argument lifetimes, like `fn(&str) -> usize`, is
/// generic over those lifetimes and can't be matched by a generic implementation. Name the
/// lifetime (`fn(&'a str) -> usize`) or resolve the function through
/// [`Callable`](crate::Callable). Receivers of [`Method`] are exempt: their reference forms are
/// matched as written.
///
/// # Examples
///
/// ```
/// use callsig_core::{signature, Signature};
///
/// type Handler = fn(u32, &'static str) -> bool;
///
/// assert_eq!(<Handler as Signature>::ARITY, 2);
/// let _: signature::ArgAt<Handler, 1> = "second";
/// let _: signature::Output<Handler> = true;
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a recognized callable shape",
    label = "no signature for this type",
    note = "function pointers, `dyn Fn*` objects, `Method<fn(..)>` and references or smart \
            pointers to them are recognized; resolve closures and functions through `Callable`"
)]
pub trait Signature {
    /// The number of arguments.
    const ARITY: usize;

    /// The return type.
    type Output;

    /// The argument types as declared, as a tuple.
    type Args: Arguments;

    /// The plain function pointer type of this signature.
    type Pointer: Copy;

    /// The boxed function object type of this signature, able to hold any callable with it.
    type Boxed;

    /// The runtime description of this signature.
    fn info() -> SignatureInfo {
        SignatureInfo::new(
            type_name::<Self::Output>(),
            <Self::Args as Arguments>::type_names(),
        )
    }
}

/// The return type of `S`.
pub type Output<S> = <S as Signature>::Output;

/// The argument types of `S` as declared.
pub type Args<S> = <S as Signature>::Args;

/// The argument type of `S` at index `I`.
///
/// An index past the last argument is a compile-time error:
///
/// ```compile_fail
/// use callsig_core::signature::ArgAt;
///
/// let _: Option<ArgAt<fn(u8, u16), 2>> = None;
/// ```
///
/// The same holds for every shape. A method's receiver doesn't count as an argument:
///
/// ```compile_fail
/// use callsig_core::{signature::ArgAt, Method};
///
/// struct Widget;
///
/// let _: Option<ArgAt<Method<fn(&Widget, u8)>, 1>> = None;
/// ```
///
/// ```compile_fail
/// use callsig_core::signature::ArgAt;
///
/// let _: Option<ArgAt<Box<dyn Fn(u8) -> bool>, 1>> = None;
/// ```
///
/// While the last valid index resolves:
///
/// ```
/// use callsig_core::{signature::ArgAt, Method};
///
/// struct Widget;
///
/// let _: Option<ArgAt<Method<fn(&Widget, u8)>, 0>> = Some(1_u8);
/// let _: Option<ArgAt<Box<dyn Fn(u8) -> bool>, 0>> = Some(2_u8);
/// ```
pub type ArgAt<S, const I: usize> = <<S as Signature>::Args as Arg<I>>::Type;

/// The argument types of `S` with their top-level references removed.
pub type DecayedArgs<S> = <<S as Signature>::Args as DecayArgs>::Decayed;

/// The function pointer type of `S`.
pub type Pointer<S> = <S as Signature>::Pointer;

/// The boxed function object type of `S`.
pub type Boxed<S> = <S as Signature>::Boxed;

// Macro utilities.
#[macro_use]
mod macros;

// Implementation modules.
mod closures;
mod methods;
pub use methods::Method;
mod pointers;
mod wrappers;
