//! Argument lists.
//!
//! A signature's arguments are carried as a tuple type: `fn(u8, &str) -> bool` has the argument
//! list `(u8, &str)`. This module provides the traits that query such a tuple:
//!
//! - [`Arguments`]: the number of arguments and their type names.
//! - [`Arg`]: the type at a given index, checked at compile time.
//! - [`DecayArgs`]: the same list with the top-level reference of every argument removed.

use alloc::vec::Vec;

mod decay;
pub use decay::Decay;

/// A list of argument types.
///
/// Implemented for tuples of up to 12 elements.
pub trait Arguments {
    /// The number of arguments.
    const COUNT: usize;

    /// The names of the argument types, in order.
    fn type_names() -> Vec<&'static str>;
}

/// The argument type at index `I`.
///
/// Only valid indices have an implementation, so asking for an argument past the end of the
/// list is a compile-time error:
///
/// ```compile_fail
/// use callsig_core::Arg;
///
/// // `(u8, u16)` has no third element.
/// type Third = <(u8, u16) as Arg<2>>::Type;
/// let _: Option<Third> = None;
/// ```
#[diagnostic::on_unimplemented(
    message = "argument index {I} is out of range for `{Self}`",
    label = "no argument at index {I}"
)]
pub trait Arg<const I: usize> {
    /// The type of the argument.
    type Type;
}

/// An argument list with the top-level reference of every argument removed.
///
/// `(&u8, &mut String, i32)` decays to `(u8, String, i32)`. Only the outermost reference is
/// stripped, see [`Decay`] for details. This is the list to use when the arguments need to be
/// stored by value.
pub trait DecayArgs {
    /// The decayed argument list.
    type Decayed;
}

macro_rules! impl_arguments {
    ($($idx:tt $A:ident $a:ident),*) => {
        impl<$($A),*> Arguments for ($($A,)*) {
            const COUNT: usize = 0 $(+ one!($A))*;

            fn type_names() -> Vec<&'static str> {
                alloc::vec![$(core::any::type_name::<$A>()),*]
            }
        }

        impl<$($A: Decay),*> DecayArgs for ($($A,)*) {
            type Decayed = ($(<$A as Decay>::Decayed,)*);
        }

        impl_arg!([$($A),*] $($idx $A),*);
    };
}

// One `Arg` impl per index. The full element list is carried along in brackets because the
// index being implemented and the tuple it belongs to repeat at different depths.
macro_rules! impl_arg {
    ([$($All:ident),*]) => {};
    ([$($All:ident),*] $idx:tt $A:ident $(, $($rest:tt)*)?) => {
        impl<$($All),*> Arg<$idx> for ($($All,)*) {
            type Type = $A;
        }

        impl_arg!([$($All),*] $($($rest)*)?);
    };
}

for_each_arity!(impl_arguments);

#[cfg(test)]
mod tests;
