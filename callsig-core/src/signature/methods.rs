//! Signature implementations for method shapes.

use alloc::{boxed::Box, rc::Rc, sync::Arc};
use core::{fmt, marker::PhantomData, pin::Pin};

/// A method shape.
///
/// Rust has no pointer-to-member type: a method is a function whose first argument is the
/// receiver. Wrapping such a function pointer type in `Method` marks the first argument as the
/// receiver, which the [`Signature`](crate::Signature) implementation then discards. How the
/// receiver is taken doesn't matter, nor do the function's safety and ABI. All of these resolve
/// to the arguments `(u32,)` and the output `bool`:
///
/// ```
/// use core::pin::Pin;
/// use std::sync::Arc;
///
/// use callsig_core::{Method, Signature};
///
/// struct Cache;
///
/// assert_eq!(<Method<fn(&Cache, u32) -> bool> as Signature>::ARITY, 1);
/// assert_eq!(<Method<fn(&mut Cache, u32) -> bool> as Signature>::ARITY, 1);
/// assert_eq!(<Method<unsafe fn(Pin<&mut Cache>, u32) -> bool> as Signature>::ARITY, 1);
/// assert_eq!(<Method<extern "C" fn(Arc<Cache>, u32) -> bool> as Signature>::ARITY, 1);
/// ```
///
/// The recognized receivers are `&C`, `&mut C`, `Pin<&mut C>`, `Box<C>`, `Rc<C>` and `Arc<C>`.
/// A by-value `self` receiver has no `Method` form, resolve such methods through
/// [`Callable`](crate::Callable) where the receiver is the first argument. Methods whose return
/// type borrows from the receiver can't be matched either, for the same reason as the
/// higher-ranked function pointers described on [`Signature`](crate::Signature).
pub struct Method<F>(PhantomData<F>);

impl<F> Method<F> {
    /// Creates the method shape marker.
    pub const fn new() -> Self {
        Method(PhantomData)
    }
}

impl<F> fmt::Debug for Method<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method<{}>", core::any::type_name::<F>())
    }
}

impl<F> Clone for Method<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Method<F> {}

impl<F> Default for Method<F> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_methods {
    (@receiver ($($receiver:tt)*); $($A:ident),*) => {
        impl_signature!(
            [C: ?Sized, R, $($A),*] Method<fn($($receiver)*, $($A),*) -> R>;
            ($($A),*) -> R
        );
        impl_signature!(
            [C: ?Sized, R, $($A),*] Method<unsafe fn($($receiver)*, $($A),*) -> R>;
            ($($A),*) -> R
        );
        impl_signature!(
            [C: ?Sized, R, $($A),*] Method<extern "C" fn($($receiver)*, $($A),*) -> R>;
            ($($A),*) -> R
        );
        impl_signature!(
            [C: ?Sized, R, $($A),*] Method<unsafe extern "C" fn($($receiver)*, $($A),*) -> R>;
            ($($A),*) -> R
        );
    };
    ($($idx:tt $A:ident $a:ident),*) => {
        impl_methods!(@receiver (&C); $($A),*);
        impl_methods!(@receiver (&mut C); $($A),*);
        impl_methods!(@receiver (Pin<&mut C>); $($A),*);
        impl_methods!(@receiver (Box<C>); $($A),*);
        impl_methods!(@receiver (Rc<C>); $($A),*);
        impl_methods!(@receiver (Arc<C>); $($A),*);
    };
}

for_each_arity!(impl_methods);
