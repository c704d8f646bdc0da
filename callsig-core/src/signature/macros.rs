//! Macros for implementing the Signature trait.

/// Implements the Signature trait for one callable shape.
///
/// Every shape reduces to the same canonical items, so this is the only place they are spelled
/// out. The generics in brackets are the impl's generics, the type after them is the shape and
/// the trailing part names its arguments and return type.
///
/// # Examples
///
/// ```ignore
/// impl_signature!([R, A0] fn(A0) -> R; (A0) -> R);
/// impl_signature!([C: ?Sized, R] Method<fn(&C) -> R>; () -> R);
/// ```
macro_rules! impl_signature {
    ([$($generics:tt)*] $shape:ty; ($($A:ident),*) -> $R:ident) => {
        impl<$($generics)*> $crate::Signature for $shape {
            const ARITY: usize = <($($A,)*) as $crate::Arguments>::COUNT;

            type Output = $R;
            type Args = ($($A,)*);
            type Pointer = fn($($A),*) -> $R;
            type Boxed = alloc::boxed::Box<dyn Fn($($A),*) -> $R>;
        }
    };
}

/// Implements the Signature trait for a type forwarding to the signature it points at.
///
/// # Examples
///
/// ```ignore
/// impl_forwarding!(&S);
/// impl_forwarding!(Box<S>);
/// ```
macro_rules! impl_forwarding {
    ($($wrapper:ty),+ $(,)?) => {
        $(
            impl<S: $crate::Signature + ?Sized> $crate::Signature for $wrapper {
                const ARITY: usize = S::ARITY;

                type Output = S::Output;
                type Args = S::Args;
                type Pointer = S::Pointer;
                type Boxed = S::Boxed;
            }
        )+
    };
}
