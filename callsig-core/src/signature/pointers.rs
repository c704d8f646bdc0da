//! Signature implementations for function pointers.
//!
//! Safety and ABI are part of a function pointer's type but not of its signature, so all four
//! combinations resolve alike.

macro_rules! impl_fn_pointers {
    ($($idx:tt $A:ident $a:ident),*) => {
        impl_signature!([R, $($A),*] fn($($A),*) -> R; ($($A),*) -> R);
        impl_signature!([R, $($A),*] unsafe fn($($A),*) -> R; ($($A),*) -> R);
        impl_signature!([R, $($A),*] extern "C" fn($($A),*) -> R; ($($A),*) -> R);
        impl_signature!([R, $($A),*] unsafe extern "C" fn($($A),*) -> R; ($($A),*) -> R);
    };
}

for_each_arity!(impl_fn_pointers);
