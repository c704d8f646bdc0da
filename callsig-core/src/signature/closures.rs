//! Signature implementations for function trait objects.
//!
//! `dyn Fn(A) -> R` is the closest Rust has to a bare function type: it names a signature
//! without naming any particular callable.

macro_rules! impl_fn_traits {
    (@object $Fn:ident; $($A:ident),*) => {
        impl_signature!(['a, R, $($A),*] dyn $Fn($($A),*) -> R + 'a; ($($A),*) -> R);
        impl_signature!(['a, R, $($A),*] dyn $Fn($($A),*) -> R + Send + 'a; ($($A),*) -> R);
        impl_signature!(
            ['a, R, $($A),*] dyn $Fn($($A),*) -> R + Send + Sync + 'a;
            ($($A),*) -> R
        );
    };
    ($($idx:tt $A:ident $a:ident),*) => {
        impl_fn_traits!(@object Fn; $($A),*);
        impl_fn_traits!(@object FnMut; $($A),*);
        impl_fn_traits!(@object FnOnce; $($A),*);
    };
}

for_each_arity!(impl_fn_traits);
