//! Recognition probing behind [`is_callable!`](crate::is_callable).
//!
//! Method resolution tries `&&Probe<T>` before `&Probe<T>`. The first step only finds
//! [`Recognized::is_callable`] when `T` has a signature, otherwise resolution falls through to
//! [`Unrecognized::is_callable`]. This only works when `T` is a concrete type at the call site.

use core::marker::PhantomData;

use crate::Signature;

/// Carries the probed type.
pub struct Probe<T: ?Sized>(PhantomData<T>);

impl<T: ?Sized> Probe<T> {
    /// Creates a probe for `T`.
    pub const fn new() -> Self {
        Probe(PhantomData)
    }
}

impl<T: ?Sized> core::fmt::Debug for Probe<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Probe<{}>", core::any::type_name::<T>())
    }
}

/// Resolves for types with a signature.
pub trait Recognized {
    /// Returns `true`.
    fn is_callable(&self) -> bool {
        true
    }
}

impl<T: Signature + ?Sized> Recognized for &Probe<T> {}

/// Resolves for every other type.
pub trait Unrecognized {
    /// Returns `false`.
    fn is_callable(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Unrecognized for Probe<T> {}

/// Checks whether a type is a recognized callable shape.
///
/// Unlike naming its [`Signature`](crate::Signature), this doesn't fail for unrecognized types
/// but evaluates to `false`. References and smart pointers to a recognized shape are recognized
/// too.
///
/// The type must be concrete: inside a generic function, where the type is a parameter, the
/// answer reflects the parameter's bounds rather than the type it is instantiated with.
///
/// # Examples
///
/// ```
/// use callsig_core::is_callable;
///
/// assert!(is_callable!(fn(u8) -> u8));
/// assert!(is_callable!(&Box<dyn Fn(u8) -> u8>));
/// assert!(!is_callable!(u8));
/// assert!(!is_callable!(String));
/// ```
#[macro_export]
macro_rules! is_callable {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::probe::{Recognized as _, Unrecognized as _};

        (&&$crate::probe::Probe::<$ty>::new()).is_callable()
    }};
}
