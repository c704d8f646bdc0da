//! Top-level reference stripping.

use alloc::{
    borrow::{Cow, ToOwned},
    boxed::Box,
    collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque},
    rc::Rc,
    string::String,
    sync::Arc,
    vec::Vec,
};
use core::{
    cell::{Cell, RefCell},
    marker::PhantomData,
    pin::Pin,
    ptr::NonNull,
};

/// A type with its top-level reference removed.
///
/// `&T` and `&mut T` decay to `T`, every other type decays to itself. Only the outermost layer
/// is removed:
///
/// - `&&u8` decays to `&u8`.
/// - `Vec<&u8>` and `Option<&u8>` decay to themselves.
/// - `*const u8` decays to itself: raw pointers are values, their pointees are left alone.
///
/// References to unsized types (`&str`, `&[u8]`, `&dyn Trait`) have no by-value form and
/// therefore no implementation.
///
/// # Usage
///
/// For custom types, use the `Decay` derive macro:
///
/// ```ignore
/// use callsig::Decay;
///
/// #[derive(Decay)]
/// struct Request {
///     id: u64,
/// }
/// ```
///
/// or the [`impl_decay!`](crate::impl_decay) macro for types from other crates.
pub trait Decay {
    /// The decayed type.
    type Decayed;
}

impl<T> Decay for &T {
    type Decayed = T;
}

impl<T> Decay for &mut T {
    type Decayed = T;
}

/// Implements [`Decay`] as the identity for one or more non-generic types.
///
/// # Examples
///
/// ```
/// use callsig_core::{impl_decay, Decay};
///
/// struct Celsius(f32);
/// struct Fahrenheit(f32);
///
/// impl_decay!(Celsius, Fahrenheit);
///
/// let _: <&Celsius as Decay>::Decayed = Celsius(21.5);
/// ```
#[macro_export]
macro_rules! impl_decay {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Decay for $ty {
                type Decayed = Self;
            }
        )+
    };
}

// Primitive types.
impl_decay!(bool, char);
impl_decay!(i8, i16, i32, i64, i128, isize);
impl_decay!(u8, u16, u32, u64, u128, usize);
impl_decay!(f32, f64);

// Owned std types.
impl_decay!(String, core::time::Duration, core::cmp::Ordering);
impl_decay!(
    core::num::NonZeroU8,
    core::num::NonZeroU16,
    core::num::NonZeroU32,
    core::num::NonZeroU64,
    core::num::NonZeroU128,
    core::num::NonZeroUsize,
    core::num::NonZeroI8,
    core::num::NonZeroI16,
    core::num::NonZeroI32,
    core::num::NonZeroI64,
    core::num::NonZeroI128,
    core::num::NonZeroIsize,
);
impl_decay!(
    core::net::IpAddr,
    core::net::Ipv4Addr,
    core::net::Ipv6Addr,
    core::net::SocketAddr,
    core::net::SocketAddrV4,
    core::net::SocketAddrV6,
    core::ops::RangeFull,
);

#[cfg(feature = "std")]
impl_decay!(
    std::path::PathBuf,
    std::ffi::OsString,
    std::time::Instant,
    std::time::SystemTime,
);

// Implements `Decay` as the identity for generic types. The bounds in brackets apply to the
// type's parameters.
macro_rules! impl_generic_decay {
    ($([$($bounds:tt)*] $ty:ty;)+) => {
        $(
            impl<$($bounds)*> Decay for $ty {
                type Decayed = Self;
            }
        )+
    };
}

// Sum types and collections.
impl_generic_decay! {
    [T] Option<T>;
    [T, E] core::result::Result<T, E>;
    [T] Vec<T>;
    [T] VecDeque<T>;
    [T] LinkedList<T>;
    [T] BinaryHeap<T>;
    [T] BTreeSet<T>;
    [K, V] BTreeMap<K, V>;
    [T, const N: usize] [T; N];
    [T] core::ops::Range<T>;
    [T] core::ops::RangeInclusive<T>;
    [T] core::ops::RangeFrom<T>;
    [T] core::ops::RangeTo<T>;
    [T] core::ops::RangeToInclusive<T>;
}

#[cfg(feature = "std")]
impl_generic_decay! {
    [T, S] std::collections::HashSet<T, S>;
    [K, V, S] std::collections::HashMap<K, V, S>;
    [T] std::sync::Mutex<T>;
    [T] std::sync::RwLock<T>;
}

// Owning pointers, cells and markers. These are values in their own right, so they are kept as
// they are even when they point at a reference.
impl_generic_decay! {
    [T: ?Sized] Box<T>;
    [T: ?Sized] Rc<T>;
    [T: ?Sized] Arc<T>;
    [T] Cell<T>;
    [T] RefCell<T>;
    [T: ?Sized] PhantomData<T>;
    [P] Pin<P>;
    ['a, B: ?Sized + ToOwned] Cow<'a, B>;
}

// Raw pointers.
impl_generic_decay! {
    [T: ?Sized] *const T;
    [T: ?Sized] *mut T;
    [T: ?Sized] NonNull<T>;
}

// Tuples and function pointers.
macro_rules! impl_structural_decay {
    ($($idx:tt $A:ident $a:ident),*) => {
        impl<$($A),*> Decay for ($($A,)*) {
            type Decayed = Self;
        }

        impl<R, $($A),*> Decay for fn($($A),*) -> R {
            type Decayed = Self;
        }

        impl<R, $($A),*> Decay for unsafe fn($($A),*) -> R {
            type Decayed = Self;
        }

        impl<R, $($A),*> Decay for extern "C" fn($($A),*) -> R {
            type Decayed = Self;
        }

        impl<R, $($A),*> Decay for unsafe extern "C" fn($($A),*) -> R {
            type Decayed = Self;
        }
    };
}

for_each_arity!(impl_structural_decay);
