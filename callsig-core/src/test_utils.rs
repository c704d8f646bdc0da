//! Compile-time type assertions for tests.

/// Implemented only when `Self` and `T` are the same type.
pub(crate) trait SameType<T: ?Sized> {}

impl<T: ?Sized> SameType<T> for T {}

/// Fails to compile unless `A` and `B` are the same type.
pub(crate) fn assert_same_type<A, B>()
where
    A: ?Sized + SameType<B>,
    B: ?Sized,
{
}
