//! Signatures of callable values.
//!
//! Closures and function items have types that can't be written down, so their signature is
//! resolved from the value: [`Callable`] is implemented for everything implementing one of the
//! `Fn` traits and exposes the matching function pointer type as its
//! [`Signature`](Callable::Signature). It also converts the value into the two forms every
//! callable of a signature shares: a boxed function object and, for callables without captured
//! state, a plain function pointer.

use alloc::boxed::Box;
use core::{any::type_name, mem::size_of};

use crate::{Signature, SignatureInfo};

/// A callable value taking the arguments `Args`.
///
/// `Args` is the argument list as a tuple and is inferred from the callable, so closure
/// arguments need type annotations. A callable is resolved through its one call signature; a
/// type callable with several argument lists (a function pointer generic over a lifetime, say)
/// needs `Args` spelled out.
///
/// Functions and method paths are callables too. A method's receiver is its first argument:
///
/// ```
/// use callsig_core::signature_of;
///
/// struct Counter(u32);
///
/// impl Counter {
///     fn add(&mut self, by: u32) -> u32 {
///         self.0 += by;
///         self.0
///     }
/// }
///
/// assert_eq!(signature_of(&Counter::add).arity(), 2);
/// assert_eq!(signature_of(&|by: u32| by * 2).arity(), 1);
/// ```
pub trait Callable<Args>: Sized {
    /// The return type.
    type Output;

    /// The function pointer type with the signature of this callable.
    type Signature: Signature<Args = Args, Output = Self::Output>;

    /// Converts this callable into a boxed function object.
    ///
    /// The callable is moved into the box together with any state it captured.
    fn into_invocable(self) -> <Self::Signature as Signature>::Boxed
    where
        Self: 'static;

    /// Converts this callable into a plain function pointer.
    ///
    /// Only callables without captured state have a function pointer form. The check happens at
    /// compile time, so converting a closure that captures anything fails to build:
    ///
    /// ```compile_fail
    /// use callsig_core::Callable;
    ///
    /// let offset = 10_i32;
    /// let add_offset = move |x: i32| x + offset;
    /// let _ = add_offset.into_fn_pointer();
    /// ```
    ///
    /// Function pointer values are not zero-sized and are rejected the same way. They already are
    /// their own function pointer form, so use them as they are:
    ///
    /// ```
    /// use callsig_core::signature::Pointer;
    ///
    /// fn square(x: i32) -> i32 {
    ///     x * x
    /// }
    ///
    /// let value: fn(i32) -> i32 = square;
    /// let pointer: Pointer<fn(i32) -> i32> = value;
    /// assert_eq!(pointer(3), 9);
    /// ```
    ///
    /// The returned pointer is `'static` and recreates the callable on every call. Any lifetime
    /// carried by a zero-sized capture (a branded token such as `Id<'id>`, say) is not part of
    /// the pointer type and is therefore not enforced on it.
    fn into_fn_pointer(self) -> <Self::Signature as Signature>::Pointer
    where
        Self: Copy;
}

macro_rules! impl_callable {
    ($($idx:tt $A:ident $a:ident),*) => {
        impl<F, R, $($A),*> Callable<($($A,)*)> for F
        where
            F: Fn($($A),*) -> R,
        {
            type Output = R;
            type Signature = fn($($A),*) -> R;

            fn into_invocable(self) -> Box<dyn Fn($($A),*) -> R>
            where
                Self: 'static,
            {
                trace!("Boxing callable `{}`", type_name::<F>());

                Box::new(self)
            }

            fn into_fn_pointer(self) -> fn($($A),*) -> R
            where
                Self: Copy,
            {
                const {
                    assert!(
                        size_of::<F>() == 0,
                        "only callables without captured state convert to function pointers"
                    )
                };
                trace!("Converting callable `{}` to a function pointer", type_name::<F>());

                |$($a),*| {
                    // SAFETY: `F` is zero-sized and `Copy`, so any value of it is as good as the
                    // one passed to `into_fn_pointer`, and there is no drop to skip.
                    let callable: F = unsafe { core::mem::zeroed() };
                    callable($($a),*)
                }
            }
        }
    };
}

for_each_arity!(impl_callable);

/// Converts a callable into a boxed function object.
///
/// # Examples
///
/// ```
/// use callsig_core::to_invocable;
///
/// let greeting = String::from("hello");
/// let greet = to_invocable(move |name: &'static str| format!("{greeting} {name}"));
///
/// assert_eq!(greet("world"), "hello world");
/// ```
pub fn to_invocable<F, Args>(callable: F) -> <F::Signature as Signature>::Boxed
where
    F: Callable<Args> + 'static,
{
    callable.into_invocable()
}

/// Converts a callable without captured state into a plain function pointer.
///
/// # Examples
///
/// ```
/// use callsig_core::to_fn_pointer;
///
/// let double = to_fn_pointer(|x: i32| x * 2);
///
/// assert_eq!(double(21), 42);
/// ```
pub fn to_fn_pointer<F, Args>(callable: F) -> <F::Signature as Signature>::Pointer
where
    F: Callable<Args> + Copy,
{
    callable.into_fn_pointer()
}

/// The runtime description of a callable's signature.
pub fn signature_of<F, Args>(_callable: &F) -> SignatureInfo
where
    F: Callable<Args>,
{
    <F::Signature as Signature>::info()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{signature, test_utils::assert_same_type};
    use alloc::{rc::Rc, string::String, vec::Vec};
    use core::cell::Cell;

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    fn signature_type<F, Args>(_: &F) -> core::marker::PhantomData<F::Signature>
    where
        F: Callable<Args>,
    {
        core::marker::PhantomData
    }

    fn same_signature<S, T>(_: core::marker::PhantomData<T>)
    where
        T: crate::test_utils::SameType<S>,
    {
    }

    #[test]
    fn closure_resolves_to_its_call_signature() {
        let closure = |x: u8, y: &'static str| -> bool { x as usize == y.len() };

        same_signature::<fn(u8, &'static str) -> bool, _>(signature_type(&closure));
        let info = signature_of(&closure);
        assert_eq!(info.arity(), 2);
        assert_eq!(info.output(), "bool");
    }

    #[test]
    fn function_item_resolves_like_its_pointer() {
        same_signature::<fn(i32, i32) -> i32, _>(signature_type(&add));
        assert_eq!(
            signature_of(&add),
            <fn(i32, i32) -> i32 as Signature>::info()
        );
    }

    #[test]
    fn zero_arguments() {
        let info = signature_of(&|| 7_u64);
        assert_eq!(info.arity(), 0);
        assert_eq!(info.output(), "u64");
    }

    #[test]
    fn stateless_closure_to_fn_pointer() {
        let closure = |x: i32, y: i32| x * 10 + y;
        let pointer = closure.into_fn_pointer();

        for (x, y) in [(0, 0), (1, 2), (-4, 9)] {
            assert_eq!(pointer(x, y), closure(x, y));
        }
    }

    #[test]
    fn function_item_to_fn_pointer() {
        let pointer = to_fn_pointer(add);
        assert_eq!(pointer(2, 3), 5);

        assert_same_type::<signature::Pointer<fn(i32, i32) -> i32>, fn(i32, i32) -> i32>();
    }

    #[test]
    fn fn_pointer_value_is_its_own_pointer_form() {
        let value: fn(i32, i32) -> i32 = add;
        let pointer: signature::Pointer<fn(i32, i32) -> i32> = value;
        assert_eq!(pointer(4, 5), 9);

        // The boxed form accepts pointer values like any other callable.
        let boxed = to_invocable(value);
        assert_eq!(boxed(4, 5), 9);
    }

    #[test]
    fn stateful_closure_to_invocable() {
        let prefix = String::from("id-");
        let invocable = to_invocable(move |n: u32| {
            let mut out = prefix.clone();
            out.push_str(&n.to_string());
            out
        });

        assert_eq!(invocable(1), "id-1");
        assert_eq!(invocable(42), "id-42");
    }

    #[test]
    fn invocable_keeps_shared_state() {
        let calls = Rc::new(Cell::new(0_u32));
        let counter = {
            let calls = calls.clone();
            to_invocable(move || calls.set(calls.get() + 1))
        };

        counter();
        counter();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn invocables_of_one_signature_share_a_type() {
        let base = 100;
        let invocables: Vec<signature::Boxed<fn(i32) -> i32>> = alloc::vec![
            to_invocable(|x: i32| x + 1),
            to_invocable(move |x: i32| x + base),
            to_invocable(|x: i32| -x),
        ];
        let results: Vec<i32> = invocables.iter().map(|f| f(1)).collect();

        assert_eq!(results, [2, 101, -1]);
    }

    #[test]
    fn reference_arguments_are_inferred() {
        let len = |s: &str| s.len();
        let info = signature_of(&len);

        assert_eq!(info.arity(), 1);
        assert_eq!(info.arg(0), Ok("&str"));
        assert_eq!(info.output(), "usize");
    }
}
