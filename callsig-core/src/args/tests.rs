//! Tests for argument list traits.

use super::*;
use crate::test_utils::assert_same_type;
use alloc::{boxed::Box, string::String, vec::Vec};

#[test]
fn argument_count() {
    assert_eq!(<() as Arguments>::COUNT, 0);
    assert_eq!(<(u8,) as Arguments>::COUNT, 1);
    assert_eq!(<(u8, &str, f64) as Arguments>::COUNT, 3);
    assert_eq!(
        <(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8) as Arguments>::COUNT,
        12
    );
}

#[test]
fn type_names() {
    assert!(<() as Arguments>::type_names().is_empty());
    assert_eq!(
        <(bool, i32, f64) as Arguments>::type_names(),
        ["bool", "i32", "f64"]
    );
}

#[test]
fn argument_by_index() {
    type List<'a> = (u8, &'a str, &'a mut Vec<u16>);

    assert_same_type::<<List<'static> as Arg<0>>::Type, u8>();
    assert_same_type::<<List<'static> as Arg<1>>::Type, &'static str>();
    assert_same_type::<<List<'static> as Arg<2>>::Type, &'static mut Vec<u16>>();
}

#[test]
fn last_index_of_largest_list() {
    type List = (u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, bool);

    assert_same_type::<<List as Arg<11>>::Type, bool>();
}

#[test]
fn decay_strips_top_level_references() {
    assert_same_type::<<&i32 as Decay>::Decayed, i32>();
    assert_same_type::<<&mut i32 as Decay>::Decayed, i32>();
    assert_same_type::<<i32 as Decay>::Decayed, i32>();
    assert_same_type::<<&String as Decay>::Decayed, String>();
}

#[test]
fn decay_is_shallow() {
    assert_same_type::<<&&i32 as Decay>::Decayed, &'static i32>();
    assert_same_type::<<Vec<&'static i32> as Decay>::Decayed, Vec<&'static i32>>();
    assert_same_type::<<Option<&'static mut u8> as Decay>::Decayed, Option<&'static mut u8>>();
    assert_same_type::<<*const i32 as Decay>::Decayed, *const i32>();
    assert_same_type::<<Box<str> as Decay>::Decayed, Box<str>>();
    assert_same_type::<<(&'static u8, u8) as Decay>::Decayed, (&'static u8, u8)>();
}

#[test]
fn decayed_argument_list() {
    type List<'a> = (&'a i32, &'a mut i32, i32);

    assert_same_type::<<List<'static> as DecayArgs>::Decayed, (i32, i32, i32)>();
    assert_same_type::<<() as DecayArgs>::Decayed, ()>();
    assert_same_type::<
        <(&'static Vec<&'static str>, Option<&'static u8>) as DecayArgs>::Decayed,
        (Vec<&'static str>, Option<&'static u8>),
    >();
}

#[test]
fn custom_type_decay() {
    struct Meters(#[allow(dead_code)] f64);
    crate::impl_decay!(Meters);

    assert_same_type::<<&Meters as Decay>::Decayed, Meters>();
    assert_same_type::<<(&'static Meters,) as DecayArgs>::Decayed, (Meters,)>();
}

#[test]
fn cells_and_locks_decay_to_themselves() {
    use core::cell::{Cell, RefCell};

    assert_same_type::<<&Cell<u8> as Decay>::Decayed, Cell<u8>>();
    assert_same_type::<<&RefCell<String> as Decay>::Decayed, RefCell<String>>();
    #[cfg(feature = "std")]
    {
        use std::sync::{Mutex, RwLock};

        assert_same_type::<<&Mutex<Vec<u8>> as Decay>::Decayed, Mutex<Vec<u8>>>();
        assert_same_type::<<&mut RwLock<u32> as Decay>::Decayed, RwLock<u32>>();
    }
}

#[test]
fn std_value_families_decay() {
    use core::{
        net::{Ipv4Addr, Ipv6Addr, SocketAddrV4, SocketAddrV6},
        num::{NonZeroI128, NonZeroI16, NonZeroI8, NonZeroIsize, NonZeroU128},
        ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive},
    };
    use crate::signature::DecayedArgs;

    type Numbers<'a> = fn(
        &'a NonZeroI8,
        NonZeroI16,
        &'a mut NonZeroI128,
        NonZeroU128,
        &'a NonZeroIsize,
    );
    assert_same_type::<
        DecayedArgs<Numbers<'static>>,
        (NonZeroI8, NonZeroI16, NonZeroI128, NonZeroU128, NonZeroIsize),
    >();

    type Addresses<'a> = fn(&'a Ipv4Addr, Ipv6Addr, &'a SocketAddrV4, SocketAddrV6);
    assert_same_type::<
        DecayedArgs<Addresses<'static>>,
        (Ipv4Addr, Ipv6Addr, SocketAddrV4, SocketAddrV6),
    >();

    type Ranges<'a> = fn(
        &'a Range<u8>,
        RangeInclusive<u8>,
        RangeFrom<usize>,
        &'a RangeTo<i32>,
        RangeToInclusive<i32>,
        RangeFull,
    );
    assert_same_type::<
        DecayedArgs<Ranges<'static>>,
        (
            Range<u8>,
            RangeInclusive<u8>,
            RangeFrom<usize>,
            RangeTo<i32>,
            RangeToInclusive<i32>,
            RangeFull,
        ),
    >();
}

#[test]
fn every_fn_pointer_kind_decays_to_itself() {
    use crate::signature::DecayedArgs;

    type Callbacks<'a> = fn(
        &'a fn(u8) -> u8,
        unsafe fn(u8),
        &'a extern "C" fn() -> i32,
        unsafe extern "C" fn(i32, i32),
    );
    assert_same_type::<
        DecayedArgs<Callbacks<'static>>,
        (
            fn(u8) -> u8,
            unsafe fn(u8),
            extern "C" fn() -> i32,
            unsafe extern "C" fn(i32, i32),
        ),
    >();
}
