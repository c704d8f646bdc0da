//! Arity expansion shared by every impl family.
//!
//! `for_each_arity!(m)` invokes `m!` once per supported arity (0 to 12, the same range std
//! implements the `Fn*` traits for). Each argument position is passed as a triple of its index,
//! its type parameter and a value binding: `m!(0 A0 a0, 1 A1 a1)`.

macro_rules! for_each_arity {
    ($m:ident) => {
        $m!();
        $m!(0 A0 a0);
        $m!(0 A0 a0, 1 A1 a1);
        $m!(0 A0 a0, 1 A1 a1, 2 A2 a2);
        $m!(0 A0 a0, 1 A1 a1, 2 A2 a2, 3 A3 a3);
        $m!(0 A0 a0, 1 A1 a1, 2 A2 a2, 3 A3 a3, 4 A4 a4);
        $m!(0 A0 a0, 1 A1 a1, 2 A2 a2, 3 A3 a3, 4 A4 a4, 5 A5 a5);
        $m!(0 A0 a0, 1 A1 a1, 2 A2 a2, 3 A3 a3, 4 A4 a4, 5 A5 a5, 6 A6 a6);
        $m!(0 A0 a0, 1 A1 a1, 2 A2 a2, 3 A3 a3, 4 A4 a4, 5 A5 a5, 6 A6 a6, 7 A7 a7);
        $m!(0 A0 a0, 1 A1 a1, 2 A2 a2, 3 A3 a3, 4 A4 a4, 5 A5 a5, 6 A6 a6, 7 A7 a7, 8 A8 a8);
        $m!(
            0 A0 a0, 1 A1 a1, 2 A2 a2, 3 A3 a3, 4 A4 a4, 5 A5 a5, 6 A6 a6, 7 A7 a7, 8 A8 a8,
            9 A9 a9
        );
        $m!(
            0 A0 a0, 1 A1 a1, 2 A2 a2, 3 A3 a3, 4 A4 a4, 5 A5 a5, 6 A6 a6, 7 A7 a7, 8 A8 a8,
            9 A9 a9, 10 A10 a10
        );
        $m!(
            0 A0 a0, 1 A1 a1, 2 A2 a2, 3 A3 a3, 4 A4 a4, 5 A5 a5, 6 A6 a6, 7 A7 a7, 8 A8 a8,
            9 A9 a9, 10 A10 a10, 11 A11 a11
        );
    };
}

/// Expands to `1` for any single token tree. Used for counting repetitions.
macro_rules! one {
    ($t:tt) => {
        1
    };
}
