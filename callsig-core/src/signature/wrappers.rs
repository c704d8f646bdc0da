//! Signature implementations for wrapper types.
//!
//! References and smart pointers resolve to the signature of what they point at. This makes
//! `&fn(u8)` resolve like `fn(u8)`, and `Box<dyn Fn(u8)>`, the boxed form every callable can be
//! converted into, resolve like `dyn Fn(u8)`.

use alloc::{boxed::Box, rc::Rc, sync::Arc};

impl_forwarding!(&S, &mut S, Box<S>, Rc<S>, Arc<S>);
