//! Runtime description of a signature.

use alloc::vec::Vec;
use core::{any::type_name, fmt};

use serde::Serialize;

use crate::{Error, Result};

/// The runtime description of a signature.
///
/// Obtained from [`Signature::info`](crate::Signature::info) for a callable type, or from
/// [`signature_of`](crate::signature_of) for a callable value. Types are described by their
/// [`type_name`], so descriptions are meant for diagnostics and for comparing signatures within
/// one build: the exact names are not stable across compiler versions.
///
/// # Examples
///
/// ```
/// use callsig_core::Signature;
///
/// let info = <fn(u8, &'static str) -> bool as Signature>::info();
///
/// assert_eq!(info.arity(), 2);
/// assert_eq!(info.to_string(), "fn(u8, &str) -> bool");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureInfo {
    /// The return type.
    output: &'static str,
    /// The argument types.
    args: Vec<&'static str>,
}

impl SignatureInfo {
    /// Creates a new signature description with the given return and argument types.
    pub fn new(output: &'static str, args: Vec<&'static str>) -> Self {
        Self { output, args }
    }

    /// The name of the return type.
    pub fn output(&self) -> &'static str {
        self.output
    }

    /// Returns an iterator over the names of the argument types.
    pub fn args(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.args.iter().copied()
    }

    /// The number of arguments.
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// The name of the argument type at `index`.
    pub fn arg(&self, index: usize) -> Result<&'static str> {
        self.args
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                arity: self.arity(),
            })
    }

    /// Returns true if the signature takes no arguments.
    pub fn has_no_args(&self) -> bool {
        self.args.is_empty()
    }

    /// Returns true if the return type is `()`.
    pub fn returns_unit(&self) -> bool {
        self.output == type_name::<()>()
    }

    /// Checks that this signature is the `expected` one.
    ///
    /// The arity is compared first, then each argument in order and the return type last. The
    /// first difference is returned as the error.
    pub fn ensure_matches(&self, expected: &SignatureInfo) -> Result<()> {
        match self.mismatch(expected) {
            Some(err) => {
                debug!("Signature mismatch: {}", err);

                Err(err)
            }
            None => Ok(()),
        }
    }

    fn mismatch(&self, expected: &SignatureInfo) -> Option<Error> {
        if self.arity() != expected.arity() {
            return Some(Error::ArityMismatch {
                expected: expected.arity(),
                found: self.arity(),
            });
        }

        let differing = self
            .args()
            .zip(expected.args())
            .enumerate()
            .find(|(_, (found, wanted))| found != wanted);
        if let Some((index, (found, wanted))) = differing {
            return Some(Error::ArgumentMismatch {
                index,
                expected: wanted,
                found,
            });
        }

        (self.output != expected.output).then_some(Error::OutputMismatch {
            expected: expected.output,
            found: self.output,
        })
    }
}

impl fmt::Display for SignatureInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn(")?;
        let mut first = true;
        for arg in self.args() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{arg}")?;
        }
        write!(f, ")")?;

        if !self.returns_unit() {
            write!(f, " -> {}", self.output)?;
        }

        Ok(())
    }
}

impl Serialize for SignatureInfo {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
