/// The Error type for the callsig crate.
///
/// Misuse of the type-level API (an unrecognized callable, an argument index past the arity, a
/// stateful closure converted into a function pointer) is rejected at compile time. These errors
/// come out of [`SignatureInfo`](crate::SignatureInfo), the runtime mirror of a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An argument index past the end of the argument list.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of arguments of the signature.
        arity: usize,
    },
    /// The signatures take a different number of arguments.
    ArityMismatch {
        /// The expected number of arguments.
        expected: usize,
        /// The actual number of arguments.
        found: usize,
    },
    /// An argument type differs.
    ArgumentMismatch {
        /// The index of the first differing argument.
        index: usize,
        /// The expected argument type.
        expected: &'static str,
        /// The actual argument type.
        found: &'static str,
    },
    /// The return types differ.
    OutputMismatch {
        /// The expected return type.
        expected: &'static str,
        /// The actual return type.
        found: &'static str,
    },
}

/// The Result type for the callsig crate.
pub type Result<T> = core::result::Result<T, Error>;

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::IndexOutOfRange { index, arity } => write!(
                f,
                "Argument index {index} is out of range for a signature with {arity} arguments"
            ),
            Error::ArityMismatch { expected, found } => {
                write!(f, "Expected {expected} arguments, found {found}")
            }
            Error::ArgumentMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "Argument {index} has type `{found}` but `{expected}` was expected"
            ),
            Error::OutputMismatch { expected, found } => {
                write!(f, "Return type is `{found}` but `{expected}` was expected")
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, fmt: defmt::Formatter<'_>) {
        match self {
            Error::IndexOutOfRange { index, arity } => defmt::write!(
                fmt,
                "Argument index {} is out of range for a signature with {} arguments",
                index,
                arity
            ),
            Error::ArityMismatch { expected, found } => {
                defmt::write!(fmt, "Expected {} arguments, found {}", expected, found)
            }
            Error::ArgumentMismatch {
                index,
                expected,
                found,
            } => defmt::write!(
                fmt,
                "Argument {} has type `{}` but `{}` was expected",
                index,
                found,
                expected
            ),
            Error::OutputMismatch { expected, found } => defmt::write!(
                fmt,
                "Return type is `{}` but `{}` was expected",
                found,
                expected
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display() {
        let err = Error::IndexOutOfRange { index: 3, arity: 2 };
        assert_eq!(
            err.to_string(),
            "Argument index 3 is out of range for a signature with 2 arguments"
        );

        let err = Error::ArgumentMismatch {
            index: 1,
            expected: "u8",
            found: "i64",
        };
        assert_eq!(
            err.to_string(),
            "Argument 1 has type `i64` but `u8` was expected"
        );

        let err = Error::OutputMismatch {
            expected: "bool",
            found: "()",
        };
        assert_eq!(err.to_string(), "Return type is `()` but `bool` was expected");
    }
}
