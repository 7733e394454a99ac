use core::fmt;

/// There is but one – failure 🤪.
///
/// Arithmetic overflow is never reported through this type; see [`Fallible`][crate::Fallible].
/// It shows up where a [`Fallible`][crate::Fallible] or a guarantee is turned into a `Result`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("integer value out of range")
    }
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
