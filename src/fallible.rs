//! Result shapes of the arithmetic core.
//!
//! Every primitive produces a value, even when the ideal result is not
//! representable. The value is then the wrapped (truncated) result and
//! the accompanying flag is raised.

use crate::{Error, Result};

/// A value together with an overflow flag.
#[must_use]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Fallible<T> {
    pub value: T,
    pub error: bool,
}

impl<T> Fallible<T> {
    #[inline]
    pub const fn new(value: T, error: bool) -> Self {
        Self { value, error }
    }

    #[inline]
    pub const fn success(value: T) -> Self {
        Self::new(value, false)
    }

    #[inline]
    pub const fn failure(value: T) -> Self {
        Self::new(value, true)
    }

    /// Raises the flag if `error` is set; never lowers it.
    #[inline]
    pub fn veto(mut self, error: bool) -> Self {
        self.error |= error;
        self
    }

    /// Moves the flag into `error` (OR-ing) and returns the value.
    #[inline]
    pub fn sink(self, error: &mut bool) -> T {
        *error |= self.error;
        self.value
    }

    /// Hands the flag on to the next step of a carry chain, replacing `carry`.
    #[inline]
    pub fn relay(self, carry: &mut bool) -> T {
        *carry = self.error;
        self.value
    }

    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fallible<U> {
        Fallible::new(f(self.value), self.error)
    }

    /// Chains a second fallible computation, accumulating the flag.
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Fallible<U>) -> Fallible<U> {
        f(self.value).veto(self.error)
    }

    #[inline]
    pub fn components(self) -> (T, bool) {
        (self.value, self.error)
    }

    /// The value, if no error occurred.
    #[inline]
    pub fn optional(self) -> Option<T> {
        (!self.error).then_some(self.value)
    }

    #[inline]
    pub fn result(self) -> Result<T> {
        self.optional().ok_or(Error)
    }

    /// Traps on error.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect("arithmetic overflow")
    }

    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        if self.error {
            panic!("{}", message);
        }
        self.value
    }
}

impl<T> From<T> for Fallible<T> {
    fn from(value: T) -> Self {
        Self::success(value)
    }
}

/// Quotient and remainder.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Division<Q, R> {
    pub quotient: Q,
    pub remainder: R,
}

impl<Q, R> Division<Q, R> {
    #[inline]
    pub const fn new(quotient: Q, remainder: R) -> Self {
        Self { quotient, remainder }
    }

    #[inline]
    pub fn components(self) -> (Q, R) {
        (self.quotient, self.remainder)
    }

    #[inline]
    pub fn map<P, S>(self, quotient: impl FnOnce(Q) -> P, remainder: impl FnOnce(R) -> S) -> Division<P, S> {
        Division::new(quotient(self.quotient), remainder(self.remainder))
    }
}
