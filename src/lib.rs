#![cfg_attr(not(test), no_std)]
//! Two's complement integers of fixed, recursively doubled and arbitrary width.
//!
//! - [`Element`]s are fixed-width integers: the native ones, and [`DoubleInt`]s
//!   built from two halves of a narrower element.
//! - [`Doublet`] and [`Triplet`] are the 2-limb and 3-limb composites the
//!   double-width arithmetic is written in terms of.
//! - [`InfiniInt`] is arbitrary-precision: a body of [`Digit`]s followed by an
//!   infinite repetition of one appendix bit.
//! - Arithmetic never traps on overflow. It returns a [`Fallible`]: the wrapped
//!   value and a flag. The operator traits (`+`, `*`, ...) do trap.
//! - Preconditions live in the types: a [`Divisor`] is nonzero, a [`Shift`] is
//!   in range, and so on (see [`Guarantee`]).

extern crate alloc;

mod composite;
pub use composite::{Doublet, Triplet};
mod digit;
pub use digit::Digit;
mod double;
pub use double::{DoubleInt, I128, I256, I512, U128, U256, U512};
mod error;
pub use error::{Error, Result};
mod fallible;
pub use fallible::{Division, Fallible};
mod guarantee;
pub use guarantee::{Divisor, Finite, Guarantee, Natural, Nonzero, Shift};
mod infini;
pub use infini::{InfiniInt, IXL, UXL};
mod integer;
pub use integer::{BitSelection, Element, Integer, UnsignedElement};
