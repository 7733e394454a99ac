//! The capability traits every integer in this crate opts into.
//!
//! [`Integer`] is the contract shared by all integer families, fixed-width or
//! not. [`Element`] adds a fixed bit width and the limb-level primitives the
//! composites in [`crate::composite`] are written against. [`UnsignedElement`]
//! additionally provides the 2-limb-by-1-limb division primitive.

use core::{
    fmt::Debug,
    hash::Hash,
    ops::{BitAnd, BitOr, BitXor, Not},
};

use rand_core::RngCore;
use zeroize::Zeroize;

use crate::{Digit, Division, Divisor, Doublet, Fallible, Guarantee, Shift};

mod native;

/// Which bits [`Element::count`] looks at.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BitSelection {
    /// Every bit.
    All,
    /// The run starting at the least significant bit.
    Ascending,
    /// The run starting at the most significant bit.
    Descending,
}

/// Arithmetic shared by all integers: overflow is reported, never trapped.
pub trait Integer:
    Sized
    + Clone
    + Debug
    + Eq
    + Ord
    + Hash
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
{
    const IS_SIGNED: bool;

    fn zero() -> Self;
    fn one() -> Self;

    fn is_zero(&self) -> bool;
    fn is_negative(&self) -> bool;

    /// Only unsigned arbitrary-precision integers can be infinite.
    fn is_infinite(&self) -> bool {
        false
    }

    fn plus(&self, increment: &Self) -> Fallible<Self>;
    fn minus(&self, decrement: &Self) -> Fallible<Self>;
    fn times(&self, multiplier: &Self) -> Fallible<Self>;
    fn negated(&self) -> Fallible<Self>;

    /// Truncating division: the quotient rounds towards zero and the remainder
    /// takes the sign of the dividend.
    fn division(&self, divisor: &Divisor<Self>) -> Fallible<Division<Self, Self>>;

    fn quotient(&self, divisor: &Divisor<Self>) -> Fallible<Self> {
        self.division(divisor).map(|division| division.quotient)
    }

    /// The remainder is always representable.
    fn remainder(&self, divisor: &Divisor<Self>) -> Self {
        self.division(divisor).value.remainder
    }

    /// Division by an unvalidated divisor.
    ///
    /// Division by zero is flagged, with quotient zero and the dividend as remainder.
    fn divided_by(&self, divisor: &Self) -> Fallible<Division<Self, Self>> {
        match Divisor::exactly_ref(divisor) {
            Some(divisor) => self.division(divisor),
            None => Fallible::failure(Division::new(Self::zero(), self.clone())),
        }
    }
}

/// A fixed-width two's complement integer: the limb of every composite.
pub trait Element: Integer + Copy + Default + Zeroize {
    /// The unsigned type with the same bit width.
    type Magnitude: UnsignedElement;

    const BITS: u32;
    const MIN: Self;
    const MAX: Self;

    fn from_magnitude_bits(bits: Self::Magnitude) -> Self;
    fn to_magnitude_bits(self) -> Self::Magnitude;

    /// `self + increment + carry`; the flag is this type's own overflow:
    /// the carry out for unsigned types, signed overflow for signed ones.
    fn plus_with_carry(self, increment: Self, carry: bool) -> Fallible<Self>;

    /// `self - decrement - borrow`, flagged like [`Element::plus_with_carry`].
    fn minus_with_borrow(self, decrement: Self, borrow: bool) -> Fallible<Self>;

    /// Exact, widening product.
    fn multiplication(self, multiplier: Self) -> Doublet<Self>;

    /// Shift by `distance % BITS`.
    fn shl_masked(self, distance: u32) -> Self;

    /// Shift by `distance % BITS`, arithmetic for signed types.
    fn shr_masked(self, distance: u32) -> Self;

    fn count(self, bit: bool, selection: BitSelection) -> u32;

    /// The `index`-th little-endian [`Digit`] of the sign-extended value.
    fn word_at(self, index: usize) -> Digit;

    /// Builds a value from little-endian digits, dropping whatever does not fit.
    fn assemble<F: FnMut(usize) -> Digit>(word: F) -> Self;

    fn repeating(bit: bool) -> Self {
        if bit {
            !Self::zero()
        } else {
            Self::zero()
        }
    }

    fn magnitude(self) -> Self::Magnitude {
        let bits = self.to_magnitude_bits();
        if self.is_negative() {
            bits.negated().value
        } else {
            bits
        }
    }

    /// Applies a sign to a magnitude, flagging results that do not fit.
    fn from_sign_magnitude(negative: bool, magnitude: Self::Magnitude) -> Fallible<Self> {
        let bits = if negative { magnitude.negated().value } else { magnitude };
        let value = Self::from_magnitude_bits(bits);
        let error = !magnitude.is_zero()
            && if Self::IS_SIGNED {
                value.is_negative() != negative
            } else {
                negative
            };
        Fallible::new(value, error)
    }

    fn leading_zeros(self) -> u32 {
        self.count(false, BitSelection::Descending)
    }

    fn trailing_zeros(self) -> u32 {
        self.count(false, BitSelection::Ascending)
    }

    fn count_ones(self) -> u32 {
        self.count(true, BitSelection::All)
    }

    fn shifted_left(self, distance: Shift<Self>) -> Self {
        self.shl_masked(*distance.value())
    }

    fn shifted_right(self, distance: Shift<Self>) -> Self {
        self.shr_masked(*distance.value())
    }

    /// Left shift by any distance. Negative distances shift right, and
    /// distances of `BITS` or more leave nothing but zeros.
    fn shl_smart(self, distance: isize) -> Self {
        match u32::try_from(distance.unsigned_abs()) {
            Ok(bits) if bits < Self::BITS => {
                if distance >= 0 {
                    self.shl_masked(bits)
                } else {
                    self.shr_masked(bits)
                }
            }
            _ => {
                if distance >= 0 {
                    Self::zero()
                } else {
                    Self::repeating(self.is_negative())
                }
            }
        }
    }

    /// Right shift by any distance. Negative distances shift left, and
    /// distances of `BITS` or more leave nothing but the sign.
    fn shr_smart(self, distance: isize) -> Self {
        match u32::try_from(distance.unsigned_abs()) {
            Ok(bits) if bits < Self::BITS => {
                if distance >= 0 {
                    self.shr_masked(bits)
                } else {
                    self.shl_masked(bits)
                }
            }
            _ => {
                if distance >= 0 {
                    Self::repeating(self.is_negative())
                } else {
                    Self::zero()
                }
            }
        }
    }

    /// Divides a double-width dividend, flagging quotients that do not fit.
    fn division_full_width(dividend: Doublet<Self>, divisor: Divisor<Self>) -> Fallible<Division<Self, Self>> {
        let divisor = *divisor.value();
        let dividend_is_negative = dividend.is_negative();
        let divisor_is_negative = divisor.is_negative();

        let divisor = Divisor::new_unchecked(divisor.magnitude());
        let mut error = false;
        let division = Self::Magnitude::division_2by1(dividend.magnitude(), divisor).sink(&mut error);

        let quotient = Self::from_sign_magnitude(dividend_is_negative != divisor_is_negative, division.quotient)
            .sink(&mut error);
        let remainder = Self::from_sign_magnitude(dividend_is_negative, division.remainder).value;
        Fallible::new(Division::new(quotient, remainder), error)
    }

    /// Reinterprets the low bits of any element.
    fn truncating_from<T: Element>(source: T) -> Self {
        Self::assemble(|index| source.word_at(index))
    }

    fn exactly_from<T: Element>(source: T) -> Fallible<Self> {
        let value = Self::truncating_from(source);
        let error = T::truncating_from(value) != source || value.is_negative() != source.is_negative();
        Fallible::new(value, error)
    }

    /// Uniformly random bits.
    fn entropic<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::assemble(|_| rng.next_u64() as Digit)
    }
}

/// An [`Element`] that is its own magnitude.
pub trait UnsignedElement: Element<Magnitude = Self> {
    /// Divides `dividend` by `divisor`.
    ///
    /// The quotient is flagged (and truncated) when it does not fit, i.e. when
    /// `dividend.high >= divisor`. The remainder is always exact.
    fn division_2by1(dividend: Doublet<Self>, divisor: Divisor<Self>) -> Fallible<Division<Self, Self>>;
}
