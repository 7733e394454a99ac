//! Operator traits. Unlike the [`Integer`] methods, these trap on overflow,
//! the way the native integers do in debug builds.

use core::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, Mul, MulAssign, Neg, Not, Rem, Shl, Shr, Sub, SubAssign,
};

#[cfg(feature = "ct-maybe")]
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::{Divisor, DoubleInt, Element, Guarantee, Integer};

impl<H: Element> Not for DoubleInt<H> {
    type Output = Self;
    fn not(self) -> Self {
        Self::from_halves(!self.low(), !self.high())
    }
}

macro_rules! bitwise {
    ($($trait:ident, $method:ident, $operator:tt;)*) => {$(
        impl<H: Element> $trait for DoubleInt<H> {
            type Output = Self;
            fn $method(self, other: Self) -> Self {
                Self::from_halves(self.low() $operator other.low(), self.high() $operator other.high())
            }
        }
    )*};
}

bitwise! {
    BitAnd, bitand, &;
    BitOr, bitor, |;
    BitXor, bitxor, ^;
}

macro_rules! trapping {
    ($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $fallible:ident, $message:literal;)*) => {$(
        impl<H: Element> $trait for DoubleInt<H> {
            type Output = Self;
            #[track_caller]
            fn $method(self, other: Self) -> Self {
                Integer::$fallible(&self, &other).expect($message)
            }
        }

        impl<H: Element> $assign_trait for DoubleInt<H> {
            #[track_caller]
            fn $assign_method(&mut self, other: Self) {
                *self = Integer::$fallible(self, &other).expect($message);
            }
        }
    )*};
}

trapping! {
    Add, add, AddAssign, add_assign, plus, "attempt to add with overflow";
    Sub, sub, SubAssign, sub_assign, minus, "attempt to subtract with overflow";
    Mul, mul, MulAssign, mul_assign, times, "attempt to multiply with overflow";
}

impl<H: Element> Div for DoubleInt<H> {
    type Output = Self;
    #[track_caller]
    fn div(self, divisor: Self) -> Self {
        match Divisor::exactly(divisor) {
            Some(divisor) => self.quotient(&divisor).expect("attempt to divide with overflow"),
            None => panic!("attempt to divide by zero"),
        }
    }
}

impl<H: Element> Rem for DoubleInt<H> {
    type Output = Self;
    #[track_caller]
    fn rem(self, divisor: Self) -> Self {
        match Divisor::exactly(divisor) {
            Some(divisor) => self
                .division(&divisor)
                .map(|division| division.remainder)
                .expect("attempt to calculate the remainder with overflow"),
            None => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl<H: Element> Neg for DoubleInt<H> {
    type Output = Self;
    #[track_caller]
    fn neg(self) -> Self {
        self.negated().expect("attempt to negate with overflow")
    }
}

/// Shifts by `BITS` or more shift out everything, no trap.
impl<H: Element> Shl<u32> for DoubleInt<H> {
    type Output = Self;
    fn shl(self, distance: u32) -> Self {
        if distance < Self::BITS {
            self.shl_masked(distance)
        } else {
            Self::zero()
        }
    }
}

/// Arithmetic for signed halves; shifts by `BITS` or more leave the sign.
impl<H: Element> Shr<u32> for DoubleInt<H> {
    type Output = Self;
    fn shr(self, distance: u32) -> Self {
        if distance < Self::BITS {
            self.shr_masked(distance)
        } else {
            Self::repeating(self.is_negative())
        }
    }
}

#[cfg(feature = "ct-maybe")]
impl<H> ConditionallySelectable for DoubleInt<H>
where
    H: Element + ConditionallySelectable,
    H::Magnitude: ConditionallySelectable,
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::from_halves(
            H::Magnitude::conditional_select(&a.low(), &b.low(), choice),
            H::conditional_select(&a.high(), &b.high(), choice),
        )
    }
}

#[cfg(feature = "ct-maybe")]
impl<H> ConstantTimeEq for DoubleInt<H>
where
    H: Element + ConstantTimeEq,
    H::Magnitude: ConstantTimeEq,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.low().ct_eq(&other.low()) & self.high().ct_eq(&other.high())
    }
}
