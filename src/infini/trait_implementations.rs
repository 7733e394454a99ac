//! Operator traits, conversions and the operations of non-negative finite values.

use alloc::vec::Vec;
use core::ops::{Add, Div, Mul, Neg, Rem, Shl, Shr, Sub};

use crate::{Digit, Divisor, Finite, Guarantee, InfiniInt, Integer, Natural, IXL, UXL};

/// `$function(&lhs, &rhs)`, for all owned/borrowed combinations of operands.
macro_rules! trapping {
    ($($trait:ident, $method:ident, $function:ident;)*) => {$(
        impl<const SIGNED: bool> $trait for InfiniInt<SIGNED> {
            type Output = Self;
            #[track_caller]
            fn $method(self, other: Self) -> Self {
                $function(&self, &other)
            }
        }

        impl<'a, const SIGNED: bool> $trait<&'a InfiniInt<SIGNED>> for InfiniInt<SIGNED> {
            type Output = Self;
            #[track_caller]
            fn $method(self, other: &'a Self) -> Self {
                $function(&self, other)
            }
        }

        impl<'a, const SIGNED: bool> $trait<InfiniInt<SIGNED>> for &'a InfiniInt<SIGNED> {
            type Output = InfiniInt<SIGNED>;
            #[track_caller]
            fn $method(self, other: InfiniInt<SIGNED>) -> InfiniInt<SIGNED> {
                $function(self, &other)
            }
        }

        impl<'a, const SIGNED: bool> $trait<&'a InfiniInt<SIGNED>> for &'a InfiniInt<SIGNED> {
            type Output = InfiniInt<SIGNED>;
            #[track_caller]
            fn $method(self, other: Self) -> InfiniInt<SIGNED> {
                $function(self, other)
            }
        }
    )*};
}

trapping! {
    Add, add, add;
    Sub, sub, subtract;
    Mul, mul, multiply;
    Div, div, divide;
    Rem, rem, remainder;
}

#[track_caller]
fn add<const SIGNED: bool>(lhs: &InfiniInt<SIGNED>, rhs: &InfiniInt<SIGNED>) -> InfiniInt<SIGNED> {
    lhs.plus(rhs).expect("attempt to add with overflow")
}

#[track_caller]
fn subtract<const SIGNED: bool>(lhs: &InfiniInt<SIGNED>, rhs: &InfiniInt<SIGNED>) -> InfiniInt<SIGNED> {
    lhs.minus(rhs).expect("attempt to subtract with overflow")
}

#[track_caller]
fn multiply<const SIGNED: bool>(lhs: &InfiniInt<SIGNED>, rhs: &InfiniInt<SIGNED>) -> InfiniInt<SIGNED> {
    lhs.times(rhs).expect("attempt to multiply with overflow")
}

#[track_caller]
fn divide<const SIGNED: bool>(lhs: &InfiniInt<SIGNED>, rhs: &InfiniInt<SIGNED>) -> InfiniInt<SIGNED> {
    match Divisor::exactly_ref(rhs) {
        Some(divisor) => lhs.quotient(divisor).expect("attempt to divide with overflow"),
        None => panic!("attempt to divide by zero"),
    }
}

#[track_caller]
fn remainder<const SIGNED: bool>(lhs: &InfiniInt<SIGNED>, rhs: &InfiniInt<SIGNED>) -> InfiniInt<SIGNED> {
    match Divisor::exactly_ref(rhs) {
        Some(divisor) => lhs
            .division(divisor)
            .map(|division| division.remainder)
            .expect("attempt to calculate the remainder with overflow"),
        None => panic!("attempt to calculate the remainder with a divisor of zero"),
    }
}

impl<const SIGNED: bool> Neg for InfiniInt<SIGNED> {
    type Output = Self;
    #[track_caller]
    fn neg(self) -> Self {
        self.negated().expect("attempt to negate with overflow")
    }
}

impl<const SIGNED: bool> Shl<usize> for InfiniInt<SIGNED> {
    type Output = Self;
    fn shl(self, distance: usize) -> Self {
        InfiniInt::shl(&self, distance)
    }
}

impl<const SIGNED: bool> Shr<usize> for InfiniInt<SIGNED> {
    type Output = Self;
    fn shr(self, distance: usize) -> Self {
        InfiniInt::shr(&self, distance)
    }
}

macro_rules! from_unsigned {
    ($($type:ty),*) => {$(
        impl<const SIGNED: bool> From<$type> for InfiniInt<SIGNED> {
            fn from(source: $type) -> Self {
                Self::from_element(source).value
            }
        }
    )*};
}

macro_rules! from_signed {
    ($($type:ty),*) => {$(
        impl From<$type> for IXL {
            fn from(source: $type) -> Self {
                Self::from_element(source).value
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, u64);
from_signed!(i8, i16, i32, i64);

impl<const SIGNED: bool> InfiniInt<SIGNED> {
    /// Big-endian bytes without leading zeros, for values with appendix zero.
    fn natural_be_bytes(&self) -> Vec<u8> {
        debug_assert!(!self.appendix);
        let bytes = self.body.iter().rev().flat_map(|word| word.to_be_bytes());
        bytes.skip_while(|byte| *byte == 0).collect()
    }
}

/// Word primitives of values with appendix zero, for radix conversions and the like.
macro_rules! natural_operations {
    ($($guarantee:ident<$type:ty>),*) => {$(
        impl $guarantee<$type> {
            /// Number of significant bits.
            pub fn bit_width(&self) -> usize {
                self.0.natural_bit_width()
            }

            pub fn count_ones(&self) -> usize {
                self.0.body.iter().map(|word| word.count_ones() as usize).sum()
            }

            /// `self = self * multiplier + addend`.
            pub fn multiply_add_assign_word(&mut self, multiplier: Digit, addend: Digit) {
                self.0.multiply_add_word(multiplier, addend);
            }

            /// `self /= divisor`, returning the remainder.
            pub fn divide_assign_word(&mut self, divisor: Divisor<Digit>) -> Digit {
                self.0.divide_word(divisor)
            }

            /// Big-endian bytes without leading zeros; zero has none.
            pub fn to_be_bytes(&self) -> Vec<u8> {
                self.0.natural_be_bytes()
            }
        }
    )*};
}

natural_operations!(Natural<IXL>, Finite<UXL>);

impl Natural<IXL> {
    /// The same value, unsigned.
    pub fn magnitude(&self) -> Finite<UXL> {
        Finite::new_unchecked(UXL::from_words(self.0.body.clone(), false))
    }
}

impl From<Finite<UXL>> for Natural<IXL> {
    fn from(finite: Finite<UXL>) -> Self {
        Natural::new_unchecked(IXL::from_words(finite.into_value().body, false))
    }
}
