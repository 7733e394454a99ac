use crate::{BitSelection, Digit, Division, Divisor, Doublet, Element, Fallible, Guarantee, Integer, UnsignedElement};

macro_rules! native_element {
    ($($element:ty => $magnitude:ty, $wide:ty;)*) => {$(
        impl Integer for $element {
            const IS_SIGNED: bool = <$element>::MIN != 0;

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0
            }

            #[inline]
            #[allow(unused_comparisons)]
            fn is_negative(&self) -> bool {
                *self < 0
            }

            #[inline]
            fn plus(&self, increment: &Self) -> Fallible<Self> {
                let (sum, overflow) = self.overflowing_add(*increment);
                Fallible::new(sum, overflow)
            }

            #[inline]
            fn minus(&self, decrement: &Self) -> Fallible<Self> {
                let (difference, overflow) = self.overflowing_sub(*decrement);
                Fallible::new(difference, overflow)
            }

            #[inline]
            fn times(&self, multiplier: &Self) -> Fallible<Self> {
                let (product, overflow) = self.overflowing_mul(*multiplier);
                Fallible::new(product, overflow)
            }

            #[inline]
            fn negated(&self) -> Fallible<Self> {
                let (negation, overflow) = self.overflowing_neg();
                Fallible::new(negation, overflow)
            }

            #[inline]
            fn division(&self, divisor: &Divisor<Self>) -> Fallible<Division<Self, Self>> {
                let divisor = *divisor.value();
                let (quotient, overflow) = self.overflowing_div(divisor);
                Fallible::new(Division::new(quotient, self.wrapping_rem(divisor)), overflow)
            }
        }

        impl Element for $element {
            type Magnitude = $magnitude;

            const BITS: u32 = <$element>::BITS;
            const MIN: Self = <$element>::MIN;
            const MAX: Self = <$element>::MAX;

            #[inline]
            fn from_magnitude_bits(bits: $magnitude) -> Self {
                bits as Self
            }

            #[inline]
            fn to_magnitude_bits(self) -> $magnitude {
                self as $magnitude
            }

            #[inline]
            fn plus_with_carry(self, increment: Self, carry: bool) -> Fallible<Self> {
                let (partial, first) = self.overflowing_add(increment);
                let (sum, second) = partial.overflowing_add(carry as Self);
                Fallible::new(sum, first ^ second)
            }

            #[inline]
            fn minus_with_borrow(self, decrement: Self, borrow: bool) -> Fallible<Self> {
                let (partial, first) = self.overflowing_sub(decrement);
                let (difference, second) = partial.overflowing_sub(borrow as Self);
                Fallible::new(difference, first ^ second)
            }

            #[inline]
            fn multiplication(self, multiplier: Self) -> Doublet<Self> {
                let product = self as $wide * multiplier as $wide;
                Doublet::new(product as $magnitude, (product >> Self::BITS) as Self)
            }

            #[inline]
            fn shl_masked(self, distance: u32) -> Self {
                self.wrapping_shl(distance)
            }

            #[inline]
            fn shr_masked(self, distance: u32) -> Self {
                self.wrapping_shr(distance)
            }

            fn count(self, bit: bool, selection: BitSelection) -> u32 {
                match (bit, selection) {
                    (true, BitSelection::All) => self.count_ones(),
                    (false, BitSelection::All) => self.count_zeros(),
                    (true, BitSelection::Ascending) => self.trailing_ones(),
                    (false, BitSelection::Ascending) => self.trailing_zeros(),
                    (true, BitSelection::Descending) => self.leading_ones(),
                    (false, BitSelection::Descending) => self.leading_zeros(),
                }
            }

            #[inline]
            fn word_at(self, index: usize) -> Digit {
                let shift = index.saturating_mul(Digit::BITS as usize);
                if shift < Self::BITS as usize {
                    (self >> shift) as Digit
                } else {
                    Self::repeating(self.is_negative()) as Digit
                }
            }

            fn assemble<F: FnMut(usize) -> Digit>(mut word: F) -> Self {
                let mut value: Self = 0;
                let mut shift = 0;
                let mut index = 0;
                while shift < Self::BITS {
                    value |= (word(index) as Self).wrapping_shl(shift);
                    shift += Digit::BITS;
                    index += 1;
                }
                value
            }
        }
    )*};
}

native_element! {
    u8 => u8, u16;
    u16 => u16, u32;
    u32 => u32, u64;
    u64 => u64, u128;
    i8 => u8, i16;
    i16 => u16, i32;
    i32 => u32, i64;
    i64 => u64, i128;
}

macro_rules! native_unsigned_element {
    ($($element:ty => $wide:ty;)*) => {$(
        impl UnsignedElement for $element {
            fn division_2by1(dividend: Doublet<Self>, divisor: Divisor<Self>) -> Fallible<Division<Self, Self>> {
                let dividend = (dividend.high as $wide) << Self::BITS | dividend.low as $wide;
                let divisor = *divisor.value() as $wide;
                let quotient = dividend / divisor;
                let remainder = dividend % divisor;
                Fallible::new(
                    Division::new(quotient as Self, remainder as Self),
                    quotient > Self::MAX as $wide,
                )
            }
        }
    )*};
}

native_unsigned_element! {
    u8 => u16;
    u16 => u32;
    u32 => u64;
    u64 => u128;
}
