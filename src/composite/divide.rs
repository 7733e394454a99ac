//! Long division on limbs, following Knuth (TAOCP 4.3.1, Algorithm D) with
//! the quotient digit estimated from three dividend and two divisor limbs.

use core::cmp::Ordering;

use crate::{Division, Divisor, Doublet, Element, Fallible, Guarantee, Integer, Triplet, UnsignedElement};

impl<U: UnsignedElement> Doublet<U> {
    /// Divides by a single limb; flagged iff `self.high >= divisor`.
    #[inline]
    pub fn division_2by1(self, divisor: U) -> Fallible<Division<U, U>> {
        U::division_2by1(self, Divisor::new_unchecked(divisor))
    }

    /// Divides by a nonzero doublet.
    pub fn division_2by2(self, divisor: Self) -> Division<Self, Self> {
        debug_assert!(!divisor.is_zero());
        match self.cmp(&divisor) {
            Ordering::Less => return Division::new(Self::zero(), self),
            Ordering::Equal => return Division::new(Self::one(), Self::zero()),
            Ordering::Greater => {}
        }

        if self.high.is_zero() {
            // then so is divisor.high
            let division = self.low.division(&Divisor::new_unchecked(divisor.low)).value;
            return Division::new(
                Self::new(division.quotient, U::zero()),
                Self::new(division.remainder, U::zero()),
            );
        }

        let shift = divisor.high.leading_zeros();
        if shift == U::BITS {
            let division = Triplet::new(self.low, self.high, U::zero()).division_3by1(divisor.low);
            debug_assert!(!division.error);
            let division = division.value;
            return Division::new(division.quotient, Self::new(division.remainder, U::zero()));
        }

        let division = self.shl_widening(shift).division_3by2(divisor.shl(shift));
        Division::new(Self::new(division.quotient, U::zero()), division.remainder.shr(shift))
    }

    /// Divides `high * 2^(2 BITS) + low` by a nonzero doublet.
    ///
    /// Requires `high < divisor`, so the quotient fits in a doublet.
    pub fn division_4by2(high: Self, low: Self, divisor: Self) -> Division<Self, Self> {
        debug_assert!(high < divisor);

        if divisor.high.is_zero() {
            // high < divisor, so high fits in its low limb
            let division = Triplet::new(low.low, low.high, high.low).division_3by1(divisor.low);
            debug_assert!(!division.error);
            let division = division.value;
            return Division::new(division.quotient, Self::new(division.remainder, U::zero()));
        }

        let shift = divisor.high.leading_zeros();
        let divisor = divisor.shl(shift);
        let low = low.shl_widening(shift);
        let high = high.shl(shift);
        let high = Self::new(high.low | low.high, high.high);

        let upper = Triplet::new(low.mid, high.low, high.high).division_3by2(divisor);
        let lower = Triplet::from_low_and_upper(low.low, upper.remainder).division_3by2(divisor);
        Division::new(Self::new(lower.quotient, upper.quotient), lower.remainder.shr(shift))
    }
}

impl<U: UnsignedElement> Triplet<U> {
    /// Divides by a single limb; flagged iff `self.high >= divisor`.
    pub fn division_3by1(self, divisor: U) -> Fallible<Division<Doublet<U>, U>> {
        let mut error = false;
        let upper = Doublet::new(self.mid, self.high).division_2by1(divisor).sink(&mut error);
        let lower = Doublet::new(self.low, upper.remainder).division_2by1(divisor).value;
        Fallible::new(
            Division::new(Doublet::new(lower.quotient, upper.quotient), lower.remainder),
            error,
        )
    }

    /// Divides by a normalized doublet (top bit set) whose quotient fits in one limb,
    /// i.e. `self.upper() < divisor`.
    pub fn division_3by2(self, divisor: Doublet<U>) -> Division<U, Doublet<U>> {
        debug_assert!(divisor.high.leading_zeros() == 0);
        debug_assert!(self.upper() < divisor);

        let mut quotient = if self.high == divisor.high {
            U::MAX
        } else {
            Doublet::new(self.mid, self.high).division_2by1(divisor.high).value.quotient
        };

        // the estimate exceeds the quotient by at most two
        let mut product = divisor.multiplication_2by1(quotient);
        let mut corrections = 0;
        while product > self {
            quotient = quotient.minus(&U::one()).value;
            product = product.minus_doublet(divisor).value;
            corrections += 1;
            debug_assert!(corrections <= 2);
        }

        let remainder = self.minus(product).value;
        debug_assert!(remainder.high.is_zero());
        Division::new(quotient, remainder.lower())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn doublet(x: u16) -> Doublet<u8> {
        Doublet::new(x as u8, (x >> 8) as u8)
    }

    #[test]
    fn division_3by2() {
        let division = Triplet::new(0u8, 0, 0xFFu8).division_3by2(Doublet::new(0x01, 0xFF));
        assert_eq!(division.quotient, 0xFF);
        assert_eq!(division.remainder, Doublet::new(0x01, 0xFE));

        // the first estimate is one too large
        let division = Triplet::new(0xFFu8, 0xFF, 0x7Fu8).division_3by2(Doublet::new(0xFF, 0x80));
        assert_eq!(division.quotient, (0x7F_FFFFu32 / 0x80FF) as u8);
        assert_eq!(division.remainder, doublet((0x7F_FFFFu32 % 0x80FF) as u16));
    }

    #[test]
    fn division_3by1() {
        let division = Triplet::new(0x56u8, 0x34, 0x12u8).division_3by1(0x21);
        assert_eq!(division, Fallible::success(Division::new(doublet((0x12_3456u32 / 0x21) as u16), (0x12_3456u32 % 0x21) as u8)));
        assert!(Triplet::new(0u8, 0, 0x21u8).division_3by1(0x21).error);
    }

    #[test]
    fn division_2by2_against_u16() {
        let samples = [0u16, 1, 2, 0x7F, 0x80, 0xFF, 0x100, 0x101, 0x1234, 0x7FFF, 0x8000, 0xABCD, 0xFF00, 0xFFFE, 0xFFFF];
        for &x in samples.iter() {
            for &y in samples.iter().filter(|&&y| y != 0) {
                let division = doublet(x).division_2by2(doublet(y));
                assert_eq!(division, Division::new(doublet(x / y), doublet(x % y)), "{:#x} / {:#x}", x, y);
            }
        }
    }

    #[test]
    fn division_4by2_against_u32() {
        let divisors = [1u16, 0x0F, 0xFF, 0x100, 0x1234, 0x8000, 0xFFFF];
        let dividends = [0u32, 1, 0xFFFF, 0x1_0000, 0x1234_5678, 0xFFFE_FFFF, 0x0000_FFFF];
        for &y in divisors.iter() {
            for &x in dividends.iter().filter(|&&x| x >> 16 < y as u32) {
                let division = Doublet::division_4by2(doublet((x >> 16) as u16), doublet(x as u16), doublet(y));
                let expected = Division::new(doublet((x / y as u32) as u16), doublet((x % y as u32) as u16));
                assert_eq!(division, expected, "{:#x} / {:#x}", x, y);
            }
        }
    }
}
