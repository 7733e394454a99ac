//! Fixed-width integers of twice the width of an [`Element`].
//!
//! A [`DoubleInt`] is itself an [`Element`], so the construction recurses:
//! `DoubleInt<DoubleInt<u64>>` is a 256-bit integer.

use core::{cmp::Ordering, fmt};

use zeroize::Zeroize;

use crate::{Digit, Doublet, Element, Integer};

mod arithmetic;
mod trait_implementations;

/// Two halves of `H`; the high half carries the sign.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct DoubleInt<H: Element>(pub(crate) Doublet<H>);

pub type U128 = DoubleInt<u64>;
pub type I128 = DoubleInt<i64>;
pub type U256 = DoubleInt<U128>;
pub type I256 = DoubleInt<I128>;
pub type U512 = DoubleInt<U256>;
pub type I512 = DoubleInt<I256>;

impl<H: Element> DoubleInt<H> {
    #[inline]
    pub const fn from_halves(low: H::Magnitude, high: H) -> Self {
        Self(Doublet::new(low, high))
    }

    #[inline]
    pub const fn from_doublet(doublet: Doublet<H>) -> Self {
        Self(doublet)
    }

    #[inline]
    pub fn low(&self) -> H::Magnitude {
        self.0.low
    }

    #[inline]
    pub fn high(&self) -> H {
        self.0.high
    }

    #[inline]
    pub fn into_doublet(self) -> Doublet<H> {
        self.0
    }
}

impl<H: Element> PartialOrd for DoubleInt<H> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<H: Element> Ord for DoubleInt<H> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<H: Element> Zeroize for DoubleInt<H> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<H: Element> fmt::LowerHex for DoubleInt<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        // two's complement bits, most significant nibble first
        let nibbles = (Self::BITS / 4) as usize;
        let nibble_bits = Digit::BITS as usize / 4;
        for nibble in (0..nibbles).rev() {
            let word = self.word_at(nibble / nibble_bits);
            let value = (word >> (4 * (nibble % nibble_bits))) & 0xF;
            write!(f, "{:x}", value)?;
        }
        Ok(())
    }
}

impl<H: Element> fmt::Debug for DoubleInt<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DoubleInt({:#x})", self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn debug() {
        let x = DoubleInt::<u8>::from_halves(0xCD, 0xAB);
        assert_eq!(format!("{:?}", x), "DoubleInt(0xabcd)");
        let x = U128::from_halves(1, 0x0123_4567_89AB_CDEF);
        assert_eq!(format!("{:x}", x), "0123456789abcdef0000000000000001");
        let x = DoubleInt::<i8>::from_halves(0xFE, -1);
        assert_eq!(format!("{:?}", x), "DoubleInt(0xfffe)");
    }
}
