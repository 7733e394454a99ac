use alloc::{vec, vec::Vec};
use core::ops::{BitAnd, BitOr, BitXor, Not};

use crate::{BitSelection, Digit, Element, InfiniInt};

impl<const SIGNED: bool> InfiniInt<SIGNED> {
    fn bitwise(&self, other: &Self, word: impl Fn(Digit, Digit) -> Digit, appendix: impl Fn(bool, bool) -> bool) -> Self {
        let length = self.body.len().max(other.body.len());
        let body: Vec<Digit> = (0..length).map(|index| word(self.word(index), other.word(index))).collect();
        Self::from_words(body, appendix(self.appendix, other.appendix))
    }

    /// `self * 2^distance`.
    pub fn shl(&self, distance: usize) -> Self {
        let words = distance / Digit::BITS as usize;
        let bits = (distance % Digit::BITS as usize) as u32;

        let mut body = vec![0; words];
        body.reserve(self.body.len() + 1);
        // one word past the body, for the bits moving out of it
        for index in 0..=self.body.len() {
            let word = self.word(index);
            let shifted = match (bits, index) {
                (0, _) => word,
                (_, 0) => word << bits,
                _ => word << bits | self.word(index - 1) >> (Digit::BITS - bits),
            };
            body.push(shifted);
        }
        Self::from_words(body, self.appendix)
    }

    /// `self / 2^distance`, rounding towards negative infinity.
    pub fn shr(&self, distance: usize) -> Self {
        let words = distance / Digit::BITS as usize;
        let bits = (distance % Digit::BITS as usize) as u32;
        if words >= self.body.len() {
            return Self::from_words(Vec::new(), self.appendix);
        }

        let body: Vec<Digit> = (words..self.body.len())
            .map(|index| match bits {
                0 => self.word(index),
                _ => self.word(index) >> bits | self.word(index + 1) << (Digit::BITS - bits),
            })
            .collect();
        Self::from_words(body, self.appendix)
    }

    /// Shifts left, or right for negative distances.
    pub fn shl_smart(&self, distance: isize) -> Self {
        if distance >= 0 {
            self.shl(distance.unsigned_abs())
        } else {
            self.shr(distance.unsigned_abs())
        }
    }

    /// Shifts right, or left for negative distances.
    pub fn shr_smart(&self, distance: isize) -> Self {
        if distance >= 0 {
            self.shr(distance.unsigned_abs())
        } else {
            self.shl(distance.unsigned_abs())
        }
    }

    /// Counts bits; `None` where infinitely many bits qualify.
    pub fn count(&self, bit: bool, selection: BitSelection) -> Option<usize> {
        match selection {
            BitSelection::All if bit == self.appendix => None,
            BitSelection::All => Some(self.body.iter().map(|word| word.count(bit, BitSelection::All) as usize).sum()),
            BitSelection::Ascending => {
                let mut count = 0;
                for word in self.body.iter() {
                    let run = word.count(bit, BitSelection::Ascending);
                    count += run as usize;
                    if run < Digit::BITS {
                        return Some(count);
                    }
                }
                if bit == self.appendix {
                    None
                } else {
                    Some(count)
                }
            }
            // the most significant bits are the appendix
            BitSelection::Descending if bit == self.appendix => None,
            BitSelection::Descending => Some(0),
        }
    }

    pub fn count_ones(&self) -> Option<usize> {
        self.count(true, BitSelection::All)
    }

    pub fn trailing_zeros(&self) -> Option<usize> {
        self.count(false, BitSelection::Ascending)
    }
}

impl<const SIGNED: bool> Not for InfiniInt<SIGNED> {
    type Output = Self;
    fn not(mut self) -> Self {
        self.complement_ones();
        self
    }
}

impl<const SIGNED: bool> Not for &InfiniInt<SIGNED> {
    type Output = InfiniInt<SIGNED>;
    fn not(self) -> InfiniInt<SIGNED> {
        !self.clone()
    }
}

macro_rules! bitwise {
    ($($trait:ident, $method:ident, $operator:tt;)*) => {$(
        impl<const SIGNED: bool> $trait for InfiniInt<SIGNED> {
            type Output = Self;
            fn $method(self, other: Self) -> Self {
                self.bitwise(&other, |a, b| a $operator b, |a, b| a $operator b)
            }
        }

        impl<'a, const SIGNED: bool> $trait<&'a InfiniInt<SIGNED>> for &'a InfiniInt<SIGNED> {
            type Output = InfiniInt<SIGNED>;
            fn $method(self, other: Self) -> InfiniInt<SIGNED> {
                self.bitwise(other, |a, b| a $operator b, |a, b| a $operator b)
            }
        }
    )*};
}

bitwise! {
    BitAnd, bitand, &;
    BitOr, bitor, |;
    BitXor, bitxor, ^;
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Integer, IXL, UXL};

    fn ixl(x: i64) -> IXL {
        IXL::from_element(x).value
    }

    #[test]
    fn bitwise_includes_the_appendix() {
        assert_eq!(ixl(-1) & ixl(5), ixl(5));
        assert_eq!(ixl(-8) | ixl(3), ixl(-5));
        assert_eq!(ixl(-1) ^ ixl(-1), IXL::zero());
        assert_eq!(!ixl(0), ixl(-1));
        assert_eq!(&ixl(12) & &ixl(10), ixl(8));
        assert!((!UXL::zero()).is_infinite());
    }

    #[test]
    fn shifts() {
        assert_eq!(ixl(1).shl(200).shr(200), ixl(1));
        assert_eq!(ixl(-3).shl(Digit::BITS as usize), IXL::from_words([0, Digit::MAX - 2], true));
        assert_eq!(ixl(-3).shl(1), ixl(-6));
        assert_eq!(ixl(-3).shr(1), ixl(-2));
        assert_eq!(ixl(-3).shr(1000), ixl(-1));
        assert_eq!(ixl(3).shr(1000), ixl(0));
        assert_eq!(ixl(0x1234).shr_smart(-4), ixl(0x12340));
        assert_eq!(ixl(0x1234).shl_smart(-4), ixl(0x123));

        for distance in [0, 1, 5, 31, 32, 33, 63] {
            for x in [0i64, 1, -1, 0x7FFF_FFFF, -0x8000_0000, 0x1234_5678] {
                assert_eq!(ixl(x).shl(distance), IXL::from_element(crate::I128::truncating_from(x) << distance as u32).value);
                assert_eq!(ixl(x).shr(distance), ixl(x >> distance));
            }
        }
    }

    #[test]
    fn counting() {
        assert_eq!(ixl(0b1011).count_ones(), Some(3));
        assert_eq!(ixl(-1).count_ones(), None);
        assert_eq!(ixl(-1).count(false, BitSelection::All), Some(0));
        assert_eq!(ixl(0).trailing_zeros(), None);
        assert_eq!(ixl(8).trailing_zeros(), Some(3));
        assert_eq!(ixl(1).shl(100).trailing_zeros(), Some(100));
        assert_eq!(ixl(-1).count(true, BitSelection::Ascending), None);
        assert_eq!(ixl(5).count(false, BitSelection::Descending), None);
        assert_eq!(ixl(5).count(true, BitSelection::Descending), Some(0));
    }
}
