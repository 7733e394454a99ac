//! Two- and three-limb integers over an [`Element`] base.
//!
//! The most significant limb is a `B` and carries the sign; the lower limbs
//! are plain bits (`B::Magnitude`). All algorithms work limb by limb on top of
//! the [`Element`] primitives, which is what lets [`DoubleInt`][crate::DoubleInt]
//! recurse.

use core::cmp::Ordering;

use zeroize::Zeroize;

use crate::{Element, Fallible, Integer};

mod add;
mod divide;
mod multiply;
mod shift;
mod subtract;

/// Two limbs, least significant first.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Doublet<B: Element> {
    pub low: B::Magnitude,
    pub high: B,
}

/// Three limbs, least significant first.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Triplet<B: Element> {
    pub low: B::Magnitude,
    pub mid: B::Magnitude,
    pub high: B,
}

impl<B: Element> Doublet<B> {
    #[inline]
    pub const fn new(low: B::Magnitude, high: B) -> Self {
        Self { low, high }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    #[inline]
    pub fn one() -> Self {
        Self::new(B::Magnitude::one(), B::zero())
    }

    /// Sign-extends a single limb.
    #[inline]
    pub fn from_base(base: B) -> Self {
        Self::new(base.to_magnitude_bits(), B::repeating(base.is_negative()))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.low.is_zero() && self.high.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.high.is_negative()
    }

    /// The same bits, all limbs unsigned.
    #[inline]
    pub fn to_magnitude_bits(self) -> Doublet<B::Magnitude> {
        Doublet::new(self.low, self.high.to_magnitude_bits())
    }

    #[inline]
    pub fn from_magnitude_bits(bits: Doublet<B::Magnitude>) -> Self {
        Self::new(bits.low, B::from_magnitude_bits(bits.high))
    }

    pub fn magnitude(self) -> Doublet<B::Magnitude> {
        let bits = self.to_magnitude_bits();
        if self.is_negative() {
            bits.complement(true).value
        } else {
            bits
        }
    }

    /// Applies a sign to a magnitude, flagging results that do not fit.
    pub fn from_sign_magnitude(negative: bool, magnitude: Doublet<B::Magnitude>) -> Fallible<Self> {
        let bits = if negative { magnitude.complement(true).value } else { magnitude };
        let value = Self::from_magnitude_bits(bits);
        let error = !magnitude.is_zero()
            && if B::IS_SIGNED {
                value.is_negative() != negative
            } else {
                negative
            };
        Fallible::new(value, error)
    }
}

impl<B: Element> Triplet<B> {
    #[inline]
    pub const fn new(low: B::Magnitude, mid: B::Magnitude, high: B) -> Self {
        Self { low, mid, high }
    }

    /// Sign-extends a doublet.
    #[inline]
    pub fn from_doublet(doublet: Doublet<B>) -> Self {
        Self::new(
            doublet.low,
            doublet.high.to_magnitude_bits(),
            B::repeating(doublet.is_negative()),
        )
    }

    #[inline]
    pub fn from_low_and_upper(low: B::Magnitude, upper: Doublet<B>) -> Self {
        Self::new(low, upper.low, upper.high)
    }

    /// The two most significant limbs.
    #[inline]
    pub fn upper(self) -> Doublet<B> {
        Doublet::new(self.mid, self.high)
    }

    /// The two least significant limbs.
    #[inline]
    pub fn lower(self) -> Doublet<B::Magnitude> {
        Doublet::new(self.low, self.mid)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.low.is_zero() && self.mid.is_zero() && self.high.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.high.is_negative()
    }
}

impl<B: Element> PartialOrd for Doublet<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: Element> Ord for Doublet<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.high.cmp(&other.high).then_with(|| self.low.cmp(&other.low))
    }
}

impl<B: Element> PartialOrd for Triplet<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: Element> Ord for Triplet<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.high
            .cmp(&other.high)
            .then_with(|| self.mid.cmp(&other.mid))
            .then_with(|| self.low.cmp(&other.low))
    }
}

impl<B: Element> Zeroize for Doublet<B> {
    fn zeroize(&mut self) {
        self.low.zeroize();
        self.high.zeroize();
    }
}

impl<B: Element> Zeroize for Triplet<B> {
    fn zeroize(&mut self) {
        self.low.zeroize();
        self.mid.zeroize();
        self.high.zeroize();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn order_is_numeric() {
        assert!(Doublet::new(0xFFu8, 0i8) < Doublet::new(0x00, 1));
        assert!(Doublet::new(0x00u8, -1i8) < Doublet::new(0xFF, 0));
        assert!(Doublet::new(0x00u8, 0xFFu8) > Doublet::new(0xFF, 0x7F));
        assert!(Triplet::new(0xFFu8, 0xFF, -1i8) < Triplet::new(0, 0, 0));
        assert!(Triplet::new(0x01u8, 0x00, 0u8) < Triplet::new(0x00, 0x01, 0));
    }

    #[test]
    fn sign_magnitude() {
        let minus_one = Doublet::new(0xFFu8, -1i8);
        assert_eq!(minus_one.magnitude(), Doublet::new(1, 0));
        assert_eq!(Doublet::<i8>::from_sign_magnitude(true, Doublet::new(0, 0x80)).value, Doublet::new(0, i8::MIN));
        assert!(!Doublet::<i8>::from_sign_magnitude(true, Doublet::new(0, 0x80)).error);
        assert!(Doublet::<i8>::from_sign_magnitude(false, Doublet::new(0, 0x80)).error);
        assert!(Doublet::<u8>::from_sign_magnitude(true, Doublet::new(1, 0)).error);
    }

    #[test]
    fn extension() {
        assert_eq!(Doublet::from_base(-2i8), Doublet::new(0xFE, -1));
        assert_eq!(Doublet::from_base(0xFEu8), Doublet::new(0xFE, 0));
        assert_eq!(Triplet::from_doublet(Doublet::new(0x01u8, -1i8)), Triplet::new(0x01, 0xFF, -1));
    }

    #[test]
    fn zeroize() {
        let mut secret = Triplet::new(1u32, 2, -3i32);
        secret.zeroize();
        assert!(secret.is_zero());
    }
}
