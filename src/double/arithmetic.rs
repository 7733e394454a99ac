use crate::{
    BitSelection, Digit, Division, Divisor, DoubleInt, Doublet, Element, Fallible, Guarantee, Integer, UnsignedElement,
};

impl<H: Element> Integer for DoubleInt<H> {
    const IS_SIGNED: bool = H::IS_SIGNED;

    #[inline]
    fn zero() -> Self {
        Self(Doublet::zero())
    }

    #[inline]
    fn one() -> Self {
        Self(Doublet::one())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    fn plus(&self, increment: &Self) -> Fallible<Self> {
        self.0.plus(increment.0).map(Self)
    }

    fn minus(&self, decrement: &Self) -> Fallible<Self> {
        self.0.minus(decrement.0).map(Self)
    }

    fn times(&self, multiplier: &Self) -> Fallible<Self> {
        self.0.times(multiplier.0).map(Self)
    }

    fn negated(&self) -> Fallible<Self> {
        Self::zero().minus(self)
    }

    /// Unsigned long division of the magnitudes, signs reapplied afterwards.
    fn division(&self, divisor: &Divisor<Self>) -> Fallible<Division<Self, Self>> {
        let dividend_is_negative = self.is_negative();
        let divisor_is_negative = divisor.value().is_negative();
        let division = self.0.magnitude().division_2by2(divisor.value().0.magnitude());

        let mut error = false;
        let quotient =
            Self::from_sign_magnitude(dividend_is_negative != divisor_is_negative, DoubleInt(division.quotient))
                .sink(&mut error);
        let remainder = Self::from_sign_magnitude(dividend_is_negative, DoubleInt(division.remainder)).value;
        Fallible::new(Division::new(quotient, remainder), error)
    }
}

impl<H: Element> Element for DoubleInt<H> {
    type Magnitude = DoubleInt<H::Magnitude>;

    const BITS: u32 = 2 * H::BITS;
    const MIN: Self = Self(Doublet::new(<H::Magnitude as Element>::MIN, H::MIN));
    const MAX: Self = Self(Doublet::new(<H::Magnitude as Element>::MAX, H::MAX));

    #[inline]
    fn from_magnitude_bits(bits: Self::Magnitude) -> Self {
        Self(Doublet::from_magnitude_bits(bits.0))
    }

    #[inline]
    fn to_magnitude_bits(self) -> Self::Magnitude {
        DoubleInt(self.0.to_magnitude_bits())
    }

    fn plus_with_carry(self, increment: Self, carry: bool) -> Fallible<Self> {
        self.0.plus_with_carry(increment.0, carry).map(Self)
    }

    fn minus_with_borrow(self, decrement: Self, borrow: bool) -> Fallible<Self> {
        self.0.minus_with_borrow(decrement.0, borrow).map(Self)
    }

    fn multiplication(self, multiplier: Self) -> Doublet<Self> {
        let (low, high) = self.0.multiplication(multiplier.0);
        Doublet::new(DoubleInt(low), Self(high))
    }

    #[inline]
    fn shl_masked(self, distance: u32) -> Self {
        Self(self.0.shl(distance % Self::BITS))
    }

    #[inline]
    fn shr_masked(self, distance: u32) -> Self {
        Self(self.0.shr(distance % Self::BITS))
    }

    fn count(self, bit: bool, selection: BitSelection) -> u32 {
        let low = self.0.low.count(bit, selection);
        let high = self.0.high.count(bit, selection);
        match selection {
            BitSelection::All => low + high,
            BitSelection::Ascending if low == H::BITS => low + high,
            BitSelection::Ascending => low,
            BitSelection::Descending if high == H::BITS => high + low,
            BitSelection::Descending => high,
        }
    }

    fn word_at(self, index: usize) -> Digit {
        if H::BITS >= Digit::BITS {
            let half = (H::BITS / Digit::BITS) as usize;
            if index < half {
                self.0.low.word_at(index)
            } else {
                self.0.high.word_at(index - half)
            }
        } else if index == 0 {
            // both halves share the lowest digit
            self.0.low.word_at(0) | self.0.high.word_at(0) << H::BITS
        } else {
            self.0.high.word_at(index)
        }
    }

    fn assemble<F: FnMut(usize) -> Digit>(mut word: F) -> Self {
        if H::BITS >= Digit::BITS {
            let half = (H::BITS / Digit::BITS) as usize;
            let low = H::Magnitude::assemble(&mut word);
            let high = H::assemble(|index| word(index + half));
            Self::from_halves(low, high)
        } else {
            let word = word(0);
            let low = H::Magnitude::assemble(|_| word);
            let high = H::assemble(|_| word >> H::BITS);
            Self::from_halves(low, high)
        }
    }
}

impl<H: UnsignedElement> UnsignedElement for DoubleInt<H> {
    fn division_2by1(dividend: Doublet<Self>, divisor: Divisor<Self>) -> Fallible<Division<Self, Self>> {
        let divisor = divisor.value().0;
        // only the low half of this quotient is kept
        let overflow = dividend.high.0.division_2by2(divisor);
        let division = Doublet::division_4by2(overflow.remainder, dividend.low.0, divisor);
        Fallible::new(
            Division::new(Self(division.quotient), Self(division.remainder)),
            !overflow.quotient.is_zero(),
        )
    }
}
