use crate::{Doublet, Element, Fallible, Integer, Triplet};

impl<B: Element> Doublet<B> {
    /// Ripple-carry addition; the flag is the overflow of the top limb.
    pub fn plus_with_carry(self, increment: Self, carry: bool) -> Fallible<Self> {
        let mut carry = carry;
        let low = self.low.plus_with_carry(increment.low, carry).relay(&mut carry);
        self.high
            .plus_with_carry(increment.high, carry)
            .map(|high| Self::new(low, high))
    }

    #[inline]
    pub fn plus(self, increment: Self) -> Fallible<Self> {
        self.plus_with_carry(increment, false)
    }

    /// Adds a sign-extended single limb.
    #[inline]
    pub fn plus_base(self, increment: B) -> Fallible<Self> {
        self.plus(Self::from_base(increment))
    }

    /// One's complement, plus one if `increment` is set.
    ///
    /// With `increment` this is negation, and the flag is the overflow
    /// of the top limb.
    pub fn complement(self, increment: bool) -> Fallible<Self> {
        let mut carry = increment;
        let low = (!self.low).plus_with_carry(B::Magnitude::zero(), carry).relay(&mut carry);
        (!self.high)
            .plus_with_carry(B::zero(), carry)
            .map(|high| Self::new(low, high))
    }
}

impl<B: Element> Triplet<B> {
    pub fn plus_with_carry(self, increment: Self, carry: bool) -> Fallible<Self> {
        let mut carry = carry;
        let low = self.low.plus_with_carry(increment.low, carry).relay(&mut carry);
        let mid = self.mid.plus_with_carry(increment.mid, carry).relay(&mut carry);
        self.high
            .plus_with_carry(increment.high, carry)
            .map(|high| Self::new(low, mid, high))
    }

    #[inline]
    pub fn plus(self, increment: Self) -> Fallible<Self> {
        self.plus_with_carry(increment, false)
    }

    /// Adds a sign-extended doublet.
    #[inline]
    pub fn plus_doublet(self, increment: Doublet<B>) -> Fallible<Self> {
        self.plus(Self::from_doublet(increment))
    }
}
