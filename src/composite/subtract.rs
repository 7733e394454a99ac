use crate::{Doublet, Element, Fallible, Triplet};

impl<B: Element> Doublet<B> {
    /// Ripple-borrow subtraction; the flag is the overflow of the top limb.
    pub fn minus_with_borrow(self, decrement: Self, borrow: bool) -> Fallible<Self> {
        let mut borrow = borrow;
        let low = self.low.minus_with_borrow(decrement.low, borrow).relay(&mut borrow);
        self.high
            .minus_with_borrow(decrement.high, borrow)
            .map(|high| Self::new(low, high))
    }

    #[inline]
    pub fn minus(self, decrement: Self) -> Fallible<Self> {
        self.minus_with_borrow(decrement, false)
    }

    /// Subtracts a sign-extended single limb.
    #[inline]
    pub fn minus_base(self, decrement: B) -> Fallible<Self> {
        self.minus(Self::from_base(decrement))
    }
}

impl<B: Element> Triplet<B> {
    pub fn minus_with_borrow(self, decrement: Self, borrow: bool) -> Fallible<Self> {
        let mut borrow = borrow;
        let low = self.low.minus_with_borrow(decrement.low, borrow).relay(&mut borrow);
        let mid = self.mid.minus_with_borrow(decrement.mid, borrow).relay(&mut borrow);
        self.high
            .minus_with_borrow(decrement.high, borrow)
            .map(|high| Self::new(low, mid, high))
    }

    #[inline]
    pub fn minus(self, decrement: Self) -> Fallible<Self> {
        self.minus_with_borrow(decrement, false)
    }

    /// Subtracts a sign-extended doublet.
    #[inline]
    pub fn minus_doublet(self, decrement: Doublet<B>) -> Fallible<Self> {
        self.minus(Self::from_doublet(decrement))
    }
}
