use crate::{Doublet, Element, Integer, Triplet, UnsignedElement};

impl<B: Element> Doublet<B> {
    /// Truncating left shift, `distance < 2 * B::BITS`.
    pub fn shl(self, distance: u32) -> Self {
        debug_assert!(distance < 2 * B::BITS);
        let bits = self.to_magnitude_bits();
        let (low, high) = if distance >= B::BITS {
            (B::Magnitude::zero(), bits.low.shl_masked(distance - B::BITS))
        } else if distance == 0 {
            (bits.low, bits.high)
        } else {
            (
                bits.low.shl_masked(distance),
                // funnel: the bits leaving the low limb enter the high one
                bits.high.shl_masked(distance) | bits.low.shr_masked(B::BITS - distance),
            )
        };
        Self::from_magnitude_bits(Doublet::new(low, high))
    }

    /// Arithmetic right shift, `distance < 2 * B::BITS`.
    pub fn shr(self, distance: u32) -> Self {
        debug_assert!(distance < 2 * B::BITS);
        if distance >= B::BITS {
            let low = self.high.shr_masked(distance - B::BITS).to_magnitude_bits();
            Self::new(low, B::repeating(self.is_negative()))
        } else if distance == 0 {
            self
        } else {
            let low = self.low.shr_masked(distance) | self.high.shl_masked(B::BITS - distance).to_magnitude_bits();
            Self::new(low, self.high.shr_masked(distance))
        }
    }
}

impl<U: UnsignedElement> Doublet<U> {
    /// Left shift into three limbs, keeping every bit; `distance < U::BITS`.
    pub fn shl_widening(self, distance: u32) -> Triplet<U> {
        debug_assert!(distance < U::BITS);
        if distance == 0 {
            return Triplet::new(self.low, self.high, U::zero());
        }
        let spill = U::BITS - distance;
        Triplet::new(
            self.low.shl_masked(distance),
            self.high.shl_masked(distance) | self.low.shr_masked(spill),
            self.high.shr_masked(spill),
        )
    }
}
