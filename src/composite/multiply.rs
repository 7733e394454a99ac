use crate::{Doublet, Element, Fallible, Integer, Triplet, UnsignedElement};

impl<U: UnsignedElement> Doublet<U> {
    /// Exact product with a single limb.
    pub fn multiplication_2by1(self, multiplier: U) -> Triplet<U> {
        let ax = self.low.multiplication(multiplier);
        let bx = self.high.multiplication(multiplier);
        let upper = bx.plus_base(ax.high);
        // (2^w - 1)^2 + 2^w - 1 < 2^2w
        debug_assert!(!upper.error);
        Triplet::from_low_and_upper(ax.low, upper.value)
    }
}

impl<B: Element> Doublet<B> {
    /// Truncated product, flagged if it does not fit.
    pub fn times(self, multiplier: Self) -> Fallible<Self> {
        let negative = self.is_negative() != multiplier.is_negative();
        let product = times(self.magnitude(), multiplier.magnitude());
        Self::from_sign_magnitude(negative, product.value).veto(product.error)
    }

    /// Exact, widening product: the low and the high doublet.
    pub fn multiplication(self, multiplier: Self) -> (Doublet<B::Magnitude>, Self) {
        let negative = self.is_negative() != multiplier.is_negative();
        let (low, high) = multiplication(self.magnitude(), multiplier.magnitude());
        let (low, high) = if negative {
            let mut carry = false;
            let low = low.complement(true).relay(&mut carry);
            (low, high.complement(carry).value)
        } else {
            (low, high)
        };
        (low, Self::from_magnitude_bits(high))
    }
}

fn times<U: UnsignedElement>(lhs: Doublet<U>, rhs: Doublet<U>) -> Fallible<Doublet<U>> {
    let mut error = !lhs.high.is_zero() && !rhs.high.is_zero();
    let ax = lhs.low.multiplication(rhs.low);
    let ay = lhs.low.times(&rhs.high).sink(&mut error);
    let bx = lhs.high.times(&rhs.low).sink(&mut error);
    let high = ax.high.plus(&ay).sink(&mut error);
    let high = high.plus(&bx).sink(&mut error);
    Fallible::new(Doublet::new(ax.low, high), error)
}

fn multiplication<U: UnsignedElement>(lhs: Doublet<U>, rhs: Doublet<U>) -> (Doublet<U>, Doublet<U>) {
    let ax = lhs.low.multiplication(rhs.low);
    let ay = lhs.low.multiplication(rhs.high);
    let bx = lhs.high.multiplication(rhs.low);
    let by = lhs.high.multiplication(rhs.high);

    // middle column, none of these can overflow three limbs
    let middle = Triplet::from_doublet(ay).plus_doublet(bx).value;
    let middle = middle.plus_doublet(Doublet::new(ax.high, U::zero())).value;
    let high = by.plus(middle.upper()).value;

    (Doublet::new(ax.low, middle.low), high)
}

#[cfg(test)]
mod test {
    use super::*;

    fn doublet_u8(x: u16) -> Doublet<u8> {
        Doublet::new(x as u8, (x >> 8) as u8)
    }

    fn doublet_i8(x: i16) -> Doublet<i8> {
        Doublet::new(x as u8, (x >> 8) as i8)
    }

    #[test]
    fn multiplication_2by1() {
        assert_eq!(Doublet::new(0xFFu8, 0xFFu8).multiplication_2by1(0xFF), Triplet::new(0x01, 0xFF, 0xFE));
        assert_eq!(Doublet::new(0x34u8, 0x12u8).multiplication_2by1(0x10), Triplet::new(0x40, 0x23, 0x01));
    }

    #[test]
    fn truncated_products() {
        for (x, y) in [(0x00FFu16, 0x00FF), (0x0100, 0x0100), (0x1234, 0x0003), (0xFFFF, 0xFFFF), (0x0080, 0x01FF)] {
            let (product, overflow) = x.overflowing_mul(y);
            assert_eq!(doublet_u8(x).times(doublet_u8(y)), Fallible::new(doublet_u8(product), overflow));
        }
        for (x, y) in [(-1i16, -1), (-128, 256), (i16::MIN, -1), (i16::MIN, 1), (181, 181), (-182, 181), (0x4000, 2)] {
            let (product, overflow) = x.overflowing_mul(y);
            assert_eq!(doublet_i8(x).times(doublet_i8(y)), Fallible::new(doublet_i8(product), overflow), "{} * {}", x, y);
        }
    }

    #[test]
    fn widening_products() {
        let (low, high) = doublet_u8(0xFFFF).multiplication(doublet_u8(0xFFFF));
        assert_eq!((low, high), (doublet_u8(0x0001), doublet_u8(0xFFFE)));

        for (x, y) in [(i16::MIN, i16::MIN), (i16::MIN, i16::MAX), (-1, 1), (-300, 7), (0, -5)] {
            let product = x as i32 * y as i32;
            let (low, high) = doublet_i8(x).multiplication(doublet_i8(y));
            assert_eq!(low, doublet_u8(product as u16));
            assert_eq!(high, doublet_i8((product >> 16) as i16));
        }
    }
}
