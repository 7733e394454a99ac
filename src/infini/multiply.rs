use alloc::{vec, vec::Vec};

use crate::{Digit, Element, Fallible, InfiniInt, Integer};

/// Schoolbook product of two magnitudes.
pub(crate) fn multiply(lhs: &[Digit], rhs: &[Digit]) -> Vec<Digit> {
    let mut product = vec![0; lhs.len() + rhs.len()];
    for (i, &a) in lhs.iter().enumerate() {
        let mut carry: Digit = 0;
        for (j, &b) in rhs.iter().enumerate() {
            // (2^w - 1)^2 + 2 (2^w - 1) still fits in two words
            let term = a.multiplication(b).plus_base(product[i + j]).value.plus_base(carry).value;
            product[i + j] = term.low;
            carry = term.high;
        }
        product[i + rhs.len()] = carry;
    }
    product
}

/// `words = words * multiplier + addend`, returning the word carried out.
pub(crate) fn multiply_add_assign_word(words: &mut [Digit], multiplier: Digit, addend: Digit) -> Digit {
    let mut carry = addend;
    for word in words.iter_mut() {
        let term = word.multiplication(multiplier).plus_base(carry).value;
        *word = term.low;
        carry = term.high;
    }
    carry
}

impl<const SIGNED: bool> InfiniInt<SIGNED> {
    /// Product of the magnitudes, with the sign (or 2-adic negation) reapplied.
    pub(crate) fn product(&self, multiplier: &Self) -> Self {
        let negative = self.appendix != multiplier.appendix;
        let (lhs, rhs) = (self.magnitude_bits(), multiplier.magnitude_bits());
        let mut product = Self::from_words(multiply(&lhs.body, &rhs.body), false);
        if negative {
            product.complement_twos();
        }
        product
    }

    pub fn squared(&self) -> Fallible<Self> {
        self.times(self)
    }

    /// `self * multiplier + addend` in place, for values with appendix zero.
    pub(crate) fn multiply_add_word(&mut self, multiplier: Digit, addend: Digit) {
        debug_assert!(!self.appendix);
        let carry = multiply_add_assign_word(&mut self.body, multiplier, addend);
        self.body.push(carry);
        self.normalize();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{IXL, UXL};

    fn ixl(x: i64) -> IXL {
        IXL::from_element(x).value
    }

    #[test]
    fn schoolbook() {
        assert_eq!(multiply(&[Digit::MAX], &[Digit::MAX]), [1, Digit::MAX - 1]);
        assert_eq!(multiply(&[Digit::MAX, Digit::MAX], &[Digit::MAX]), [1, Digit::MAX, Digit::MAX - 1]);
        assert_eq!(multiply(&[], &[3]), [0]);
    }

    #[test]
    fn signed_products() {
        for (x, y) in [(0i64, 5i64), (-1, -1), (i64::MIN, -1), (i64::MIN, i64::MIN), (-7, 6), (12345, -67890)] {
            let product = ixl(x).times(&ixl(y));
            assert!(!product.error);
            let expected = crate::I128::truncating_from(x).times(&crate::I128::truncating_from(y)).value;
            assert_eq!(product.value, IXL::from_element(expected).value, "{} * {}", x, y);
        }
        assert_eq!(ixl(-3).squared(), Fallible::success(ixl(9)));
    }

    #[test]
    fn unsigned_products() {
        let infinite = UXL::from_words(Vec::new(), true);
        let two = UXL::from_words([2], false);
        assert_eq!(infinite.times(&UXL::one()), Fallible::success(infinite.clone()));
        assert_eq!(infinite.times(&UXL::zero()), Fallible::success(UXL::zero()));
        // (-1) * 2 as 2-adic numbers
        assert_eq!(infinite.times(&two), Fallible::failure(UXL::from_words([Digit::MAX - 1], true)));
        assert!(infinite.squared().error);
        assert_eq!(two.squared(), Fallible::success(UXL::from_words([4], false)));
    }

    #[test]
    fn word_multiply_add() {
        let mut x = UXL::from_words([Digit::MAX], false);
        x.multiply_add_word(Digit::MAX, Digit::MAX);
        // (2^w - 1)^2 + 2^w - 1 = 2^w (2^w - 1)
        assert_eq!(x, UXL::from_words([0, Digit::MAX], false));

        let mut x = UXL::zero();
        x.multiply_add_word(10, 7);
        assert_eq!(x, UXL::from_words([7], false));
    }
}
