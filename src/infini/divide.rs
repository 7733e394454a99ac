use alloc::{vec, vec::Vec};
use core::cmp::Ordering;

use super::add::{add_assign_carry, sub_assign_borrow};
use super::multiply::multiply_add_assign_word;
use crate::{Digit, Division, Divisor, Doublet, Element, Fallible, Guarantee, InfiniInt, Integer, Triplet, UnsignedElement};

/// `words /= divisor`, returning the remainder.
pub(crate) fn divide_assign_word(words: &mut [Digit], divisor: Divisor<Digit>) -> Digit {
    let mut remainder = 0;
    // run down the words, carrying the remainder along
    for word in words.iter_mut().rev() {
        // remainder < divisor, so the quotient word fits
        let division = Digit::division_2by1(Doublet::new(*word, remainder), divisor).value;
        *word = division.quotient;
        remainder = division.remainder;
    }
    remainder
}

/// Compares magnitudes without leading zero words.
fn compare(lhs: &[Digit], rhs: &[Digit]) -> Ordering {
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

/// `words << shift` with one more word for the bits shifted out; `shift < Digit::BITS`.
fn shifted_left(words: &[Digit], shift: u32) -> Vec<Digit> {
    let mut shifted = Vec::with_capacity(words.len() + 1);
    let mut spill = 0;
    for &word in words {
        shifted.push(word.shl_masked(shift) | spill);
        spill = if shift == 0 { 0 } else { word >> (Digit::BITS - shift) };
    }
    shifted.push(spill);
    shifted
}

/// `words >> shift`; `shift < Digit::BITS`.
fn shifted_right(words: &[Digit], shift: u32) -> Vec<Digit> {
    if shift == 0 {
        return words.to_vec();
    }
    (0..words.len())
        .map(|index| {
            let next = words.get(index + 1).copied().unwrap_or(0);
            words[index] >> shift | next << (Digit::BITS - shift)
        })
        .collect()
}

/// Quotient and remainder of magnitudes; the divisor is not empty.
fn divide(dividend: &[Digit], divisor: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
    match compare(dividend, divisor) {
        Ordering::Less => return (Vec::new(), dividend.to_vec()),
        Ordering::Equal => return (vec![1], Vec::new()),
        Ordering::Greater => {}
    }

    if divisor.len() == 1 {
        let mut quotient = dividend.to_vec();
        let remainder = divide_assign_word(&mut quotient, Divisor::new_unchecked(divisor[0]));
        return (quotient, vec![remainder]);
    }

    // Knuth, TAOCP vol 2 section 4.3, algorithm D(ivision)
    //
    // This shift has no influence on the quotient, and will be reverted for the remainder at the end.
    let n = divisor.len();
    let shift = divisor[n - 1].leading_zeros();
    let mut divisor = shifted_left(divisor, shift);
    divisor.pop();
    let top = Doublet::new(divisor[n - 2], divisor[n - 1]);

    let mut remainder = shifted_left(dividend, shift);
    let mut quotient = vec![0; remainder.len() - n];
    let mut product = vec![0; n + 1];

    for j in (0..quotient.len()).rev() {
        let window = &mut remainder[j..=j + n];
        let numerator = Triplet::new(window[n - 2], window[n - 1], window[n]);
        let mut digit = if numerator.upper() >= top {
            Digit::MAX
        } else {
            numerator.division_3by2(top).quotient
        };

        product[..n].copy_from_slice(&divisor);
        product[n] = multiply_add_assign_word(&mut product[..n], digit, 0);

        if sub_assign_borrow(window, &product) {
            // the estimate was too large: add back until the window is no longer negative
            loop {
                digit -= 1;
                if add_assign_carry(window, &divisor) {
                    break;
                }
            }
        }
        quotient[j] = digit;
    }

    remainder.truncate(n);
    (quotient, shifted_right(&remainder, shift))
}

impl<const SIGNED: bool> InfiniInt<SIGNED> {
    /// Truncating division of the magnitudes, signs reapplied afterwards.
    ///
    /// Unsigned values are special: an infinite divisor fits into anything
    /// at most once, and an infinite dividend flags the (2-adic) result.
    pub(crate) fn long_division(&self, divisor: &Divisor<Self>) -> Fallible<Division<Self, Self>> {
        let divisor = divisor.value();
        if divisor.is_infinite() {
            let division = if self < divisor {
                Division::new(Self::zero(), self.clone())
            } else {
                Division::new(Self::one(), self.difference(divisor))
            };
            return Fallible::success(division);
        }

        let (dividend_magnitude, divisor_magnitude) = (self.magnitude_bits(), divisor.magnitude_bits());
        let (quotient, remainder) = divide(&dividend_magnitude.body, &divisor_magnitude.body);

        let mut quotient = Self::from_words(quotient, false);
        if self.appendix != divisor.appendix {
            quotient.complement_twos();
        }
        let mut remainder = Self::from_words(remainder, false);
        if self.appendix {
            remainder.complement_twos();
        }
        Fallible::new(Division::new(quotient, remainder), self.is_infinite())
    }

    /// Divides in place by a single word, for values with appendix zero.
    pub(crate) fn divide_word(&mut self, divisor: Divisor<Digit>) -> Digit {
        debug_assert!(!self.appendix);
        let remainder = divide_assign_word(&mut self.body, divisor);
        self.normalize();
        remainder
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::{I256, IXL, U256, UXL};

    fn ixl(x: i64) -> IXL {
        IXL::from_element(x).value
    }

    fn uxl(x: u64) -> UXL {
        UXL::from_element(x).value
    }

    /// Checks `dividend = quotient * divisor + remainder` with `|remainder| < |divisor|`
    /// and the remainder taking the sign of the dividend.
    fn assert_division(dividend: &IXL, divisor: &IXL) {
        let division = dividend.divided_by(divisor);
        assert!(!division.error);
        let Division { quotient, remainder } = division.value;
        assert_eq!(&quotient.times(divisor).value.plus(&remainder).value, dividend);
        assert!(remainder.magnitude_bits() < divisor.magnitude_bits());
        assert!(remainder.is_zero() || remainder.is_negative() == dividend.is_negative());
    }

    #[test]
    fn words() {
        let mut words = [0, 0, 1];
        let remainder = divide_assign_word(&mut words, Divisor::new(3));
        // 2^(2w) = 3 * q + 1, since 2^(2w) = 1 mod 3
        assert_eq!(remainder, 1);
        let mut x = UXL::from_words([0, 0, 1], false);
        assert_eq!(x.divide_word(Divisor::new(3)), 1);
        assert_eq!(x.words(), &words[..2]);
    }

    #[test]
    fn small_cases() {
        assert_eq!(ixl(7).divided_by(&ixl(2)), Fallible::success(Division::new(ixl(3), ixl(1))));
        assert_eq!(ixl(-7).divided_by(&ixl(2)), Fallible::success(Division::new(ixl(-3), ixl(-1))));
        assert_eq!(ixl(7).divided_by(&ixl(-2)), Fallible::success(Division::new(ixl(-3), ixl(1))));
        assert_eq!(ixl(-7).divided_by(&ixl(-2)), Fallible::success(Division::new(ixl(3), ixl(-1))));
        assert_eq!(ixl(5).divided_by(&ixl(0)), Fallible::failure(Division::new(ixl(0), ixl(5))));
        assert_eq!(ixl(3).divided_by(&ixl(5)), Fallible::success(Division::new(ixl(0), ixl(3))));
        assert_eq!(ixl(-5).divided_by(&ixl(-5)), Fallible::success(Division::new(ixl(1), ixl(0))));
    }

    #[test]
    fn unsigned_infinities() {
        let infinite = UXL::from_words([Digit::MAX - 1], true);
        assert_eq!(uxl(9).divided_by(&infinite), Fallible::success(Division::new(uxl(0), uxl(9))));
        let larger = UXL::from_words(Vec::new(), true);
        assert_eq!(
            larger.divided_by(&infinite),
            Fallible::success(Division::new(uxl(1), uxl(1)))
        );

        // (-4) / 2 as 2-adic numbers, flagged
        let division = UXL::from_words([Digit::MAX - 3], true).divided_by(&uxl(2));
        assert!(division.error);
        assert_eq!(division.value.quotient, UXL::from_words([Digit::MAX - 1], true));
        assert_eq!(division.value.remainder, uxl(0));
    }

    #[test]
    fn matches_fixed_width() {
        let x = U256::MAX;
        let y = U256::from_halves(crate::U128::MAX, crate::U128::one());
        let expected = x.divided_by(&y).value;
        let division = UXL::from_element(x).value.divided_by(&UXL::from_element(y).value).value;
        assert_eq!(division.quotient.to_element::<U256>(), Fallible::success(expected.quotient));
        assert_eq!(division.remainder.to_element::<U256>(), Fallible::success(expected.remainder));

        let x = I256::MIN;
        let y = I256::truncating_from(-1_000_000_007i64);
        let expected = x.divided_by(&y).value;
        let division = IXL::from_element(x).value.divided_by(&IXL::from_element(y).value).value;
        assert_eq!(division.quotient.to_element::<I256>(), Fallible::success(expected.quotient));
        assert_eq!(division.remainder.to_element::<I256>(), Fallible::success(expected.remainder));
    }

    #[test]
    fn add_back() {
        // divisors with a top word of 0x80.. and everything below it set make the estimate overshoot
        let top = 1 << (Digit::BITS - 1);
        let divisor = IXL::from_words([Digit::MAX, Digit::MAX, top], false);
        for dividend in [
            IXL::from_words([0, 0, 0, 0, top - 1], false),
            IXL::from_words([0, 0, 0, Digit::MAX, top - 1], false),
            IXL::from_words([1, 0, 0, 0, top], false),
            IXL::from_words([Digit::MAX; 6], false),
        ] {
            assert_division(&dividend, &divisor);
            assert_division(&dividend.negated().value, &divisor);
        }
    }

    fn edgy_words() -> impl Strategy<Value = Vec<Digit>> {
        let word = prop_oneof![
            Just(0 as Digit),
            Just(1),
            Just(Digit::MAX),
            Just(Digit::MAX - 1),
            Just(1 << (Digit::BITS - 1)),
            any::<Digit>(),
        ];
        prop::collection::vec(word, 0..8)
    }

    proptest! {
        #[test]
        fn division_identity(dividend in edgy_words(), negative in any::<bool>(), divisor in edgy_words(), sign in any::<bool>()) {
            let dividend = IXL::from_words(dividend, negative);
            let divisor = IXL::from_words(divisor, sign);
            if !divisor.is_zero() {
                assert_division(&dividend, &divisor);
            }
        }
    }
}
