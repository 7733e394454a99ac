use alloc::vec::Vec;

use crate::{Digit, Element, InfiniInt};

/// `accumulator += addend`, returning the carry out of the accumulator.
///
/// Requires `accumulator.len() >= addend.len()`.
pub(crate) fn add_assign_carry(accumulator: &mut [Digit], addend: &[Digit]) -> bool {
    debug_assert!(accumulator.len() >= addend.len());
    let mut carry = false;
    let (low, high) = accumulator.split_at_mut(addend.len());
    for (word, addend) in low.iter_mut().zip(addend) {
        *word = word.plus_with_carry(*addend, carry).relay(&mut carry);
    }
    for word in high {
        if !carry {
            break;
        }
        *word = word.plus_with_carry(0, true).relay(&mut carry);
    }
    carry
}

/// `accumulator -= subtrahend`, returning the borrow out of the accumulator.
///
/// Requires `accumulator.len() >= subtrahend.len()`.
pub(crate) fn sub_assign_borrow(accumulator: &mut [Digit], subtrahend: &[Digit]) -> bool {
    debug_assert!(accumulator.len() >= subtrahend.len());
    let mut borrow = false;
    let (low, high) = accumulator.split_at_mut(subtrahend.len());
    for (word, subtrahend) in low.iter_mut().zip(subtrahend) {
        *word = word.minus_with_borrow(*subtrahend, borrow).relay(&mut borrow);
    }
    for word in high {
        if !borrow {
            break;
        }
        *word = word.minus_with_borrow(0, true).relay(&mut borrow);
    }
    borrow
}

impl<const SIGNED: bool> InfiniInt<SIGNED> {
    /// `self + (body, appendix) + carry`, as infinite bit strings.
    pub(crate) fn sum(&self, body: &[Digit], appendix: bool, carry: bool) -> Self {
        let appendix_word = Digit::repeating(appendix);
        let length = self.body.len().max(body.len());

        let mut carry = carry;
        let mut sum: Vec<Digit> = (0..length)
            .map(|index| {
                let addend = body.get(index).copied().unwrap_or(appendix_word);
                self.word(index).plus_with_carry(addend, carry).relay(&mut carry)
            })
            .collect();

        // one more word settles the appendix: it is where both appendices meet the carry
        let extra = self.appendix_word().plus_with_carry(appendix_word, carry);
        sum.push(extra.value);
        Self::from_words(sum, self.appendix ^ appendix ^ extra.error)
    }

    /// `self - other`, as `self + !other + 1`.
    pub(crate) fn difference(&self, other: &Self) -> Self {
        let complement: Vec<Digit> = other.body.iter().map(|word| !word).collect();
        self.sum(&complement, !other.appendix, true)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Fallible, Integer, IXL, UXL};

    fn ixl(x: i64) -> IXL {
        IXL::from_element(x).value
    }

    fn uxl(x: u64) -> UXL {
        UXL::from_element(x).value
    }

    #[test]
    fn slices() {
        let mut accumulator = [Digit::MAX, Digit::MAX, 7];
        assert!(!add_assign_carry(&mut accumulator, &[1]));
        assert_eq!(accumulator, [0, 0, 8]);
        assert!(sub_assign_borrow(&mut accumulator, &[1, 0, 8]));
        assert_eq!(accumulator, [Digit::MAX, Digit::MAX, Digit::MAX]);
        assert!(add_assign_carry(&mut accumulator, &[1]));
        assert_eq!(accumulator, [0, 0, 0]);
    }

    #[test]
    fn signed_sums() {
        for (x, y) in [(0i64, 0i64), (1, -1), (-1, -1), (i64::MAX, i64::MAX), (i64::MIN, i64::MIN), (i64::MIN, 1), (-5, 3)] {
            let sum = ixl(x).plus(&ixl(y));
            assert!(!sum.error);
            assert!(sum.value.is_normal());
            let difference = ixl(x).minus(&ixl(y));
            assert!(!difference.error);
            // going back recovers the operands
            assert_eq!(sum.value.minus(&ixl(y)).value, ixl(x));
            assert_eq!(difference.value.plus(&ixl(y)).value, ixl(x));
        }
        // 2^63 needs no extra sign word
        assert_eq!(ixl(i64::MAX).plus(&ixl(1)).value.words().len(), 64 / Digit::BITS as usize);
        assert_eq!(ixl(-1).plus(&ixl(1)), Fallible::success(IXL::zero()));
        assert_eq!(ixl(-1).plus(&ixl(-1)), Fallible::success(ixl(-2)));
        assert_eq!(ixl(3).minus(&ixl(5)), Fallible::success(ixl(-2)));
    }

    #[test]
    fn unsigned_sums() {
        assert_eq!(uxl(u64::MAX).plus(&uxl(1)).value.to_element::<crate::U128>().value, crate::U128::from_halves(0, 1));
        assert_eq!(uxl(3).minus(&uxl(5)), Fallible::failure(UXL::from_words([Digit::MAX - 1], true)));
        assert_eq!(uxl(5).minus(&uxl(3)), Fallible::success(uxl(2)));

        let infinite = UXL::from_words([Digit::MAX - 1], true);
        // finite + infinite, staying infinite
        assert_eq!(uxl(1).plus(&infinite), Fallible::success(UXL::from_words(Vec::new(), true)));
        // finite + infinite, wrapping to a finite value
        assert_eq!(uxl(2).plus(&infinite), Fallible::failure(UXL::zero()));
        assert!(infinite.plus(&infinite).error);
        assert!(uxl(1).minus(&infinite).error);
        // infinite - finite, staying infinite
        assert_eq!(infinite.minus(&uxl(1)), Fallible::success(UXL::from_words([Digit::MAX - 2], true)));
    }
}
