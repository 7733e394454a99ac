//! Arbitrary-precision two's complement integers.
//!
//! A value is a little-endian body of [`Digit`]s followed by infinitely many
//! copies of a single appendix bit. The body is kept minimal: its last word
//! is never the all-appendix word. Hence two values are equal if and only if
//! their bodies and appendices are.
//!
//! For [`IXL`] an appendix of one means negative. For [`UXL`] it means
//! "infinite": such values are what unsigned wrap-around produces, and
//! operations that produce them are flagged.

use alloc::vec::Vec;
use core::{cmp::Ordering, fmt};

use rand_core::RngCore;
use zeroize::Zeroize;

use crate::{Digit, Division, Divisor, Element, Fallible, Integer};

mod add;
mod bits;
mod divide;
mod multiply;
mod trait_implementations;

#[derive(Clone, Default, Eq, Hash, PartialEq, Zeroize)]
pub struct InfiniInt<const SIGNED: bool> {
    body: Vec<Digit>,
    appendix: bool,
}

/// Signed, arbitrary precision.
pub type IXL = InfiniInt<true>;
/// Unsigned, arbitrary precision; may be infinite.
pub type UXL = InfiniInt<false>;

impl<const SIGNED: bool> InfiniInt<SIGNED> {
    pub fn from_words(body: impl Into<Vec<Digit>>, appendix: bool) -> Self {
        let mut value = Self { body: body.into(), appendix };
        value.normalize();
        value
    }

    /// Interprets big-endian bytes as a non-negative value.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        const BYTES: usize = Digit::BITS as usize / 8;
        let body: Vec<Digit> = bytes
            .rchunks(BYTES)
            .map(|chunk| chunk.iter().fold(0, |word, byte| word << 8 | *byte as Digit))
            .collect();
        Self::from_words(body, false)
    }

    /// Uniformly random `bits`-bit value. Signed values are sign-extended
    /// from bit `bits - 1`.
    pub fn entropic<R: RngCore + ?Sized>(rng: &mut R, bits: usize) -> Self {
        let length = (bits + Digit::BITS as usize - 1) / Digit::BITS as usize;
        let mut body: Vec<Digit> = (0..length).map(|_| rng.next_u64() as Digit).collect();
        let mut appendix = false;
        if let Some(last) = body.last_mut() {
            let unused = (length * Digit::BITS as usize - bits) as u32;
            *last = (*last << unused) >> unused;
            if SIGNED && (*last >> (Digit::BITS - 1 - unused)) & 1 == 1 {
                *last |= Digit::MAX.shl_smart((Digit::BITS - unused) as isize);
                appendix = true;
            }
        }
        Self::from_words(body, appendix)
    }

    /// Widens any element, flagging negative sources of unsigned values.
    pub fn from_element<T: Element>(source: T) -> Fallible<Self> {
        let length = (T::BITS as usize + Digit::BITS as usize - 1) / Digit::BITS as usize;
        let body: Vec<Digit> = (0..length).map(|index| source.word_at(index)).collect();
        let negative = source.is_negative();
        Fallible::new(Self::from_words(body, negative), !SIGNED && negative)
    }

    /// Truncates to an element, flagging values that do not fit.
    pub fn to_element<T: Element>(&self) -> Fallible<T> {
        let value = T::assemble(|index| self.word(index));
        let error = value.is_negative() != self.is_negative() || Self::from_element(value).value != *self;
        Fallible::new(value, error)
    }

    /// The minimal body, least significant word first.
    #[inline]
    pub fn words(&self) -> &[Digit] {
        &self.body
    }

    #[inline]
    pub fn appendix(&self) -> bool {
        self.appendix
    }

    /// The `index`-th word, continuing into the appendix.
    #[inline]
    pub fn word(&self, index: usize) -> Digit {
        self.body.get(index).copied().unwrap_or_else(|| self.appendix_word())
    }

    #[inline]
    fn appendix_word(&self) -> Digit {
        Digit::repeating(self.appendix)
    }

    pub fn is_normal(&self) -> bool {
        self.body.last() != Some(&self.appendix_word())
    }

    pub(crate) fn normalize(&mut self) {
        let appendix = self.appendix_word();
        while self.body.last() == Some(&appendix) {
            self.body.pop();
        }
    }

    /// Flips every bit, appendix included.
    pub fn complement_ones(&mut self) {
        self.body.iter_mut().for_each(|word| *word = !*word);
        self.appendix = !self.appendix;
    }

    /// Two's complement negation; the body grows by at most one word.
    pub fn complement_twos(&mut self) {
        self.complement_ones();
        let mut carry = true;
        for word in self.body.iter_mut() {
            let (sum, overflow) = word.overflowing_add(1);
            *word = sum;
            carry = overflow;
            if !carry {
                break;
            }
        }
        if carry {
            // the increment reaches the appendix
            if self.appendix {
                self.appendix = false;
            } else {
                self.body.push(1);
            }
        }
        self.normalize();
    }

    /// Two's complement magnitude bits; the appendix is always zero.
    pub(crate) fn magnitude_bits(&self) -> Self {
        let mut magnitude = self.clone();
        if magnitude.appendix {
            magnitude.complement_twos();
        }
        magnitude
    }

    /// Number of significant bits of a value with appendix zero.
    pub(crate) fn natural_bit_width(&self) -> usize {
        debug_assert!(!self.appendix);
        match self.body.last() {
            Some(last) => self.body.len() * Digit::BITS as usize - last.leading_zeros() as usize,
            None => 0,
        }
    }
}

impl<const SIGNED: bool> Integer for InfiniInt<SIGNED> {
    const IS_SIGNED: bool = SIGNED;

    fn zero() -> Self {
        Self::default()
    }

    fn one() -> Self {
        Self::from_words([1 as Digit], false)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.body.is_empty() && !self.appendix
    }

    #[inline]
    fn is_negative(&self) -> bool {
        SIGNED && self.appendix
    }

    #[inline]
    fn is_infinite(&self) -> bool {
        !SIGNED && self.appendix
    }

    fn plus(&self, increment: &Self) -> Fallible<Self> {
        let sum = self.sum(&increment.body, increment.appendix, false);
        let error = !SIGNED
            && ((self.appendix && increment.appendix) || (self.appendix != increment.appendix && !sum.appendix));
        Fallible::new(sum, error)
    }

    fn minus(&self, decrement: &Self) -> Fallible<Self> {
        let difference = self.difference(decrement);
        let error = !SIGNED
            && ((!self.appendix && decrement.appendix) || (self.appendix == decrement.appendix && difference.appendix));
        Fallible::new(difference, error)
    }

    fn times(&self, multiplier: &Self) -> Fallible<Self> {
        let product = self.product(multiplier);
        let overflows = |infinite: &Self, other: &Self| {
            infinite.is_infinite() && !(other.is_zero() || *other == Self::one())
        };
        Fallible::new(product, overflows(self, multiplier) || overflows(multiplier, self))
    }

    fn negated(&self) -> Fallible<Self> {
        let mut negation = self.clone();
        negation.complement_twos();
        Fallible::new(negation, !SIGNED && !self.is_zero())
    }

    fn division(&self, divisor: &Divisor<Self>) -> Fallible<Division<Self, Self>> {
        self.long_division(divisor)
    }
}

impl<const SIGNED: bool> PartialOrd for InfiniInt<SIGNED> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const SIGNED: bool> Ord for InfiniInt<SIGNED> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.appendix != other.appendix {
            // negative below non-negative, infinite above finite
            return if self.appendix == SIGNED { Ordering::Less } else { Ordering::Greater };
        }
        let length = self.body.len().max(other.body.len());
        (0..length)
            .rev()
            .map(|index| self.word(index).cmp(&other.word(index)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl<const SIGNED: bool> fmt::Debug for InfiniInt<SIGNED> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if SIGNED { "IXL" } else { "UXL" })?;

        #[cfg(feature = "hex-debug")]
        {
            let bytes: Vec<u8> = self.body.iter().rev().flat_map(|word| word.to_be_bytes()).collect();
            write!(f, "({}, appendix: {})", delog::hex_str!(bytes.as_slice()), self.appendix as u8)
        }

        #[cfg(not(feature = "hex-debug"))]
        {
            f.write_str("([")?;
            for (index, word) in self.body.iter().rev().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{:#x}", word)?;
            }
            write!(f, "], appendix: {})", self.appendix as u8)
        }
    }
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn normal_form() {
        let x = IXL::from_words([5, 0, 0], false);
        assert_eq!(x.words(), &[5]);
        let x = IXL::from_words([Digit::MAX, Digit::MAX], true);
        assert_eq!(x.words(), &[] as &[Digit]);
        assert!(x.appendix());
        assert_eq!(x, IXL::from_element(-1i8).value);

        // only whole appendix words are trimmed
        let x = IXL::from_words([Digit::MAX, 0], false);
        assert_eq!(x.words(), &[Digit::MAX]);
        assert!(!x.appendix());
        assert!(x.is_normal());
        let x = IXL::from_words([0, Digit::MAX], true);
        assert_eq!(x.words(), &[0]);
        assert!(x.appendix());
        assert!(!IXL { body: [0].into(), appendix: false }.is_normal());
    }

    #[test]
    fn complements() {
        let mut x = IXL::zero();
        x.complement_twos();
        assert_eq!(x, IXL::zero());

        let mut x = IXL::from_element(-1i8).value;
        x.complement_twos();
        assert_eq!(x, IXL::one());

        let mut x = IXL::from_words([0, 1], false);
        x.complement_twos();
        assert_eq!(x, IXL::from_words([0, Digit::MAX], true));
        x.complement_twos();
        assert_eq!(x, IXL::from_words([0, 1], false));

        let mut x = IXL::from_words([Digit::MAX], false);
        x.complement_twos();
        assert_eq!(x, IXL::from_words([1], true));
        x.complement_ones();
        assert_eq!(x, IXL::from_words([Digit::MAX - 1], false));
    }

    #[test]
    fn ordering() {
        let minus_one = IXL::from_element(-1i8).value;
        let big = IXL::from_words([0, 0, 1], false);
        assert!(minus_one < IXL::zero());
        assert!(IXL::zero() < big);
        assert!(IXL::from_words([0, 0, Digit::MAX - 1], true) < minus_one);

        let infinite = UXL::from_words(Vec::new(), true);
        assert!(UXL::from_words([Digit::MAX; 4], false) < infinite);
        assert!(UXL::from_words([1], true) < infinite);
    }

    #[test]
    fn elements() {
        assert_eq!(IXL::from_element(i64::MIN).value.to_element::<i64>(), Fallible::success(i64::MIN));
        assert_eq!(UXL::from_element(-3i8), Fallible::failure(UXL::from_words([Digit::MAX - 2], true)));
        assert_eq!(IXL::from_element(-3i8).value.to_element::<u8>(), Fallible::failure(0xFD));
        assert_eq!(IXL::from_element(300u16).value.to_element::<u8>(), Fallible::failure(44));
        assert_eq!(UXL::from_words(Vec::new(), true).to_element::<i8>(), Fallible::failure(-1));
        let big = crate::U256::MAX;
        assert_eq!(UXL::from_element(big).value.to_element::<crate::U256>(), Fallible::success(big));
    }

    #[test]
    fn bytes() {
        let x = UXL::from_be_bytes(&hex!("0102030405060708090a"));
        assert_eq!(x.to_element::<crate::U128>(), Fallible::success(crate::U128::from_halves(0x0304_0506_0708_090a, 0x0102)));
        assert_eq!(UXL::from_be_bytes(&hex!("000000")), UXL::zero());
    }

    #[test]
    fn entropic() {
        use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for bits in [0, 1, 31, 32, 33, 64, 100, 1000] {
            let x = UXL::entropic(&mut rng, bits);
            assert!(x.natural_bit_width() <= bits);
            let y = IXL::entropic(&mut rng, bits);
            assert!(y.magnitude_bits().natural_bit_width() <= bits);
        }
    }

    #[test]
    fn debug() {
        let x = IXL::from_words([0x10], true);
        #[cfg(not(feature = "hex-debug"))]
        assert_eq!(format!("{:?}", x), "IXL([0x10], appendix: 1)");
        #[cfg(feature = "hex-debug")]
        assert!(format!("{:?}", x).starts_with("IXL("));
    }
}
