use core::marker::PhantomData;

use super::{sealed, Guarantee};
use crate::Element;

/// A shift distance strictly below the bit width of `T`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Shift<T> {
    distance: u32,
    width: PhantomData<fn() -> T>,
}

impl<T> sealed::Wrap for Shift<T> {
    type Value = u32;
    #[inline]
    fn wrap(distance: u32) -> Self {
        Self { distance, width: PhantomData }
    }
}

impl<T: Element> Guarantee for Shift<T> {
    const NAME: &'static str = "Shift";

    #[inline]
    fn predicate(distance: &u32) -> bool {
        *distance < T::BITS
    }

    #[inline]
    fn value(&self) -> &u32 {
        &self.distance
    }

    #[inline]
    fn into_value(self) -> u32 {
        self.distance
    }
}

impl<T: Element> Shift<T> {
    /// `BITS - self`, for the other half of a funnel shift; there is none for zero.
    pub fn inverse(self) -> Option<Self> {
        match self.distance {
            0 => None,
            distance => Some(Self::new_unchecked(T::BITS - distance)),
        }
    }
}
