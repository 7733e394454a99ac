//! Values that carry a proof of some property.
//!
//! All constructors go through [`Guarantee`]. Past construction, only
//! operations that keep the property may touch the wrapped value.

use core::{convert::TryFrom, ops::Deref};

use ref_cast::RefCast;

use crate::{Error, Integer, UnsignedElement, I128, I256, I512, IXL, U128, U256, U512, UXL};

mod shift;
pub use shift::Shift;

mod sealed {
    pub trait Wrap {
        type Value;
        fn wrap(value: Self::Value) -> Self;
    }
}

/// A wrapper whose value satisfies [`Guarantee::predicate`].
pub trait Guarantee: sealed::Wrap + Sized {
    const NAME: &'static str;

    fn predicate(value: &Self::Value) -> bool;

    fn value(&self) -> &Self::Value;
    fn into_value(self) -> Self::Value;

    /// The caller vouches for the predicate; checked in debug builds only.
    #[inline]
    #[track_caller]
    fn new_unchecked(value: Self::Value) -> Self {
        debug_assert!(Self::predicate(&value), "{} guarantee violated", Self::NAME);
        Self::wrap(value)
    }

    /// Panics if the predicate does not hold.
    #[inline]
    #[track_caller]
    fn new(value: Self::Value) -> Self {
        if !Self::predicate(&value) {
            panic!("{} guarantee violated", Self::NAME);
        }
        Self::wrap(value)
    }

    #[inline]
    fn exactly(value: Self::Value) -> Option<Self> {
        if Self::predicate(&value) {
            Some(Self::wrap(value))
        } else {
            None
        }
    }

    #[inline]
    fn try_new<E>(value: Self::Value, error: E) -> core::result::Result<Self, E> {
        Self::exactly(value).ok_or(error)
    }
}

macro_rules! integer_guarantee {
    ($(#[$attribute:meta])* $name:ident, |$value:ident| $predicate:expr) => {
        $(#[$attribute])*
        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, RefCast)]
        pub struct $name<V>(pub(crate) V);

        impl<V> sealed::Wrap for $name<V> {
            type Value = V;
            #[inline]
            fn wrap(value: V) -> Self {
                Self(value)
            }
        }

        impl<V: Integer> Guarantee for $name<V> {
            const NAME: &'static str = stringify!($name);

            #[inline]
            fn predicate($value: &V) -> bool {
                $predicate
            }

            #[inline]
            fn value(&self) -> &V {
                &self.0
            }

            #[inline]
            fn into_value(self) -> V {
                self.0
            }
        }

        impl<V: Integer> $name<V> {
            /// Borrowing version of [`Guarantee::exactly`].
            #[inline]
            pub fn exactly_ref(value: &V) -> Option<&Self> {
                if Self::predicate(value) {
                    Some(Self::ref_cast(value))
                } else {
                    None
                }
            }
        }

        impl<V> Deref for $name<V> {
            type Target = V;
            #[inline]
            fn deref(&self) -> &V {
                &self.0
            }
        }
    };
}

/// `TryFrom` per concrete value type; a blanket `impl<V>` would overlap core's.
macro_rules! try_from {
    ($($name:ident),*; $types:tt) => {$(
        try_from!(@each $name $types);
    )*};
    (@each $name:ident [$($type:ty),*]) => {$(
        impl TryFrom<$type> for $name<$type> {
            type Error = Error;
            fn try_from(value: $type) -> crate::Result<Self> {
                Self::try_new(value, Error)
            }
        }
    )*};
}

integer_guarantee!(
    /// A value other than zero.
    Nonzero,
    |value| !value.is_zero()
);

integer_guarantee!(
    /// A value one may divide by.
    Divisor,
    |value| !value.is_zero()
);

integer_guarantee!(
    /// Anything but an infinite unsigned [`InfiniInt`][crate::InfiniInt].
    Finite,
    |value| !value.is_infinite()
);

integer_guarantee!(
    /// A value that is not negative.
    Natural,
    |value| !value.is_negative()
);

try_from!(
    Nonzero, Divisor, Finite, Natural;
    [u8, u16, u32, u64, i8, i16, i32, i64, U128, I128, U256, I256, U512, I512, IXL, UXL]
);

impl<U: UnsignedElement> Nonzero<U> {
    /// Position of the most significant set bit.
    pub fn ilog2(&self) -> u32 {
        U::BITS - 1 - self.0.leading_zeros()
    }
}

impl<V: Integer> From<Nonzero<V>> for Divisor<V> {
    fn from(nonzero: Nonzero<V>) -> Self {
        Self(nonzero.0)
    }
}
