/// A word on the machine. [`InfiniInt`][crate::InfiniInt] is composed of many digits,
/// and every [`Element`][crate::Element] can be viewed as a sequence of them.
///
/// Feature `u32` forces the digit to be 32-bit even on 64-bit architectures,
/// feature `u64` forces the digit to be 64-bit even on 32-bit architectures.
/// Without either, the build script picks the target's pointer width.
///
/// This is done only for easier testing (typically embedded targets are 32 bit,
/// while desktop/server targets are 64 bit).
pub type Digit = digit::Digit;

#[cfg(not(any(feature = "u32", feature = "u64")))]
compile_error!("Either feature u32 or feature u64!");

#[cfg(all(feature = "u32", feature = "u64"))]
compile_error!("Either feature u32 or feature u64, not both!");

#[cfg(feature = "u32")]
mod digit {
    pub type Digit = u32;
}

#[cfg(feature = "u64")]
mod digit {
    pub type Digit = u64;
}
