//! Byte-order resolution for 16- and 32-bit code-unit streams.
//!
//! A swap state is either a request (`Le`, `Be`, `FirstUnit`) or a concrete
//! permutation of the bytes of one unit. Requests turn into permutations by
//! [`U32Swap::resolve`] / [`U16Swap::resolve`] against an explicit
//! [`HostOrder`], or by matching a byte-order mark with `from_bom`. Every
//! concrete permutation is its own inverse, so one value serves both the read
//! and the write side.
//!
//! Permutations are named after where the bytes of `0x01020304` end up:
//! `V2143` turns it into `0x02010403`.

use core::fmt::Debug;

use crate::{CodeUnit, Error, codec::BOM, validity::is_valid_scalar};

/// The host's layout of a 32-bit integer in memory.
///
/// Only [`HostOrder::Big`] and [`HostOrder::Little`] occur on targets Rust
/// supports; the mixed orders are kept so streams written by such machines
/// can be described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum HostOrder {
    /// 1234
    Big,
    /// 4321
    Little,
    /// 2143: big-endian words, little-endian bytes within each word.
    BigWordsSwappedBytes,
    /// 3412: little-endian words, big-endian bytes within each word.
    SwappedWords,
}

impl HostOrder {
    /// The order of the compilation target.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Self::Little
        } else {
            Self::Big
        }
    }

    /// Whether a 16-bit integer is stored low byte first.
    #[must_use]
    pub const fn is_little_16(self) -> bool {
        matches!(self, Self::Little | Self::BigWordsSwappedBytes)
    }

    /// The permutation that turns big-endian 32-bit data into host order.
    const fn big_endian_swap(self) -> U32Swap {
        match self {
            Self::Big => U32Swap::V1234,
            Self::Little => U32Swap::V4321,
            Self::BigWordsSwappedBytes => U32Swap::V2143,
            Self::SwappedWords => U32Swap::V3412,
        }
    }
}

impl Default for HostOrder {
    fn default() -> Self {
        Self::native()
    }
}

/// Byte-order handling for 32-bit units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum U32Swap {
    /// Units pass through untouched.
    #[default]
    None,
    /// Read: take the order from the byte-order mark that starts the stream.
    /// Write: start the stream with a native byte-order mark.
    FirstUnit,
    /// The stream is little-endian.
    Le,
    /// The stream is big-endian.
    Be,
    V1234,
    V2143,
    V3412,
    V4321,
}

impl U32Swap {
    /// Turns an `Le`/`Be` request into the permutation for `host`. Every
    /// other state is returned unchanged.
    #[must_use]
    pub const fn resolve(self, host: HostOrder) -> Self {
        match self {
            Self::Be => host.big_endian_swap(),
            Self::Le => match host.big_endian_swap() {
                Self::V1234 => Self::V4321,
                Self::V4321 => Self::V1234,
                Self::V2143 => Self::V3412,
                _ => Self::V2143,
            },
            other => other,
        }
    }

    /// The permutation that turns `raw` into [`BOM`], if `raw` is a
    /// byte-order mark in any order.
    #[must_use]
    pub const fn from_bom(raw: u32) -> Option<Self> {
        match raw {
            0x0000_FEFF => Some(Self::V1234),
            0xFFFE_0000 => Some(Self::V4321),
            0x0000_FFFE => Some(Self::V2143),
            0xFEFF_0000 => Some(Self::V3412),
            _ => None,
        }
    }

    /// Permutes the bytes of `unit`.
    ///
    /// # Panics
    ///
    /// On `FirstUnit`, `Le` and `Be`, which must be resolved first.
    #[must_use]
    pub const fn apply(self, unit: u32) -> u32 {
        match self {
            Self::None | Self::V1234 => unit,
            Self::V2143 => ((unit & 0x00FF_00FF) << 8) | ((unit >> 8) & 0x00FF_00FF),
            Self::V3412 => unit.rotate_left(16),
            Self::V4321 => unit.swap_bytes(),
            Self::FirstUnit | Self::Le | Self::Be => unreachable!(),
        }
    }

    /// True when [`U32Swap::apply`] can be called.
    #[must_use]
    pub const fn is_concrete(self) -> bool {
        !matches!(self, Self::FirstUnit | Self::Le | Self::Be)
    }
}

/// Byte-order handling for 16-bit units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum U16Swap {
    #[default]
    None,
    FirstUnit,
    Le,
    Be,
    V12,
    V21,
}

impl U16Swap {
    #[must_use]
    pub const fn resolve(self, host: HostOrder) -> Self {
        match (self, host.is_little_16()) {
            (Self::Le, true) | (Self::Be, false) => Self::V12,
            (Self::Le, false) | (Self::Be, true) => Self::V21,
            (other, _) => other,
        }
    }

    #[must_use]
    pub const fn from_bom(raw: u16) -> Option<Self> {
        match raw {
            0xFEFF => Some(Self::V12),
            0xFFFE => Some(Self::V21),
            _ => None,
        }
    }

    /// # Panics
    ///
    /// On unresolved requests, like [`U32Swap::apply`].
    #[must_use]
    pub const fn apply(self, unit: u16) -> u16 {
        match self {
            Self::None | Self::V12 => unit,
            Self::V21 => unit.swap_bytes(),
            Self::FirstUnit | Self::Le | Self::Be => unreachable!(),
        }
    }

    #[must_use]
    pub const fn is_concrete(self) -> bool {
        !matches!(self, Self::FirstUnit | Self::Le | Self::Be)
    }
}

/// What a byte-swap transcoder needs from a swap state.
pub trait SwapState: Copy + Eq + Debug + Default {
    type Unit: CodeUnit;

    const FIRST_UNIT: Self;
    /// The permutation settled on after a byte-order mark has been written.
    const IDENTITY: Self;
    /// The byte-order mark as a unit in host order.
    const BOM: Self::Unit;

    #[must_use]
    fn resolve(self, host: HostOrder) -> Self;
    fn from_bom(raw: Self::Unit) -> Option<Self>;
    #[must_use]
    fn apply(self, unit: Self::Unit) -> Self::Unit;
    fn is_concrete(self) -> bool;

    /// Checks a unit in host order before it is handed on.
    ///
    /// # Errors
    ///
    /// Whatever the unit width demands; see the impls.
    fn check_unit(unit: Self::Unit) -> Result<Self::Unit, Error>;
}

impl SwapState for U32Swap {
    type Unit = u32;

    const FIRST_UNIT: Self = Self::FirstUnit;
    const IDENTITY: Self = Self::V1234;
    const BOM: u32 = BOM;

    fn resolve(self, host: HostOrder) -> Self {
        Self::resolve(self, host)
    }

    fn from_bom(raw: u32) -> Option<Self> {
        Self::from_bom(raw)
    }

    fn apply(self, unit: u32) -> u32 {
        Self::apply(self, unit)
    }

    fn is_concrete(self) -> bool {
        Self::is_concrete(self)
    }

    /// A 32-bit unit is a whole scalar, so it must be a valid one
    /// ([`Error::NotUnicode`] otherwise).
    fn check_unit(unit: u32) -> Result<u32, Error> {
        if is_valid_scalar(unit) {
            Ok(unit)
        } else {
            Err(Error::NotUnicode)
        }
    }
}

impl SwapState for U16Swap {
    type Unit = u16;

    const FIRST_UNIT: Self = Self::FirstUnit;
    const IDENTITY: Self = Self::V12;
    #[allow(clippy::cast_possible_truncation)]
    const BOM: u16 = BOM as u16;

    fn resolve(self, host: HostOrder) -> Self {
        Self::resolve(self, host)
    }

    fn from_bom(raw: u16) -> Option<Self> {
        Self::from_bom(raw)
    }

    fn apply(self, unit: u16) -> u16 {
        Self::apply(self, unit)
    }

    fn is_concrete(self) -> bool {
        Self::is_concrete(self)
    }

    /// Raw surrogate halves pass; pairing is the next stage's job.
    fn check_unit(unit: u16) -> Result<u16, Error> {
        Ok(unit)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{HostOrder, U16Swap, U32Swap};

    #[rstest]
    #[case(HostOrder::Big, U32Swap::V4321, U32Swap::V1234)]
    #[case(HostOrder::Little, U32Swap::V1234, U32Swap::V4321)]
    #[case(HostOrder::BigWordsSwappedBytes, U32Swap::V3412, U32Swap::V2143)]
    #[case(HostOrder::SwappedWords, U32Swap::V2143, U32Swap::V3412)]
    fn u32_requests(#[case] host: HostOrder, #[case] le: U32Swap, #[case] be: U32Swap) {
        assert_eq!(U32Swap::Le.resolve(host), le);
        assert_eq!(U32Swap::Be.resolve(host), be);
        assert_eq!(U32Swap::FirstUnit.resolve(host), U32Swap::FirstUnit);
        assert_eq!(U32Swap::V3412.resolve(host), U32Swap::V3412);
    }

    #[test]
    fn u32_little_endian_bytes_on_every_host() {
        let bytes = 0x0102_0304u32.to_le_bytes();
        let native = u32::from_ne_bytes(bytes);
        let swap = U32Swap::Le.resolve(HostOrder::native());
        assert_eq!(swap.apply(native), 0x0102_0304);
    }

    #[test]
    fn u32_permutation_layouts() {
        assert_eq!(U32Swap::V2143.apply(0x0102_0304), 0x0201_0403);
        assert_eq!(U32Swap::V3412.apply(0x0102_0304), 0x0304_0102);
        assert_eq!(U32Swap::V4321.apply(0x0102_0304), 0x0403_0201);
        assert_eq!(U32Swap::None.apply(0x0102_0304), 0x0102_0304);
    }

    #[test]
    fn every_bom_order_is_recognized() {
        for raw in [0x0000_FEFF, 0xFFFE_0000, 0x0000_FFFE, 0xFEFF_0000] {
            let swap = U32Swap::from_bom(raw).unwrap();
            assert_eq!(swap.apply(raw), 0xFEFF);
        }
        assert_eq!(U32Swap::from_bom(0x41), None);
        assert_eq!(U16Swap::from_bom(0xFFFE).map(|s| s.apply(0xFFFE)), Some(0xFEFF));
        assert_eq!(U16Swap::from_bom(0xFEFF), Some(U16Swap::V12));
        assert_eq!(U16Swap::from_bom(0x0041), None);
    }

    #[rstest]
    #[case(HostOrder::Big, U16Swap::V21, U16Swap::V12)]
    #[case(HostOrder::SwappedWords, U16Swap::V21, U16Swap::V12)]
    #[case(HostOrder::Little, U16Swap::V12, U16Swap::V21)]
    #[case(HostOrder::BigWordsSwappedBytes, U16Swap::V12, U16Swap::V21)]
    fn u16_requests(#[case] host: HostOrder, #[case] le: U16Swap, #[case] be: U16Swap) {
        assert_eq!(U16Swap::Le.resolve(host), le);
        assert_eq!(U16Swap::Be.resolve(host), be);
        assert_eq!(U16Swap::None.resolve(host), U16Swap::None);
    }

    #[test]
    #[should_panic(expected = "internal error: entered unreachable code")]
    fn unresolved_apply_is_a_bug() {
        let _ = U32Swap::Le.apply(0);
    }

    #[test]
    fn concreteness() {
        assert!(U32Swap::None.is_concrete());
        assert!(U32Swap::V2143.is_concrete());
        assert!(!U32Swap::FirstUnit.is_concrete());
        assert!(!U16Swap::Be.is_concrete());
        assert!(U16Swap::V21.is_concrete());
    }
}
