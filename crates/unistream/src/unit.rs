use core::fmt::Debug;

use crate::Error;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// An 8-, 16- or 32-bit code unit.
pub trait CodeUnit: sealed::Sealed + Copy + Default + Eq + Debug + 'static {
    /// Width in bytes.
    const WIDTH: usize;
    /// Fault reported when a byte stream ends part way through a unit.
    const TRUNCATED: Error;

    /// Reads one unit in host byte order. `bytes` is exactly `WIDTH` long.
    fn from_ne_slice(bytes: &[u8]) -> Self;

    /// Writes one unit in host byte order into the first `WIDTH` bytes.
    fn write_ne(self, out: &mut [u8; 4]);
}

impl CodeUnit for u8 {
    const WIDTH: usize = 1;
    const TRUNCATED: Error = Error::BadInput;

    #[inline]
    fn from_ne_slice(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline]
    fn write_ne(self, out: &mut [u8; 4]) {
        out[0] = self;
    }
}

impl CodeUnit for u16 {
    const WIDTH: usize = 2;
    const TRUNCATED: Error = Error::NotUtf16;

    #[inline]
    fn from_ne_slice(bytes: &[u8]) -> Self {
        u16::from_ne_bytes([bytes[0], bytes[1]])
    }

    #[inline]
    fn write_ne(self, out: &mut [u8; 4]) {
        out[..2].copy_from_slice(&self.to_ne_bytes());
    }
}

impl CodeUnit for u32 {
    const WIDTH: usize = 4;
    const TRUNCATED: Error = Error::BadInput;

    #[inline]
    fn from_ne_slice(bytes: &[u8]) -> Self {
        u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    #[inline]
    fn write_ne(self, out: &mut [u8; 4]) {
        *out = self.to_ne_bytes();
    }
}
