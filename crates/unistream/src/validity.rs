//! Predicates gating every value that crosses an encoding boundary.

/// Largest Unicode code point.
pub const MAX_SCALAR: u32 = 0x10_FFFF;

/// True if `v` is a scalar value this crate will move between encodings:
/// at most U+10FFFF, not a surrogate, and not a noncharacter ending in
/// `FFFE`/`FFFF` in any plane.
#[inline]
#[must_use]
pub const fn is_valid_scalar(v: u32) -> bool {
    if v > MAX_SCALAR {
        return false;
    }
    if v & 0xFFFE == 0xFFFE {
        return false;
    }
    !(v >= 0xD800 && v <= 0xDFFF)
}

#[inline]
#[must_use]
pub const fn is_utf16_lead(u: u16) -> bool {
    u >= 0xD800 && u <= 0xDBFF
}

#[inline]
#[must_use]
pub const fn is_utf16_trail(u: u16) -> bool {
    u >= 0xDC00 && u <= 0xDFFF
}

#[inline]
#[must_use]
pub const fn is_utf16_surrogate(u: u16) -> bool {
    u >= 0xD800 && u <= 0xDFFF
}

#[inline]
#[must_use]
pub const fn is_utf8_continuation(b: u8) -> bool {
    b >= 0x80 && b <= 0xBF
}
