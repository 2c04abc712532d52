//! Scalar codecs: decode or encode exactly one scalar value per call over a
//! [`Source`](crate::io::Source) or [`Sink`](crate::io::Sink) of native code
//! units.
//!
//! Decoders return `Ok(None)` at a clean end of sequence. Units already
//! pulled before a fault are not put back, and encoders validate before
//! writing anything.

mod latin1;
mod utf16;
mod utf32;
mod utf8;

pub use latin1::{decode_latin1, encode_latin1, latin1_byte};
pub(crate) use utf8::{MIN_FOR_LEN, check_assembled, classify_lead};
pub use utf16::{decode_utf16, encode_utf16, encode_utf16_units, utf16_len};
pub(crate) use utf16::combine_surrogates;
pub use utf32::{decode_utf32, encode_utf32};
pub use utf8::{decode_utf8, encode_utf8, encode_utf8_units, utf8_len};

/// The byte-order mark, U+FEFF.
pub const BOM: u32 = 0xFEFF;

/// Largest scalar ISO-8859-1 can carry.
pub const MAX_LATIN1: u32 = 0xFF;
