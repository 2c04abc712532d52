//! Decode state carried between calls when a user writes one code unit at a
//! time and a scalar spans several of them.
//!
//! Exactly one variant is live per transcoder. It starts [`Pending::Empty`]
//! and must be empty again at end of sequence, otherwise the sequence was
//! truncated ([`Error::NoFollow`]). Every error leaves the state empty.

use core::mem;

use crate::{
    Error,
    codec::{MIN_FOR_LEN, check_assembled, classify_lead, combine_surrogates},
    validity::{is_utf8_continuation, is_valid_scalar},
};

/// Lead bytes from here up would carry a Latin-1 value above `0xFF`.
const FIRST_NON_LATIN1_LEAD: u8 = 0xC4;

/// Largest byte that can open a UTF-8 sequence of at most four bytes.
const MAX_LEAD: u8 = 0xF7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pending {
    #[default]
    Empty,
    /// A UTF-16 lead surrogate awaiting its trail.
    Lead(u16),
    /// A partially assembled UTF-8 sequence.
    Utf8 {
        /// Bits collected so far.
        acc: u32,
        /// Continuation bytes still required.
        need: u8,
        /// Smallest value this sequence length may legally encode.
        min: u32,
    },
    /// The lead byte of a two-byte UTF-8 sequence bound for ISO-8859-1.
    Latin1Lead(u8),
}

impl Pending {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Fails with [`Error::NoFollow`] if a multi-unit sequence is unfinished.
    ///
    /// # Errors
    ///
    /// See above; the state is cleared either way.
    pub fn finish(&mut self) -> Result<(), Error> {
        match mem::take(self) {
            Self::Empty => Ok(()),
            _ => Err(Error::NoFollow),
        }
    }

    /// Feeds one UTF-16 code unit. Returns the scalar once it is complete.
    ///
    /// # Errors
    ///
    /// [`Error::NoFollow`] for anything but a trail after a lead,
    /// [`Error::NoLead`] for a trail with no lead, [`Error::NotUnicode`] for
    /// noncharacters.
    pub fn push_utf16(&mut self, unit: u16) -> Result<Option<u32>, Error> {
        let held = match mem::take(self) {
            Self::Empty => None,
            Self::Lead(lead) => Some(lead),
            _ => return Err(Error::NoFollow),
        };
        match (held, unit) {
            (None, 0xD800..=0xDBFF) => {
                *self = Self::Lead(unit);
                Ok(None)
            }
            (None, 0xDC00..=0xDFFF) => Err(Error::NoLead),
            (None, _) => scalar(u32::from(unit)).map(Some),
            (Some(lead), 0xDC00..=0xDFFF) => scalar(combine_surrogates(lead, unit)).map(Some),
            (Some(_), _) => Err(Error::NoFollow),
        }
    }

    /// Feeds one UTF-8 byte. Returns the scalar once it is complete.
    ///
    /// # Errors
    ///
    /// [`Error::NotUtf8`] for bytes above `0xF7` and overlong sequences,
    /// [`Error::NoLead`] for a stray continuation byte, [`Error::NoFollow`]
    /// when a sequence is interrupted, [`Error::NotUnicode`] for invalid
    /// scalars.
    #[allow(clippy::cast_possible_truncation)]
    pub fn push_utf8(&mut self, byte: u8) -> Result<Option<u32>, Error> {
        if byte > MAX_LEAD {
            *self = Self::Empty;
            return Err(Error::NotUtf8);
        }
        match mem::take(self) {
            Self::Empty => match classify_lead(byte)? {
                (1, v) => Ok(Some(v)),
                (len, bits) => {
                    *self = Self::Utf8 {
                        acc: bits,
                        need: (len - 1) as u8,
                        min: MIN_FOR_LEN[len],
                    };
                    Ok(None)
                }
            },
            Self::Utf8 { acc, need, min } => {
                if !is_utf8_continuation(byte) {
                    return Err(Error::NoFollow);
                }
                let acc = (acc << 6) | u32::from(byte & 0x3F);
                if need > 1 {
                    *self = Self::Utf8 {
                        acc,
                        need: need - 1,
                        min,
                    };
                    return Ok(None);
                }
                if acc < min {
                    return Err(Error::NotUtf8);
                }
                scalar(acc).map(Some)
            }
            _ => Err(Error::NoFollow),
        }
    }

    /// Feeds one UTF-8 byte whose scalar is headed for ISO-8859-1, so only
    /// one- and two-byte sequences up to U+00FF are accepted.
    ///
    /// # Errors
    ///
    /// As [`Pending::push_utf8`], plus [`Error::NotIso8859_1`] for lead bytes
    /// that announce a value above `0xFF`.
    pub fn push_latin1_utf8(&mut self, byte: u8) -> Result<Option<u8>, Error> {
        let held = mem::take(self);
        if byte > MAX_LEAD {
            return Err(Error::NotUtf8);
        }
        // A wide lead is reported as such even when it interrupts a held one.
        if byte >= FIRST_NON_LATIN1_LEAD {
            return Err(Error::NotIso8859_1);
        }
        match (held, byte) {
            (Self::Empty, 0x00..=0x7F) => Ok(Some(byte)),
            (Self::Empty, 0x80..=0xBF) => Err(Error::NoLead),
            (Self::Empty, lead) => {
                *self = Self::Latin1Lead(lead);
                Ok(None)
            }
            (Self::Latin1Lead(lead), 0x80..=0xBF) => {
                let v = (u32::from(lead & 0x1F) << 6) | u32::from(byte & 0x3F);
                let v = check_assembled(v, 2)?;
                u8::try_from(v).map(Some).map_err(|_| Error::NotIso8859_1)
            }
            _ => Err(Error::NoFollow),
        }
    }
}

#[inline]
fn scalar(v: u32) -> Result<u32, Error> {
    if is_valid_scalar(v) {
        Ok(v)
    } else {
        Err(Error::NotUnicode)
    }
}
