use crate::{
    Error,
    io::{Sink, Source},
    validity::{is_utf8_continuation, is_valid_scalar},
};

/// Smallest scalar that needs a sequence of the indexed length. Anything
/// below it is an overlong encoding.
pub(crate) const MIN_FOR_LEN: [u32; 5] = [0, 0, 0x80, 0x800, 0x1_0000];

/// Sequence length announced by a lead byte and the payload bits it carries.
///
/// # Errors
///
/// [`Error::NoLead`] for a stray continuation byte and [`Error::NotUtf8`]
/// for `0xF8..=0xFF`, which would start five- and six-byte forms.
#[inline]
pub(crate) const fn classify_lead(b: u8) -> Result<(usize, u32), Error> {
    match b {
        0x00..=0x7F => Ok((1, b as u32)),
        0x80..=0xBF => Err(Error::NoLead),
        0xC0..=0xDF => Ok((2, (b & 0x1F) as u32)),
        0xE0..=0xEF => Ok((3, (b & 0x0F) as u32)),
        0xF0..=0xF7 => Ok((4, (b & 0x07) as u32)),
        0xF8..=0xFF => Err(Error::NotUtf8),
    }
}

/// Checks an assembled multi-byte value: overlong forms first, then scalar
/// validity.
#[inline]
pub(crate) const fn check_assembled(value: u32, len: usize) -> Result<u32, Error> {
    if value < MIN_FOR_LEN[len] {
        return Err(Error::NotUtf8);
    }
    if !is_valid_scalar(value) {
        return Err(Error::NotUnicode);
    }
    Ok(value)
}

/// Decodes one scalar from UTF-8 bytes.
///
/// # Errors
///
/// - [`Error::NoLead`] when the first byte is a continuation byte.
/// - [`Error::NotUtf8`] for a lead byte above `0xF7`, a bad continuation
///   byte, or an overlong encoding.
/// - [`Error::NoFollow`] when the source ends inside a sequence.
/// - [`Error::NotUnicode`] when the value is not a valid scalar.
/// - Whatever the source reports.
pub fn decode_utf8<S: Source<u8> + ?Sized>(source: &mut S) -> Result<Option<u32>, Error> {
    let Some(lead) = source.pull()? else {
        return Ok(None);
    };
    let (len, mut value) = classify_lead(lead)?;
    if len == 1 {
        return Ok(Some(value));
    }
    for _ in 1..len {
        let b = source.pull()?.ok_or(Error::NoFollow)?;
        if !is_utf8_continuation(b) {
            return Err(Error::NotUtf8);
        }
        value = (value << 6) | u32::from(b & 0x3F);
    }
    check_assembled(value, len).map(Some)
}

/// Number of bytes `v` takes in UTF-8.
#[inline]
#[must_use]
pub const fn utf8_len(v: u32) -> usize {
    if v < 0x80 {
        1
    } else if v < 0x800 {
        2
    } else if v < 0x1_0000 {
        3
    } else {
        4
    }
}

/// Encodes `v` into `out` and returns how many bytes were used.
///
/// # Errors
///
/// [`Error::NotUnicode`] if `v` is not a valid scalar; `out` is untouched.
#[allow(clippy::cast_possible_truncation)]
pub fn encode_utf8_units(v: u32, out: &mut [u8; 4]) -> Result<usize, Error> {
    if !is_valid_scalar(v) {
        return Err(Error::NotUnicode);
    }
    let len = utf8_len(v);
    match len {
        1 => out[0] = v as u8,
        2 => {
            out[0] = 0xC0 | (v >> 6) as u8;
            out[1] = 0x80 | (v & 0x3F) as u8;
        }
        3 => {
            out[0] = 0xE0 | (v >> 12) as u8;
            out[1] = 0x80 | ((v >> 6) & 0x3F) as u8;
            out[2] = 0x80 | (v & 0x3F) as u8;
        }
        _ => {
            out[0] = 0xF0 | (v >> 18) as u8;
            out[1] = 0x80 | ((v >> 12) & 0x3F) as u8;
            out[2] = 0x80 | ((v >> 6) & 0x3F) as u8;
            out[3] = 0x80 | (v & 0x3F) as u8;
        }
    }
    Ok(len)
}

/// Encodes one scalar as UTF-8 and returns it.
///
/// # Errors
///
/// [`Error::NotUnicode`] before anything is written, or the sink's fault.
/// On a sink fault the bytes already pushed stay pushed.
pub fn encode_utf8<S: Sink<u8> + ?Sized>(sink: &mut S, v: u32) -> Result<u32, Error> {
    let mut buf = [0u8; 4];
    let len = encode_utf8_units(v, &mut buf)?;
    for &b in &buf[..len] {
        sink.push(b)?;
    }
    Ok(v)
}
