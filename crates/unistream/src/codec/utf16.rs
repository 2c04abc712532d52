use crate::{
    Error,
    io::{Sink, Source},
    validity::{is_utf16_trail, is_valid_scalar},
};

/// Combines a surrogate pair. The caller has already classified both halves.
#[inline]
#[must_use]
pub(crate) const fn combine_surrogates(lead: u16, trail: u16) -> u32 {
    ((((lead & 0x3FF) as u32) << 10) | (trail & 0x3FF) as u32) + 0x1_0000
}

/// Decodes one scalar from UTF-16 code units.
///
/// # Errors
///
/// - [`Error::NoLead`] when the first unit is a trail surrogate.
/// - [`Error::NoFollow`] when a lead surrogate is not followed by a trail
///   surrogate, including at end of sequence.
/// - [`Error::NotUnicode`] for noncharacters.
/// - Whatever the source reports.
pub fn decode_utf16<S: Source<u16> + ?Sized>(source: &mut S) -> Result<Option<u32>, Error> {
    let Some(first) = source.pull()? else {
        return Ok(None);
    };
    match first {
        0xD800..=0xDBFF => {
            let trail = source.pull()?.ok_or(Error::NoFollow)?;
            if !is_utf16_trail(trail) {
                return Err(Error::NoFollow);
            }
            let v = combine_surrogates(first, trail);
            if !is_valid_scalar(v) {
                return Err(Error::NotUnicode);
            }
            Ok(Some(v))
        }
        0xDC00..=0xDFFF => Err(Error::NoLead),
        _ => {
            let v = u32::from(first);
            if !is_valid_scalar(v) {
                return Err(Error::NotUnicode);
            }
            Ok(Some(v))
        }
    }
}

#[inline]
#[must_use]
pub const fn utf16_len(v: u32) -> usize {
    if v < 0x1_0000 { 1 } else { 2 }
}

/// Encodes `v` into `out` and returns how many units were used.
///
/// # Errors
///
/// [`Error::NotUnicode`] if `v` is not a valid scalar; `out` is untouched.
#[allow(clippy::cast_possible_truncation)]
pub fn encode_utf16_units(v: u32, out: &mut [u16; 2]) -> Result<usize, Error> {
    if !is_valid_scalar(v) {
        return Err(Error::NotUnicode);
    }
    if v < 0x1_0000 {
        out[0] = v as u16;
        return Ok(1);
    }
    let k = v - 0x1_0000;
    out[0] = 0xD800 | (k >> 10) as u16;
    out[1] = 0xDC00 | (k & 0x3FF) as u16;
    Ok(2)
}

/// Encodes one scalar as UTF-16 and returns it.
///
/// # Errors
///
/// [`Error::NotUnicode`] before anything is written, or the sink's fault.
pub fn encode_utf16<S: Sink<u16> + ?Sized>(sink: &mut S, v: u32) -> Result<u32, Error> {
    let mut buf = [0u16; 2];
    let len = encode_utf16_units(v, &mut buf)?;
    for &u in &buf[..len] {
        sink.push(u)?;
    }
    Ok(v)
}
