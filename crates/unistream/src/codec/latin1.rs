use crate::{
    Error,
    io::{Sink, Source},
    validity::is_valid_scalar,
};

/// Decodes one ISO-8859-1 byte. Every byte is its own scalar value.
///
/// # Errors
///
/// Only the source's fault.
pub fn decode_latin1<S: Source<u8> + ?Sized>(source: &mut S) -> Result<Option<u32>, Error> {
    let Some(b) = source.pull()? else {
        return Ok(None);
    };
    let v = u32::from(b);
    debug_assert!(is_valid_scalar(v));
    Ok(Some(v))
}

/// Narrows a scalar to its ISO-8859-1 byte.
///
/// # Errors
///
/// [`Error::NotUnicode`] for invalid scalars and [`Error::NotIso8859_1`] for
/// valid ones above [`MAX_LATIN1`](super::MAX_LATIN1).
#[inline]
pub fn latin1_byte(v: u32) -> Result<u8, Error> {
    if !is_valid_scalar(v) {
        return Err(Error::NotUnicode);
    }
    u8::try_from(v).map_err(|_| Error::NotIso8859_1)
}

/// Encodes one scalar as a single ISO-8859-1 byte.
///
/// # Errors
///
/// See [`latin1_byte`], plus the sink's fault.
pub fn encode_latin1<S: Sink<u8> + ?Sized>(sink: &mut S, v: u32) -> Result<u32, Error> {
    sink.push(latin1_byte(v)?)?;
    Ok(v)
}
