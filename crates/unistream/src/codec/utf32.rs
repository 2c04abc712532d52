use crate::{
    Error,
    io::{Sink, Source},
    validity::is_valid_scalar,
};

/// Decodes one scalar from UTF-32: one unit, validated.
///
/// # Errors
///
/// [`Error::NotUnicode`] for anything that is not a valid scalar, or the
/// source's fault.
pub fn decode_utf32<S: Source<u32> + ?Sized>(source: &mut S) -> Result<Option<u32>, Error> {
    match source.pull()? {
        Some(v) if !is_valid_scalar(v) => Err(Error::NotUnicode),
        other => Ok(other),
    }
}

/// Encodes one scalar as a single UTF-32 unit.
///
/// # Errors
///
/// [`Error::NotUnicode`] before anything is written, or the sink's fault.
pub fn encode_utf32<S: Sink<u32> + ?Sized>(sink: &mut S, v: u32) -> Result<u32, Error> {
    if !is_valid_scalar(v) {
        return Err(Error::NotUnicode);
    }
    sink.push(v)?;
    Ok(v)
}
