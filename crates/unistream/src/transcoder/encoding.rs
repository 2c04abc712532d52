//! The four encodings as types, so a transcoder can be named by its pair.

use crate::{
    CodeUnit, Error, LookBack, Pending,
    codec::{
        decode_latin1, decode_utf8, decode_utf16, decode_utf32, encode_latin1, encode_utf8,
        encode_utf8_units, encode_utf16, encode_utf16_units, encode_utf32,
    },
    io::{Sink, Source},
    validity::is_valid_scalar,
};

/// One scalar at a time over the encoding's code units.
pub trait Encoding {
    type Unit: CodeUnit;

    /// # Errors
    ///
    /// Malformed input or the source's fault.
    fn decode<S: Source<Self::Unit> + ?Sized>(source: &mut S) -> Result<Option<u32>, Error>;

    /// # Errors
    ///
    /// A scalar this encoding cannot carry, or the sink's fault.
    fn encode<S: Sink<Self::Unit> + ?Sized>(sink: &mut S, v: u32) -> Result<u32, Error>;

    /// Assembles UTF-8 bytes written one at a time into a scalar bound for
    /// this encoding.
    ///
    /// # Errors
    ///
    /// See [`Pending::push_utf8`].
    fn assemble_utf8(pending: &mut Pending, byte: u8) -> Result<Option<u32>, Error> {
        pending.push_utf8(byte)
    }
}

/// An encoding a user can read and write unit by unit.
pub trait UserEncoding: Encoding {
    /// Splits a decoded scalar into units and stages them for reading.
    ///
    /// # Errors
    ///
    /// [`Error::NotUnicode`] if `v` is not a valid scalar.
    fn stage(v: u32, out: &mut LookBack<Self::Unit>) -> Result<(), Error>;

    /// Feeds one written unit. Returns the scalar once it is complete.
    ///
    /// # Errors
    ///
    /// Malformed unit sequences; see [`Pending`].
    fn assemble<E: Encoding>(pending: &mut Pending, unit: Self::Unit) -> Result<Option<u32>, Error>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf32;

/// ISO-8859-1. External only: it has no multi-unit forms to bridge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latin1;

impl Encoding for Utf8 {
    type Unit = u8;

    fn decode<S: Source<u8> + ?Sized>(source: &mut S) -> Result<Option<u32>, Error> {
        decode_utf8(source)
    }

    fn encode<S: Sink<u8> + ?Sized>(sink: &mut S, v: u32) -> Result<u32, Error> {
        encode_utf8(sink, v)
    }
}

impl UserEncoding for Utf8 {
    fn stage(v: u32, out: &mut LookBack<u8>) -> Result<(), Error> {
        let mut buf = [0u8; 4];
        let len = encode_utf8_units(v, &mut buf)?;
        out.fill(&buf[..len]);
        Ok(())
    }

    fn assemble<E: Encoding>(pending: &mut Pending, unit: u8) -> Result<Option<u32>, Error> {
        E::assemble_utf8(pending, unit)
    }
}

impl Encoding for Utf16 {
    type Unit = u16;

    fn decode<S: Source<u16> + ?Sized>(source: &mut S) -> Result<Option<u32>, Error> {
        decode_utf16(source)
    }

    fn encode<S: Sink<u16> + ?Sized>(sink: &mut S, v: u32) -> Result<u32, Error> {
        encode_utf16(sink, v)
    }
}

impl UserEncoding for Utf16 {
    fn stage(v: u32, out: &mut LookBack<u16>) -> Result<(), Error> {
        let mut buf = [0u16; 2];
        let len = encode_utf16_units(v, &mut buf)?;
        out.fill(&buf[..len]);
        Ok(())
    }

    fn assemble<E: Encoding>(pending: &mut Pending, unit: u16) -> Result<Option<u32>, Error> {
        pending.push_utf16(unit)
    }
}

impl Encoding for Utf32 {
    type Unit = u32;

    fn decode<S: Source<u32> + ?Sized>(source: &mut S) -> Result<Option<u32>, Error> {
        decode_utf32(source)
    }

    fn encode<S: Sink<u32> + ?Sized>(sink: &mut S, v: u32) -> Result<u32, Error> {
        encode_utf32(sink, v)
    }
}

impl UserEncoding for Utf32 {
    fn stage(v: u32, out: &mut LookBack<u32>) -> Result<(), Error> {
        if !is_valid_scalar(v) {
            return Err(Error::NotUnicode);
        }
        out.fill(&[v]);
        Ok(())
    }

    // Whole scalars; the external encoder validates.
    fn assemble<E: Encoding>(_pending: &mut Pending, unit: u32) -> Result<Option<u32>, Error> {
        Ok(Some(unit))
    }
}

impl Encoding for Latin1 {
    type Unit = u8;

    fn decode<S: Source<u8> + ?Sized>(source: &mut S) -> Result<Option<u32>, Error> {
        decode_latin1(source)
    }

    fn encode<S: Sink<u8> + ?Sized>(sink: &mut S, v: u32) -> Result<u32, Error> {
        encode_latin1(sink, v)
    }

    /// Rejects lead bytes of sequences that could only encode values above
    /// `0xFF` as soon as they arrive.
    fn assemble_utf8(pending: &mut Pending, byte: u8) -> Result<Option<u32>, Error> {
        pending.push_latin1_utf8(byte).map(|b| b.map(u32::from))
    }
}
