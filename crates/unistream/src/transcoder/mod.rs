//! Stateful transcoders: one user-side unit per call, in either direction.
//!
//! A [`Transcoder`] pairs a [`Codec`] with an optional [`Source`] of external
//! units (for reading) and an optional [`Sink`] of external units (for
//! writing). The first fault it reports is sticky: every later call fails
//! with the same error, without touching the source or sink, until
//! [`Transcoder::clear_status`].
//!
//! ```rust
//! use unistream::{U32Utf8, UnitReader, io::SliceSource};
//!
//! let bytes = "h\u{E9}".as_bytes();
//! let mut reader = U32Utf8::with_source(SliceSource::new(bytes));
//! assert_eq!(reader.read_unit(), Ok(Some(0x68)));
//! assert_eq!(reader.read_unit(), Ok(Some(0xE9)));
//! assert_eq!(reader.read_unit(), Ok(None));
//! ```

mod bridge;
mod byteswap;
pub mod encoding;

pub use bridge::Bridge;
pub use byteswap::ByteSwap;
use encoding::{Latin1, Utf8, Utf16, Utf32};

use crate::{
    CodeUnit, Error, LookBack, Status,
    io::{Sink, Source, Unbound},
    swap::{U16Swap, U32Swap},
};

/// The per-pair logic of a transcoder, plus whatever state it carries
/// between calls.
pub trait Codec {
    /// Units the user reads and writes.
    type User: CodeUnit;
    /// Units exchanged with the source and sink.
    type External: CodeUnit;

    /// Decodes one scalar from `source` and stages its user units.
    /// Returns `false` at a clean end of sequence.
    ///
    /// # Errors
    ///
    /// Malformed input, or the source's fault.
    fn decode<S: Source<Self::External> + ?Sized>(
        &mut self,
        source: &mut S,
        staged: &mut LookBack<Self::User>,
    ) -> Result<bool, Error>;

    /// Takes one user unit, writing whatever it completes.
    ///
    /// # Errors
    ///
    /// Malformed input, or the sink's fault.
    fn encode<S: Sink<Self::External> + ?Sized>(
        &mut self,
        unit: Self::User,
        sink: &mut S,
    ) -> Result<(), Error>;

    /// Marks the end of what the user writes.
    ///
    /// # Errors
    ///
    /// [`Error::NoFollow`] when a multi-unit sequence was left unfinished.
    fn encode_end<S: Sink<Self::External> + ?Sized>(&mut self, sink: &mut S) -> Result<(), Error>;
}

/// Reading one unit at a time.
pub trait UnitReader {
    type Unit;

    /// The next unit, or `Ok(None)` at end of sequence.
    ///
    /// # Errors
    ///
    /// The transcoder's status if it is not OK, otherwise the fault this
    /// read ran into, which then becomes the status.
    fn read_unit(&mut self) -> Result<Option<Self::Unit>, Error>;
}

/// Writing one unit at a time.
pub trait UnitWriter {
    type Unit;

    /// # Errors
    ///
    /// As [`UnitReader::read_unit`].
    fn write_unit(&mut self, unit: Self::Unit) -> Result<(), Error>;

    /// Signals the end of the written sequence.
    ///
    /// # Errors
    ///
    /// [`Error::NoFollow`] if the last scalar is incomplete, or a sticky
    /// status.
    fn write_end(&mut self) -> Result<(), Error>;
}

/// A codec bound to a source, a sink, or both.
///
/// Dropping a transcoder with a sink performs [`UnitWriter::write_end`]
/// unless its status is already failed. A truncated sequence found then can
/// only be logged, so call `write_end` yourself to see it.
pub struct Transcoder<C: Codec, R: Source<C::External> = Unbound, W: Sink<C::External> = Unbound> {
    codec: C,
    source: R,
    sink: W,
    status: Status,
    lookback: LookBack<C::User>,
}

impl<C: Codec, R: Source<C::External>, W: Sink<C::External>> Transcoder<C, R, W> {
    pub fn with_codec(codec: C, source: R, sink: W) -> Self {
        Self {
            codec,
            source,
            sink,
            status: Status::Ok,
            lookback: LookBack::new(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Resets the status to OK. Nothing else is touched.
    pub fn clear_status(&mut self) {
        self.status = Status::Ok;
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Recently read units and those decoded but not yet read.
    pub fn lookback(&self) -> &LookBack<C::User> {
        &self.lookback
    }

    /// Puts the last unit read back, so the next read returns it again.
    /// Returns false when there is nothing to put back.
    pub fn unread(&mut self) -> bool {
        self.lookback.unread()
    }

    /// Iterates over the units read. Stops after the end of sequence or the
    /// first error.
    pub fn units(&mut self) -> Units<'_, C, R, W> {
        Units {
            inner: self,
            done: false,
        }
    }

    fn fail(&mut self, e: Error) -> Error {
        log::debug!("transcoder status set: {e}");
        self.status = Status::Failed(e);
        e
    }
}

impl<C: Codec + Default, R: Source<C::External>, W: Sink<C::External>> Transcoder<C, R, W> {
    pub fn new(source: R, sink: W) -> Self {
        Self::with_codec(C::default(), source, sink)
    }
}

impl<C: Codec + Default, R: Source<C::External>> Transcoder<C, R, Unbound> {
    pub fn with_source(source: R) -> Self {
        Self::with_codec(C::default(), source, Unbound)
    }
}

impl<C: Codec + Default, W: Sink<C::External>> Transcoder<C, Unbound, W> {
    pub fn with_sink(sink: W) -> Self {
        Self::with_codec(C::default(), Unbound, sink)
    }
}

impl<C: Codec, R: Source<C::External>, W: Sink<C::External>> UnitReader for Transcoder<C, R, W> {
    type Unit = C::User;

    fn read_unit(&mut self) -> Result<Option<C::User>, Error> {
        self.status.check()?;
        if let Some(unit) = self.lookback.next() {
            return Ok(Some(unit));
        }
        if !self.source.is_bound() {
            return Err(self.fail(Error::NoSource));
        }
        match self.codec.decode(&mut self.source, &mut self.lookback) {
            Ok(true) => Ok(self.lookback.next()),
            Ok(false) => Ok(None),
            Err(e) => Err(self.fail(e)),
        }
    }
}

impl<C: Codec, R: Source<C::External>, W: Sink<C::External>> UnitWriter for Transcoder<C, R, W> {
    type Unit = C::User;

    fn write_unit(&mut self, unit: C::User) -> Result<(), Error> {
        self.status.check()?;
        if !self.sink.is_bound() {
            return Err(self.fail(Error::NoSink));
        }
        self.codec
            .encode(unit, &mut self.sink)
            .map_err(|e| self.fail(e))
    }

    fn write_end(&mut self) -> Result<(), Error> {
        self.status.check()?;
        if !self.sink.is_bound() {
            return Err(self.fail(Error::NoSink));
        }
        self.codec
            .encode_end(&mut self.sink)
            .map_err(|e| self.fail(e))
    }
}

impl<C: Codec, R: Source<C::External>, W: Sink<C::External>> Source<C::User> for Transcoder<C, R, W> {
    fn pull(&mut self) -> Result<Option<C::User>, Error> {
        self.read_unit()
    }

    fn is_bound(&self) -> bool {
        self.source.is_bound()
    }
}

impl<C: Codec, R: Source<C::External>, W: Sink<C::External>> Sink<C::User> for Transcoder<C, R, W> {
    fn push(&mut self, unit: C::User) -> Result<(), Error> {
        self.write_unit(unit)
    }

    fn is_bound(&self) -> bool {
        self.sink.is_bound()
    }
}

impl<C: Codec, R: Source<C::External>, W: Sink<C::External>> Drop for Transcoder<C, R, W> {
    fn drop(&mut self) {
        if !self.sink.is_bound() || !self.status.is_ok() {
            return;
        }
        if let Err(e) = self.write_end() {
            log::warn!("transcoder dropped mid-sequence: {e}");
        }
    }
}

impl<C, R, W> core::fmt::Debug for Transcoder<C, R, W>
where
    C: Codec + core::fmt::Debug,
    R: Source<C::External>,
    W: Sink<C::External>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Transcoder")
            .field("codec", &self.codec)
            .field("status", &self.status)
            .field("reads", &self.source.is_bound())
            .field("writes", &self.sink.is_bound())
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`Transcoder::units`].
pub struct Units<'a, C: Codec, R: Source<C::External>, W: Sink<C::External>> {
    inner: &'a mut Transcoder<C, R, W>,
    done: bool,
}

impl<C: Codec, R: Source<C::External>, W: Sink<C::External>> Iterator for Units<'_, C, R, W> {
    type Item = Result<C::User, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.read_unit() {
            Ok(Some(unit)) => Some(Ok(unit)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<C: Codec, R: Source<C::External>, W: Sink<C::External>> core::iter::FusedIterator
    for Units<'_, C, R, W>
{
}

/// UTF-32 checked against UTF-32.
pub type U32Stream<R = Unbound, W = Unbound> = Transcoder<Bridge<Utf32, Utf32>, R, W>;
/// UTF-32 over UTF-16.
pub type U32Utf16<R = Unbound, W = Unbound> = Transcoder<Bridge<Utf32, Utf16>, R, W>;
/// UTF-32 over UTF-8.
pub type U32Utf8<R = Unbound, W = Unbound> = Transcoder<Bridge<Utf32, Utf8>, R, W>;
/// UTF-32 over ISO-8859-1.
pub type U32Latin1<R = Unbound, W = Unbound> = Transcoder<Bridge<Utf32, Latin1>, R, W>;
/// UTF-16 over UTF-32.
pub type U16Utf32<R = Unbound, W = Unbound> = Transcoder<Bridge<Utf16, Utf32>, R, W>;
/// UTF-16 checked against UTF-16.
pub type U16Stream<R = Unbound, W = Unbound> = Transcoder<Bridge<Utf16, Utf16>, R, W>;
/// UTF-16 over UTF-8.
pub type U16Utf8<R = Unbound, W = Unbound> = Transcoder<Bridge<Utf16, Utf8>, R, W>;
/// UTF-16 over ISO-8859-1.
pub type U16Latin1<R = Unbound, W = Unbound> = Transcoder<Bridge<Utf16, Latin1>, R, W>;
/// UTF-8 over UTF-32.
pub type Utf8Utf32<R = Unbound, W = Unbound> = Transcoder<Bridge<Utf8, Utf32>, R, W>;
/// UTF-8 over UTF-16.
pub type Utf8Utf16<R = Unbound, W = Unbound> = Transcoder<Bridge<Utf8, Utf16>, R, W>;
/// UTF-8 checked against UTF-8.
pub type Utf8Stream<R = Unbound, W = Unbound> = Transcoder<Bridge<Utf8, Utf8>, R, W>;
/// UTF-8 over ISO-8859-1.
pub type Utf8Latin1<R = Unbound, W = Unbound> = Transcoder<Bridge<Utf8, Latin1>, R, W>;
/// Host-order UTF-32 over UTF-32 in the stream's byte order.
pub type U32ByteSwap<R = Unbound, W = Unbound> = Transcoder<ByteSwap<U32Swap>, R, W>;
/// Host-order UTF-16 units over UTF-16 units in the stream's byte order.
pub type U16ByteSwap<R = Unbound, W = Unbound> = Transcoder<ByteSwap<U16Swap>, R, W>;
