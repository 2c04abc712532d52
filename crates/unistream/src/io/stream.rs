use core::marker::PhantomData;
use std::io::{ErrorKind, Read, Write};

use super::{Sink, Source};
use crate::{CodeUnit, Error};

/// Pulls host-order code units out of a [`Read`].
///
/// A stream that stops part way through a unit yields
/// [`CodeUnit::TRUNCATED`]; any other I/O error is [`Error::SourceFault`].
#[derive(Debug)]
pub struct ReadSource<R, T> {
    inner: R,
    _unit: PhantomData<T>,
}

impl<R: Read, T: CodeUnit> ReadSource<R, T> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            _unit: PhantomData,
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read, T: CodeUnit> Source<T> for ReadSource<R, T> {
    fn pull(&mut self) -> Result<Option<T>, Error> {
        let mut buf = [0u8; 4];
        let want = T::WIDTH;
        let mut got = 0;
        while got < want {
            match self.inner.read(&mut buf[got..want]) {
                Ok(0) if got == 0 => return Ok(None),
                Ok(0) => {
                    log::trace!("stream ended after {got} of {want} bytes of a unit");
                    return Err(T::TRUNCATED);
                }
                Ok(n) => got += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    log::trace!("read failed: {e}");
                    return Err(Error::SourceFault);
                }
            }
        }
        Ok(Some(T::from_ne_slice(&buf[..want])))
    }
}

/// Pushes host-order code units into a [`Write`].
#[derive(Debug)]
pub struct WriteSink<W, T> {
    inner: W,
    _unit: PhantomData<T>,
}

impl<W: Write, T: CodeUnit> WriteSink<W, T> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            _unit: PhantomData,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Flushes the writer.
    ///
    /// # Errors
    ///
    /// [`Error::SinkFault`] if the writer cannot flush.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush().map_err(|e| {
            log::trace!("flush failed: {e}");
            Error::SinkFault
        })
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write, T: CodeUnit> Sink<T> for WriteSink<W, T> {
    fn push(&mut self, unit: T) -> Result<(), Error> {
        let mut buf = [0u8; 4];
        unit.write_ne(&mut buf);
        self.inner.write_all(&buf[..T::WIDTH]).map_err(|e| {
            log::trace!("write failed: {e}");
            Error::SinkFault
        })
    }
}
