//! Source and sink capabilities the transcoders consume.
//!
//! A [`Source`] hands out one code unit per call and a [`Sink`] accepts one
//! code unit per call. Both report failure with [`Error::SourceFault`] /
//! [`Error::SinkFault`]; a source reports a clean end with `Ok(None)`.

use alloc::vec::Vec;

use crate::Error;

#[cfg(feature = "std")]
mod stream;

#[cfg(feature = "std")]
pub use stream::{ReadSource, WriteSink};

/// Sequential pull of code units.
pub trait Source<T> {
    /// Pulls the next unit, `Ok(None)` at end of sequence.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::SourceFault`] (or a more specific fault) when the
    /// underlying source cannot deliver.
    fn pull(&mut self) -> Result<Option<T>, Error>;

    /// False only for [`Unbound`].
    fn is_bound(&self) -> bool {
        true
    }
}

/// Sequential push of code units.
pub trait Sink<T> {
    /// Pushes one unit.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::SinkFault`] when the unit could not be written.
    fn push(&mut self, unit: T) -> Result<(), Error>;

    /// False only for [`Unbound`].
    fn is_bound(&self) -> bool {
        true
    }
}

impl<T, S: Source<T> + ?Sized> Source<T> for &mut S {
    #[inline]
    fn pull(&mut self) -> Result<Option<T>, Error> {
        (**self).pull()
    }

    #[inline]
    fn is_bound(&self) -> bool {
        (**self).is_bound()
    }
}

impl<T, S: Sink<T> + ?Sized> Sink<T> for &mut S {
    #[inline]
    fn push(&mut self, unit: T) -> Result<(), Error> {
        (**self).push(unit)
    }

    #[inline]
    fn is_bound(&self) -> bool {
        (**self).is_bound()
    }
}

/// Stands in for the missing side of a read-only or write-only transcoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbound;

impl<T> Source<T> for Unbound {
    fn pull(&mut self) -> Result<Option<T>, Error> {
        Err(Error::NoSource)
    }

    fn is_bound(&self) -> bool {
        false
    }
}

impl<T> Sink<T> for Unbound {
    fn push(&mut self, _unit: T) -> Result<(), Error> {
        Err(Error::NoSink)
    }

    fn is_bound(&self) -> bool {
        false
    }
}

impl<T> Sink<T> for Vec<T> {
    #[inline]
    fn push(&mut self, unit: T) -> Result<(), Error> {
        Vec::push(self, unit);
        Ok(())
    }
}

/// Pulls units from a borrowed slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a, T> {
    units: &'a [T],
    pos: usize,
}

impl<'a, T: Copy> SliceSource<'a, T> {
    #[must_use]
    pub fn new(units: &'a [T]) -> Self {
        Self { units, pos: 0 }
    }

    /// Units not pulled yet.
    #[must_use]
    pub fn remaining(&self) -> &'a [T] {
        &self.units[self.pos..]
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T: Copy> Source<T> for SliceSource<'_, T> {
    #[inline]
    fn pull(&mut self) -> Result<Option<T>, Error> {
        let unit = self.units.get(self.pos).copied();
        if unit.is_some() {
            self.pos += 1;
        }
        Ok(unit)
    }
}
