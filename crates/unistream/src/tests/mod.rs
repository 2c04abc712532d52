
use alloc::vec::Vec;

use crate::{Error, io::Sink};

/// Sink that accepts `room` units and then faults until given more room.
pub(crate) struct Cramped<T> {
    pub(crate) written: Vec<T>,
    pub(crate) room: usize,
}

impl<T> Cramped<T> {
    pub(crate) fn new(room: usize) -> Self {
        Self {
            written: Vec::new(),
            room,
        }
    }
}

impl<T> Sink<T> for Cramped<T> {
    fn push(&mut self, unit: T) -> Result<(), Error> {
        if self.room == 0 {
            return Err(Error::SinkFault);
        }
        self.room -= 1;
        self.written.push(unit);
        Ok(())
    }
}

#[cfg(not(miri))]
fn quickcheck_tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

#[cfg(miri)]
fn quickcheck_tests() -> u64 {
    10
}
