use core::marker::PhantomData;

use super::{
    Codec,
    encoding::{Encoding, UserEncoding},
};
use crate::{
    Error, LookBack, Pending,
    io::{Sink, Source},
};

/// Reads scalars from `E` and hands them out as `U` units; takes `U` units
/// and writes the scalars they form as `E`.
///
/// The only state is the partially written scalar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bridge<U, E> {
    pending: Pending,
    _pair: PhantomData<fn() -> (U, E)>,
}

impl<U, E> Bridge<U, E> {
    /// The scalar being assembled from written units.
    #[must_use]
    pub fn pending(&self) -> &Pending {
        &self.pending
    }
}

impl<U: UserEncoding, E: Encoding> Codec for Bridge<U, E> {
    type User = U::Unit;
    type External = E::Unit;

    fn decode<S: Source<E::Unit> + ?Sized>(
        &mut self,
        source: &mut S,
        staged: &mut LookBack<U::Unit>,
    ) -> Result<bool, Error> {
        match E::decode(source)? {
            Some(v) => U::stage(v, staged).map(|()| true),
            None => Ok(false),
        }
    }

    fn encode<S: Sink<E::Unit> + ?Sized>(
        &mut self,
        unit: U::Unit,
        sink: &mut S,
    ) -> Result<(), Error> {
        if let Some(v) = U::assemble::<E>(&mut self.pending, unit)? {
            E::encode(sink, v)?;
        }
        Ok(())
    }

    fn encode_end<S: Sink<E::Unit> + ?Sized>(&mut self, _sink: &mut S) -> Result<(), Error> {
        self.pending.finish()
    }
}
