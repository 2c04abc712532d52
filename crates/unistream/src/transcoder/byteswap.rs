use super::{Codec, Transcoder};
use crate::{
    ByteSwapOptions, Error, LookBack,
    io::{Sink, Source, Unbound},
    swap::{HostOrder, SwapState},
};

/// Moves 16- or 32-bit units between host order and the order of the
/// stream, as described by a swap state `S`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteSwap<S> {
    state: S,
    host: HostOrder,
}

impl<S: SwapState> ByteSwap<S> {
    #[must_use]
    pub fn new(options: ByteSwapOptions<S>) -> Self {
        Self {
            state: options.swap,
            host: options.host,
        }
    }

    fn settle(&mut self) {
        if !self.state.is_concrete() && self.state != S::FIRST_UNIT {
            let resolved = self.state.resolve(self.host);
            log::debug!(
                "swap request {:?} resolved to {resolved:?} on a {:?} host",
                self.state,
                self.host
            );
            self.state = resolved;
        }
    }
}

impl<S: SwapState> Codec for ByteSwap<S> {
    type User = S::Unit;
    type External = S::Unit;

    fn decode<R: Source<S::Unit> + ?Sized>(
        &mut self,
        source: &mut R,
        staged: &mut LookBack<S::Unit>,
    ) -> Result<bool, Error> {
        let Some(raw) = source.pull()? else {
            return Ok(false);
        };
        if self.state == S::FIRST_UNIT {
            // The mark itself is handed on, in host order.
            self.state = S::from_bom(raw).ok_or(Error::NoByteOrderMark)?;
            log::debug!("byte-order mark selects {:?}", self.state);
        }
        self.settle();
        let unit = S::check_unit(self.state.apply(raw))?;
        staged.fill(&[unit]);
        Ok(true)
    }

    fn encode<W: Sink<S::Unit> + ?Sized>(&mut self, unit: S::Unit, sink: &mut W) -> Result<(), Error> {
        let unit = S::check_unit(unit)?;
        if self.state == S::FIRST_UNIT {
            if unit != S::BOM {
                sink.push(S::BOM)?;
                log::debug!("wrote a byte-order mark ahead of the first unit");
            }
            self.state = S::IDENTITY;
            return sink.push(unit);
        }
        self.settle();
        sink.push(self.state.apply(unit))
    }

    fn encode_end<W: Sink<S::Unit> + ?Sized>(&mut self, _sink: &mut W) -> Result<(), Error> {
        Ok(())
    }
}

impl<S: SwapState, R: Source<S::Unit>, W: Sink<S::Unit>> Transcoder<ByteSwap<S>, R, W> {
    pub fn new_with_options(source: R, sink: W, options: ByteSwapOptions<S>) -> Self {
        Self::with_codec(ByteSwap::new(options), source, sink)
    }

    /// The current swap state. `Le` and `Be` requests are resolved on the
    /// first unit and `FirstUnit` once the byte-order mark is seen or
    /// written.
    pub fn swap_state(&self) -> S {
        self.codec.state
    }

    /// Replaces the swap state and returns the previous one.
    pub fn set_swap_state(&mut self, state: S) -> S {
        core::mem::replace(&mut self.codec.state, state)
    }

    pub fn host_order(&self) -> HostOrder {
        self.codec.host
    }
}

impl<S: SwapState, R: Source<S::Unit>> Transcoder<ByteSwap<S>, R, Unbound> {
    pub fn with_source_and_options(source: R, options: ByteSwapOptions<S>) -> Self {
        Self::with_codec(ByteSwap::new(options), source, Unbound)
    }
}

impl<S: SwapState, W: Sink<S::Unit>> Transcoder<ByteSwap<S>, Unbound, W> {
    pub fn with_sink_and_options(sink: W, options: ByteSwapOptions<S>) -> Self {
        Self::with_codec(ByteSwap::new(options), Unbound, sink)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::{
        ByteSwapOptions, Error, HostOrder, U16ByteSwap, U16Swap, U32ByteSwap, U32Swap,
        UnitReader, UnitWriter, io::SliceSource,
    };

    fn u16_options(swap: U16Swap, host: HostOrder) -> ByteSwapOptions<U16Swap> {
        ByteSwapOptions { swap, host }
    }

    #[test]
    fn synthesizes_a_mark_once() {
        let mut out: Vec<u16> = Vec::new();
        {
            let mut w = U16ByteSwap::with_sink_and_options(
                &mut out,
                u16_options(U16Swap::FirstUnit, HostOrder::native()),
            );
            w.write_unit(0x41).unwrap();
            assert_eq!(w.swap_state(), U16Swap::V12);
            w.write_unit(0x42).unwrap();
        }
        assert_eq!(out, [0xFEFF, 0x41, 0x42]);
    }

    #[test]
    fn existing_mark_is_not_doubled() {
        let mut out: Vec<u32> = Vec::new();
        {
            let mut w = U32ByteSwap::with_sink_and_options(
                &mut out,
                ByteSwapOptions {
                    swap: U32Swap::FirstUnit,
                    host: HostOrder::native(),
                },
            );
            w.write_unit(0xFEFF).unwrap();
            w.write_unit(0x41).unwrap();
        }
        assert_eq!(out, [0xFEFF, 0x41]);
    }

    #[test]
    fn swapped_mark_selects_permutation_and_is_delivered() {
        let data = [0xFFFEu16, 0x4100, 0x4200];
        let mut r = U16ByteSwap::with_source_and_options(
            SliceSource::new(&data),
            u16_options(U16Swap::FirstUnit, HostOrder::Little),
        );
        assert_eq!(r.read_unit(), Ok(Some(0xFEFF)));
        assert_eq!(r.swap_state(), U16Swap::V21);
        assert_eq!(r.read_unit(), Ok(Some(0x41)));
        assert_eq!(r.read_unit(), Ok(Some(0x42)));
        assert_eq!(r.read_unit(), Ok(None));
    }

    #[test]
    fn mark_alone_reads_as_the_mark() {
        let data = [0xFEFFu16];
        let mut r = U16ByteSwap::with_source_and_options(
            SliceSource::new(&data),
            u16_options(U16Swap::FirstUnit, HostOrder::Big),
        );
        assert_eq!(r.read_unit(), Ok(Some(0xFEFF)));
        assert_eq!(r.swap_state(), U16Swap::V12);
        assert_eq!(r.read_unit(), Ok(None));
    }

    #[test]
    fn written_mark_survives_a_round_trip() {
        let mut raw: Vec<u32> = Vec::new();
        let options = ByteSwapOptions {
            swap: U32Swap::FirstUnit,
            host: HostOrder::Little,
        };
        {
            let mut w = U32ByteSwap::with_sink_and_options(&mut raw, options);
            w.write_unit(0xFEFF).unwrap();
            w.write_unit(0x41).unwrap();
        }
        let mut r = U32ByteSwap::with_source_and_options(SliceSource::new(&raw), options);
        let back: Result<Vec<u32>, Error> = r.units().collect();
        assert_eq!(back, Ok(alloc::vec![0xFEFF, 0x41]));
    }

    #[test]
    fn missing_mark() {
        let data = [0x0041u16];
        let mut r = U16ByteSwap::with_source_and_options(
            SliceSource::new(&data),
            u16_options(U16Swap::FirstUnit, HostOrder::Big),
        );
        assert_eq!(r.read_unit(), Err(Error::NoByteOrderMark));
    }

    #[test]
    fn request_resolves_on_first_unit() {
        let data = [0x4100u16];
        let mut r = U16ByteSwap::with_source_and_options(
            SliceSource::new(&data),
            u16_options(U16Swap::Be, HostOrder::Little),
        );
        assert_eq!(r.swap_state(), U16Swap::Be);
        assert_eq!(r.read_unit(), Ok(Some(0x0041)));
        assert_eq!(r.swap_state(), U16Swap::V21);
        assert_eq!(r.set_swap_state(U16Swap::None), U16Swap::V21);
        assert_eq!(r.host_order(), HostOrder::Little);
    }

    #[test]
    fn u32_validates_after_swapping() {
        let data = [0x00D8_0000u32];
        let mut r = U32ByteSwap::with_source_and_options(
            SliceSource::new(&data),
            ByteSwapOptions {
                swap: U32Swap::V4321,
                host: HostOrder::Little,
            },
        );
        assert_eq!(r.read_unit(), Err(Error::NotUnicode));
    }

    #[test]
    fn u16_passes_lone_surrogates() {
        let data = [0xD800u16];
        let mut r = U16ByteSwap::with_source_and_options(SliceSource::new(&data), ByteSwapOptions::default());
        assert_eq!(r.read_unit(), Ok(Some(0xD800)));
    }

    #[test]
    fn failed_mark_leaves_state_untouched() {
        struct Refuse;
        impl crate::io::Sink<u16> for Refuse {
            fn push(&mut self, _unit: u16) -> Result<(), Error> {
                Err(Error::SinkFault)
            }
        }
        let mut w = U16ByteSwap::with_sink_and_options(
            Refuse,
            u16_options(U16Swap::FirstUnit, HostOrder::native()),
        );
        assert_eq!(w.write_unit(0x41), Err(Error::SinkFault));
        assert_eq!(w.swap_state(), U16Swap::FirstUnit);
    }
}
