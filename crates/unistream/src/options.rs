use crate::swap::HostOrder;

/// Configuration for the byte-swap transcoders.
///
/// `S` is the swap state type, [`U32Swap`](crate::U32Swap) or
/// [`U16Swap`](crate::U16Swap).
///
/// # Examples
///
/// ```rust
/// use unistream::{ByteSwapOptions, U16ByteSwap, U16Swap};
///
/// let options = ByteSwapOptions {
///     swap: U16Swap::Le,
///     ..Default::default()
/// };
/// let mut out: Vec<u16> = Vec::new();
/// let _writer = U16ByteSwap::with_sink_and_options(&mut out, options);
/// ```
///
/// # Default
///
/// No swapping, and the compilation target's byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct ByteSwapOptions<S> {
    /// The requested byte order of the stream.
    ///
    /// `Le` and `Be` are resolved against [`host`](Self::host) on the first
    /// unit. `FirstUnit` takes the order from a leading byte-order mark on
    /// read, and writes one on write unless the first unit already is one.
    /// A concrete permutation is used as given.
    ///
    /// # Default
    ///
    /// `None`
    pub swap: S,

    /// The byte order of this machine.
    ///
    /// Only ever needs setting to describe a foreign host, for example when
    /// checking what a big-endian machine would have written.
    ///
    /// # Default
    ///
    /// [`HostOrder::native()`]
    pub host: HostOrder,
}
