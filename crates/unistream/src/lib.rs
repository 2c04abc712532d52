//! Incremental transcoding between UTF-8, UTF-16, UTF-32 and ISO-8859-1,
//! one code unit per call, with strict validation of every scalar value that
//! crosses an encoding boundary.
//!
//! The layers, leaves first:
//!
//! - [`validity`]: what counts as a scalar value.
//! - [`codec`]: decode or encode one scalar over a [`Source`](io::Source) or
//!   [`Sink`](io::Sink).
//! - [`swap`]: byte-order requests, byte-order marks and the permutations
//!   they resolve to.
//! - [`transcoder`]: a codec pair with the state that bridges scalars split
//!   across calls, bound to a source, a sink, or both.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod codec;
mod error;
pub mod io;
mod lookback;
mod options;
mod pending;
pub mod swap;
pub mod transcoder;
mod unit;
pub mod validity;

#[cfg(test)]
mod tests;

pub use error::{END_OF_SEQUENCE_CODE, Error, Status};
pub use lookback::{HISTORY, LookBack};
pub use options::ByteSwapOptions;
pub use pending::Pending;
pub use swap::{HostOrder, U16Swap, U32Swap};
pub use transcoder::{
    Transcoder, U16ByteSwap, U16Latin1, U16Stream, U16Utf8, U16Utf32, U32ByteSwap, U32Latin1,
    U32Stream, U32Utf8, U32Utf16, UnitReader, UnitWriter, Utf8Latin1, Utf8Stream, Utf8Utf16,
    Utf8Utf32,
};
pub use unit::CodeUnit;
