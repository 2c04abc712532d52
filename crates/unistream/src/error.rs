use core::fmt;

use thiserror::Error;

/// A fault raised by a scalar codec or a transcoder.
///
/// Once a transcoder reports one of these it becomes sticky: see
/// [`Status`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    #[error("no source is bound")]
    NoSource,
    #[error("no sink is bound")]
    NoSink,
    #[error("the source failed")]
    SourceFault,
    #[error("the sink failed")]
    SinkFault,
    #[error("malformed external input")]
    BadInput,
    /// A continuation or trail unit arrived with no lead unit before it.
    #[error("continuation unit without a lead unit")]
    NoLead,
    /// A lead unit was not followed by the units it requires.
    #[error("lead unit without its continuation")]
    NoFollow,
    #[error("not a Unicode scalar value")]
    NotUnicode,
    #[error("not UTF-8")]
    NotUtf8,
    #[error("not UTF-16")]
    NotUtf16,
    #[error("not representable in ISO-8859-1")]
    NotIso8859_1,
    #[error("missing byte-order mark")]
    NoByteOrderMark,
}

/// The condition a transcoder is in.
///
/// End of sequence is not a status: reads report it as `Ok(None)` and it
/// never sticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Ok,
    Failed(Error),
}

/// Numeric code reserved for end of sequence in [`Status::code`].
pub const END_OF_SEQUENCE_CODE: u8 = 1;

impl Status {
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    #[must_use]
    pub const fn error(self) -> Option<Error> {
        match self {
            Self::Ok => None,
            Self::Failed(e) => Some(e),
        }
    }

    /// Converts to a `Result`, so a sticky status can be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns the stored error when the status is not OK.
    pub const fn check(self) -> Result<(), Error> {
        match self {
            Self::Ok => Ok(()),
            Self::Failed(e) => Err(e),
        }
    }

    /// Stable numeric code of this status.
    ///
    /// OK is 0 and code 1 ([`END_OF_SEQUENCE_CODE`]) is reserved for end of
    /// sequence, which is never stored; faults follow in declaration order.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Failed(e) => e.code(),
        }
    }

    /// Inverse of [`Status::code`]. Returns `None` for
    /// [`END_OF_SEQUENCE_CODE`] and for unknown codes.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        if code == 0 {
            return Some(Self::Ok);
        }
        match Error::from_code(code) {
            Some(e) => Some(Self::Failed(e)),
            None => None,
        }
    }
}

impl Error {
    const ALL: [Error; 12] = [
        Error::NoSource,
        Error::NoSink,
        Error::SourceFault,
        Error::SinkFault,
        Error::BadInput,
        Error::NoLead,
        Error::NoFollow,
        Error::NotUnicode,
        Error::NotUtf8,
        Error::NotUtf16,
        Error::NotIso8859_1,
        Error::NoByteOrderMark,
    ];

    #[must_use]
    pub const fn code(self) -> u8 {
        END_OF_SEQUENCE_CODE + 1 + self as u8
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        let first = END_OF_SEQUENCE_CODE + 1;
        if code < first || (code - first) as usize >= Self::ALL.len() {
            return None;
        }
        Some(Self::ALL[(code - first) as usize])
    }

    /// True for faults caused by the content of the stream rather than by
    /// the source, the sink or the wiring.
    #[must_use]
    pub const fn is_malformed_input(self) -> bool {
        !matches!(
            self,
            Self::NoSource | Self::NoSink | Self::SourceFault | Self::SinkFault
        )
    }
}

impl From<Error> for Status {
    fn from(e: Error) -> Self {
        Self::Failed(e)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("ok"),
            Self::Failed(e) => e.fmt(f),
        }
    }
}
