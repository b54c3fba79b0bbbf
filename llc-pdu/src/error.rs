use crate::llc::LLC_MIN_LEN;

/// Result type returned by the LLC codec.
pub type Result<T> = core::result::Result<T, LlcError>;

quick_error! {
    /// Errors reported while decoding an LLC header.
    ///
    /// Decoding stops at the first failed check, no partially decoded header is
    /// ever returned together with an error.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum LlcError {
        /// The buffer is shorter than the 3-byte minimum (DSAP, SSAP and one control byte).
        InvalidHeaderLength { len: usize } {
            display("invalid llc header length: got {} bytes, need at least {}", len, LLC_MIN_LEN)
        }
        /// The control field length is neither 1 nor 2.
        InvalidControlLength { ctrl_len: usize } {
            display("invalid llc control length: {}, must be 1 or 2", ctrl_len)
        }
        /// The buffer ends before the requested control field does.
        TruncatedControlField { ctrl_len: usize, available: usize } {
            display("truncated llc control field: need {} bytes, {} available", ctrl_len, available)
        }
    }
}
