//! LLC (Logical Link Control) Implementation
//!
//! This module provides support for encoding and decoding LLC headers as defined in IEEE 802.2.
//! LLC is a sublayer of the Data Link Layer that multiplexes upper-layer protocols over IEEE 802
//! networks through service access points, e.g. STP BPDUs (DSAP/SSAP 0x42) or SNAP (0xAA).
//!
//! # LLC Header Structure
//!
//! ```text
//! +------+------+-----------+----------------
//! | DSAP | SSAP | Control   | Payload ...
//! | 1    | 1    | 1 or 2    | remainder
//! +------+------+-----------+----------------
//! ```
//!
//! - **DSAP (Destination Service Access Point)**: 8-bit destination identifier
//! - **SSAP (Source Service Access Point)**: 8-bit source identifier
//! - **Control**: 1 byte for unnumbered frames, 2 bytes for information and supervisory frames
//!
//! The header does not describe the width of its own control field. Decoding therefore takes the
//! control length from the caller, who knows it from the surrounding protocol.
//!
//! # Owned and borrowed headers
//!
//! [`LlcPdu`] owns its control field and payload and is the default choice:
//! [`LlcPdu::decode`] copies out of the input, so the input may be reused right away, and
//! [`LlcPdu::decode_bytes`] shares the storage of a reference-counted [`bytes::Bytes`].
//!
//! [`Llc`] is the zero-copy alternative. It borrows the packet buffer and reads fields in place,
//! the borrow checker keeps the buffer alive and unmodified for as long as the view exists.
//!
//! # Example
//!
//! ```rust
//! use llc_pdu::llc::*;
//! use llc_pdu::{Cursor, Lsap};
//!
//! let pdu = LlcPdu::new(
//!     Lsap::DOD_IP,
//!     Lsap::SNAP_EXTENSION,
//!     Control::new(0x03),
//!     vec![0x01, 0x02],
//! );
//! let bytes = pdu.encode();
//! assert_eq!(&bytes[..], &[0x06, 0xaa, 0x03, 0x01, 0x02]);
//!
//! let decoded = LlcPdu::decode(&bytes, 1)?;
//! assert_eq!(decoded, pdu);
//!
//! let llc = Llc::parse(Cursor::new(&bytes), 1)?;
//! assert_eq!(llc.dsap(), Lsap::DOD_IP);
//! assert_eq!(llc.payload_as_cursor().chunk_shared_lifetime(), &[0x01, 0x02]);
//! # Ok::<(), llc_pdu::LlcError>(())
//! ```

mod pdu;
pub use pdu::{Control, LlcPdu};

mod view;
pub use view::Llc;

use crate::{LlcError, Result};

/// Minimum length of an LLC header: DSAP, SSAP and a 1-byte control field.
pub const LLC_MIN_LEN: usize = 3;
/// Length of an LLC header with a 1-byte control field.
pub const LLC_HEADER_LEN: usize = 3;
/// Length of an LLC header with a 2-byte control field.
pub const LLC_EXTENDED_HEADER_LEN: usize = 4;
/// An LLC header carrying a spanning tree BPDU in an unnumbered information frame.
pub const LLC_HEADER_TEMPLATE: [u8; 3] = [0x42, 0x42, 0x03];

// Checks shared by the owned decoder and the buffer view, in the order the
// errors are reported.
pub(crate) fn check_header(buf_len: usize, ctrl_len: usize) -> Result<()> {
    if buf_len < LLC_MIN_LEN {
        tracing::trace!(buf_len, "llc header shorter than minimum");
        return Err(LlcError::InvalidHeaderLength { len: buf_len });
    }
    if !(1..=2).contains(&ctrl_len) {
        tracing::trace!(ctrl_len, "llc control length out of range");
        return Err(LlcError::InvalidControlLength { ctrl_len });
    }
    if buf_len < 2 + ctrl_len {
        tracing::trace!(buf_len, ctrl_len, "llc control field truncated");
        return Err(LlcError::TruncatedControlField {
            ctrl_len,
            available: buf_len - 2,
        });
    }
    Ok(())
}
