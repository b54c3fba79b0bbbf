#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

//! Provide utilities for encoding and decoding IEEE 802.2 LLC protocol data units.
//!
//! Two flavors of the codec are exposed:
//!
//! - [`llc::LlcPdu`] owns its control field and payload. It is produced by
//!   [`llc::LlcPdu::decode`] (copying) or [`llc::LlcPdu::decode_bytes`]
//!   (sharing a reference-counted [`bytes::Bytes`]), and serialized with
//!   [`llc::LlcPdu::encode`].
//! - [`llc::Llc`] is a zero-copy view over a packet buffer, in the same style
//!   as the other header views built on [`Cursor`] and [`CursorMut`].
//!
//! Well-known service access point values live in [`Lsap`].

#[macro_use]
extern crate quick_error;

#[macro_use]
mod macros;

mod traits;
pub use traits::{Buf, PktBuf, PktBufMut};

mod cursors;
pub use cursors::{Cursor, CursorMut};

mod error;
pub use error::{LlcError, Result};

mod lsap;
pub use lsap::Lsap;

pub mod llc;
