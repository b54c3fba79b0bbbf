use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;

use super::{check_header, Control, LlcPdu, LLC_HEADER_LEN};
use crate::{Buf, PktBuf, PktBufMut};
use crate::{Cursor, CursorMut};
use crate::{Lsap, Result};

/// A zero-copy view of an LLC header at the front of a packet buffer.
///
/// The view reads and writes the header in place. Its lifetime is bound to
/// the buffer it wraps, use [`Llc::to_owned_pdu`] to obtain a header that
/// outlives the buffer.
#[derive(Debug, Clone, Copy)]
pub struct Llc<T> {
    buf: T,
    ctrl_len: usize,
}

impl<T: Buf> Llc<T> {
    /// Wrap `buf` without any length check.
    ///
    /// The caller guarantees that `ctrl_len` is 1 or 2 and that `buf` holds
    /// at least `2 + ctrl_len` bytes, otherwise the accessors panic.
    #[inline]
    pub fn parse_unchecked(buf: T, ctrl_len: usize) -> Self {
        debug_assert!((1..=2).contains(&ctrl_len));
        Self { buf, ctrl_len }
    }

    /// Parse an LLC header whose control field is `ctrl_len` bytes long.
    ///
    /// Fails with the same errors as [`LlcPdu::decode`].
    #[inline]
    pub fn parse(buf: T, ctrl_len: usize) -> Result<Self> {
        check_header(buf.chunk().len(), ctrl_len)?;
        Ok(Self { buf, ctrl_len })
    }

    /// The wrapped buffer.
    #[inline]
    pub fn buf(&self) -> &T {
        &self.buf
    }

    /// Release the wrapped buffer, still positioned at the header.
    #[inline]
    pub fn release(self) -> T {
        self.buf
    }

    /// Width of the control field, 1 or 2.
    #[inline]
    pub fn control_len(&self) -> usize {
        self.ctrl_len
    }

    /// Length of the header: DSAP, SSAP and the control field.
    #[inline]
    pub fn header_len(&self) -> usize {
        2 + self.ctrl_len
    }

    /// The header bytes.
    #[inline]
    pub fn header_slice(&self) -> &[u8] {
        &self.buf.chunk()[0..self.header_len()]
    }

    /// The destination service access point.
    #[inline]
    pub fn dsap(&self) -> Lsap {
        Lsap::from(self.buf.chunk()[0])
    }

    /// The source service access point.
    #[inline]
    pub fn ssap(&self) -> Lsap {
        Lsap::from(self.buf.chunk()[1])
    }

    /// DSAP and SSAP as one big-endian value, DSAP in the high-order byte.
    #[inline]
    pub fn saps(&self) -> u16 {
        BigEndian::read_u16(&self.buf.chunk()[0..2])
    }

    /// The raw control field bytes.
    #[inline]
    pub fn control_bytes(&self) -> &[u8] {
        &self.buf.chunk()[2..self.header_len()]
    }

    /// The control field.
    #[inline]
    pub fn control(&self) -> Control {
        let chunk = self.buf.chunk();
        if self.ctrl_len == 2 {
            Control::extended([chunk[2], chunk[3]])
        } else {
            Control::new(chunk[2])
        }
    }

    /// Length of the payload following the header.
    #[inline]
    pub fn payload_len(&self) -> usize {
        self.buf.chunk().len() - self.header_len()
    }

    /// Copy the header and payload into an owned [`LlcPdu`].
    pub fn to_owned_pdu(&self) -> LlcPdu {
        LlcPdu {
            dsap: self.dsap(),
            ssap: self.ssap(),
            control: self.control(),
            payload: Bytes::copy_from_slice(&self.buf.chunk()[self.header_len()..]),
        }
    }

    /// Consume the view, returning the buffer advanced past the header.
    #[inline]
    pub fn payload(self) -> T {
        let header_len = self.header_len();
        let mut buf = self.buf;
        buf.advance(header_len);
        buf
    }
}

impl<T: PktBufMut> Llc<T> {
    /// Prepend a header with a 1-byte control field, e.g. [`LLC_HEADER_TEMPLATE`](super::LLC_HEADER_TEMPLATE),
    /// in front of the payload held by `buf`.
    ///
    /// Panics if the headroom of `buf` is smaller than 3 bytes.
    #[inline]
    pub fn prepend_header(mut buf: T, header: &[u8; LLC_HEADER_LEN]) -> Self {
        assert!(buf.chunk_headroom() >= LLC_HEADER_LEN);
        buf.move_back(LLC_HEADER_LEN);
        buf.chunk_mut()[0..LLC_HEADER_LEN].copy_from_slice(&header[..]);
        Self { buf, ctrl_len: 1 }
    }

    /// Prepend a header built from its fields in front of the payload held by `buf`.
    ///
    /// Panics if the headroom of `buf` is smaller than the header.
    pub fn prepend(mut buf: T, dsap: Lsap, ssap: Lsap, control: Control) -> Self {
        let header_len = 2 + control.len();
        assert!(buf.chunk_headroom() >= header_len);
        buf.move_back(header_len);

        let chunk = buf.chunk_mut();
        BigEndian::write_u16(
            &mut chunk[0..2],
            (u16::from(dsap.raw()) << 8) | u16::from(ssap.raw()),
        );
        chunk[2..header_len].copy_from_slice(control.as_bytes());
        Self {
            buf,
            ctrl_len: control.len(),
        }
    }

    /// Set the destination service access point.
    #[inline]
    pub fn set_dsap(&mut self, value: Lsap) {
        self.buf.chunk_mut()[0] = value.raw();
    }

    /// Set the source service access point.
    #[inline]
    pub fn set_ssap(&mut self, value: Lsap) {
        self.buf.chunk_mut()[1] = value.raw();
    }

    /// Overwrite the control field.
    ///
    /// Panics if `value` does not have the width of the existing field.
    #[inline]
    pub fn set_control(&mut self, value: Control) {
        assert_eq!(value.len(), self.ctrl_len);
        let header_len = self.header_len();
        self.buf.chunk_mut()[2..header_len].copy_from_slice(value.as_bytes());
    }
}

impl<'a> Llc<Cursor<'a>> {
    /// The payload as a cursor borrowing the same underlying slice.
    #[inline]
    pub fn payload_as_cursor(&self) -> Cursor<'a> {
        Cursor::new(&self.buf.chunk_shared_lifetime()[self.header_len()..])
    }
}

impl<'a> Llc<CursorMut<'a>> {
    /// The payload as a mutable cursor.
    #[inline]
    pub fn payload_as_cursor_mut(&mut self) -> CursorMut<'_> {
        let header_len = self.header_len();
        CursorMut::new(&mut self.buf.chunk_mut()[header_len..])
    }
}
