use byteorder::{BigEndian, ByteOrder};
use bytes::{BufMut, Bytes, BytesMut};

use super::check_header;
use crate::{LlcError, Lsap, Result};

/// The control field of an LLC header, 1 or 2 bytes long.
///
/// The width is fixed at construction, so an encoded header always carries a
/// conformant control field. The bit layout of the field is not interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct Control {
    bytes: [u8; 2],
    len: u8,
}

#[allow(clippy::len_without_is_empty)]
impl Control {
    /// A 1-byte control field.
    #[inline]
    pub const fn new(byte: u8) -> Self {
        Self {
            bytes: [byte, 0],
            len: 1,
        }
    }

    /// A 2-byte control field, bytes in wire order.
    #[inline]
    pub const fn extended(bytes: [u8; 2]) -> Self {
        Self { bytes, len: 2 }
    }

    /// Build a control field from a 1 or 2 byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        match *bytes {
            [byte] => Ok(Self::new(byte)),
            [first, second] => Ok(Self::extended([first, second])),
            _ => Err(LlcError::InvalidControlLength {
                ctrl_len: bytes.len(),
            }),
        }
    }

    /// Width of the field in bytes, 1 or 2.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether this is a 2-byte control field.
    #[inline]
    pub const fn is_extended(&self) -> bool {
        self.len == 2
    }

    /// The field in wire order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }
}

impl AsRef<[u8]> for Control {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<u8> for Control {
    fn from(byte: u8) -> Self {
        Self::new(byte)
    }
}

impl From<[u8; 2]> for Control {
    fn from(bytes: [u8; 2]) -> Self {
        Self::extended(bytes)
    }
}

impl TryFrom<&[u8]> for Control {
    type Error = LlcError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl TryFrom<Vec<u8>> for Control {
    type Error = LlcError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::from_slice(&bytes)
    }
}

impl From<Control> for Vec<u8> {
    fn from(control: Control) -> Self {
        control.as_bytes().to_vec()
    }
}

/// An LLC protocol data unit: the header fields plus the upper-layer payload.
///
/// The value owns all of its bytes. A header decoded with [`LlcPdu::decode`]
/// is independent from the input buffer, one decoded with
/// [`LlcPdu::decode_bytes`] shares the immutable, reference-counted storage of
/// its input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LlcPdu {
    /// Destination service access point.
    pub dsap: Lsap,
    /// Source service access point.
    pub ssap: Lsap,
    /// Control field.
    pub control: Control,
    /// The upper-layer packet, possibly empty.
    pub payload: Bytes,
}

impl LlcPdu {
    /// Create a new pdu from its fields.
    pub fn new(dsap: Lsap, ssap: Lsap, control: Control, payload: impl Into<Bytes>) -> Self {
        Self {
            dsap,
            ssap,
            control,
            payload: payload.into(),
        }
    }

    /// Length of the header: DSAP, SSAP and the control field.
    #[inline]
    pub fn header_len(&self) -> usize {
        2 + self.control.len()
    }

    /// Length of the encoded pdu.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        self.header_len() + self.payload.len()
    }

    /// Append the encoded pdu to `buf`.
    ///
    /// DSAP and SSAP are written as a single big-endian `u16` with the DSAP in
    /// the high-order byte, so the DSAP goes out first.
    pub fn encode_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u16((u16::from(self.dsap.raw()) << 8) | u16::from(self.ssap.raw()));
        buf.put_slice(self.control.as_bytes());
        buf.put_slice(&self.payload);
    }

    /// Encode the pdu into a newly allocated buffer of exactly
    /// [`encoded_len`](Self::encoded_len) bytes.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        self.encode_to(&mut buf);
        buf.freeze()
    }

    /// Encode the pdu into a `Vec<u8>`.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode_to(&mut buf);
        buf
    }

    /// Decode a pdu whose control field is `ctrl_len` bytes long, copying the
    /// control field and payload out of `buf`.
    ///
    /// # Errors
    ///
    /// - [`LlcError::InvalidHeaderLength`] if `buf` is shorter than 3 bytes.
    /// - [`LlcError::InvalidControlLength`] if `ctrl_len` is not 1 or 2.
    /// - [`LlcError::TruncatedControlField`] if `buf` ends inside the control field.
    pub fn decode(buf: &[u8], ctrl_len: usize) -> Result<Self> {
        let (dsap, ssap, control) = decode_header(buf, ctrl_len)?;
        let pdu = Self {
            dsap,
            ssap,
            control,
            payload: Bytes::copy_from_slice(&buf[2 + ctrl_len..]),
        };
        trace_decoded(&pdu);
        Ok(pdu)
    }

    /// Decode a pdu from a reference-counted buffer.
    ///
    /// The payload is a slice of `buf` and shares its storage, nothing is
    /// copied. The checks and errors are those of [`LlcPdu::decode`].
    pub fn decode_bytes(buf: Bytes, ctrl_len: usize) -> Result<Self> {
        let (dsap, ssap, control) = decode_header(&buf, ctrl_len)?;
        let pdu = Self {
            dsap,
            ssap,
            control,
            payload: buf.slice(2 + ctrl_len..),
        };
        trace_decoded(&pdu);
        Ok(pdu)
    }
}

fn decode_header(buf: &[u8], ctrl_len: usize) -> Result<(Lsap, Lsap, Control)> {
    check_header(buf.len(), ctrl_len)?;

    let saps = BigEndian::read_u16(&buf[0..2]);
    let dsap = Lsap::from((saps >> 8) as u8);
    let ssap = Lsap::from((saps & 0x00ff) as u8);
    let control = Control::from_slice(&buf[2..2 + ctrl_len])?;
    Ok((dsap, ssap, control))
}

fn trace_decoded(pdu: &LlcPdu) {
    tracing::trace!(
        dsap = %pdu.dsap,
        ssap = %pdu.ssap,
        ctrl_len = pdu.control.len(),
        payload_len = pdu.payload.len(),
        "decoded llc pdu"
    );
}
