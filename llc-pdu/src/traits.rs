pub use bytes::Buf;

/// A [`Buf`] whose cursor can also move backwards into the headroom and
/// drop trailing bytes, e.g. the padding after an 802.3 payload.
pub trait PktBuf: Buf {
    /// Move the cursor back by `cnt` bytes.
    ///
    /// Panics if fewer than `cnt` bytes precede the cursor.
    fn move_back(&mut self, cnt: usize);

    /// Remove `cnt` trailing bytes.
    ///
    /// Panics if fewer than `cnt` bytes remain.
    fn trim_off(&mut self, cnt: usize);
}

/// A [`PktBuf`] whose bytes can be written, used to build headers in place.
pub trait PktBufMut: PktBuf {
    /// Number of bytes before the cursor that a header can be prepended into.
    fn chunk_headroom(&self) -> usize;

    /// The writable bytes from the cursor to the end of the buffer.
    fn chunk_mut(&mut self) -> &mut [u8];
}
