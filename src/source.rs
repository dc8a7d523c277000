//! Readable-source abstractions for stream hashing

use std::future::Future;
use std::io;

/// Synchronous source of bytes consumed by [`hash_stream`](crate::hash_stream).
///
/// Every [`std::io::Read`] implementor is a `ByteSource` that is always
/// readable. Capability-gated sources (e.g. the write-only half of a duplex
/// handle) can implement this trait directly and report
/// [`can_read`](Self::can_read) as `false`, in which case stream hashing fails
/// with [`HashError::SourceNotReadable`](crate::HashError::SourceNotReadable)
/// before any read is attempted.
pub trait ByteSource {
    /// Whether this source can service read requests.
    fn can_read(&self) -> bool {
        true
    }

    /// Read up to `buf.len()` bytes into `buf`, returning how many were read.
    ///
    /// A return of `0` means end of stream. Short reads are expected and legal;
    /// callers must never assume a full buffer per read.
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl<R: io::Read> ByteSource for R {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read(buf)
    }
}

/// Asynchronous counterpart of [`ByteSource`], consumed by
/// [`hash_stream_async`](crate::hash_stream_async).
///
/// Every `tokio::io::AsyncRead + Unpin + Send` implementor is an
/// `AsyncByteSource` that is always readable.
pub trait AsyncByteSource {
    /// Whether this source can service read requests.
    fn can_read(&self) -> bool {
        true
    }

    /// Read up to `buf.len()` bytes into `buf`, resolving to the number read.
    ///
    /// A resolution of `0` means end of stream. Short reads are expected and
    /// legal.
    fn read_chunk(&mut self, buf: &mut [u8]) -> impl Future<Output = io::Result<usize>> + Send;
}

impl<R> AsyncByteSource for R
where
    R: tokio::io::AsyncRead + Unpin + Send,
{
    async fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        tokio::io::AsyncReadExt::read(self, buf).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readers_are_always_readable() {
        let cursor = io::Cursor::new(b"bytes".to_vec());
        assert!(ByteSource::can_read(&cursor));
    }

    #[test]
    fn short_reads_pass_through() {
        let mut source = io::Cursor::new(b"ab".to_vec());
        let mut buf = [0u8; 16];
        let n = ByteSource::read_chunk(&mut source, &mut buf).expect("cursor read should succeed");
        assert_eq!(n, 2, "a read may return fewer bytes than the buffer holds");
        let n = ByteSource::read_chunk(&mut source, &mut buf).expect("cursor read should succeed");
        assert_eq!(n, 0, "exhausted source signals end of stream with zero");
    }
}
