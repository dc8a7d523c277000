//! Chunked stream hashing with a bounded scratch buffer
//!
//! The drivers here pull bounded reads from a [`ByteSource`] or
//! [`AsyncByteSource`], appending each chunk to a bound engine as it arrives.
//! Memory stays O(1) relative to input size, and because chunks are appended
//! immediately in arrival order, a streamed digest is byte-identical to a
//! one-shot digest over the same bytes.

use tokio_util::sync::CancellationToken;
use zeroize::Zeroizing;

use crate::digest::Digest;
use crate::dispense::create_engine;
use crate::engine::HashEngine;
use crate::error::{HashError, Result};
use crate::registry;
use crate::source::{AsyncByteSource, ByteSource};

/// Scratch buffer size for stream reads.
///
/// Bounds memory while keeping per-read overhead low for slow sources.
const SCRATCH_LEN: usize = 32 * 1024;

/// Compute the digest of everything remaining in `source`.
///
/// # Errors
///
/// Returns [`HashError::UnknownAlgorithm`] for an unregistered name,
/// [`HashError::SourceNotReadable`] if the source lacks read capability
/// (checked before any read), or [`HashError::Io`] if a read fails.
pub fn hash_stream<S: ByteSource>(name: &str, source: &mut S) -> Result<Digest> {
    let mut engine = create_engine(name)?;
    if !source.can_read() {
        return Err(HashError::SourceNotReadable);
    }
    drive(&mut engine, source)?;
    Ok(engine.finalize())
}

/// Compute the digest of everything remaining in `source`, writing it into
/// `dest` and returning the number of bytes written.
///
/// # Errors
///
/// As [`hash_stream`], plus [`HashError::InsufficientBuffer`] if `dest` is
/// shorter than the digest size; both precondition failures are reported
/// before any read is attempted.
pub fn hash_stream_into<S: ByteSource>(
    name: &str,
    source: &mut S,
    dest: &mut [u8],
) -> Result<usize> {
    let entry = registry::lookup(name)?;
    let needed = entry.descriptor.digest_size;
    if dest.len() < needed {
        return Err(HashError::InsufficientBuffer {
            needed,
            actual: dest.len(),
        });
    }
    if !source.can_read() {
        return Err(HashError::SourceNotReadable);
    }
    let mut engine = HashEngine::new(entry);
    drive(&mut engine, source)?;
    engine.finalize_into(dest)
}

/// Asynchronously compute the digest of everything remaining in `source`.
///
/// Suspension happens only at read boundaries. `cancel` is observed before
/// each read begins: a token cancelled before the first read means zero reads
/// are performed; a read already issued runs to completion, and cancellation
/// takes effect at the next boundary. No partial digest is ever surfaced.
///
/// # Errors
///
/// As [`hash_stream`], plus [`HashError::Cancelled`] when the token is
/// cancelled.
pub async fn hash_stream_async<S: AsyncByteSource>(
    name: &str,
    source: &mut S,
    cancel: &CancellationToken,
) -> Result<Digest> {
    let mut engine = create_engine(name)?;
    if !source.can_read() {
        return Err(HashError::SourceNotReadable);
    }
    drive_async(&mut engine, source, cancel).await?;
    Ok(engine.finalize())
}

/// Asynchronous counterpart of [`hash_stream_into`].
///
/// # Errors
///
/// As [`hash_stream_into`], plus [`HashError::Cancelled`] when the token is
/// cancelled.
pub async fn hash_stream_into_async<S: AsyncByteSource>(
    name: &str,
    source: &mut S,
    dest: &mut [u8],
    cancel: &CancellationToken,
) -> Result<usize> {
    let entry = registry::lookup(name)?;
    let needed = entry.descriptor.digest_size;
    if dest.len() < needed {
        return Err(HashError::InsufficientBuffer {
            needed,
            actual: dest.len(),
        });
    }
    if !source.can_read() {
        return Err(HashError::SourceNotReadable);
    }
    let mut engine = HashEngine::new(entry);
    drive_async(&mut engine, source, cancel).await?;
    engine.finalize_into(dest)
}

fn drive<S: ByteSource>(engine: &mut HashEngine, source: &mut S) -> Result<()> {
    let mut buf = Zeroizing::new(vec![0u8; SCRATCH_LEN]);
    let mut total: u64 = 0;
    loop {
        let n = match source.read_chunk(buf.as_mut_slice()) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        engine.update(&buf[..n]);
        total += n as u64;
    }
    tracing::trace!(
        algorithm = engine.algorithm().name,
        bytes = total,
        "stream fully consumed"
    );
    Ok(())
}

async fn drive_async<S: AsyncByteSource>(
    engine: &mut HashEngine,
    source: &mut S,
    cancel: &CancellationToken,
) -> Result<()> {
    let mut buf = Zeroizing::new(vec![0u8; SCRATCH_LEN]);
    let mut total: u64 = 0;
    loop {
        // Cancellation is honored only at read boundaries: once a read has
        // been issued it runs to completion.
        if cancel.is_cancelled() {
            return Err(HashError::Cancelled);
        }
        let n = source.read_chunk(buf.as_mut_slice()).await?;
        if n == 0 {
            break;
        }
        engine.update(&buf[..n]);
        total += n as u64;
    }
    tracing::trace!(
        algorithm = engine.algorithm().name,
        bytes = total,
        "stream fully consumed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispense::hash;
    use crate::registry::names;
    use std::io::Cursor;

    #[test]
    fn streamed_digest_matches_one_shot() {
        let data = b"streamed bytes must hash identically to buffered bytes".to_vec();
        let mut source = Cursor::new(data.clone());
        let streamed = hash_stream(names::SHA256, &mut source).expect("stream hash should succeed");
        let one_shot = hash(names::SHA256, &data).expect("one-shot hash should succeed");
        assert_eq!(streamed, one_shot);
    }

    #[test]
    fn empty_stream_matches_empty_one_shot() {
        let mut source = Cursor::new(Vec::new());
        let streamed = hash_stream(names::SHA256, &mut source).expect("stream hash should succeed");
        let one_shot = hash(names::SHA256, b"").expect("one-shot hash should succeed");
        assert_eq!(streamed, one_shot);
    }
}
