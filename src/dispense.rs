//! Engine factory and stateless one-shot hashing
//!
//! Each one-shot call constructs and discards a private engine, so concurrent
//! calls share no mutable state and never interfere.

use crate::digest::Digest;
use crate::engine::HashEngine;
use crate::error::{HashError, Result};
use crate::registry;

/// Construct a [`HashEngine`] bound to the named algorithm.
///
/// # Errors
///
/// Returns [`HashError::UnknownAlgorithm`] if the name is not registered.
pub fn create_engine(name: &str) -> Result<HashEngine> {
    let entry = registry::lookup(name)?;
    tracing::debug!(algorithm = entry.descriptor.name, "constructed hash engine");
    Ok(HashEngine::new(entry))
}

/// Compute the digest of `data` in one shot.
///
/// Equivalent to creating an engine, appending `data` once, and finalizing.
///
/// # Errors
///
/// Returns [`HashError::UnknownAlgorithm`] if the name is not registered.
pub fn hash(name: &str, data: impl AsRef<[u8]>) -> Result<Digest> {
    let mut engine = create_engine(name)?;
    engine.update(data);
    Ok(engine.finalize())
}

/// Compute the digest of `data` in one shot, writing it into `dest`.
///
/// Returns the number of bytes written, always the algorithm's digest size.
///
/// # Errors
///
/// Returns [`HashError::UnknownAlgorithm`] if the name is not registered, or
/// [`HashError::InsufficientBuffer`] if `dest` is shorter than the digest
/// size. The destination check happens before any computation and a failed
/// call never writes into `dest`.
pub fn hash_into(name: &str, data: impl AsRef<[u8]>, dest: &mut [u8]) -> Result<usize> {
    let entry = registry::lookup(name)?;
    let needed = entry.descriptor.digest_size;
    if dest.len() < needed {
        return Err(HashError::InsufficientBuffer {
            needed,
            actual: dest.len(),
        });
    }
    let mut engine = HashEngine::new(entry);
    engine.update(data);
    engine.finalize_into(dest)
}

/// Non-raising variant of [`hash_into`].
///
/// Returns `Ok(None)` if `dest` is too small (nothing is written) and
/// `Ok(Some(bytes_written))` on success.
///
/// # Errors
///
/// Returns [`HashError::UnknownAlgorithm`] if the name is not registered.
pub fn try_hash_into(
    name: &str,
    data: impl AsRef<[u8]>,
    dest: &mut [u8],
) -> Result<Option<usize>> {
    let entry = registry::lookup(name)?;
    if dest.len() < entry.descriptor.digest_size {
        return Ok(None);
    }
    let mut engine = HashEngine::new(entry);
    engine.update(data);
    Ok(engine.try_finalize_into(dest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::names;

    #[test]
    fn one_shot_equals_incremental() {
        let one_shot = hash(names::SHA512, b"hello world").expect("sha512 should hash");

        let mut engine = create_engine(names::SHA512).expect("sha512 engine should build");
        engine.update(b"hello ");
        engine.update(b"world");
        assert_eq!(one_shot, engine.finalize());
    }

    #[test]
    fn hash_into_rejects_short_destination_before_computing() {
        let mut dest = [0u8; 8];
        let err = hash_into(names::SHA256, b"abc", &mut dest)
            .expect_err("8-byte destination must be rejected");
        assert!(matches!(
            err,
            HashError::InsufficientBuffer {
                needed: 32,
                actual: 8
            }
        ));
        assert_eq!(dest, [0u8; 8], "destination must be untouched on failure");
    }

    #[test]
    fn try_hash_into_signals_short_destination_without_error() {
        let mut short = [0u8; 8];
        let outcome =
            try_hash_into(names::SHA256, b"abc", &mut short).expect("algorithm is registered");
        assert_eq!(outcome, None);

        let mut dest = [0u8; 32];
        let written = try_hash_into(names::SHA256, b"abc", &mut dest)
            .expect("algorithm is registered")
            .expect("32-byte destination should succeed");
        assert_eq!(written, 32);
        assert_eq!(
            dest.as_slice(),
            hash(names::SHA256, b"abc")
                .expect("sha256 should hash")
                .as_bytes()
        );
    }

    #[test]
    fn unknown_algorithm_fails_at_dispatch() {
        assert!(matches!(
            hash("whirlpool", b"abc"),
            Err(HashError::UnknownAlgorithm(_))
        ));
    }
}
