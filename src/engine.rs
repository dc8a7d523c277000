//! Incremental hash engine state machine

use crate::digest::Digest;
use crate::error::{HashError, Result};
use crate::provider::HashProvider;
use crate::registry::{AlgorithmDescriptor, AlgorithmEntry};

/// Incremental hash computation bound to one algorithm.
///
/// An engine moves through three states: ready (nothing appended), accumulating
/// (one or more [`update`](Self::update) calls), and finalized (a digest has
/// been produced). [`reset`](Self::reset) returns it to ready from any state,
/// so one engine can serve many logical computations without reallocating its
/// backend state.
///
/// The digest depends only on the exact ordered concatenation of all bytes
/// appended since the last reset, never on how those bytes were chunked across
/// calls.
///
/// Engines are permanently bound to the algorithm they were created for and are
/// single-owner: all methods take `&mut self`, so the borrow checker enforces
/// the serialization contract. There is no internal locking.
pub struct HashEngine {
    provider: Box<dyn HashProvider>,
    descriptor: &'static AlgorithmDescriptor,
    finalized: bool,
}

impl HashEngine {
    pub(crate) fn new(entry: &'static AlgorithmEntry) -> Self {
        Self {
            provider: (entry.construct)(),
            descriptor: &entry.descriptor,
            finalized: false,
        }
    }

    /// The descriptor of the algorithm this engine is bound to
    #[must_use]
    pub fn algorithm(&self) -> &'static AlgorithmDescriptor {
        self.descriptor
    }

    /// Digest size in bytes of the bound algorithm
    #[must_use]
    pub fn digest_size(&self) -> usize {
        self.descriptor.digest_size
    }

    /// Whether a digest has been produced since the last reset
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Append bytes to the running computation.
    ///
    /// # Panics
    ///
    /// Panics if called after [`finalize`](Self::finalize) without an
    /// intervening [`reset`](Self::reset). That sequence is a caller defect,
    /// not a runtime condition.
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        assert!(
            !self.finalized,
            "HashEngine::update called on a finalized engine; call reset() to start a new computation"
        );
        self.provider.append(data.as_ref());
    }

    /// Compute the digest over everything appended since the last reset.
    ///
    /// The digest length always equals [`digest_size`](Self::digest_size).
    ///
    /// # Panics
    ///
    /// Panics if the engine is already finalized.
    #[must_use]
    pub fn finalize(&mut self) -> Digest {
        assert!(
            !self.finalized,
            "HashEngine::finalize called twice without reset()"
        );
        self.finalized = true;
        let bytes = self.provider.finalize_and_reset();
        assert_eq!(
            bytes.len(),
            self.descriptor.digest_size,
            "backend produced a digest of the wrong size"
        );
        Digest::new(bytes)
    }

    /// Compute the digest and write it into `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InsufficientBuffer`] if `dest` is shorter than the
    /// digest size. The check happens before the accumulator is touched, so the
    /// engine state and `dest` are both unchanged on failure.
    ///
    /// # Panics
    ///
    /// Panics if the engine is already finalized.
    pub fn finalize_into(&mut self, dest: &mut [u8]) -> Result<usize> {
        let needed = self.descriptor.digest_size;
        let actual = dest.len();
        self.try_finalize_into(dest)
            .ok_or(HashError::InsufficientBuffer { needed, actual })
    }

    /// Non-raising variant of [`finalize_into`](Self::finalize_into).
    ///
    /// Returns `None` if `dest` is shorter than the digest size; nothing is
    /// written and the engine state is completely unchanged, so the caller may
    /// retry with a larger buffer and obtain the same digest. On success the
    /// number of bytes written (always the digest size) is returned and the
    /// engine transitions to finalized.
    ///
    /// # Panics
    ///
    /// Panics if the engine is already finalized.
    pub fn try_finalize_into(&mut self, dest: &mut [u8]) -> Option<usize> {
        assert!(
            !self.finalized,
            "HashEngine::try_finalize_into called on a finalized engine; call reset() first"
        );
        let size = self.descriptor.digest_size;
        if dest.len() < size {
            // Accumulator untouched; a retry with a larger buffer must succeed
            // with the same result.
            return None;
        }
        let bytes = self.provider.finalize_and_reset();
        assert_eq!(
            bytes.len(),
            size,
            "backend produced a digest of the wrong size"
        );
        dest[..size].copy_from_slice(&bytes);
        self.finalized = true;
        Some(size)
    }

    /// Discard all accumulated state and return to ready.
    ///
    /// Callable from any state; the backend state is re-initialized in place.
    pub fn reset(&mut self) {
        self.provider.reset();
        self.finalized = false;
    }
}

impl std::fmt::Debug for HashEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashEngine")
            .field("algorithm", &self.descriptor.name)
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}
