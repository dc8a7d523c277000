//! Backend provider contract and adapters over the digest crates

/// Backend transform owned by exactly one engine.
///
/// Implementations hold the per-algorithm accumulator state. `finalize_and_reset`
/// produces the digest over everything appended since construction or the last
/// reset and leaves the provider back in its initial state, ready for reuse
/// without reallocating.
pub(crate) trait HashProvider: Send {
    fn append(&mut self, data: &[u8]);
    fn finalize_and_reset(&mut self) -> Vec<u8>;
    fn reset(&mut self);
}

/// Adapter for any fixed-output RustCrypto hasher (`sha2`, `sha3`, `blake2`).
pub(crate) struct RustCryptoProvider<D: digest::Digest + Send> {
    hasher: D,
}

impl<D: digest::Digest + Send> RustCryptoProvider<D> {
    pub(crate) fn new() -> Self {
        Self { hasher: D::new() }
    }
}

impl<D: digest::Digest + Send> HashProvider for RustCryptoProvider<D> {
    fn append(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize_and_reset(&mut self) -> Vec<u8> {
        // Swap in a fresh hasher; the state is a fixed-size block, so this is
        // an in-place re-initialization, not a heap reallocation.
        let done = std::mem::replace(&mut self.hasher, D::new());
        done.finalize().to_vec()
    }

    fn reset(&mut self) {
        self.hasher = D::new();
    }
}

/// Adapter for the `blake3` hasher, which carries its own reset support.
pub(crate) struct Blake3Provider {
    hasher: blake3::Hasher,
}

impl Blake3Provider {
    pub(crate) fn new() -> Self {
        Self {
            hasher: blake3::Hasher::new(),
        }
    }
}

impl HashProvider for Blake3Provider {
    fn append(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize_and_reset(&mut self) -> Vec<u8> {
        let out = self.hasher.finalize();
        self.hasher.reset();
        out.as_bytes().to_vec()
    }

    fn reset(&mut self) {
        self.hasher.reset();
    }
}
