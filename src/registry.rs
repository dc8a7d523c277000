//! Immutable name-to-algorithm registry

use crate::error::{HashError, Result};
use crate::provider::{Blake3Provider, HashProvider, RustCryptoProvider};

/// Canonical names of the registered algorithms.
///
/// Lookup is ASCII case-insensitive, so `"SHA256"` resolves the same entry as
/// [`names::SHA256`].
pub mod names {
    /// SHA-256 (32-byte digest)
    pub const SHA256: &str = "sha256";
    /// SHA-384 (48-byte digest)
    pub const SHA384: &str = "sha384";
    /// SHA-512 (64-byte digest)
    pub const SHA512: &str = "sha512";
    /// SHA3-256 (32-byte digest)
    pub const SHA3_256: &str = "sha3-256";
    /// SHA3-384 (48-byte digest)
    pub const SHA3_384: &str = "sha3-384";
    /// SHA3-512 (64-byte digest)
    pub const SHA3_512: &str = "sha3-512";
    /// BLAKE2b-512 (64-byte digest)
    pub const BLAKE2B_512: &str = "blake2b-512";
    /// BLAKE3 (32-byte digest)
    pub const BLAKE3: &str = "blake3";
}

/// Immutable description of a registered algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    /// Canonical lowercase name.
    pub name: &'static str,
    /// Digest size in bytes. Every digest this algorithm produces has exactly
    /// this length.
    pub digest_size: usize,
}

pub(crate) struct AlgorithmEntry {
    pub(crate) descriptor: AlgorithmDescriptor,
    pub(crate) construct: fn() -> Box<dyn HashProvider>,
}

// Built once at compile time; concurrent reads need no coordination.
static ALGORITHMS: &[AlgorithmEntry] = &[
    AlgorithmEntry {
        descriptor: AlgorithmDescriptor {
            name: names::SHA256,
            digest_size: 32,
        },
        construct: || Box::new(RustCryptoProvider::<sha2::Sha256>::new()),
    },
    AlgorithmEntry {
        descriptor: AlgorithmDescriptor {
            name: names::SHA384,
            digest_size: 48,
        },
        construct: || Box::new(RustCryptoProvider::<sha2::Sha384>::new()),
    },
    AlgorithmEntry {
        descriptor: AlgorithmDescriptor {
            name: names::SHA512,
            digest_size: 64,
        },
        construct: || Box::new(RustCryptoProvider::<sha2::Sha512>::new()),
    },
    AlgorithmEntry {
        descriptor: AlgorithmDescriptor {
            name: names::SHA3_256,
            digest_size: 32,
        },
        construct: || Box::new(RustCryptoProvider::<sha3::Sha3_256>::new()),
    },
    AlgorithmEntry {
        descriptor: AlgorithmDescriptor {
            name: names::SHA3_384,
            digest_size: 48,
        },
        construct: || Box::new(RustCryptoProvider::<sha3::Sha3_384>::new()),
    },
    AlgorithmEntry {
        descriptor: AlgorithmDescriptor {
            name: names::SHA3_512,
            digest_size: 64,
        },
        construct: || Box::new(RustCryptoProvider::<sha3::Sha3_512>::new()),
    },
    AlgorithmEntry {
        descriptor: AlgorithmDescriptor {
            name: names::BLAKE2B_512,
            digest_size: 64,
        },
        construct: || Box::new(RustCryptoProvider::<blake2::Blake2b512>::new()),
    },
    AlgorithmEntry {
        descriptor: AlgorithmDescriptor {
            name: names::BLAKE3,
            digest_size: 32,
        },
        construct: || Box::new(Blake3Provider::new()),
    },
];

pub(crate) fn lookup(name: &str) -> Result<&'static AlgorithmEntry> {
    ALGORITHMS
        .iter()
        .find(|entry| entry.descriptor.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| HashError::UnknownAlgorithm(name.to_string()))
}

/// Look up the descriptor for a registered algorithm name.
///
/// # Errors
///
/// Returns [`HashError::UnknownAlgorithm`] if the name is not registered.
pub fn descriptor(name: &str) -> Result<&'static AlgorithmDescriptor> {
    Ok(&lookup(name)?.descriptor)
}

/// Iterate the canonical names of every registered algorithm.
pub fn algorithm_names() -> impl Iterator<Item = &'static str> {
    ALGORITHMS.iter().map(|entry| entry.descriptor.name)
}
