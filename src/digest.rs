//! Digest value type with encoding support

use subtle::ConstantTimeEq;

/// Fixed-length output of a successful hash computation.
///
/// The length always equals the digest size declared by the algorithm that
/// produced it. A `Digest` is only ever constructed from a completed finalize;
/// failed or cancelled operations never yield one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Digest {
    bytes: Vec<u8>,
}

impl Digest {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Get the raw digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert into the raw digest bytes
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Render the digest as a lowercase hexadecimal string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Render the digest as a standard base64 string
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{Engine as _, engine::general_purpose};
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Length of the digest in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the digest is empty (never true for a registered algorithm)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Compare against an expected value in constant time.
    ///
    /// Use this instead of `==` when the comparison guards a security decision,
    /// e.g. verifying a stored digest. Differing lengths compare unequal.
    #[must_use]
    pub fn ct_eq(&self, expected: &[u8]) -> bool {
        self.bytes.ct_eq(expected).into()
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.bytes
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
