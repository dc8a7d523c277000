//! Named-algorithm cryptographic digests with one-shot, incremental, and
//! streaming computation.
//!
//! The same bytes always produce the same digest no matter how they arrive:
//! all at once ([`hash`]), across caller-chosen chunks ([`HashEngine`]), or
//! pulled from a readable source in bounded reads ([`hash_stream`] and its
//! async counterpart).
//!
//! Algorithms are resolved by name through an immutable process-wide registry;
//! the per-algorithm transforms are delegated to the `sha2`, `sha3`, `blake2`,
//! and `blake3` crates.
//!
//! # One-shot
//!
//! ```
//! let digest = digestry::hash(digestry::names::SHA256, b"abc")?;
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! # Ok::<(), digestry::HashError>(())
//! ```
//!
//! # Incremental
//!
//! ```
//! let mut engine = digestry::create_engine(digestry::names::SHA256)?;
//! engine.update(b"a");
//! engine.update(b"bc");
//! assert_eq!(engine.finalize(), digestry::hash(digestry::names::SHA256, b"abc")?);
//! # Ok::<(), digestry::HashError>(())
//! ```
//!
//! # Streaming
//!
//! ```
//! use std::io::Cursor;
//!
//! let mut source = Cursor::new(b"abc".to_vec());
//! let digest = digestry::hash_stream(digestry::names::SHA256, &mut source)?;
//! assert_eq!(digest, digestry::hash(digestry::names::SHA256, b"abc")?);
//! # Ok::<(), digestry::HashError>(())
//! ```

#![forbid(unsafe_code)]

pub mod digest;
pub mod dispense;
pub mod engine;
pub mod error;
mod provider;
pub mod registry;
pub mod source;
pub mod stream;

pub use crate::digest::Digest;
pub use crate::dispense::{create_engine, hash, hash_into, try_hash_into};
pub use crate::engine::HashEngine;
pub use crate::error::{HashError, Result};
pub use crate::registry::{algorithm_names, descriptor, names, AlgorithmDescriptor};
pub use crate::source::{AsyncByteSource, ByteSource};
pub use crate::stream::{
    hash_stream, hash_stream_async, hash_stream_into, hash_stream_into_async,
};
