//! Chunk-boundary independence and cross-call isolation

use digestry::{create_engine, hash, names};
use proptest::prelude::*;

proptest! {
    /// The digest depends only on the concatenation of appended bytes, never
    /// on how that concatenation was chunked across calls.
    #[test]
    fn chunking_never_changes_the_digest(
        data in proptest::collection::vec(any::<u8>(), 0..2048),
        chunk_len in 1usize..97,
    ) {
        let expected = hash(names::SHA256, &data).expect("sha256 should hash");

        let mut engine = create_engine(names::SHA256).expect("sha256 engine should build");
        for piece in data.chunks(chunk_len) {
            engine.update(piece);
        }
        prop_assert_eq!(engine.finalize(), expected);
    }

    /// Splitting at a single random point is the minimal chunking case.
    #[test]
    fn single_split_never_changes_the_digest(
        data in proptest::collection::vec(any::<u8>(), 1..1024),
        split in any::<prop::sample::Index>(),
    ) {
        let at = split.index(data.len());
        let expected = hash(names::BLAKE3, &data).expect("blake3 should hash");

        let mut engine = create_engine(names::BLAKE3).expect("blake3 engine should build");
        engine.update(&data[..at]);
        engine.update(&data[at..]);
        prop_assert_eq!(engine.finalize(), expected);
    }
}

#[test]
fn concurrent_one_shots_never_cross_contaminate() {
    let handles: Vec<_> = (0u8..8)
        .map(|i| {
            std::thread::spawn(move || {
                let input = vec![i; 4096 + usize::from(i)];
                let mut digests = Vec::new();
                for _ in 0..50 {
                    digests.push(hash(names::SHA256, &input).expect("sha256 should hash"));
                }
                (input, digests)
            })
        })
        .collect();

    for handle in handles {
        let (input, digests) = handle.join().expect("hashing thread should not panic");
        let expected = hash(names::SHA256, &input).expect("sha256 should hash");
        for digest in digests {
            assert_eq!(digest, expected, "each call depends only on its own input");
        }
    }
}
