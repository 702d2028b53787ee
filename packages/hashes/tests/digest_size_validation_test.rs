//! Construction-time validation for caller-chosen digest sizes

use cryypt_hashes::algorithms::{Blake2b, Blake2s, Shake128, Shake256};
use cryypt_hashes::{Algorithm, AlgorithmSpec, ErrorKind, HashAlgorithm, HashError};
use proptest::prelude::*;
use serde_json::json;

fn kind<T>(result: Result<T, HashError>) -> Option<ErrorKind> {
    result.err().map(|e| e.kind())
}

#[test]
fn test_blake2b_accepts_only_64() {
    assert_eq!(Blake2b::new(64).map(|b| b.digest_size()).ok(), Some(64));
    assert_eq!(kind(Blake2b::new(32)), Some(ErrorKind::Value));
    assert_eq!(kind(Blake2b::new(48)), Some(ErrorKind::Value));
    assert_eq!(kind(Blake2b::new(0)), Some(ErrorKind::Value));
    assert_eq!(kind(Blake2b::from_value(&json!(-1))), Some(ErrorKind::Value));
    assert_eq!(kind(Blake2b::from_value(&json!("64"))), Some(ErrorKind::Type));
}

#[test]
fn test_blake2s_accepts_only_32() {
    assert_eq!(Blake2s::new(32).map(|b| b.digest_size()).ok(), Some(32));
    assert_eq!(kind(Blake2s::new(64)), Some(ErrorKind::Value));
    assert_eq!(kind(Blake2s::new(16)), Some(ErrorKind::Value));
    assert_eq!(kind(Blake2s::from_value(&json!(0))), Some(ErrorKind::Value));
    assert_eq!(kind(Blake2s::from_value(&json!(32.5))), Some(ErrorKind::Type));
}

#[test]
fn test_error_messages() {
    let message = |result: Result<Blake2b, HashError>| result.err().map(|e| e.to_string());

    assert_eq!(
        message(Blake2b::from_value(&json!("64"))).as_deref(),
        Some("digest_size must be an int")
    );
    assert_eq!(
        message(Blake2b::new(0)).as_deref(),
        Some("digest_size must be a positive integer")
    );
    assert_eq!(
        message(Blake2b::new(48)).as_deref(),
        Some("Digest size must be 64")
    );
    assert_eq!(
        Blake2s::new(64).err().map(|e| e.to_string()).as_deref(),
        Some("Digest size must be 32")
    );
}

#[test]
fn test_shake_rejects_non_positive_and_non_integers() {
    assert_eq!(kind(Shake128::new(0)), Some(ErrorKind::Value));
    assert_eq!(kind(Shake256::new(0)), Some(ErrorKind::Value));
    assert_eq!(kind(Shake128::from_value(&json!(-5))), Some(ErrorKind::Value));
    assert_eq!(kind(Shake256::from_value(&json!("16"))), Some(ErrorKind::Type));
    assert_eq!(kind(Shake128::from_value(&json!(16.0))), Some(ErrorKind::Type));
    assert_eq!(kind(Shake128::from_value(&json!(null))), Some(ErrorKind::Type));
}

#[test]
fn test_shake_has_no_upper_bound() {
    let huge = Shake256::new(1 << 20).expect("no upper bound");
    assert_eq!(huge.digest_size(), 1 << 20);
    assert_eq!(huge.block_size(), None);
    assert_eq!(Shake128::new(usize::MAX).map(|s| s.digest_size()).ok(), Some(usize::MAX));
}

#[test]
fn test_spec_conversion_keeps_kinds() {
    let convert = |spec: AlgorithmSpec| kind(Algorithm::try_from(spec));

    assert_eq!(
        convert(AlgorithmSpec::named("shake128").with_digest_size(16)),
        None
    );
    assert_eq!(
        convert(AlgorithmSpec::named("shake128").with_digest_size(0)),
        Some(ErrorKind::Value)
    );
    assert_eq!(
        convert(AlgorithmSpec::named("blake2b").with_digest_size("64")),
        Some(ErrorKind::Type)
    );
    assert_eq!(
        convert(AlgorithmSpec::named("blake2b").with_digest_size(48)),
        Some(ErrorKind::Value)
    );
    assert_eq!(convert(AlgorithmSpec::named("shake256")), Some(ErrorKind::Type));
}

#[test]
fn test_failed_deserialization_reports_message() {
    let err = serde_json::from_value::<Algorithm>(json!({"name": "shake128", "digest_size": 0}))
        .err()
        .map(|e| e.to_string());
    assert_eq!(err.as_deref(), Some("digest_size must be a positive integer"));
}

proptest! {
    #[test]
    fn prop_shake_accepts_any_positive_size(size in 1usize..=1_000_000) {
        prop_assert_eq!(Shake128::new(size).map(|s| s.digest_size()).ok(), Some(size));
        prop_assert_eq!(Shake256::from_value(&json!(size)).map(|s| s.digest_size()).ok(), Some(size));
    }

    #[test]
    fn prop_shake_rejects_non_positive(size in i64::MIN..=0) {
        prop_assert_eq!(kind(Shake128::from_value(&json!(size))), Some(ErrorKind::Value));
    }

    #[test]
    fn prop_blake2b_rejects_everything_but_64(size in 0usize..10_000) {
        prop_assume!(size != 64);
        prop_assert_eq!(kind(Blake2b::new(size)), Some(ErrorKind::Value));
    }
}
