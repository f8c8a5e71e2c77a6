// tests/documents.rs
// End-to-end recovery from share documents on disk
use num_bigint::BigInt;
use num_traits::Num;

use secret_finder::document::ShareDocument;
use secret_finder::selector::{CrossCheck, SelectionOrder};
use secret_finder::{ReconstructionConfig, Reconstructor, SecretError};

const TEST_CASE_2_SECRET: &str = "663370911699037978570509680626300147399234078930217403312651";

fn load(name: &str) -> ShareDocument {
    ShareDocument::load(format!("tests/data/{}", name)).expect("fixture should parse")
}

fn checked(limit: usize) -> Reconstructor {
    Reconstructor::new(ReconstructionConfig {
        selection: SelectionOrder::AscendingX,
        cross_check: CrossCheck::Subsets(limit),
        ..Default::default()
    })
}

#[test]
fn test_case_1() {
    let doc = load("TestCase1.json");
    assert_eq!((doc.n, doc.k), (4, 3));
    let secret = doc.reconstruct(&Reconstructor::default()).unwrap();
    assert_eq!(secret.value(), &BigInt::from(3));
    assert_eq!(doc.reconstruct(&checked(4)).unwrap(), secret);
}

#[test]
fn test_case_2_exceeds_native_precision() {
    let doc = load("TestCase2.json");
    assert_eq!((doc.n, doc.k), (10, 7));
    let expected = BigInt::from_str_radix(TEST_CASE_2_SECRET, 10).unwrap();
    let secret = doc.reconstruct(&Reconstructor::default()).unwrap();
    assert_eq!(secret.value(), &expected);
    assert!(expected.bits() > 128);
}

#[test]
fn test_case_2_every_checked_subset_agrees() {
    let doc = load("TestCase2.json");
    let secret = doc.reconstruct(&checked(120)).unwrap();
    assert_eq!(secret.to_string(), TEST_CASE_2_SECRET);
}

#[test]
fn corrupted_share_is_invisible_without_cross_check() {
    // Share 9 is off the polynomial, but the first seven shares are intact.
    let doc = load("corrupted.json");
    let secret = doc.reconstruct(&Reconstructor::default()).unwrap();
    assert_eq!(secret.to_string(), TEST_CASE_2_SECRET);
}

#[test]
fn corrupted_share_is_caught_with_cross_check() {
    let doc = load("corrupted.json");
    match doc.reconstruct(&checked(10)) {
        Err(SecretError::InconsistentShares {
            expected, subset, ..
        }) => {
            assert_eq!(expected.to_string(), TEST_CASE_2_SECRET);
            assert!(subset.contains(&8), "subset {:?} should include share 9", subset);
        }
        other => panic!("expected inconsistent shares, got {:?}", other),
    }
}

#[test]
fn repeated_runs_are_identical() {
    let doc = load("corrupted.json");
    let first = doc.reconstruct(&checked(10));
    let second = doc.reconstruct(&checked(10));
    assert_eq!(first, second);
}

#[test]
fn too_high_threshold_fails_before_arithmetic() {
    let mut doc = load("TestCase1.json");
    doc.k = 5;
    assert_eq!(
        doc.reconstruct(&Reconstructor::default()),
        Err(SecretError::InsufficientPoints {
            needed: 5,
            available: 4
        })
    );
}
