// tests/decode_vectors.rs
// Decoder vectors, including values far beyond native integer width
use csv::ReaderBuilder;
use num_bigint::BigInt;
use num_traits::Num;
use serde::Deserialize;
use std::{fs::File, path::Path};

use secret_finder::decoder::decode;
use secret_finder::SecretError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
struct DecodeRecord {
    index: usize,
    base: u32,
    digits: String,
    expected: String,
    valid: bool,
    comment: String,
}

#[test]
fn decode_test_vectors() {
    let path = Path::new("tests/decode-vectors.csv");
    let file = File::open(path).expect("cannot open decode-vectors.csv");
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut seen = 0;
    for result in rdr.deserialize::<DecodeRecord>() {
        let row = result.expect("CSV deserialize failed");
        let decoded = decode(&row.digits, row.base);
        if row.valid {
            let expected = BigInt::from_str_radix(&row.expected, 10).unwrap();
            assert_eq!(
                decoded.as_ref().ok(),
                Some(&expected),
                "decode mismatch @ {}: {}",
                row.index,
                row.comment
            );
        } else {
            assert!(
                matches!(decoded, Err(SecretError::InvalidDigit { .. })),
                "expected rejection @ {}: {} (got {:?})",
                row.index,
                row.comment,
                decoded
            );
        }
        seen += 1;
    }
    assert!(seen > 0, "no vectors read");
}
