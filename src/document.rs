//! The JSON share document:
//!
//! ```json
//! { "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" } }
//! ```
//!
//! Every key other than `keys` is the share's x coordinate. Shares keep
//! the order in which they appear in the document.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{SecretError, SecretResult};
use crate::reconstruct::{EncodedShare, Reconstructor, Secret};
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;

const KEYS_FIELD: &str = "keys";

/// Accepts both `3` and `"3"`, as documents in the wild use either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Numeric {
    Int(u64),
    Text(String),
}

impl Numeric {
    fn as_text(&self) -> String {
        match self {
            Numeric::Int(v) => v.to_string(),
            Numeric::Text(s) => s.trim().to_string(),
        }
    }

    fn parse<T: FromStr>(&self, field: &str) -> SecretResult<T> {
        let text = self.as_text();
        text.parse().map_err(|_| {
            SecretError::Document(format!("{} is not a valid number: {:?}", field, text))
        })
    }
}

#[derive(Debug, Deserialize)]
struct Keys {
    n: Numeric,
    k: Numeric,
}

#[derive(Debug, Deserialize)]
struct Record {
    base: Numeric,
    value: Numeric,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDocument {
    /// Number of shares the document claims to hold.
    pub n: usize,
    /// Threshold.
    pub k: usize,
    pub shares: Vec<EncodedShare>,
}

impl ShareDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> SecretResult<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| {
            SecretError::Document(format!("cannot read {}: {}", path.display(), e))
        })?;
        let doc: ShareDocument = data.parse()?;
        info!(
            "loaded {} shares (n = {}, k = {}) from {}",
            doc.shares.len(),
            doc.n,
            doc.k,
            path.display()
        );
        Ok(doc)
    }

    pub fn reconstruct(&self, reconstructor: &Reconstructor) -> SecretResult<Secret> {
        reconstructor.reconstruct_encoded(&self.shares, self.k)
    }
}

impl FromStr for ShareDocument {
    type Err = SecretError;

    fn from_str(s: &str) -> SecretResult<Self> {
        let root: Value = serde_json::from_str(s).map_err(json_error)?;
        let object = root
            .as_object()
            .ok_or_else(|| SecretError::Document("top level must be an object".to_string()))?;

        let keys = object
            .get(KEYS_FIELD)
            .ok_or_else(|| SecretError::Document("missing \"keys\" object".to_string()))?;
        let keys: Keys = serde_json::from_value(keys.clone()).map_err(json_error)?;
        let n: usize = keys.n.parse("keys.n")?;
        let k: usize = keys.k.parse("keys.k")?;

        let mut shares = Vec::with_capacity(object.len().saturating_sub(1));
        for (key, value) in object {
            if key == KEYS_FIELD {
                continue;
            }
            let x: i64 = key.trim().parse().map_err(|_| {
                SecretError::Document(format!("share key {:?} is not an integer", key))
            })?;
            let record: Record = serde_json::from_value(value.clone())
                .map_err(|e| SecretError::Document(format!("share {}: {}", key, e)))?;
            let base: u32 = record.base.parse(&format!("share {} base", key))?;
            let share = EncodedShare::new(x, base, record.value.as_text());
            debug!("share x = {} base = {} digits = {}", share.x, share.base, share.digits);
            shares.push(share);
        }

        if shares.len() != n {
            warn!("document declares n = {} but holds {} shares", n, shares.len());
        }
        Ok(ShareDocument { n, k, shares })
    }
}

fn json_error(e: serde_json::Error) -> SecretError {
    SecretError::Document(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn parses_document_in_order() {
        let doc: ShareDocument = SAMPLE.parse().unwrap();
        assert_eq!(doc.n, 4);
        assert_eq!(doc.k, 3);
        let xs: Vec<i64> = doc.shares.iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![1, 2, 3, 6]);
        assert_eq!(doc.shares[3], EncodedShare::new(6, 4, "213"));
    }

    #[test]
    fn keeps_document_order_not_key_order() {
        let doc: ShareDocument = r#"{
            "keys": { "n": 3, "k": 2 },
            "10": { "base": "10", "value": "21" },
            "2": { "base": "10", "value": "5" },
            "1": { "base": "10", "value": "3" }
        }"#
        .parse()
        .unwrap();
        let xs: Vec<i64> = doc.shares.iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![10, 2, 1]);
    }

    #[test]
    fn accepts_numeric_fields() {
        let doc: ShareDocument =
            r#"{"keys": {"n": "1", "k": 1}, "5": {"base": 16, "value": "ff"}}"#
                .parse()
                .unwrap();
        assert_eq!(doc.shares, vec![EncodedShare::new(5, 16, "ff")]);
    }

    #[test]
    fn reconstructs_sample_document() {
        let doc: ShareDocument = SAMPLE.parse().unwrap();
        let secret = doc.reconstruct(&Reconstructor::default()).unwrap();
        assert_eq!(secret.value(), &BigInt::from(3));
    }

    #[test]
    fn rejects_malformed_documents() {
        let cases = [
            "not json",
            "[1, 2]",
            r#"{"1": {"base": "10", "value": "4"}}"#,
            r#"{"keys": {"n": 1}}"#,
            r#"{"keys": {"n": 1, "k": "three"}}"#,
            r#"{"keys": {"n": 1, "k": 1}, "one": {"base": "10", "value": "4"}}"#,
            r#"{"keys": {"n": 1, "k": 1}, "1": {"value": "4"}}"#,
            r#"{"keys": {"n": 1, "k": 1}, "1": {"base": "ten", "value": "4"}}"#,
        ];
        for case in cases {
            assert!(
                matches!(case.parse::<ShareDocument>(), Err(SecretError::Document(_))),
                "accepted {}",
                case
            );
        }
    }

    #[test]
    fn bad_digits_surface_as_decode_errors() {
        let doc: ShareDocument =
            r#"{"keys": {"n": 1, "k": 1}, "1": {"base": "2", "value": "102"}}"#
                .parse()
                .unwrap();
        assert!(matches!(
            doc.reconstruct(&Reconstructor::default()),
            Err(SecretError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_document_error() {
        assert!(matches!(
            ShareDocument::load("tests/data/does-not-exist.json"),
            Err(SecretError::Document(_))
        ));
    }
}
