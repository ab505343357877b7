use serde_json::{json, Value};

/// Summary of one run, logged as a JSON line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub digits: u64,
    pub terms: u64,
    pub precision_bits: u64,
    pub elapsed_ms: u128,
    pub sha256: String,
}

impl RunReport {
    pub fn to_json(&self) -> Value {
        json!({
            "algo": "chudnovsky",
            "digits": self.digits,
            "terms": self.terms,
            "precision_bits": self.precision_bits,
            "elapsed_ms": self.elapsed_ms as u64,
            "sha256": self.sha256,
        })
    }
}
