use sha2::{Sha256, Digest};

/// Hex SHA-256 of the rendered digits, for comparing runs without diffing them.
pub fn fingerprint(digits: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(digits.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)
}
