use sha2::{Digest, Sha256};

pub mod error;

/// One-way hash stored in place of an emailed token, as lowercase hex SHA-256.
/// Whatever verifies the token later must hash it the same way.
pub fn hash_token(token: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(token.as_bytes());
  let result = hasher.finalize();
  format!("{:x}", result)
}
