use hmac::{Mac, SimpleHmac};
use sha2::Sha256;

use super::errors::CryptoError;

/// Webhook signature, as a bare hex digest (prefix already stripped).
pub struct Signature<'a>(pub &'a str);

impl<'a> Signature<'a> {
    /// Check if a signature is valid for a body and secret.
    ///
    /// Fails closed: an empty secret never validates anything.
    pub fn is_valid(&self, body: &[u8], secret: &str) -> Result<bool, CryptoError> {
        if secret.is_empty() {
            return Ok(false);
        }

        let decoded_signature =
            &hex::decode(self.0).map_err(|_| CryptoError::InvalidSignatureFormat {
                sig: self.0.to_string(),
            })?;

        let mut hmac = SimpleHmac::<Sha256>::new_from_slice(secret.as_bytes())
            .map_err(|_| CryptoError::InvalidSignatureFormat {
                sig: self.0.to_string(),
            })?;

        hmac.update(body);
        Ok(hmac.verify_slice(decoded_signature).is_ok())
    }

    /// Compute the hex digest for a body and secret.
    pub fn compute(body: &[u8], secret: &str) -> String {
        let mut hmac = SimpleHmac::<Sha256>::new_from_slice(secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        hmac.update(body);
        hex::encode(hmac.finalize().into_bytes())
    }
}
