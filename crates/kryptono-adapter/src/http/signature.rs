/*
[INPUT]:  Serialized request body bytes and API credentials
[OUTPUT]: Body signature for the Signature header
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use crate::auth::{Credentials, HmacSigner};

/// Signs request bodies for private endpoints
#[derive(Debug, Clone)]
pub struct RequestSigner {
    signer: HmacSigner,
}

impl RequestSigner {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            signer: credentials.signer(),
        }
    }

    /// Sign the exact bytes that will be placed on the wire.
    ///
    /// Returns `None` for an empty body; nothing is signed in that case.
    pub fn sign_body(&self, body: &[u8]) -> Option<String> {
        if body.is_empty() {
            return None;
        }
        Some(self.signer.sign(body))
    }
}

/// Lowercase hex HMAC-SHA256 of `body` keyed by `secret`.
pub fn sign_body(secret: &str, body: &[u8]) -> String {
    HmacSigner::new(secret.as_bytes()).sign(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "4a894c5c-8a7e-4337-bb6b-9fde16e3dddd";
    const ORDER_BODY: &str = r#"{"order_symbol":"KNOW_ETH","order_side":"BUY","order_price":"0.0000123","order_size":"7777","type":"LIMIT","timestamp":1507725176599,"recvWindow":5000}"#;

    #[test]
    fn test_sign_reference_order_body() {
        assert_eq!(
            sign_body(SECRET, ORDER_BODY.as_bytes()),
            "a36b5ab0fcf4a203101f9df0dcb149077e6b6215c2495a43f2c8a977dbdf0e85"
        );
    }

    #[test]
    fn test_signature_is_deterministic() {
        let signer = RequestSigner::new(&Credentials::new("key", SECRET));
        let first = signer.sign_body(ORDER_BODY.as_bytes());
        let second = signer.sign_body(ORDER_BODY.as_bytes());
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some(sign_body(SECRET, ORDER_BODY.as_bytes()).as_str()));
    }

    #[test]
    fn test_single_byte_change_changes_signature() {
        let original = sign_body(SECRET, ORDER_BODY.as_bytes());
        let mut tampered = ORDER_BODY.as_bytes().to_vec();
        let last = tampered.len() - 2;
        tampered[last] = b'1';
        assert_ne!(original, sign_body(SECRET, &tampered));
    }

    #[test]
    fn test_whitespace_changes_signature() {
        let spaced = ORDER_BODY.replace(',', ", ");
        assert_ne!(
            sign_body(SECRET, ORDER_BODY.as_bytes()),
            sign_body(SECRET, spaced.as_bytes())
        );
    }

    #[test]
    fn test_empty_body_is_not_signed() {
        let signer = RequestSigner::new(&Credentials::new("key", SECRET));
        assert!(signer.sign_body(b"").is_none());
    }
}
