/*
[INPUT]:  API key and secret
[OUTPUT]: Credentials and HMAC signatures for private requests
[POS]:    Auth layer - handles Kryptono API authentication
[UPDATE]: When auth headers or signature methods change
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::HmacSigner;
