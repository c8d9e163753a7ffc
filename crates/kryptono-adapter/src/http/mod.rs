/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod general;
pub mod headers;
pub mod market;
pub mod order;
pub mod signature;
pub mod transport;

pub use error::{KryptonoError, Result};
pub use signature::{RequestSigner, sign_body};

pub use client::{ClientConfig, KryptonoClient};
pub use endpoints::{Access, ApiBase, ApiEndpoints, Endpoint};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
