/*
[INPUT]:  HTTP configuration (base URLs, timeouts, credentials, transport)
[OUTPUT]: Configured client and the shared request pipeline
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::auth::Credentials;
use crate::http::endpoints::{Access, ApiEndpoints, Endpoint};
use crate::http::headers::compose_headers;
use crate::http::signature::RequestSigner;
use crate::http::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use crate::http::{KryptonoError, Result};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub endpoints: ApiEndpoints,
    /// Sent on every request; these take precedence over client defaults.
    pub extra_headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            endpoints: ApiEndpoints::default(),
            extra_headers: HeaderMap::new(),
        }
    }
}

impl ClientConfig {
    pub fn with_endpoints(mut self, endpoints: ApiEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_extra_headers(mut self, headers: HeaderMap) -> Self {
        self.extra_headers = headers;
        self
    }
}

/// Main HTTP client for the Kryptono REST API
///
/// All state is fixed at construction. Clones share the transport.
#[derive(Debug, Clone)]
pub struct KryptonoClient {
    transport: Arc<dyn HttpTransport>,
    endpoints: ApiEndpoints,
    extra_headers: HeaderMap,
    credentials: Option<Credentials>,
    signer: Option<RequestSigner>,
}

impl KryptonoClient {
    /// Public-only client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default(), None)
    }

    /// Client with default configuration that can call private endpoints
    pub fn with_credentials(credentials: Credentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), Some(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Option<Credentials>) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, credentials, Arc::new(transport)))
    }

    /// Create a client that routes every host to `base_url`
    pub fn with_config_and_base_url(
        config: ClientConfig,
        base_url: &str,
        credentials: Option<Credentials>,
    ) -> Result<Self> {
        Self::with_config(
            config.with_endpoints(ApiEndpoints::single(base_url)),
            credentials,
        )
    }

    /// Create a client on top of a caller-supplied transport
    pub fn with_transport(
        config: ClientConfig,
        credentials: Option<Credentials>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let signer = credentials.as_ref().map(RequestSigner::new);
        Self {
            transport,
            endpoints: config.endpoints,
            extra_headers: config.extra_headers,
            credentials,
            signer,
        }
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    /// GET a public endpoint
    pub(crate) async fn get_public<Resp>(
        &self,
        endpoint: &Endpoint,
        query: &[(&str, &str)],
    ) -> Result<Resp>
    where
        Resp: DeserializeOwned,
    {
        self.execute::<(), Resp>(endpoint, query, None).await
    }

    /// Send a JSON body to a private endpoint
    pub(crate) async fn send_private<Req, Resp>(&self, endpoint: &Endpoint, body: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        self.execute(endpoint, &[], Some(body)).await
    }

    /// Serialize, sign, compose headers, send, check status, decode.
    #[instrument(skip_all, fields(endpoint = endpoint.name))]
    pub(crate) async fn execute<Req, Resp>(
        &self,
        endpoint: &Endpoint,
        query: &[(&str, &str)],
        body: Option<&Req>,
    ) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.endpoints.url_for(endpoint, query)?;
        let body = body.map(serde_json::to_vec).transpose()?;

        let signature = match (endpoint.access, &self.signer, &body) {
            (Access::Private, Some(signer), Some(bytes)) => signer.sign_body(bytes),
            _ => None,
        };
        let headers = compose_headers(
            &self.extra_headers,
            self.credentials.as_ref().map(Credentials::api_key),
            signature.as_deref(),
        )?;

        debug!(
            method = %endpoint.method,
            path = endpoint.path,
            signed = signature.is_some(),
            "sending request"
        );

        let response = self
            .transport
            .send(HttpRequest {
                method: endpoint.method.as_method(),
                url,
                headers,
                body,
            })
            .await?;

        check_status(endpoint, &response)?;
        decode_body(&response.body)
    }
}

fn check_status(endpoint: &Endpoint, response: &HttpResponse) -> Result<()> {
    let actual = response.status.as_u16();
    if endpoint.expected_status.contains(&actual) {
        return Ok(());
    }

    warn!(
        endpoint = endpoint.name,
        expected = ?endpoint.expected_status,
        actual,
        "unexpected status"
    );
    Err(KryptonoError::UnexpectedStatus {
        expected: endpoint.expected_status.to_vec(),
        actual,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    })
}

/// Decode a response body, reporting the failing field path on error
pub(crate) fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(KryptonoError::decode)?;
    deserializer.end().map_err(|err| KryptonoError::Decode {
        path: ".".to_string(),
        message: err.to_string(),
    })?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::endpoints::{ORDER_BOOK, PING};
    use crate::types::{OrderBook, PingResponse};
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingTransport {
        status: u16,
        body: &'static str,
        seen: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl HttpTransport for RecordingTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.seen.lock().unwrap().push(request);
            Ok(HttpResponse {
                status: StatusCode::from_u16(self.status).unwrap(),
                headers: HeaderMap::new(),
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    fn client_with(transport: Arc<RecordingTransport>, credentials: Option<Credentials>) -> KryptonoClient {
        KryptonoClient::with_transport(
            ClientConfig::default().with_endpoints(ApiEndpoints::single("http://mock.local")),
            credentials,
            transport,
        )
    }

    #[tokio::test]
    async fn test_injected_transport_receives_request() {
        let transport = Arc::new(RecordingTransport {
            status: 200,
            body: r#"{"result":true}"#,
            ..Default::default()
        });
        let client = client_with(transport.clone(), Some(Credentials::new("key-1", "secret")));

        let response: PingResponse = client.get_public(&PING, &[]).await.unwrap();
        assert!(response.result);

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].url.as_str(), "http://mock.local/api/v2/ping");
        assert!(seen[0].body.is_none());
        assert_eq!(seen[0].headers.get("authorization").unwrap(), "key-1");
        assert!(seen[0].headers.get("signature").is_none());
    }

    #[tokio::test]
    async fn test_unexpected_status_carries_codes_and_body() {
        let transport = Arc::new(RecordingTransport {
            status: 503,
            body: "maintenance",
            ..Default::default()
        });
        let client = client_with(transport, None);

        let err = client.get_public::<PingResponse>(&PING, &[]).await.unwrap_err();
        match err {
            KryptonoError::UnexpectedStatus {
                expected,
                actual,
                body,
            } => {
                assert_eq!(expected, vec![200]);
                assert_eq!(actual, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_decode_error_names_tuple_path() {
        let transport = Arc::new(RecordingTransport {
            status: 200,
            body: r#"{"symbol":"KNOW_BTC","limit":100,"asks":[["0.1"]],"bids":[],"time":1}"#,
            ..Default::default()
        });
        let client = client_with(transport, None);

        let err = client
            .get_public::<OrderBook>(&ORDER_BOOK, &[("symbol", "KNOW_BTC")])
            .await
            .unwrap_err();
        match err {
            KryptonoError::Decode { path, .. } => assert_eq!(path, "asks[0]"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_trailing_garbage() {
        let err = decode_body::<PingResponse>(br#"{"result":true} extra"#).unwrap_err();
        assert!(matches!(err, KryptonoError::Decode { .. }));
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let err = decode_body::<PingResponse>(b"<html>").unwrap_err();
        assert!(matches!(err, KryptonoError::Decode { .. }));
    }
}
