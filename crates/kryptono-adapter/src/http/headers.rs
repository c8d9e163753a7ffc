/*
[INPUT]:  Caller headers, optional API key, optional body signature
[OUTPUT]: Final outgoing header set
[POS]:    HTTP layer - header composition with caller-first precedence
[UPDATE]: When adding default headers or changing precedence
*/

use reqwest::header::{
    AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue,
};

use crate::http::{KryptonoError, Result};

pub const HEADER_SIGNATURE: &str = "signature";
pub const HEADER_X_REQUESTED_WITH: &str = "x-requested-with";

/// Build the header set for one request.
///
/// Caller headers are copied first and never overwritten. Defaults are then
/// added only where the caller left the name unset, in this order:
///
/// 1. `Content-Type: application/json`
/// 2. `X-Requested-With: XMLHttpRequest`
/// 3. `Authorization: <api key>` when credentials are configured
/// 4. `Signature: <hex>` when the request was signed
pub fn compose_headers(
    caller: &HeaderMap,
    api_key: Option<&str>,
    signature: Option<&str>,
) -> Result<HeaderMap> {
    let mut headers = caller.clone();

    insert_default(
        &mut headers,
        CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    insert_default(
        &mut headers,
        HeaderName::from_static(HEADER_X_REQUESTED_WITH),
        HeaderValue::from_static("XMLHttpRequest"),
    );

    if let Some(api_key) = api_key {
        let value = sensitive_value(api_key)
            .map_err(|_| KryptonoError::Config("API key is not a valid header value".into()))?;
        insert_default(&mut headers, AUTHORIZATION, value);
    }

    if let Some(signature) = signature {
        let value = sensitive_value(signature)
            .map_err(|_| KryptonoError::Config("signature is not a valid header value".into()))?;
        insert_default(&mut headers, HeaderName::from_static(HEADER_SIGNATURE), value);
    }

    Ok(headers)
}

fn insert_default(headers: &mut HeaderMap, name: HeaderName, value: HeaderValue) {
    headers.entry(name).or_insert(value);
}

fn sensitive_value(raw: &str) -> std::result::Result<HeaderValue, InvalidHeaderValue> {
    let mut value = HeaderValue::from_str(raw)?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
        headers.get(name).and_then(|value| value.to_str().ok())
    }

    #[test]
    fn test_defaults_without_credentials() {
        let headers = compose_headers(&HeaderMap::new(), None, None).unwrap();

        assert_eq!(get(&headers, "content-type"), Some("application/json"));
        assert_eq!(get(&headers, "X-Requested-With"), Some("XMLHttpRequest"));
        assert!(headers.get(AUTHORIZATION).is_none());
        assert!(headers.get(HEADER_SIGNATURE).is_none());
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_identity_and_signature_headers() {
        let headers = compose_headers(&HeaderMap::new(), Some("api-key"), Some("abc123")).unwrap();

        assert_eq!(get(&headers, "authorization"), Some("api-key"));
        assert_eq!(get(&headers, "Signature"), Some("abc123"));
        assert!(headers.get(AUTHORIZATION).map(HeaderValue::is_sensitive).unwrap_or(false));
    }

    #[test]
    fn test_caller_headers_win() {
        let mut caller = HeaderMap::new();
        caller.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        caller.insert("Authorization", HeaderValue::from_static("caller-key"));
        caller.insert("x-trace-id", HeaderValue::from_static("t-1"));

        let headers = compose_headers(&caller, Some("api-key"), Some("sig")).unwrap();

        assert_eq!(get(&headers, "content-type"), Some("text/plain"));
        assert_eq!(get(&headers, "authorization"), Some("caller-key"));
        assert_eq!(get(&headers, "x-trace-id"), Some("t-1"));
        assert_eq!(get(&headers, "signature"), Some("sig"));
        assert_eq!(headers.get_all(AUTHORIZATION).iter().count(), 1);
    }

    #[test]
    fn test_invalid_api_key_is_config_error() {
        let err = compose_headers(&HeaderMap::new(), Some("bad\nkey"), None).unwrap_err();
        assert!(matches!(err, KryptonoError::Config(_)));
    }
}
