/*
[INPUT]:  Signed account queries (GET with a JSON body)
[OUTPUT]: Account profile and balances
[POS]:    HTTP layer - account endpoints (require API key + body signature)
[UPDATE]: When adding account endpoints or changing response format
*/

use crate::http::endpoints::{ACCOUNT_BALANCES, ACCOUNT_INFORMATION};
use crate::http::{KryptonoClient, Result};
use crate::types::{AccountInformation, AccountRequest, Balance};

impl KryptonoClient {
    /// Account profile, KYC state and fee tier
    ///
    /// GET /api/v2/account/details (signed JSON body)
    pub async fn account_information(&self, request: &AccountRequest) -> Result<AccountInformation> {
        self.send_private(&ACCOUNT_INFORMATION, request).await
    }

    /// Per-currency balances
    ///
    /// GET /api/v2/account/balances (signed JSON body)
    pub async fn account_balances(&self, request: &AccountRequest) -> Result<Vec<Balance>> {
        self.send_private(&ACCOUNT_BALANCES, request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use crate::http::{ClientConfig, KryptonoClient};
    use crate::types::{AccountRequest, Balance, DynamicValue, RequestWindow};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SECRET: &str = "4a894c5c-8a7e-4337-bb6b-9fde16e3dddd";
    const ACCOUNT_BODY: &str = r#"{"timestamp":1530682938651,"recvWindow":5000}"#;
    const ACCOUNT_SIGNATURE: &str =
        "f6f8463e8c41574ccb2bfc46938868b78b0b6a1a0cb75cf58a92eba3d6535b9f";

    async fn signed_get(
        server: &MockServer,
        api_key: &str,
        endpoint: &str,
        response: &str,
    ) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(header("authorization", api_key))
            .and(header("signature", ACCOUNT_SIGNATURE))
            .and(body_string(ACCOUNT_BODY))
            .respond_with(ResponseTemplate::new(200).set_body_raw(response.to_string(), "application/json"))
            .expect(1)
            .mount(server)
            .await;
    }

    fn client(server: &MockServer, api_key: &str) -> KryptonoClient {
        KryptonoClient::with_config_and_base_url(
            ClientConfig::default(),
            &server.uri(),
            Some(Credentials::new(api_key, SECRET)),
        )
        .expect("client init")
    }

    fn request() -> AccountRequest {
        AccountRequest::new(RequestWindow::at(1_530_682_938_651).with_recv_window(5000))
    }

    #[tokio::test]
    async fn test_account_information() {
        let server = MockServer::start().await;
        let api_key = uuid::Uuid::new_v4().to_string();
        let mock_response = r#"{
            "account_id": "5377f2e2-4b0e-4b15-be17-28092ae0c346",
            "email": "email@email.com",
            "phone": null,
            "enable_google_2fa": true,
            "status": "offline",
            "create_at": 1524567654822,
            "nick_name": "Nickname 1",
            "chat_id": "xxxx@kryptono.exchange",
            "chat_password": "xxxxxxxxxxx",
            "banks": [],
            "country": "US",
            "language": "en",
            "kyc_status": null,
            "kyc_level": "level1",
            "last_login_history": {
                "id": {
                    "timestamp": 1528199468,
                    "machineIdentifier": 8990639,
                    "processIdentifier": 20156,
                    "counter": 7772354,
                    "time": 1528199468000,
                    "date": 1528199468000,
                    "timeSecond": 1528199468
                },
                "account_id": "5377f2e2-4b0e-4b15-be17-28092ae0c346",
                "nick_name": "Nickname 1",
                "email": "email@email.com",
                "ip_address": "xxx.xxx.xxx.xxx",
                "login_at": 1528199468073,
                "os_name": "Mac OS X",
                "browser_name": "Chrome",
                "country": "Country",
                "city": "City",
                "sentEmail": true
            },
            "commission_status": true,
            "account_kyc": null,
            "kyc_reject_infos": [],
            "allow_order": 1,
            "disable_withdraw": 0,
            "referral_id": "XXXXXX",
            "favorite_pairs": ["KNOW_ETH"],
            "chat_server": "wss://xxx.kryptono.exchange:xxxx/ws",
            "exchange_fee": { "standard_fee": "0.1", "know_fee": "0.05" }
        }"#;
        signed_get(&server, &api_key, "/api/v2/account/details", mock_response).await;

        let account = client(&server, &api_key)
            .account_information(&request())
            .await
            .expect("account_information failed");

        assert!(account.phone.is_none());
        assert!(account.kyc_status.is_none());
        assert!(account.enable_google_2fa);
        assert!(account.can_place_orders());
        assert!(account.can_withdraw());
        assert_eq!(account.favorite_pairs, vec!["KNOW_ETH".to_string()]);

        let login = account.last_login_history.expect("login history");
        assert!(login.sent_email);
        assert_eq!(login.id.map(|id| id.machine_identifier), Some(8_990_639));

        let fee = account.exchange_fee.expect("exchange fee");
        assert_eq!(fee.know_fee, Decimal::from_str("0.05").unwrap());
    }

    #[tokio::test]
    async fn test_account_information_polymorphic_phone() {
        let server = MockServer::start().await;
        let api_key = uuid::Uuid::new_v4().to_string();
        signed_get(
            &server,
            &api_key,
            "/api/v2/account/details",
            r#"{"account_id":"a","email":"e","phone":{"country":"+1","number":"5550100"},"status":"online","create_at":1}"#,
        )
        .await;

        let account = client(&server, &api_key)
            .account_information(&request())
            .await
            .expect("account_information failed");

        let phone = account.phone.as_ref().and_then(DynamicValue::as_object);
        assert!(phone.is_some_and(|phone| phone.contains_key("number")));
    }

    #[tokio::test]
    async fn test_account_balances() {
        let server = MockServer::start().await;
        let api_key = uuid::Uuid::new_v4().to_string();
        signed_get(
            &server,
            &api_key,
            "/api/v2/account/balances",
            r#"[
                {
                    "currency_code": "BTC",
                    "address": "2MxctvXExQofAVqakPfBjKqxipfwTqwyCFS",
                    "total": "1000.00275",
                    "available": "994.5022",
                    "in_order": "5.50055"
                }
            ]"#,
        )
        .await;

        let balances = client(&server, &api_key)
            .account_balances(&request())
            .await
            .expect("account_balances failed");

        assert_eq!(
            balances,
            vec![Balance {
                currency_code: "BTC".to_string(),
                address: Some("2MxctvXExQofAVqakPfBjKqxipfwTqwyCFS".to_string()),
                total: Decimal::from_str("1000.00275").unwrap(),
                available: Decimal::from_str("994.5022").unwrap(),
                in_order: Decimal::from_str("5.50055").unwrap(),
            }]
        );
    }
}
