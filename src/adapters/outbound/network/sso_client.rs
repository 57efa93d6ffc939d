use crate::ports::outbound::CredentialExchanger;
use crate::shared::error::ReportError;
use crate::shared::Result;
use crate::update_reporting::domain::{AccessCredential, OfflineCredential};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

/// SsoTokenClient adapter for the Red Hat SSO OpenID Connect token endpoint
///
/// Implements the CredentialExchanger port with a `refresh_token` grant.
/// One request per exchange; no retry, no timeout beyond the transport
/// default.
pub struct SsoTokenClient {
    client: Client,
    token_url: String,
}

impl SsoTokenClient {
    pub const DEFAULT_TOKEN_URL: &'static str =
        "https://sso.redhat.com/auth/realms/redhat-external/protocol/openid-connect/token";
    pub const CLIENT_ID: &'static str = "rhsm-api";

    /// Creates a client for the production SSO endpoint
    pub fn new() -> Result<Self> {
        Self::with_token_url(Self::DEFAULT_TOKEN_URL)
    }

    /// Creates a client for an alternative token endpoint
    pub fn with_token_url(token_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("rhsm-updates/{}", version);
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            token_url: token_url.into(),
        })
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    fn form_body(offline: &OfflineCredential) -> String {
        format!(
            "grant_type=refresh_token&client_id={}&refresh_token={}",
            urlencoding::encode(Self::CLIENT_ID),
            urlencoding::encode(offline.expose())
        )
    }
}

impl CredentialExchanger for SsoTokenClient {
    fn exchange(&self, offline: &OfflineCredential) -> Result<AccessCredential> {
        log::debug!("POST {}", self.token_url);

        let response = self
            .client
            .post(&self.token_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Self::form_body(offline))
            .send()
            .map_err(|e| ReportError::Authentication {
                details: format!("request to {} failed", self.token_url),
                body: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| ReportError::Authentication {
            details: format!("failed to read response from {}", self.token_url),
            body: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(ReportError::Authentication {
                details: format!("received HTTP {} from the token endpoint", status),
                body,
            }
            .into());
        }

        let token: TokenResponse = match serde_json::from_str(&body) {
            Ok(token) => token,
            Err(e) => {
                return Err(ReportError::Authentication {
                    details: format!("malformed token response: {}", e),
                    body,
                }
                .into());
            }
        };

        match token.access_token {
            Some(access_token) if !access_token.is_empty() => {
                Ok(AccessCredential::new(access_token, token.expires_in))
            }
            _ => Err(ReportError::Authentication {
                details: "token response did not contain an access_token".to_string(),
                body,
            }
            .into()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn offline(token: &str) -> OfflineCredential {
        OfflineCredential::new(token).unwrap()
    }

    fn client_for(server: &Server) -> SsoTokenClient {
        SsoTokenClient::with_token_url(format!("{}/token", server.url())).unwrap()
    }

    fn authentication_error(err: &anyhow::Error) -> (&str, &str) {
        match err.downcast_ref::<ReportError>() {
            Some(ReportError::Authentication { details, body }) => (details, body),
            other => panic!("expected authentication error, got {:?}", other),
        }
    }

    #[test]
    fn test_client_creation() {
        let client = SsoTokenClient::new().unwrap();
        assert_eq!(client.token_url(), SsoTokenClient::DEFAULT_TOKEN_URL);
    }

    #[test]
    fn test_form_body_encodes_token() {
        let body = SsoTokenClient::form_body(&offline("a b&c=d"));
        assert_eq!(
            body,
            "grant_type=refresh_token&client_id=rhsm-api&refresh_token=a%20b%26c%3Dd"
        );
    }

    #[test]
    fn test_exchange_success() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/token")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
                Matcher::UrlEncoded("client_id".into(), "rhsm-api".into()),
                Matcher::UrlEncoded("refresh_token".into(), "offline-123".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token":"access-xyz","expires_in":900,"token_type":"Bearer"}"#)
            .create();

        let access = client_for(&server).exchange(&offline("offline-123")).unwrap();

        mock.assert();
        assert_eq!(access.token(), "access-xyz");
        assert!(!access.is_expired());
    }

    #[test]
    fn test_exchange_non_success_surfaces_body() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/token")
            .with_status(400)
            .with_body(r#"{"error":"invalid_grant","error_description":"Offline user session not found"}"#)
            .expect(1)
            .create();

        let err = client_for(&server)
            .exchange(&offline("expired"))
            .unwrap_err();

        mock.assert();
        let (details, body) = authentication_error(&err);
        assert!(details.contains("400"));
        assert!(body.contains("Offline user session not found"));
    }

    #[test]
    fn test_exchange_missing_access_token() {
        let mut server = Server::new();
        server
            .mock("POST", "/token")
            .with_status(200)
            .with_body(r#"{"token_type":"Bearer"}"#)
            .create();

        let err = client_for(&server).exchange(&offline("t")).unwrap_err();

        let (details, _) = authentication_error(&err);
        assert!(details.contains("access_token"));
    }

    #[test]
    fn test_exchange_malformed_json() {
        let mut server = Server::new();
        server
            .mock("POST", "/token")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create();

        let err = client_for(&server).exchange(&offline("t")).unwrap_err();

        let (details, body) = authentication_error(&err);
        assert!(details.contains("malformed token response"));
        assert_eq!(body, "<html>maintenance</html>");
    }

    #[test]
    fn test_exchange_unreachable_endpoint() {
        // Port 9 (discard) on localhost is not expected to accept connections.
        let client = SsoTokenClient::with_token_url("http://127.0.0.1:9/token").unwrap();

        let err = client.exchange(&offline("t")).unwrap_err();

        let (details, _) = authentication_error(&err);
        assert!(details.contains("request to http://127.0.0.1:9/token failed"));
    }
}
