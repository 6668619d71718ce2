//! JSON 1.0 client for the Network Firewall control plane
//!
//! Every operation is a `POST /` whose `X-Amz-Target` header names the
//! operation. Requests are not signed: the endpoint is expected to be a local
//! emulator or a signing proxy.

use crate::error::{ClientError, Result};
use async_trait::async_trait;
use nfw_operations::{Client, Request, TransportFailure};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::error::Error as _;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Target prefix of the service API version
pub const TARGET_PREFIX: &str = "NetworkFirewall_20201112";

pub const DEFAULT_REGION: &str = "us-east-1";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.0";
const TARGET_HEADER: &str = "X-Amz-Target";
const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";

/// Settings for [`HttpClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Explicit endpoint; derived from `region` when `None`
    pub endpoint_url: Option<String>,
    pub region: String,
    pub target_prefix: String,
    pub timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            region: DEFAULT_REGION.to_string(),
            target_prefix: TARGET_PREFIX.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientSettings {
    /// The endpoint requests are sent to
    pub fn endpoint(&self) -> Result<Url> {
        match &self.endpoint_url {
            Some(url) => parse_endpoint(url),
            None => endpoint_for_region(&self.region),
        }
    }
}

/// Public endpoint of the service in `region`
pub fn endpoint_for_region(region: &str) -> Result<Url> {
    let valid = !region.is_empty()
        && region
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        return Err(ClientError::InvalidRegion(region.to_string()));
    }
    parse_endpoint(&format!("https://network-firewall.{region}.amazonaws.com"))
}

fn parse_endpoint(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| ClientError::invalid_endpoint(url, e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host().is_some() => Ok(parsed),
        "http" | "https" => Err(ClientError::invalid_endpoint(url, "missing host")),
        scheme => Err(ClientError::invalid_endpoint(
            url,
            format!("unsupported scheme '{scheme}'"),
        )),
    }
}

/// HTTP implementation of [`Client`]
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    endpoint: Url,
    target_prefix: String,
}

impl HttpClient {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("nfw/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: settings.endpoint()?,
            target_prefix: settings.target_prefix.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn target(&self, operation: &str) -> String {
        format!("{}.{}", self.target_prefix, operation)
    }
}

#[async_trait]
impl Client for HttpClient {
    #[instrument(skip(self, request), fields(endpoint = %self.endpoint))]
    async fn call(&self, operation: &str, request: Request) -> std::result::Result<Value, TransportFailure> {
        let target = self.target(operation);
        debug!(target = %target, "sending request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(TARGET_HEADER, &target)
            .json(&request)
            .send()
            .await
            .map_err(request_failure)?;

        let status = response.status();
        let header_code = response
            .headers()
            .get(ERROR_TYPE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(request_failure)?;
        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(service_failure(status, header_code, &body));
        }
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Default::default()));
        }
        serde_json::from_slice(&body).map_err(|e| {
            TransportFailure::new(format!("response to {operation} is not valid JSON: {e}"))
                .with_status(status.as_u16())
        })
    }
}

/// Error body of a failed call
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// `com.amazonaws.networkfirewall#InvalidRequestException:http://...` → `InvalidRequestException`
fn error_code(raw: &str) -> &str {
    let code = raw.rsplit('#').next().unwrap_or(raw);
    code.split(':').next().unwrap_or(code).trim()
}

fn service_failure(status: StatusCode, header_code: Option<String>, body: &[u8]) -> TransportFailure {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
    let code = parsed
        .error_type
        .as_deref()
        .or(header_code.as_deref())
        .map(error_code)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    let message = parsed.message.unwrap_or_else(|| {
        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        if text.is_empty() || text.starts_with('{') {
            format!("service returned HTTP {status}")
        } else {
            format!("service returned HTTP {status}: {text}")
        }
    });

    let mut failure = TransportFailure::new(message).with_status(status.as_u16());
    if let Some(code) = code {
        failure = failure.with_code(code);
    }
    failure
}

/// Flatten the error source chain so resolver messages stay visible
fn request_failure(error: reqwest::Error) -> TransportFailure {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    let failure = TransportFailure::new(message);
    match error.status() {
        Some(status) => failure.with_status(status.as_u16()),
        None => failure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpClient {
        HttpClient::new(&ClientSettings {
            endpoint_url: Some(server.uri()),
            ..Default::default()
        })
        .unwrap()
    }

    fn request(value: Value) -> Request {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_endpoint_for_region() {
        let url = endpoint_for_region("eu-west-2").unwrap();
        assert_eq!(url.as_str(), "https://network-firewall.eu-west-2.amazonaws.com/");

        assert!(matches!(
            endpoint_for_region("eu west"),
            Err(ClientError::InvalidRegion(_))
        ));
        assert!(endpoint_for_region("").is_err());
    }

    #[test]
    fn test_explicit_endpoint_wins() {
        let settings = ClientSettings {
            endpoint_url: Some("http://localhost:4566".into()),
            region: "ap-south-1".into(),
            ..Default::default()
        };
        assert_eq!(settings.endpoint().unwrap().as_str(), "http://localhost:4566/");
    }

    #[test]
    fn test_invalid_endpoint() {
        for url in ["not a url", "ftp://example.com", "file:///tmp/x"] {
            let settings = ClientSettings {
                endpoint_url: Some(url.into()),
                ..Default::default()
            };
            assert!(
                matches!(settings.endpoint(), Err(ClientError::InvalidEndpoint { .. })),
                "{url}"
            );
        }
    }

    #[test]
    fn test_error_code() {
        assert_eq!(
            error_code("com.amazonaws.networkfirewall#InvalidRequestException"),
            "InvalidRequestException"
        );
        assert_eq!(
            error_code("ResourceNotFoundException:http://internal.amazon.com/"),
            "ResourceNotFoundException"
        );
        assert_eq!(error_code("ThrottlingException"), "ThrottlingException");
    }

    #[tokio::test]
    async fn test_call_sends_target_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("X-Amz-Target", "NetworkFirewall_20201112.ListRuleGroups"))
            .and(header("Content-Type", "application/x-amz-json-1.0"))
            .and(body_json(json!({"Scope": "MANAGED"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"RuleGroups": [{"Name": "A"}, {"Name": "B"}]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .call("ListRuleGroups", request(json!({"Scope": "MANAGED"})))
            .await
            .unwrap();

        assert_eq!(response, json!({"RuleGroups": [{"Name": "A"}, {"Name": "B"}]}));
    }

    #[tokio::test]
    async fn test_empty_success_body_is_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let response = client_for(&server)
            .call("DeleteResourcePolicy", request(json!({"ResourceArn": "arn:x"})))
            .await
            .unwrap();

        assert_eq!(response, json!({}));
    }

    #[tokio::test]
    async fn test_service_error_is_decoded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "__type": "com.amazonaws.networkfirewall#InvalidTokenException",
                "message": "Update token is out of date"
            })))
            .mount(&server)
            .await;

        let failure = client_for(&server)
            .call("UpdateFirewallPolicy", Map::new())
            .await
            .unwrap_err();

        assert_eq!(failure.code.as_deref(), Some("InvalidTokenException"));
        assert_eq!(failure.message, "Update token is out of date");
        assert_eq!(failure.status, Some(400));
    }

    #[tokio::test]
    async fn test_capitalized_message_and_header_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(404)
                    .insert_header("x-amzn-ErrorType", "ResourceNotFoundException:http://internal/")
                    .set_body_json(json!({"Message": "Firewall not found"})),
            )
            .mount(&server)
            .await;

        let failure = client_for(&server)
            .call("DescribeFirewall", Map::new())
            .await
            .unwrap_err();

        assert_eq!(failure.code.as_deref(), Some("ResourceNotFoundException"));
        assert_eq!(failure.message, "Firewall not found");
        assert_eq!(failure.status, Some(404));
    }

    #[tokio::test]
    async fn test_unstructured_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let failure = client_for(&server)
            .call("ListFirewalls", Map::new())
            .await
            .unwrap_err();

        assert_eq!(failure.code, None);
        assert_eq!(failure.status, Some(502));
        assert!(failure.message.contains("Bad Gateway"));
    }

    #[tokio::test]
    async fn test_unresolvable_host_is_name_resolution_failure() {
        let client = HttpClient::new(&ClientSettings {
            endpoint_url: Some("http://network-firewall.nowhere.invalid".into()),
            timeout: Duration::from_secs(10),
            ..Default::default()
        })
        .unwrap();

        let failure = client.call("ListFirewalls", Map::new()).await.unwrap_err();

        assert!(failure.is_name_resolution(), "{}", failure.message);
        assert!(failure.diagnosed().hint.is_some());
    }
}
