//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod auth;
mod token;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

pub use token::{Clock, SystemClock, TOKEN_TTL};

use crate::config::{ConfigError, Credentials, CredentialsLoader};
use crate::domain::{
    CostEstimate, DeliveryStatus, MessageText, RawPhoneNumber, SendOptions, SendResult, SmsId,
    StatusCode, ValidationError,
};
use crate::transport::{self, AccountReply, Envelope, Method, ResponseLines, TransportError};
use auth::Signer;
use token::TokenCache;

const DEFAULT_ENDPOINT: &str = "http://sms.ru/";

#[derive(Debug, Clone)]
/// Raw HTTP reply as seen by an [`HttpTransport`].
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Blocking HTTP capability used by [`SmsRuClient`].
///
/// The default implementation uses `reqwest`; supply your own through
/// [`SmsRuClientBuilder::transport`] to route requests elsewhere.
pub trait HttpTransport: Send + Sync {
    /// Issue `GET url?params` and return the status and full body.
    fn get(
        &self,
        url: &str,
        params: Vec<(String, String)>,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get(
        &self,
        url: &str,
        params: Vec<(String, String)>,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let response = self.client.get(url).query(&params).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsRuClient`].
///
/// Envelope-level status lines (`200`, `210`, `211`, `220`, `301`) map to
/// dedicated variants regardless of the method that produced them. Nothing is
/// retried internally; [`SmsRuError::Unavailable`] is the only variant that is
/// worth retrying as-is.
pub enum SmsRuError {
    /// Credentials are missing, unreadable, or rejected by SMS.RU.
    #[error("not configured: {0}")]
    NotConfigured(#[from] ConfigError),

    /// SMS.RU rejected the `api_id` (`200`).
    #[error("the supplied API key is wrong")]
    WrongKey,

    /// Protocol misuse by this client (`210`, `211`).
    #[error("internal error ({status_code}): {reason}")]
    InternalError {
        status_code: StatusCode,
        reason: &'static str,
    },

    /// SMS.RU is temporarily unavailable (`220`).
    #[error("the service is temporarily unavailable")]
    Unavailable,

    /// Non-success status from an account method (`my/balance`, `my/limit`).
    #[error("API error: status {status_code}")]
    Api { status_code: StatusCode },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The configured endpoint is not a usable base URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body does not follow the line-based format.
    #[error("parse error: {0}")]
    Parse(#[from] TransportError),
}

impl From<Envelope> for SmsRuError {
    fn from(envelope: Envelope) -> Self {
        match envelope {
            Envelope::WrongKey => Self::WrongKey,
            Envelope::PostRequired => Self::InternalError {
                status_code: envelope.status_code(),
                reason: "GET used where POST is required",
            },
            Envelope::UnknownMethod => Self::InternalError {
                status_code: envelope.status_code(),
                reason: "unknown method",
            },
            Envelope::Unavailable => Self::Unavailable,
            Envelope::WrongPassword => Self::NotConfigured(ConfigError::WrongPassword),
        }
    }
}

#[derive(Clone)]
/// Builder for [`SmsRuClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent,
/// HTTP transport, or clock.
pub struct SmsRuClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
    clock: Arc<dyn Clock>,
}

impl SmsRuClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Override the API base URL (default `http://sms.ru/`). Method paths such
    /// as `sms/send` are appended to it.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the HTTP transport. `timeout` and `user_agent` are ignored then.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the clock used for token expiry.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build a [`SmsRuClient`].
    pub fn build(self) -> Result<SmsRuClient, SmsRuError> {
        let endpoint = parse_endpoint(&self.endpoint)?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::blocking::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| SmsRuError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(SmsRuClient {
            credentials: self.credentials,
            endpoint,
            http,
            clock: self.clock,
            tokens: TokenCache::default(),
        })
    }
}

/// Validate a base URL, making sure it ends with `/` so method paths append.
fn parse_endpoint(endpoint: &str) -> Result<String, url::ParseError> {
    let endpoint = if endpoint.ends_with('/') {
        endpoint.to_owned()
    } else {
        format!("{endpoint}/")
    };
    Url::parse(&endpoint)?;
    Ok(endpoint)
}

#[derive(Clone)]
/// High-level SMS.RU client.
///
/// Every call is one blocking `GET` against `http://sms.ru/<method>`, or two
/// when a signed call has to fetch a token first. Calls that may refresh the
/// token cache (`send`, `cost`) take `&mut self`; wrap the client in a mutex
/// to share it between threads.
pub struct SmsRuClient {
    credentials: Credentials,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
    clock: Arc<dyn Clock>,
    tokens: TokenCache,
}

impl SmsRuClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`SmsRuClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::blocking::Client::new(),
            }),
            clock: Arc::new(SystemClock),
            tokens: TokenCache::default(),
        }
    }

    /// Create a client from the first config file found in the default
    /// locations (`~/.config/smsru.conf`, then `/etc/smsru.conf`).
    pub fn from_default_config() -> Result<Self, SmsRuError> {
        Self::from_loader(&CredentialsLoader::default())
    }

    /// Create a client from the first config file found by `loader`.
    pub fn from_loader(loader: &CredentialsLoader) -> Result<Self, SmsRuError> {
        Ok(Self::new(loader.load()?))
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SmsRuClientBuilder {
        SmsRuClientBuilder::new(credentials)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Send a message through `sms/send`.
    ///
    /// The sender configured in [`Credentials::sender`] is used as `from`.
    /// A rejected message is not an error: inspect [`SendResult::status_code`].
    pub fn send(
        &mut self,
        to: &RawPhoneNumber,
        text: &MessageText,
        options: SendOptions,
    ) -> Result<SendResult, SmsRuError> {
        let params =
            transport::encode_send_sms_query(to, text, self.credentials.sender.as_ref(), options);
        let lines = self.call_signable(Method::SmsSend, params)?;
        Ok(transport::decode_send_sms_response(&lines)?)
    }

    /// Query delivery status of a previously sent message.
    pub fn status(&self, sms_id: &SmsId) -> Result<DeliveryStatus, SmsRuError> {
        let params = transport::encode_check_status_query(sms_id);
        let lines = self.call(Method::SmsStatus, params)?;
        Ok(transport::decode_check_status_response(&lines)?)
    }

    /// Estimate the cost of a message without sending it.
    pub fn cost(
        &mut self,
        to: &RawPhoneNumber,
        text: &MessageText,
    ) -> Result<CostEstimate, SmsRuError> {
        let params = transport::encode_check_cost_query(to, text);
        let lines = self.call_signable(Method::SmsCost, params)?;
        Ok(transport::decode_check_cost_response(&lines)?)
    }

    /// Current account balance.
    ///
    /// Errors:
    /// - [`SmsRuError::Api`] with the raw code when the status line is an
    ///   integer other than `100`,
    /// - [`SmsRuError::Parse`] when the status line is not an integer at all
    ///   (the raw line is kept in [`TransportError::InvalidStatusLine`]).
    pub fn balance(&self) -> Result<f64, SmsRuError> {
        let lines = self.call(Method::MyBalance, Vec::new())?;
        match transport::decode_balance_response(&lines)? {
            AccountReply::Value(balance) => Ok(balance),
            AccountReply::Rejected(status_code) => Err(SmsRuError::Api { status_code }),
        }
    }

    /// Remaining number of messages that may be sent today.
    ///
    /// Errors: same split as [`SmsRuClient::balance`].
    pub fn limit(&self) -> Result<u32, SmsRuError> {
        let lines = self.call(Method::MyLimit, Vec::new())?;
        match transport::decode_limit_response(&lines)? {
            AccountReply::Value(limit) => Ok(limit),
            AccountReply::Rejected(status_code) => Err(SmsRuError::Api { status_code }),
        }
    }

    /// Fetch a fresh token from `auth/get_token`. Does not touch the cache.
    pub fn token(&self) -> Result<String, SmsRuError> {
        let lines = self.call(Method::AuthGetToken, Vec::new())?;
        Ok(transport::decode_token_response(&lines))
    }

    /// Sign with login/password when configured, fall back to `api_id`.
    fn call_signable(
        &mut self,
        method: Method,
        mut params: Vec<(String, String)>,
    ) -> Result<ResponseLines, SmsRuError> {
        match Signer::for_method(&self.credentials, method) {
            Some(signer) => {
                let token = self.cached_token()?;
                signer.push_query_params(&token, &mut params);
                self.execute(method, params, "signed")
            }
            None => self.call(method, params),
        }
    }

    fn call(
        &self,
        method: Method,
        mut params: Vec<(String, String)>,
    ) -> Result<ResponseLines, SmsRuError> {
        auth::push_api_id(&self.credentials.api_id, &mut params);
        self.execute(method, params, "api_id")
    }

    fn cached_token(&mut self) -> Result<String, SmsRuError> {
        let now = self.clock.now();
        if let Some(token) = self.tokens.get(now) {
            debug!("reusing cached token");
            return Ok(token.to_owned());
        }

        let token = self.token()?;
        self.tokens.store(token.clone(), self.clock.now());
        debug!("fetched fresh token");
        Ok(token)
    }

    fn execute(
        &self,
        method: Method,
        params: Vec<(String, String)>,
        auth_mode: &'static str,
    ) -> Result<ResponseLines, SmsRuError> {
        let url = Url::parse(&self.endpoint)?.join(method.path())?;
        debug!(method = method.path(), auth = auth_mode, "calling SMS.RU");

        let response = self
            .http
            .get(url.as_str(), params)
            .map_err(SmsRuError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SmsRuError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let lines = ResponseLines::decode(&response.body)?;
        if let Some(envelope) = Envelope::classify(&lines) {
            warn!(
                method = method.path(),
                status_code = envelope.status_code().as_i32(),
                "SMS.RU rejected the request envelope"
            );
            return Err(envelope.into());
        }
        Ok(lines)
    }
}
