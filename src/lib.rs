//! Blocking Rust client for the SMS.RU plain-text HTTP API.
//!
//! The crate is split the same way as the wire protocol it talks to: a domain
//! layer of strong types and status tables, a transport layer for the
//! line-based response format, a config layer that reads credentials from
//! disk, and a small client layer orchestrating signed requests.
//!
//! ```rust,no_run
//! use smsru_client::{MessageText, RawPhoneNumber, SendOptions, SmsRuClient};
//!
//! fn main() -> Result<(), smsru_client::SmsRuError> {
//!     let mut client = SmsRuClient::from_default_config()?;
//!     let to = RawPhoneNumber::new("+79112223344")?;
//!     let text = MessageText::new("hello");
//!     let sent = client.send(&to, &text, SendOptions::default())?;
//!     println!("{} {}", sent.status_code.as_i32(), sent.description);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
mod transport;

pub use client::{
    Clock, HttpResponse, HttpTransport, SmsRuClient, SmsRuClientBuilder, SmsRuError, SystemClock,
    TOKEN_TTL,
};
pub use config::{ConfigError, Credentials, CredentialsLoader};
pub use domain::{
    ApiId, CostEstimate, DeliveryStatus, KnownCostStatus, KnownDeliveryStatus, KnownSendStatus,
    Login, MessageText, Password, RawPhoneNumber, SendOptions, SendResult, SenderId, SmsId,
    StatusCode, UNKNOWN_STATUS, ValidationError,
};
pub use transport::TransportError;
