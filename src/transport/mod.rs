//! Transport layer: query-string encoding and the line-based response format.

mod account;
mod check_cost;
mod check_status;
mod lines;
mod send_sms;

pub use account::{
    AccountReply, decode_balance_response, decode_limit_response, decode_token_response,
};
pub use check_cost::{decode_check_cost_response, encode_check_cost_query};
pub use check_status::{decode_check_status_response, encode_check_status_query};
pub use lines::{Envelope, ResponseLines, TransportError};
pub use send_sms::{decode_send_sms_response, encode_send_sms_query};

/// Remote methods used by this crate, relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    SmsSend,
    SmsStatus,
    SmsCost,
    MyBalance,
    MyLimit,
    AuthGetToken,
}

impl Method {
    pub fn path(self) -> &'static str {
        match self {
            Self::SmsSend => "sms/send",
            Self::SmsStatus => "sms/status",
            Self::SmsCost => "sms/cost",
            Self::MyBalance => "my/balance",
            Self::MyLimit => "my/limit",
            Self::AuthGetToken => "auth/get_token",
        }
    }

    /// Methods that accept token-signed authentication instead of `api_id`.
    pub fn accepts_signature(self) -> bool {
        matches!(self, Self::SmsSend | Self::SmsCost)
    }
}
