use crate::domain::value::{SmsId, StatusCode};

/// Outcome of `sms/send`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    pub status_code: StatusCode,
    pub description: &'static str,
    /// Present only when the message was accepted (`100`).
    pub sms_id: Option<SmsId>,
}

/// Outcome of `sms/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryStatus {
    pub status_code: StatusCode,
    pub description: &'static str,
}

/// Outcome of `sms/cost`.
///
/// `cost` and `length` are kept as the raw strings SMS.RU returned so that
/// `"1.50"` does not turn into `1.5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostEstimate {
    pub status_code: StatusCode,
    pub description: &'static str,
    pub cost: Option<String>,
    /// Number of SMS parts the message will be split into.
    pub length: Option<String>,
}
