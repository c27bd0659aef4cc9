use crate::domain::status::{
    KnownCostStatus, KnownDeliveryStatus, KnownSendStatus, UNKNOWN_STATUS,
};
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS.RU `api_id` key.
///
/// Invariant: non-empty after trimming.
pub struct ApiId(String);

impl ApiId {
    /// Query parameter name used by SMS.RU (`api_id`).
    pub const FIELD: &'static str = "api_id";

    /// Create a validated [`ApiId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS.RU account login, usually the account phone number.
///
/// Invariant: non-empty after trimming.
pub struct Login(String);

impl Login {
    /// Query parameter name used by SMS.RU (`login`).
    pub const FIELD: &'static str = "login";

    /// Create a validated [`Login`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the login as configured.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Login as sent on signed requests: leading `+` characters removed.
    ///
    /// Returns `None` when nothing is left after stripping.
    pub fn for_signature(&self) -> Option<&str> {
        let stripped = self.0.trim_start_matches('+');
        (!stripped.is_empty()).then_some(stripped)
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMS.RU account password. Never sent over the wire, only used to sign tokens.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Config key holding the password (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS.RU sender name (`from`).
///
/// Invariant: non-empty after trimming. The value must be approved in your SMS.RU account.
pub struct SenderId(String);

impl SenderId {
    /// Query parameter name used by SMS.RU (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// Any UTF-8 string is accepted, including an empty one: SMS.RU itself answers
/// with status 203 for a missing text.
pub struct MessageText(String);

impl MessageText {
    /// Query parameter name used by SMS.RU (`text`).
    pub const FIELD: &'static str = "text";

    /// Wrap already-decoded text.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Decode raw bytes, rejecting anything that is not UTF-8.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self, ValidationError> {
        String::from_utf8(bytes)
            .map(Self)
            .map_err(|_| ValidationError::NotUtf8 { field: Self::FIELD })
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// SMS.RU message id returned by `sms/send` and queried through `sms/status` (`id`).
///
/// Invariant: non-empty after trimming.
pub struct SmsId(String);

impl SmsId {
    /// Query parameter name used by SMS.RU (`id`).
    pub const FIELD: &'static str = "id";

    /// Create a validated [`SmsId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SmsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to SMS.RU (`to`).
///
/// Invariant: non-empty after trimming. No normalization is performed.
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Query parameter name used by SMS.RU (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to SMS.RU.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SMS.RU status code, the first line of every response.
///
/// This value is preserved as-is even when the code is unknown to this crate.
/// The same integer means different things depending on the method that
/// returned it, so each table has its own lookup.
pub struct StatusCode(i32);

impl StatusCode {
    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by SMS.RU.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Whether this is the generic success code (`100`).
    pub fn is_success(self) -> bool {
        self.0 == 100
    }

    /// Interpret this code as an `sms/send` status.
    pub fn send_status(self) -> Option<KnownSendStatus> {
        KnownSendStatus::from_code(self.0)
    }

    /// Interpret this code as an `sms/status` delivery status.
    pub fn delivery_status(self) -> Option<KnownDeliveryStatus> {
        KnownDeliveryStatus::from_code(self.0)
    }

    /// Interpret this code as an `sms/cost` status.
    pub fn cost_status(self) -> Option<KnownCostStatus> {
        KnownCostStatus::from_code(self.0)
    }

    /// Human-readable `sms/send` description, or [`UNKNOWN_STATUS`].
    pub fn send_description(self) -> &'static str {
        self.send_status()
            .map_or(UNKNOWN_STATUS, KnownSendStatus::description)
    }

    /// Human-readable `sms/status` description, or [`UNKNOWN_STATUS`].
    pub fn delivery_description(self) -> &'static str {
        self.delivery_status()
            .map_or(UNKNOWN_STATUS, KnownDeliveryStatus::description)
    }

    /// Human-readable `sms/cost` description, or [`UNKNOWN_STATUS`].
    pub fn cost_description(self) -> &'static str {
        self.cost_status()
            .map_or(UNKNOWN_STATUS, KnownCostStatus::description)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
