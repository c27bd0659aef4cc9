/// Description returned for codes missing from a status table.
pub const UNKNOWN_STATUS: &str = "Unknown status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known `sms/send` status codes.
pub enum KnownSendStatus {
    Accepted,
    OutOfMoney,
    BadRecipient,
    TextNotSpecified,
    BadSender,
    MessageTooLong,
    DailyLimitReached,
    CannotSendToNumber,
    WrongTime,
    BlacklistedRecipient,
}

impl KnownSendStatus {
    /// Convert a raw integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            100 => Self::Accepted,
            201 => Self::OutOfMoney,
            202 => Self::BadRecipient,
            203 => Self::TextNotSpecified,
            204 => Self::BadSender,
            205 => Self::MessageTooLong,
            206 => Self::DailyLimitReached,
            207 => Self::CannotSendToNumber,
            208 => Self::WrongTime,
            209 => Self::BlacklistedRecipient,
            _ => return None,
        })
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Accepted => "Message accepted",
            Self::OutOfMoney => "Out of money",
            Self::BadRecipient => "Bad recipient",
            Self::TextNotSpecified => "Message text not specified",
            Self::BadSender => "Bad sender (unapproved)",
            Self::MessageTooLong => "Message too long",
            Self::DailyLimitReached => "Day message limit reached",
            Self::CannotSendToNumber => "Can't send messages to that number",
            Self::WrongTime => "Wrong time",
            Self::BlacklistedRecipient => "Blacklisted recipient",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known `sms/status` delivery codes.
pub enum KnownDeliveryStatus {
    NotFound,
    Queued,
    ToOperator,
    ToRecipient,
    Delivered,
    FailedTimeout,
    FailedCancelledByOperator,
    FailedPhoneMalfunction,
    FailedUnknown,
    Declined,
}

impl KnownDeliveryStatus {
    /// Convert a raw integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            -1 => Self::NotFound,
            100 => Self::Queued,
            101 => Self::ToOperator,
            102 => Self::ToRecipient,
            103 => Self::Delivered,
            104 => Self::FailedTimeout,
            105 => Self::FailedCancelledByOperator,
            106 => Self::FailedPhoneMalfunction,
            107 => Self::FailedUnknown,
            108 => Self::Declined,
            _ => return None,
        })
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::NotFound => "Message not found",
            Self::Queued => "Message is in the queue",
            Self::ToOperator => "Message is on the way to the operator",
            Self::ToRecipient => "Message is on the way to the recipient",
            Self::Delivered => "Message delivered",
            Self::FailedTimeout => "Message failed: out of time",
            Self::FailedCancelledByOperator => "Message failed: cancelled by the operator",
            Self::FailedPhoneMalfunction => "Message failed: phone malfunction",
            Self::FailedUnknown => "Message failed, reason unknown",
            Self::Declined => "Message declined",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known `sms/cost` status codes.
pub enum KnownCostStatus {
    Success,
}

impl KnownCostStatus {
    /// Convert a raw integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            100 => Some(Self::Success),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Success => "Success",
        }
    }
}
