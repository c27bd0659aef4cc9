use crate::domain::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("empty response body")]
    EmptyResponse,

    #[error("status line is not an integer: {line:?}")]
    InvalidStatusLine { line: String },

    #[error("response is missing the {field} line")]
    MissingField { field: &'static str },

    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Response body split into lines. The first line is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseLines(Vec<String>);

impl ResponseLines {
    /// Strip trailing whitespace and split the body on newlines.
    pub fn decode(body: &str) -> Result<Self, TransportError> {
        let body = body.trim_end();
        if body.is_empty() {
            return Err(TransportError::EmptyResponse);
        }
        Ok(Self(body.lines().map(str::to_owned).collect()))
    }

    pub fn first(&self) -> &str {
        &self.0[0]
    }

    /// Payload line `idx` (1-based: line 0 is the status line).
    pub fn payload(&self, idx: usize, field: &'static str) -> Result<&str, TransportError> {
        self.0
            .get(idx)
            .map(String::as_str)
            .ok_or(TransportError::MissingField { field })
    }

    /// Parse the first line as a status code.
    pub fn status_code(&self) -> Result<StatusCode, TransportError> {
        let line = self.first().trim();
        line.parse::<i32>()
            .map(StatusCode::new)
            .map_err(|_| TransportError::InvalidStatusLine {
                line: line.to_owned(),
            })
    }

    pub fn is_success(&self) -> bool {
        self.first().trim() == "100"
    }
}

/// Status lines that describe the request envelope rather than the method
/// outcome. Any method can return them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    WrongKey,
    PostRequired,
    UnknownMethod,
    Unavailable,
    WrongPassword,
}

impl Envelope {
    pub fn classify(lines: &ResponseLines) -> Option<Self> {
        Some(match lines.first().trim() {
            "200" => Self::WrongKey,
            "210" => Self::PostRequired,
            "211" => Self::UnknownMethod,
            "220" => Self::Unavailable,
            "301" => Self::WrongPassword,
            _ => return None,
        })
    }

    pub fn status_code(self) -> StatusCode {
        StatusCode::new(match self {
            Self::WrongKey => 200,
            Self::PostRequired => 210,
            Self::UnknownMethod => 211,
            Self::Unavailable => 220,
            Self::WrongPassword => 301,
        })
    }
}
