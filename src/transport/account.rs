use super::lines::{ResponseLines, TransportError};
use crate::domain::StatusCode;

/// Reply of an account method: either the value or the non-success code.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountReply<T> {
    Value(T),
    Rejected(StatusCode),
}

pub fn decode_balance_response(
    lines: &ResponseLines,
) -> Result<AccountReply<f64>, TransportError> {
    decode_number(lines, "balance")
}

pub fn decode_limit_response(lines: &ResponseLines) -> Result<AccountReply<u32>, TransportError> {
    decode_number(lines, "limit")
}

/// `auth/get_token` answers with the bare token on the first line.
pub fn decode_token_response(lines: &ResponseLines) -> String {
    lines.first().trim().to_owned()
}

fn decode_number<T: std::str::FromStr>(
    lines: &ResponseLines,
    field: &'static str,
) -> Result<AccountReply<T>, TransportError> {
    if !lines.is_success() {
        return Ok(AccountReply::Rejected(lines.status_code()?));
    }
    let raw = lines.payload(1, field)?.trim();
    raw.parse::<T>()
        .map(AccountReply::Value)
        .map_err(|_| TransportError::InvalidNumber {
            field,
            value: raw.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_parses_float() {
        let lines = ResponseLines::decode("100\n42.75").unwrap();
        assert_eq!(
            decode_balance_response(&lines).unwrap(),
            AccountReply::Value(42.75)
        );
    }

    #[test]
    fn balance_rejection_carries_code() {
        let lines = ResponseLines::decode("201").unwrap();
        assert_eq!(
            decode_balance_response(&lines).unwrap(),
            AccountReply::Rejected(StatusCode::new(201))
        );
    }

    #[test]
    fn limit_parses_integer_and_rejects_garbage() {
        let lines = ResponseLines::decode("100\n97").unwrap();
        assert_eq!(
            decode_limit_response(&lines).unwrap(),
            AccountReply::Value(97)
        );

        let lines = ResponseLines::decode("100\nlots").unwrap();
        assert!(matches!(
            decode_limit_response(&lines),
            Err(TransportError::InvalidNumber { field: "limit", .. })
        ));
    }

    #[test]
    fn token_is_first_line() {
        let lines = ResponseLines::decode("abcdef0123\n").unwrap();
        assert_eq!(decode_token_response(&lines), "abcdef0123");
    }
}
