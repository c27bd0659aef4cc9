use super::lines::{ResponseLines, TransportError};
use crate::domain::{MessageText, RawPhoneNumber, SendOptions, SendResult, SenderId, SmsId};

pub fn encode_send_sms_query(
    to: &RawPhoneNumber,
    text: &MessageText,
    from: Option<&SenderId>,
    options: SendOptions,
) -> Vec<(String, String)> {
    let mut params = vec![
        (RawPhoneNumber::FIELD.to_owned(), to.raw().to_owned()),
        (MessageText::FIELD.to_owned(), text.as_str().to_owned()),
    ];
    if let Some(from) = from {
        params.push((SenderId::FIELD.to_owned(), from.as_str().to_owned()));
    }
    if options.express {
        params.push(("express".to_owned(), "1".to_owned()));
    }
    if options.test {
        params.push(("test".to_owned(), "1".to_owned()));
    }
    params
}

pub fn decode_send_sms_response(lines: &ResponseLines) -> Result<SendResult, TransportError> {
    let status_code = lines.status_code()?;
    let sms_id = if status_code.is_success() {
        let raw = lines.payload(1, "message id")?;
        let id = SmsId::new(raw).map_err(|_| TransportError::MissingField {
            field: "message id",
        })?;
        Some(id)
    } else {
        None
    };

    Ok(SendResult {
        status_code,
        description: status_code.send_description(),
        sms_id,
    })
}
