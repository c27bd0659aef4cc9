use super::lines::{ResponseLines, TransportError};
use crate::domain::{DeliveryStatus, SmsId};

pub fn encode_check_status_query(sms_id: &SmsId) -> Vec<(String, String)> {
    vec![(SmsId::FIELD.to_owned(), sms_id.as_str().to_owned())]
}

pub fn decode_check_status_response(
    lines: &ResponseLines,
) -> Result<DeliveryStatus, TransportError> {
    let status_code = lines.status_code()?;
    Ok(DeliveryStatus {
        status_code,
        description: status_code.delivery_description(),
    })
}
