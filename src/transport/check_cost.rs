use super::lines::{ResponseLines, TransportError};
use crate::domain::{CostEstimate, MessageText, RawPhoneNumber};

pub fn encode_check_cost_query(to: &RawPhoneNumber, text: &MessageText) -> Vec<(String, String)> {
    vec![
        (RawPhoneNumber::FIELD.to_owned(), to.raw().to_owned()),
        (MessageText::FIELD.to_owned(), text.as_str().to_owned()),
    ]
}

pub fn decode_check_cost_response(lines: &ResponseLines) -> Result<CostEstimate, TransportError> {
    let status_code = lines.status_code()?;
    let (cost, length) = if status_code.is_success() {
        (
            Some(lines.payload(1, "cost")?.trim().to_owned()),
            Some(lines.payload(2, "length")?.trim().to_owned()),
        )
    } else {
        (None, None)
    };

    Ok(CostEstimate {
        status_code,
        description: status_code.cost_description(),
        cost,
        length,
    })
}
