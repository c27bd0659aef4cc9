//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod status;
mod validation;
mod value;

pub use request::SendOptions;
pub use response::{CostEstimate, DeliveryStatus, SendResult};
pub use status::{KnownCostStatus, KnownDeliveryStatus, KnownSendStatus, UNKNOWN_STATUS};
pub use validation::ValidationError;
pub use value::{
    ApiId, Login, MessageText, Password, RawPhoneNumber, SenderId, SmsId, StatusCode,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_id_rejects_empty() {
        assert!(matches!(
            ApiId::new("   "),
            Err(ValidationError::Empty {
                field: ApiId::FIELD
            })
        ));
    }

    #[test]
    fn password_rejects_empty() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty {
                field: Password::FIELD
            })
        ));
    }

    #[test]
    fn unknown_codes_fall_back_in_every_table() {
        let code = StatusCode::new(999_999);
        assert_eq!(code.send_description(), UNKNOWN_STATUS);
        assert_eq!(code.delivery_description(), UNKNOWN_STATUS);
        assert_eq!(code.cost_description(), UNKNOWN_STATUS);
        assert_eq!(code.send_status(), None);
    }

    #[test]
    fn send_options_test_sets_only_test_flag() {
        let options = SendOptions::test();
        assert!(options.test);
        assert!(!options.express);
        assert_eq!(SendOptions::default(), SendOptions { express: false, test: false });
    }
}
