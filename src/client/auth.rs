use md5::{Digest, Md5};

use crate::config::Credentials;
use crate::domain::{ApiId, Login, Password};
use crate::transport::Method;

const TOKEN_FIELD: &str = "token";
const SIGNATURE_FIELD: &str = "sig";

/// Login/password pair used to sign `sms/send` and `sms/cost`.
#[derive(Debug, Clone)]
pub(crate) struct Signer {
    login: String,
    password: Password,
}

impl Signer {
    /// Signer for `method`, or `None` when the call uses the plain `api_id`.
    pub(crate) fn for_method(credentials: &Credentials, method: Method) -> Option<Self> {
        if !method.accepts_signature() {
            return None;
        }
        let login = credentials.login.as_ref()?.for_signature()?;
        let password = credentials.password.as_ref()?;
        Some(Self {
            login: login.to_owned(),
            password: password.clone(),
        })
    }

    pub(crate) fn push_query_params(&self, token: &str, params: &mut Vec<(String, String)>) {
        params.push((Login::FIELD.to_owned(), self.login.clone()));
        params.push((TOKEN_FIELD.to_owned(), token.to_owned()));
        params.push((SIGNATURE_FIELD.to_owned(), signature(&self.password, token)));
    }
}

pub(crate) fn push_api_id(api_id: &ApiId, params: &mut Vec<(String, String)>) {
    params.push((ApiId::FIELD.to_owned(), api_id.as_str().to_owned()));
}

/// Hex MD5 of `password` followed by `token`.
pub(crate) fn signature(password: &Password, token: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(password.as_str().as_bytes());
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(login: Option<&str>, password: Option<&str>) -> Credentials {
        Credentials {
            api_id: ApiId::new("key").unwrap(),
            sender: None,
            login: login.map(|value| Login::new(value).unwrap()),
            password: password.map(|value| Password::new(value).unwrap()),
        }
    }

    #[test]
    fn signature_is_md5_hex_of_password_then_token() {
        let password = Password::new("secret").unwrap();
        assert_eq!(
            signature(&password, ""),
            "5ebe2294ecd0e0f08eab7690d2a6ee69"
        );
        assert_eq!(signature(&password, "tok").len(), 32);
        assert_ne!(signature(&password, "tok"), signature(&password, "tok2"));
    }

    #[test]
    fn signer_requires_login_password_and_signable_method() {
        let both = credentials(Some("+79112223344"), Some("secret"));
        let signer = Signer::for_method(&both, Method::SmsSend).unwrap();
        assert_eq!(signer.login, "79112223344");
        assert!(Signer::for_method(&both, Method::SmsCost).is_some());
        assert!(Signer::for_method(&both, Method::SmsStatus).is_none());
        assert!(Signer::for_method(&both, Method::MyBalance).is_none());
        assert!(Signer::for_method(&both, Method::AuthGetToken).is_none());

        assert!(Signer::for_method(&credentials(Some("alice"), None), Method::SmsSend).is_none());
        assert!(Signer::for_method(&credentials(None, Some("secret")), Method::SmsSend).is_none());
        assert!(
            Signer::for_method(&credentials(Some("+"), Some("secret")), Method::SmsSend).is_none()
        );
    }

    #[test]
    fn signed_params_replace_api_id() {
        let both = credentials(Some("alice"), Some("secret"));
        let signer = Signer::for_method(&both, Method::SmsSend).unwrap();
        let mut params = Vec::new();
        signer.push_query_params("tok", &mut params);

        let keys = params.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["login", "token", "sig"]);
        assert_eq!(params[2].1, signature(&Password::new("secret").unwrap(), "tok"));
    }
}
