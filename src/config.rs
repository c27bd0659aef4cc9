//! Credential loading from a plain `key=value` file.
//!
//! The first existing file in the candidate list wins; files are never merged.
//! Recognized keys are `key` (required), `sender`, `login` and `password`.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{ApiId, Login, Password, SenderId, ValidationError};

const USER_CONFIG_RELATIVE: &str = ".config/smsru.conf";
const SYSTEM_CONFIG: &str = "/etc/smsru.conf";

#[derive(Debug, thiserror::Error)]
/// Reasons the client cannot be configured.
pub enum ConfigError {
    #[error("config file not found, options: {}", DisplayPaths(.candidates))]
    NotFound { candidates: Vec<PathBuf> },

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    NotUtf8 { path: PathBuf },

    #[error("line {line_no} is not a key=value pair: {line:?}")]
    MalformedLine { line_no: usize, line: String },

    #[error("API key not set")]
    MissingApiKey,

    /// SMS.RU rejected the configured login/password pair (`301`).
    #[error("wrong password")]
    WrongPassword,
}

struct DisplayPaths<'a>(&'a [PathBuf]);

impl fmt::Display for DisplayPaths<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, path) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", path.display())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Credentials for SMS.RU calls.
///
/// `login` and `password` enable signed requests for `sms/send` and `sms/cost`
/// when both are present.
pub struct Credentials {
    pub api_id: ApiId,
    pub sender: Option<SenderId>,
    pub login: Option<Login>,
    pub password: Option<Password>,
}

impl Credentials {
    /// Credentials with only an API key (simple auth).
    pub fn new(api_id: ApiId) -> Self {
        Self {
            api_id,
            sender: None,
            login: None,
            password: None,
        }
    }

    /// Set the default sender name.
    pub fn with_sender(mut self, sender: SenderId) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Enable signed requests with a login/password pair.
    pub fn with_login_password(mut self, login: Login, password: Password) -> Self {
        self.login = Some(login);
        self.password = Some(password);
        self
    }

    /// Parse the contents of a config file.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let mut values = HashMap::<&str, &str>::new();
        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::MalformedLine {
                    line_no: idx + 1,
                    line: line.to_owned(),
                });
            };
            values.insert(key.trim(), value.trim());
        }

        // Values are trimmed, so the only validation failure left is emptiness.
        let api_id = optional(&values, "key", ApiId::new).ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_id,
            sender: optional(&values, "sender", SenderId::new),
            login: optional(&values, "login", Login::new),
            password: optional(&values, "password", Password::new),
        })
    }
}

fn optional<T>(
    values: &HashMap<&str, &str>,
    key: &str,
    build: impl FnOnce(String) -> Result<T, ValidationError>,
) -> Option<T> {
    values
        .get(key)
        .and_then(|value| build((*value).to_owned()).ok())
}

#[derive(Debug, Clone)]
/// Ordered list of candidate config files.
pub struct CredentialsLoader {
    candidates: Vec<PathBuf>,
}

impl Default for CredentialsLoader {
    /// `~/.config/smsru.conf`, then `/etc/smsru.conf`.
    fn default() -> Self {
        let mut candidates = Vec::with_capacity(2);
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(USER_CONFIG_RELATIVE));
        }
        candidates.push(PathBuf::from(SYSTEM_CONFIG));
        Self { candidates }
    }
}

impl CredentialsLoader {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Read and parse the first candidate that exists.
    pub fn load(&self) -> Result<Credentials, ConfigError> {
        let Some(path) = self.candidates.iter().find(|path| path.exists()) else {
            return Err(ConfigError::NotFound {
                candidates: self.candidates.clone(),
            });
        };
        debug!(path = %path.display(), "loading credentials");
        Credentials::parse(&read_utf8(path)?)
    }
}

fn read_utf8(path: &Path) -> Result<String, ConfigError> {
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| ConfigError::NotUtf8 {
        path: path.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn parse_simple_auth_config() {
        let creds = Credentials::parse(
            "key=00000000-0000-0000-0000-000000000000\nsender=MyName\n",
        )
        .unwrap();
        assert_eq!(creds.api_id.as_str(), "00000000-0000-0000-0000-000000000000");
        assert_eq!(creds.sender.as_ref().map(SenderId::as_str), Some("MyName"));
        assert!(creds.login.is_none());
        assert!(creds.password.is_none());
    }

    #[test]
    fn parse_trims_keys_and_values_and_keeps_extra_equals() {
        let creds = Credentials::parse(
            "  key =  abc  \r\n\nlogin = alice\npassword = se=cret \nunknown=ignored\n",
        )
        .unwrap();
        assert_eq!(creds.api_id.as_str(), "abc");
        assert_eq!(creds.login.as_ref().map(Login::as_str), Some("alice"));
        assert_eq!(
            creds.password.as_ref().map(Password::as_str),
            Some("se=cret")
        );
    }

    #[test]
    fn parse_treats_empty_optional_values_as_absent() {
        let creds = Credentials::parse("key=abc\nsender=\nlogin= \n").unwrap();
        assert!(creds.sender.is_none());
        assert!(creds.login.is_none());
    }

    #[test]
    fn parse_requires_api_key() {
        assert!(matches!(
            Credentials::parse("sender=MyName\n"),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            Credentials::parse("key=  \n"),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            Credentials::parse(""),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn parse_rejects_lines_without_equals() {
        let err = Credentials::parse("key=abc\njunk\n").unwrap_err();
        match err {
            ConfigError::MalformedLine { line_no, line } => {
                assert_eq!(line_no, 2);
                assert_eq!(line, "junk");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_uses_first_existing_candidate_without_merging() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.conf");
        let user = write_config(&dir, "user.conf", b"key=user-key\n");
        let system = write_config(&dir, "system.conf", b"key=system-key\nsender=Sys\n");

        let loader = CredentialsLoader::new(vec![missing, user, system]);
        let creds = loader.load().unwrap();
        assert_eq!(creds.api_id.as_str(), "user-key");
        assert!(creds.sender.is_none());
    }

    #[test]
    fn load_reports_all_candidates_when_none_exist() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.conf");
        let b = dir.path().join("b.conf");
        let loader = CredentialsLoader::new(vec![a.clone(), b.clone()]);

        let err = loader.load().unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { ref candidates } if candidates.len() == 2));
        assert_eq!(
            err.to_string(),
            format!(
                "config file not found, options: {} {}",
                a.display(),
                b.display()
            )
        );
    }

    #[test]
    fn load_rejects_non_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "bad.conf", &[b'k', b'e', b'y', b'=', 0xff]);
        let err = CredentialsLoader::new(vec![path]).load().unwrap_err();
        assert!(matches!(err, ConfigError::NotUtf8 { .. }));
    }

    #[test]
    fn default_candidates_end_with_system_path() {
        let loader = CredentialsLoader::default();
        assert_eq!(
            loader.candidates().last(),
            Some(&PathBuf::from("/etc/smsru.conf"))
        );
    }
}
