use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use smsru_client::cli;
use smsru_client::{CredentialsLoader, SmsRuClient, SmsRuError};

const DEFAULT_LOG_LEVEL: &str = "warn";
const CONFIG_ENV: &str = "SMSRU_CONFIG";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn credentials_loader() -> CredentialsLoader {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => CredentialsLoader::new(vec![PathBuf::from(path)]),
        _ => CredentialsLoader::default(),
    }
}

fn build_client() -> anyhow::Result<SmsRuClient> {
    let credentials = credentials_loader().load().map_err(SmsRuError::from)?;
    let client = SmsRuClient::builder(credentials)
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("smsru/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

fn main() -> ExitCode {
    init_logging();

    let mut args = std::env::args_os();
    let program = args
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "smsru".to_owned());
    let args = args.collect::<Vec<OsString>>();

    let code = cli::main_with(
        &args,
        &program,
        build_client,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    ExitCode::from(code)
}
