//! Command-line surface of the `smsru` binary: argument parsing and output.

use std::ffi::OsString;
use std::io::Write;

use crate::client::{SmsRuClient, SmsRuError};
use crate::domain::{
    CostEstimate, DeliveryStatus, MessageText, RawPhoneNumber, SendOptions, SendResult, SmsId,
    ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send {
        to: RawPhoneNumber,
        text: MessageText,
        options: SendOptions,
    },
    Status {
        sms_ids: Vec<SmsId>,
    },
    Cost {
        to: RawPhoneNumber,
        text: MessageText,
    },
    Balance,
    Limit,
    Token,
}

impl Command {
    /// Parse arguments (without the program name).
    ///
    /// Returns `Ok(None)` when the arguments match no command and usage should
    /// be printed.
    pub fn parse(args: &[OsString]) -> Result<Option<Self>, ValidationError> {
        let Some(name) = args.first().and_then(|name| name.to_str()) else {
            return Ok(None);
        };
        let rest = &args[1..];

        let command = match (name, rest) {
            ("send", [to, text]) => Self::Send {
                to: phone_arg(to)?,
                text: text_arg(text)?,
                options: SendOptions::default(),
            },
            ("send-test", [to, text]) => Self::Send {
                to: phone_arg(to)?,
                text: text_arg(text)?,
                options: SendOptions::test(),
            },
            ("status", ids) if !ids.is_empty() => Self::Status {
                sms_ids: ids.iter().map(sms_id_arg).collect::<Result<_, _>>()?,
            },
            ("cost", [to, text]) => Self::Cost {
                to: phone_arg(to)?,
                text: text_arg(text)?,
            },
            ("balance", []) => Self::Balance,
            ("limit", []) => Self::Limit,
            ("token", []) => Self::Token,
            _ => return Ok(None),
        };
        Ok(Some(command))
    }
}

fn utf8_arg(arg: &OsString, field: &'static str) -> Result<String, ValidationError> {
    arg.to_str()
        .map(str::to_owned)
        .ok_or(ValidationError::NotUtf8 { field })
}

fn phone_arg(arg: &OsString) -> Result<RawPhoneNumber, ValidationError> {
    RawPhoneNumber::new(utf8_arg(arg, RawPhoneNumber::FIELD)?)
}

fn text_arg(arg: &OsString) -> Result<MessageText, ValidationError> {
    Ok(MessageText::new(utf8_arg(arg, MessageText::FIELD)?))
}

fn sms_id_arg(arg: &OsString) -> Result<SmsId, ValidationError> {
    SmsId::new(utf8_arg(arg, SmsId::FIELD)?)
}

/// Full CLI flow: parse `args`, connect lazily, run, and report.
///
/// Usage goes to `out`; failures are printed to `err` as `ERROR: <message>.`.
/// Returns the process exit code: `0` on success, `1` otherwise.
pub fn main_with(
    args: &[OsString],
    program: &str,
    connect: impl FnOnce() -> anyhow::Result<SmsRuClient>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> u8 {
    let outcome = match Command::parse(args) {
        Ok(Some(command)) => connect().and_then(|mut client| run(command, &mut client, out)),
        Ok(None) => {
            // Nothing sensible to do if stdout is gone.
            let _ = write!(out, "{}", usage(program));
            return 1;
        }
        Err(validation) => Err(SmsRuError::from(validation).into()),
    };

    match outcome {
        Ok(()) => 0,
        Err(failure) => {
            let _ = writeln!(err, "ERROR: {failure}.");
            1
        }
    }
}

/// Execute `command`, writing its human-readable result to `out`.
pub fn run(command: Command, client: &mut SmsRuClient, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Command::Send { to, text, options } => {
            let result = client.send(&to, &text, options)?;
            writeln!(out, "{}", render_send(&result))?;
        }
        Command::Status { sms_ids } => {
            for sms_id in &sms_ids {
                let status = client.status(sms_id)?;
                writeln!(out, "{}", render_status(sms_id, &status))?;
            }
        }
        Command::Cost { to, text } => {
            let estimate = client.cost(&to, &text)?;
            writeln!(out, "{}", render_cost(&estimate))?;
        }
        Command::Balance => writeln!(out, "{}", render_balance(client.balance()?))?,
        Command::Limit => writeln!(out, "{}", client.limit()?)?,
        Command::Token => writeln!(out, "{}", client.token()?)?,
    }
    Ok(())
}

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

pub fn render_send(result: &SendResult) -> String {
    format!(
        "Status={} ({}), id={}",
        result.status_code,
        result.description,
        or_none(result.sms_id.as_ref().map(SmsId::as_str))
    )
}

/// Balance with at least one fractional digit (`100.0`, `42.75`).
pub fn render_balance(balance: f64) -> String {
    format!("{balance:?}")
}

pub fn render_status(sms_id: &SmsId, status: &DeliveryStatus) -> String {
    format!("{sms_id} = {} ({})", status.status_code, status.description)
}

pub fn render_cost(estimate: &CostEstimate) -> String {
    format!(
        "Status={} ({}), cost={}, length={}",
        estimate.status_code,
        estimate.description,
        or_none(estimate.cost.as_deref()),
        or_none(estimate.length.as_deref())
    )
}

pub fn usage(program: &str) -> String {
    [
        ("balance", "show current balance"),
        ("cost number message", "show message cost"),
        ("limit", "show remaining daily message limit"),
        ("send number message", "send a message"),
        ("send-test number message", "test sending a message"),
        ("status msgid...", "check message status"),
        ("token", "print a token"),
    ]
    .iter()
    .fold("Usage:\n".to_owned(), |mut text, (args, help)| {
        text.push_str(&format!("  {program} {args:<25} -- {help}\n"));
        text
    })
}
