use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use lettre::address::{Address, Envelope};
use lettre::{SmtpTransport, Transport};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("invalid mail envelope: {0}")]
    Envelope(#[from] lettre::error::Error),
    #[error("smtp delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error("sendmail failed: {0}")]
    Sendmail(#[from] io::Error),
    #[error("sendmail exited with {0}")]
    SendmailStatus(ExitStatus),
}

/// Submit a fully-formed RFC 5322 `message` to `server` over plaintext
/// SMTP, addressed from `from` to each address in `to`.
pub fn mail_smtp(server: &str, from: &str, to: &[&str], message: &str) -> Result<(), MailError> {
    let sender: Address = from.parse()?;
    let recipients = to
        .iter()
        .map(|addr| addr.parse())
        .collect::<Result<Vec<Address>, _>>()?;
    let envelope = Envelope::new(Some(sender), recipients)?;

    let mailer = SmtpTransport::builder_dangerous(server).build();
    mailer.send_raw(&envelope, message.as_bytes())?;
    debug!("report mailed through {}", server);
    Ok(())
}

/// Pipe `message` to the stdin of the given sendmail command line
/// (e.g. `/usr/sbin/sendmail -t`).
pub fn mail_sendmail(command: &str, message: &str) -> Result<(), MailError> {
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty sendmail command"))?;

    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(message.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(MailError::SendmailStatus(status));
    }
    debug!("report piped to {}", program);
    Ok(())
}
