//! External command execution for the `bq` and `gcloud` CLIs.
//!
//! Provides the single primitive every collector goes through: run an argument
//! vector with a timeout and hand back trimmed stdout, or a [`CommandError`].

use async_trait::async_trait;
use colored::Colorize;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Why a command produced no usable output.
///
/// The `Display` form is the text written into the report in place of a result.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("ERROR: empty command")]
    EmptyCommand,
    #[error("ERROR: {0}")]
    Launch(#[source] std::io::Error),
    #[error("ERROR: Command timed out")]
    Timeout,
    #[error("ERROR: invalid UTF-8 in command output: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Runs external commands on behalf of the collectors.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, args: &[String], timeout: Duration) -> Result<String, CommandError>;
}

/// Runs commands as child processes found on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, args: &[String], timeout: Duration) -> Result<String, CommandError> {
        run(args, timeout).await
    }
}

/// Run a command and return its trimmed stdout.
///
/// The exit status is not used to judge success: `bq` reports some failures on
/// stdout with a zero status and others with a non-zero one, so the caller
/// decides from the text. A non-zero status is logged together with stderr.
///
/// # Arguments
/// * `args` - Program followed by its arguments
/// * `timeout` - Upper bound on the run; the child is killed when it expires
///
/// # Returns
/// * `Ok(String)` - The trimmed stdout
/// * `Err(CommandError)` - Launch failure, timeout or non-UTF-8 output
pub async fn run(args: &[String], timeout: Duration) -> Result<String, CommandError> {
    let cmd = args.join(" ");
    log::debug!("run({cmd}) timeout={timeout:?}", cmd = cmd.on_blue());

    let (program, rest) = args.split_first().ok_or(CommandError::EmptyCommand)?;

    let mut command = Command::new(program);
    command
        .args(rest)
        .stdin(Stdio::null())
        .kill_on_drop(true);

    let output = match tokio::time::timeout(timeout, command.output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            log::error!("Command execution failed: {cmd} {e}", cmd = cmd.on_blue());
            return Err(CommandError::Launch(e));
        }
        Err(_) => {
            log::error!(
                "{timed_out} after {timeout:?}: {cmd}",
                timed_out = "timed out".on_red(),
                cmd = cmd.on_blue()
            );
            return Err(CommandError::Timeout);
        }
    };

    log::debug!("output.stdout.len(): {}", output.stdout.len());
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} status={status} cmd={cmd}",
            failed = "failed".on_red(),
            status = output.status,
            cmd = cmd.on_blue()
        );
    }

    let stdout = String::from_utf8(output.stdout)?;
    Ok(stdout.trim().to_string())
}

/// Build an owned argument vector.
pub fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}
