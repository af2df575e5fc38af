//! Scripted [`CommandRunner`] for collector tests.

use super::cli::{CommandError, CommandRunner};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub enum Reply {
    Output(String),
    Timeout,
}

/// Answers commands from a table keyed by the space-joined argument vector.
/// Unscripted commands fail as if the binary were missing.
#[derive(Default)]
pub struct ScriptedRunner {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<(String, Duration)>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, cmd: &str, output: &str) -> Self {
        self.replies
            .insert(cmd.to_string(), Reply::Output(output.to_string()));
        self
    }

    pub fn time_out(mut self, cmd: &str) -> Self {
        self.replies.insert(cmd.to_string(), Reply::Timeout);
        self
    }

    pub fn calls(&self) -> Vec<(String, Duration)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, args: &[String], timeout: Duration) -> Result<String, CommandError> {
        let cmd = args.join(" ");
        self.calls.lock().unwrap().push((cmd.clone(), timeout));
        match self.replies.get(&cmd) {
            Some(Reply::Output(out)) => Ok(out.trim().to_string()),
            Some(Reply::Timeout) => Err(CommandError::Timeout),
            None => Err(CommandError::Launch(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no scripted reply for: {cmd}"),
            ))),
        }
    }
}
