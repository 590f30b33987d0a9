//! Operator console: reads commands from standard input on its own thread.

use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Stop,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "stop" | "exit" | "kill" => Some(Self::Stop),
            _ => None,
        }
    }
}

/// Start the console thread. `shutdown` fires once a stop command is read.
pub fn spawn(shutdown: oneshot::Sender<()>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("console".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            listen(stdin.lock(), shutdown);
        })
}

/// Read commands until a stop command or end of input.
///
/// Returns whether a stop was requested. Reaching end of input leaves the
/// server running, so a detached process without a terminal keeps serving.
pub fn listen<R: BufRead>(reader: R, shutdown: oneshot::Sender<()>) -> bool {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Console input error: {}", e);
                return false;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Some(Command::Stop) => {
                tracing::info!("Stop command received");
                if shutdown.send(()).is_err() {
                    tracing::info!("Server already stopped");
                }
                return true;
            }
            None => tracing::warn!("Unknown command: {}", line.trim()),
        }
    }

    tracing::debug!("Console input closed");
    false
}
