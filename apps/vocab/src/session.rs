//! Interactive session: stdin lines in, one in-flight request at a time.

use std::{io::Write, sync::Arc};

use anyhow::Result;
use client_core::{
    Dispatch, Outcome, RequestController, RequestTicket, ScoringService, ValidationError,
};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::{debug, warn};

use crate::render::render;

const PROMPT: &str = "Enter `<word-id> <sentence>` (empty line clears an error, `quit` exits).";
const BUSY_NOTICE: &str = "Still validating the previous sentence; please wait.";

pub async fn interactive(service: Arc<dyn ScoringService>) -> Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    run_session(service, input, &mut std::io::stdout()).await?;
    Ok(())
}

/// Drives one session until `quit` or end of input and returns its controller.
pub(crate) async fn run_session<R, W>(
    service: Arc<dyn ScoringService>,
    input: R,
    out: &mut W,
) -> Result<RequestController>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut controller = RequestController::new();
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<(RequestTicket, Outcome)>();
    let mut lines = input.lines();

    writeln!(out, "{PROMPT}")?;
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                if line.eq_ignore_ascii_case("quit") {
                    break;
                }
                if line.is_empty() {
                    controller.input_edited();
                    continue;
                }

                let (word_id, sentence) = split_input(line);
                match controller.submit(word_id, sentence) {
                    Some(dispatch) => {
                        writeln!(out, "{}", render(controller.state()))?;
                        spawn_dispatch(Arc::clone(&service), dispatch, done_tx.clone());
                    }
                    None if controller.is_in_flight() => writeln!(out, "{BUSY_NOTICE}")?,
                    None => writeln!(out, "{}", render(controller.state()))?,
                }
            }
            Some((ticket, outcome)) = done_rx.recv() => {
                controller.complete(ticket, outcome);
                writeln!(out, "{}", render(controller.state()))?;
            }
        }
        out.flush()?;
    }

    Ok(controller)
}

/// Sends the request on its own task; a panicked or aborted call still
/// reports back as `Cancelled`.
fn spawn_dispatch(
    service: Arc<dyn ScoringService>,
    dispatch: Dispatch,
    done_tx: mpsc::UnboundedSender<(RequestTicket, Outcome)>,
) {
    let Dispatch { ticket, request } = dispatch;
    tokio::spawn(async move {
        let call = tokio::spawn(async move { service.validate(&request).await });
        let outcome = match call.await {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(ticket = ticket.0, %error, "scoring task ended without a response");
                Err(ValidationError::Cancelled)
            }
        };
        if done_tx.send((ticket, outcome)).is_err() {
            debug!(ticket = ticket.0, "session ended before response arrived");
        }
    });
}

/// Splits `<word-id> <sentence...>`; a line without a space is all word id.
fn split_input(line: &str) -> (&str, &str) {
    line.split_once(char::is_whitespace).unwrap_or((line, ""))
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
