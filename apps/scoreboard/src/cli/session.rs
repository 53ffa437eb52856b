use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::command::{Command, HELP_LINES};
use super::errors::{CommandError, CommandResult};
use super::render::{render_help, render_summary};
use crate::config::{AppConfig, OutputFormat};
use crate::domain::game::GameEvent;
use crate::domain::repositories::ScoreBoard;
use crate::domain::scoreboard::SummaryLine;

pub const TITLE: &str = "Live Football World Cup Score Board";
pub const WELCOME: &str = "Welcome! Type 'help' for a list of commands, 'exit' to quit.";
pub const GOODBYE: &str = "Goodbye!";

/// What the session should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print
    Silent,
    /// Print this text
    Text(String),
    /// End the session
    Exit,
}

/// Interactive scoreboard session
///
/// Reads one command per line, applies it to the scoreboard and writes the
/// result. Errors are printed and never end the session; only `exit` or end
/// of input does.
pub struct Session<S> {
    board: S,
    prompt: String,
    output: OutputFormat,
}

impl<S: ScoreBoard> Session<S> {
    pub fn new(board: S, config: &AppConfig) -> Self {
        Self {
            board,
            prompt: config.prompt.clone(),
            output: config.output,
        }
    }

    pub fn board(&self) -> &S {
        &self.board
    }

    /// Runs the read-eval-print loop until `exit` or end of input
    pub async fn run<R, W>(&mut self, mut reader: R, writer: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let underline = "=".repeat(TITLE.len());
        writer
            .write_all(format!("{TITLE}\n{underline}\n\n{WELCOME}\n").as_bytes())
            .await?;

        let mut buf = Vec::new();
        loop {
            writer.write_all(self.prompt.as_bytes()).await?;
            writer.flush().await?;

            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                writer.write_all(b"\n").await?;
                break;
            }

            let reply = std::str::from_utf8(&buf)
                .map_err(|_| CommandError::InvalidEncoding)
                .and_then(|line| self.execute(line));
            match reply {
                Ok(Reply::Silent) => {}
                Ok(Reply::Text(text)) => {
                    writer.write_all(text.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                }
                Ok(Reply::Exit) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "command rejected");
                    writer.write_all(format!("[ERROR] {e}\n").as_bytes()).await?;
                }
            }
        }

        writer.write_all(format!("{GOODBYE}\n").as_bytes()).await?;
        writer.flush().await
    }

    /// Parses and applies a single command line
    pub fn execute(&mut self, line: &str) -> CommandResult<Reply> {
        let Some(command) = Command::parse(line)? else {
            return Ok(Reply::Silent);
        };

        let reply = match command {
            Command::Start { home_team, away_team } => {
                log_event(&self.board.start_game(&home_team, &away_team)?);
                Reply::Silent
            }
            Command::Update {
                home_team,
                away_team,
                home_score,
                away_score,
            } => {
                let event =
                    self.board
                        .update_score(&home_team, &away_team, home_score, away_score)?;
                log_event(&event);
                Reply::Silent
            }
            Command::Finish { home_team, away_team } => {
                log_event(&self.board.finish_game(&home_team, &away_team)?);
                Reply::Silent
            }
            Command::Summary => {
                let lines: Vec<SummaryLine> =
                    self.board.summary().iter().map(SummaryLine::from).collect();
                tracing::debug!(matches = lines.len(), "rendering summary");
                Reply::Text(render_summary(&lines, self.output)?)
            }
            Command::Help => Reply::Text(render_help(&HELP_LINES)),
            Command::Exit => Reply::Exit,
        };

        Ok(reply)
    }
}

fn log_event(event: &GameEvent) {
    tracing::info!(
        event = event.kind(),
        game_id = %event.game_id(),
        home = event.home_team(),
        away = event.away_team(),
        "scoreboard updated"
    );
}
