use super::errors::{CommandError, CommandResult};

pub const START_USAGE: &str = r#"start "Home Team" "Away Team""#;
pub const UPDATE_USAGE: &str = r#"update "Home Team" "Away Team" <home_score> <away_score>"#;
pub const FINISH_USAGE: &str = r#"finish "Home Team" "Away Team""#;

/// Lines listed by `help`
pub const HELP_LINES: [&str; 6] = [
    START_USAGE,
    UPDATE_USAGE,
    FINISH_USAGE,
    "summary",
    "help",
    "exit (or quit)",
];

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start {
        home_team: String,
        away_team: String,
    },
    Update {
        home_team: String,
        away_team: String,
        home_score: i64,
        away_score: i64,
    },
    Finish {
        home_team: String,
        away_team: String,
    },
    Summary,
    Help,
    Exit,
}

impl Command {
    /// Parses one line of input
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Example
    /// ```
    /// use scoreboard::cli::command::Command;
    ///
    /// let command = Command::parse(r#"start "South Korea" Japan"#).unwrap();
    /// assert_eq!(
    ///     command,
    ///     Some(Command::Start {
    ///         home_team: "South Korea".to_string(),
    ///         away_team: "Japan".to_string(),
    ///     })
    /// );
    /// ```
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut args = tokenize(line)?.into_iter();
        let Some(name) = args.next() else {
            return Ok(None);
        };
        let args: Vec<String> = args.collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "start" => {
                let [home_team, away_team] = exact_args::<2>(args, START_USAGE)?;
                Command::Start { home_team, away_team }
            }
            "update" => {
                let [home_team, away_team, home_score, away_score] =
                    exact_args::<4>(args, UPDATE_USAGE)?;
                Command::Update {
                    home_team,
                    away_team,
                    home_score: parse_score(&home_score)?,
                    away_score: parse_score(&away_score)?,
                }
            }
            "finish" => {
                let [home_team, away_team] = exact_args::<2>(args, FINISH_USAGE)?;
                Command::Finish { home_team, away_team }
            }
            "summary" => Command::Summary,
            "help" => Command::Help,
            "exit" | "quit" => Command::Exit,
            _ => return Err(CommandError::UnknownCommand(name)),
        };

        Ok(Some(command))
    }
}

fn exact_args<const N: usize>(
    args: Vec<String>,
    usage: &'static str,
) -> CommandResult<[String; N]> {
    args.try_into().map_err(|_| CommandError::Usage(usage))
}

fn parse_score(text: &str) -> CommandResult<i64> {
    text.parse()
        .map_err(|_| CommandError::InvalidNumber(text.to_string()))
}

/// Splits a line into arguments
///
/// Whitespace separates arguments. A double quote at the start of an
/// argument groups words until the closing quote; inside quotes a backslash
/// escapes the next character. A quote in the middle of a word is literal.
pub fn tokenize(line: &str) -> CommandResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => in_quotes = false,
            '"' if !in_token => {
                in_quotes = true;
                in_token = true;
            }
            '\\' if in_quotes => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(CommandError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
