use clap::Parser;
use tokio::io::BufReader;

use scoreboard::cli::Session;
use scoreboard::config::{self, AppConfig};
use scoreboard::infrastructure::repositories::SharedScoreBoard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenv::dotenv().ok();

    let config = AppConfig::parse();
    config::init_logging(&config);

    tracing::info!(output = ?config.output, "starting scoreboard session");

    let mut session = Session::new(SharedScoreBoard::new(), &config);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    session.run(stdin, &mut stdout).await?;

    tracing::info!(active_matches = session.board().len(), "session ended");
    Ok(())
}
