//! Terminal front end for the message board.
//!
//! Loads the board once, prints it, then reads one draft per stdin line and
//! submits it. A failed submission is announced on stderr and the board is
//! left as it was, so the same line can be entered again.

use board_core::{
    ClientConfig, MessageView, ReqwestTransport, RequestClient, SubmitOutcome, API_URL_ENV,
};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "board", about = "Read and post messages on a message board")]
struct Cli {
    /// Backend base URL.
    #[arg(long, env = API_URL_ENV)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = ClientConfig::resolve(cli.api_url.as_deref());
    tracing::debug!(base_url = config.base_url(), "using backend");

    let client = RequestClient::new(config, ReqwestTransport::default());
    let mut view = MessageView::new(client);
    view.load().await;
    print!("{}", view.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        view.set_draft(line);
        match view.submit().await {
            SubmitOutcome::Skipped => continue,
            SubmitOutcome::Sent(_) => print!("{}", view.render()),
            SubmitOutcome::Failed(err) => eprintln!("alert: {err}"),
        }
    }

    Ok(())
}
