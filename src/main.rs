use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use weekplan::db::items::Items;
use weekplan::libs::browser::BrowserSession;
use weekplan::libs::date::Date;
use weekplan::libs::messages::{macros::is_debug_mode, Message};
use weekplan::{msg_bail_anyhow, msg_error};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the planner database file; created if it does not exist.
    db_path: PathBuf,
}

fn main() -> ExitCode {
    // Missing argument exits through clap's usage error (code 2), distinct
    // from runtime failures below.
    let cli = Cli::parse();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            msg_error!(err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = match Items::open(&cli.db_path) {
        Ok(store) => store,
        Err(err) => msg_bail_anyhow!(Message::DbOpenFailed(err.to_string())),
    };
    BrowserSession::new(store, Date::today()).run()
}
