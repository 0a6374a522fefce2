//! violet_play - two-player tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use violet_play::{Cli, PlayConfig, Session, play_script, render};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The subscriber goes up before the config file is read so loading is
    // logged; the file's filter is swapped in afterwards unless pinned.
    let startup = cli.startup_filter(std::env::var("RUST_LOG").ok());
    let initial = EnvFilter::new(&startup.directives);
    let (filter, filter_handle) = reload::Layer::new(initial);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let mut config = match &cli.config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    };
    if let Some(filter) = &cli.log_filter {
        config = config.with_log_filter(filter.clone());
    }
    if cli.hide_indices {
        config = config.with_show_indices(false);
    }
    if !startup.pinned {
        filter_handle.reload(EnvFilter::new(config.log_filter()))?;
    }

    info!(?config, "Starting violet_play");

    if let Some(moves) = &cli.moves {
        let game = play_script(moves);
        println!("{}", render::game(&game, *config.show_indices()));
        return Ok(());
    }

    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout());
    session.run()
}
