use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use dessert_clicker::cli::{format_catalog, Cli};
use dessert_clicker::clipboard::ClipboardSink;
use dessert_clicker::config::Config;
use dessert_clicker::logging::init_tracing;
use dessert_clicker::shutdown::ShutdownHandle;
use dessert_clicker::snapshot::SessionSnapshot;
use dessert_clicker::ui::app::App;
use dessert_clicker::ui::finish_session;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let catalog = Arc::new(config.catalog()?);

    if cli.print_catalog {
        print!("{}", format_catalog(&catalog));
        return Ok(());
    }

    let log_path = init_tracing(&config.logging, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;
    if let Some(path) = &log_path {
        tracing::info!(log = %path.display(), desserts = catalog.len(), "Starting dessert clicker");
    }
    config.warn_on_unreachable_first_tier();

    let mut app = App::new(
        Arc::clone(&catalog),
        config.strings.clone(),
        config.toast_duration(),
        Box::new(ClipboardSink::new()),
    );

    let snapshot_path = config.snapshot_path();
    if config.session.persist && !cli.fresh {
        match SessionSnapshot::load_from(&snapshot_path) {
            Ok(Some(snapshot)) => app.restore(snapshot),
            Ok(None) => tracing::debug!(path = %snapshot_path.display(), "No saved session"),
            Err(err) => tracing::warn!(error = %err, "Ignoring unreadable session snapshot"),
        }
    }

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("Failed to install signal handlers")?;

    let ui_result = dessert_clicker::ui::run(&mut app, config.tick_rate(), shutdown);

    let save_path = (config.session.persist && !cli.no_save).then_some(snapshot_path.as_path());
    finish_session(&mut app, ui_result, save_path)
}
