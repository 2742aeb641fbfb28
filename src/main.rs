use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;

use login_pad::cli::Cli;
use login_pad::config::Config;
use login_pad::controller::LoginController;
use login_pad::logging::{init_tracing, LogSink};
use login_pad::{script, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    cli.apply_overrides(&mut config);

    let sink = LogSink::resolve(cli.log_file.as_deref(), &config.logging, cli.is_interactive());
    init_tracing(&sink, &config.logging.level).context("initializing logging")?;
    if config_path.exists() {
        tracing::debug!("Loaded config from {}", config_path.display());
    } else {
        tracing::debug!("No config at {}, using defaults", config_path.display());
    }

    match cli.script.as_deref() {
        None => ui::run(&config).context("terminal UI failed"),
        Some(source) => {
            let mut controller = LoginController::new(config.ui.locale);
            let mut stdout = io::stdout().lock();
            if source == "-" {
                script::run(&mut controller, io::stdin().lock(), &mut stdout)?;
            } else {
                let file = File::open(source).with_context(|| format!("opening {source}"))?;
                script::run(&mut controller, BufReader::new(file), &mut stdout)?;
            }
            Ok(())
        }
    }
}
