use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use persona_form::config::Config;
use persona_form::logging::init_tracing;
use persona_form::ui;
use persona_form::FormController;

#[derive(Parser, Debug)]
#[command(name = "persona-form", version, about = "Create a person record from a terminal form")]
struct Cli {
    /// Path to config file (default: ~/.config/persona-form/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file (a timestamp and pid suffix is added)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Deliver the current state to new subscribers immediately
    #[arg(long)]
    replay_latest: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if cli.replay_latest {
        config.channel.replay_latest = true;
    }

    if let Some(path) = init_tracing(&config.logging, cli.log_file.as_deref()) {
        tracing::info!(log_file = %path.display(), "Logging initialized");
    }

    let controller = FormController::new(config.channel.subscribe_mode());
    ui::run(controller).context("Terminal UI failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::try_parse_from(["persona-form"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
        assert!(!cli.replay_latest);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "persona-form",
            "--config",
            "/tmp/c.toml",
            "--log-file",
            "/tmp/f.log",
            "--replay-latest",
        ])
        .unwrap();
        assert_eq!(cli.config.unwrap().to_str(), Some("/tmp/c.toml"));
        assert_eq!(cli.log_file.unwrap().to_str(), Some("/tmp/f.log"));
        assert!(cli.replay_latest);
    }
}
