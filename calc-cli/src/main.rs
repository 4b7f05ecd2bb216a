use anyhow::Context;
use clap::Parser;
use tracing::debug;

use calc_cli::cli::Cli;
use calc_cli::{commands, config, logging, output};

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    let settings = config::load_settings(cli.config.as_deref())?;
    if !logging::rust_log_is_set() {
        logging::set_log_level(&settings.log_level)
            .with_context(|| format!("Invalid log_level in settings: {}", settings.log_level))?;
    }
    debug!(?settings, "settings loaded");

    let outcome = commands::execute(&cli.command, &settings);

    let rendered = if cli.json {
        output::render_json(&outcome)?
    } else {
        output::render_text(&outcome, &settings)
    };
    println!("{rendered}");

    Ok(())
}
