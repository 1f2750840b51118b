//! talkbook CLI entry point.

use std::fs;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use talkbook_cli::cli::{Cli, Format};
use talkbook_cli::config::CliConfig;
use talkbook_cli::error::{CliError, CliResult};
use talkbook_core::render::{Renderer, TexTemplate};
use talkbook_core::schedule::{ScheduleFilter, collect_talks, parse_export};
use talkbook_core::talk::sort_talks;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config = if let Some(ref path) = cli.config {
        CliConfig::load_from(path).map_err(CliError::Config)?
    } else {
        CliConfig::load().unwrap_or_default()
    };
    let rooms = config.room_tables();

    // Read and filter the schedule
    let input = fs::read_to_string(&cli.schedule)?;
    let export = parse_export(&input)?;
    let filter = ScheduleFilter {
        day: cli.day.clone(),
        kind: cli.session_kind(),
    };
    let mut talks = collect_talks(&export, &filter, &rooms)?;
    sort_talks(&mut talks);

    // The template is only read when it is actually rendered.
    let template = if cli.format == Format::Tex {
        Some(TexTemplate::from_source(fs::read_to_string(&cli.template)?)?)
    } else {
        None
    };

    let stdout = io::stdout().lock();
    let mut renderer = Renderer::new(
        cli.render_format(),
        template,
        rooms,
        BufWriter::new(stdout),
    );
    for talk in &talks {
        renderer.render(talk)?;
    }
    renderer.finish()?;
    Ok(())
}
