//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use talkbook_core::render::RenderFormat;
use talkbook_core::schedule::SessionKind;

/// talkbook - render conference schedule exports for the program booklet
///
/// Output is written to standard output.
#[derive(Debug, Parser)]
#[command(name = "talkbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Booklet template to render (only read in tex mode)
    pub template: PathBuf,

    /// Frab-compatible JSON export of the schedule
    pub schedule: PathBuf,

    /// Output format
    #[arg(long, short, value_enum)]
    pub format: Format,

    // --- Filter flags ---
    /// Workshop sessions only
    #[arg(long, short, group = "session_filter")]
    pub workshops: bool,

    /// Poster sessions only
    #[arg(long, short, group = "session_filter")]
    pub postersession: bool,

    /// Restrict to one day (format: YYYY-MM-DD)
    #[arg(long, short)]
    pub day: Option<String>,

    /// Path to configuration file
    #[arg(long, short, env = "TALKBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,
}

/// The supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// LaTeX booklet fragment rendered through the template
    Tex,
    /// Plain-text listing
    Txt,
    /// Sorted keyword index
    Wordlist,
}

impl Cli {
    /// Returns the renderer mode for the requested format.
    pub fn render_format(&self) -> RenderFormat {
        match self.format {
            Format::Tex => RenderFormat::Tex,
            Format::Txt => RenderFormat::Txt,
            Format::Wordlist => RenderFormat::Wordlist,
        }
    }

    /// Returns the session category selected by the filter flags.
    pub fn session_kind(&self) -> SessionKind {
        if self.workshops {
            SessionKind::Workshops
        } else if self.postersession {
            SessionKind::Posters
        } else {
            SessionKind::Talks
        }
    }
}
