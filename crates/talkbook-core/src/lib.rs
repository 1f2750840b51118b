//! Core types: schedule model, filters, sorting, escaping, rendering

pub mod error;
pub mod escape;
pub mod render;
pub mod rooms;
pub mod schedule;
pub mod talk;
pub mod words;
pub mod wrap;

pub use error::BookletError;
pub use escape::escape_latex;
pub use render::{RenderFormat, Renderer, TexTemplate};
pub use rooms::{RoomCommand, RoomTables};
pub use schedule::{
    ScheduleExport, ScheduleFilter, Session, SessionKind, collect_talks, parse_export,
};
pub use talk::{DATE_FORMAT, Talk, sort_talks};
pub use words::extract_words;
pub use wrap::break_long_lines;
