//! Error types for talkbook-core.

use thiserror::Error;

/// Errors that can occur while loading or rendering a schedule.
#[derive(Debug, Error)]
pub enum BookletError {
    /// A session references a room without a priority table entry.
    #[error("room {0:?} has no entry in the room priority table")]
    UnknownRoom(String),

    /// A session timestamp does not match the export's wire format.
    #[error("invalid session timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The schedule export is not valid JSON or misses required fields.
    #[error("failed to parse schedule export: {0}")]
    Export(#[from] serde_json::Error),

    /// Template compilation or rendering failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Tex output was requested without a template.
    #[error("tex output requires a template")]
    MissingTemplate,

    /// Writing to the output stream failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
