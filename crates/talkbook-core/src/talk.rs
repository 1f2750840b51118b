//! Talk records and ordering.
//!
//! A [`Talk`] is the display-ready form of an exported session: timestamp
//! parsed, room rank resolved, abstract decoded and wrapped, speakers joined.
//! Records are immutable after construction.

use chrono::{DateTime, FixedOffset};

use crate::error::BookletError;
use crate::rooms::RoomTables;
use crate::schedule::Session;
use crate::wrap::break_long_lines;

/// Wire format of session timestamps: ISO-8601-like with a numeric offset,
/// e.g. `2023-06-10T09:00:00+0200`.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// A display-ready talk record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Talk {
    /// Start time, with the export's original offset.
    pub date: DateTime<FixedOffset>,
    /// Talk title, verbatim.
    pub title: String,
    /// Room name, verbatim.
    pub room: String,
    /// Ordering rank of the room, resolved at construction.
    pub room_rank: u32,
    /// Abstract, HTML-entity-decoded and line-wrapped.
    pub abstract_text: String,
    /// Speaker display names joined with ", ".
    pub speakers: String,
    /// Slug identifier, verbatim.
    pub slug: String,
    /// Session type label, verbatim.
    pub kind: String,
}

impl Talk {
    /// Builds a talk from an exported session.
    ///
    /// Fails if the timestamp does not match [`DATE_FORMAT`] or the room has
    /// no entry in the priority table.
    pub fn from_session(session: &Session, rooms: &RoomTables) -> Result<Self, BookletError> {
        let date =
            DateTime::parse_from_str(&session.date, DATE_FORMAT).map_err(|source| {
                BookletError::Timestamp {
                    value: session.date.clone(),
                    source,
                }
            })?;
        let room_rank = rooms
            .priority(&session.room)
            .ok_or_else(|| BookletError::UnknownRoom(session.room.clone()))?;
        let speakers = session
            .persons
            .iter()
            .map(|p| p.public_name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let abstract_text =
            break_long_lines(&html_escape::decode_html_entities(&session.abstract_text));

        Ok(Self {
            date,
            title: session.title.clone(),
            room: session.room.clone(),
            room_rank,
            abstract_text,
            speakers,
            slug: session.slug.clone(),
            kind: session.kind.clone(),
        })
    }

    /// The "`<title> <abstract>`" line used by the txt and wordlist outputs.
    pub fn listing_line(&self) -> String {
        format!("{} {}\n", self.title, self.abstract_text)
    }
}

/// Stable-sorts talks by start time, then by room rank.
///
/// Timestamps compare as instants, so mixed offsets order correctly.
pub fn sort_talks(talks: &mut [Talk]) {
    talks.sort_by_key(|talk| (talk.date, talk.room_rank));
}
