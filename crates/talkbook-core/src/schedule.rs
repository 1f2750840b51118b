//! Schedule export data model and record-level filtering.
//!
//! The input is a frab-compatible JSON export: a schedule wraps a conference,
//! a conference holds days, and each day maps room names to session lists.
//! Unknown fields in the export are ignored; only the fields needed for the
//! booklet are modeled here.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::error::BookletError;
use crate::rooms::RoomTables;
use crate::talk::Talk;

/// Session type label for on-site workshops.
pub const WORKSHOP_TYPE: &str = "Workshop (Präsenz)";

/// Session type label for the poster session.
pub const POSTER_SESSION_TYPE: &str = "Poster-Session";

/// Top level of a frab-compatible export.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleExport {
    pub schedule: Schedule,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Schedule {
    pub conference: Conference,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Conference {
    pub days: Vec<Day>,
}

/// One conference day: a calendar date plus the sessions of every room.
#[derive(Debug, Clone, Deserialize)]
pub struct Day {
    pub date: String,
    pub rooms: BTreeMap<String, Vec<Session>>,
}

/// One scheduled session as exported.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub title: String,
    pub room: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub persons: Vec<Person>,
    pub slug: String,
}

/// A speaker entry of a session.
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub public_name: String,
}

/// Which session category a run keeps.
///
/// The three variants partition the schedule: workshops and posters are
/// excluded from the default talk listing and only appear in their dedicated
/// runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionKind {
    /// Regular talks: everything that is neither workshop nor poster.
    #[default]
    Talks,
    /// Workshop sessions only.
    Workshops,
    /// Poster sessions only.
    Posters,
}

/// Record-level filter configuration for a run.
#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    /// Restrict to one calendar day (`YYYY-MM-DD`), compared against the
    /// day's `date` field verbatim.
    pub day: Option<String>,
    /// Which session category to keep.
    pub kind: SessionKind,
}

impl ScheduleFilter {
    /// Returns `true` if sessions of the given day should be considered.
    pub fn keeps_day(&self, date: &str) -> bool {
        self.day.as_deref().is_none_or(|day| day == date)
    }

    /// Returns `true` if a session with the given type label is kept.
    pub fn keeps_session(&self, kind: &str) -> bool {
        match self.kind {
            SessionKind::Workshops => kind == WORKSHOP_TYPE,
            SessionKind::Posters => kind == POSTER_SESSION_TYPE,
            SessionKind::Talks => kind != WORKSHOP_TYPE && kind != POSTER_SESSION_TYPE,
        }
    }
}

/// Parses a raw export document.
pub fn parse_export(input: &str) -> Result<ScheduleExport, BookletError> {
    Ok(serde_json::from_str(input)?)
}

/// Collects the talks of an export that pass the filter.
///
/// The returned sequence is in document order; call
/// [`sort_talks`](crate::talk::sort_talks) before rendering.
pub fn collect_talks(
    export: &ScheduleExport,
    filter: &ScheduleFilter,
    rooms: &RoomTables,
) -> Result<Vec<Talk>, BookletError> {
    let mut talks = Vec::new();
    for day in &export.schedule.conference.days {
        if !filter.keeps_day(&day.date) {
            debug!(day = %day.date, "skipping day");
            continue;
        }
        for sessions in day.rooms.values() {
            for session in sessions {
                if !filter.keeps_session(&session.kind) {
                    continue;
                }
                talks.push(Talk::from_session(session, rooms)?);
            }
        }
    }
    debug!(count = talks.len(), "collected talks");
    Ok(talks)
}
